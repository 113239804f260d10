use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

const MIN_CITY_CHARS: usize = 2;
const MAX_CITY_CHARS: usize = 100;
const PLACEHOLDER_CITIES: [&str; 8] = [
    "test", "asdf", "none", "n/a", "null", "undefined", "xxx", "city",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CityValidationError {
    Missing,
    TooShort,
    TooLong,
    InvalidCharacters,
    Placeholder,
    RepeatedCharacter,
}

impl fmt::Display for CityValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            CityValidationError::Missing => "Please enter a city name.",
            CityValidationError::TooShort => "City name is too short.",
            CityValidationError::TooLong => "City name is too long.",
            CityValidationError::InvalidCharacters => {
                "City name may only contain letters, spaces, periods, commas, apostrophes and hyphens."
            }
            CityValidationError::Placeholder | CityValidationError::RepeatedCharacter => {
                "Please enter a real city name."
            }
        };
        write!(f, "{}", message)
    }
}

impl std::error::Error for CityValidationError {}

fn city_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\p{L}[\p{L} .,'\-]*$").expect("city pattern is valid"))
}

/// Heuristic check that `city` looks like a place name. Returns the trimmed name.
pub fn validate_city(city: &str) -> Result<&str, CityValidationError> {
    let city = city.trim();
    let length = city.chars().count();

    if length == 0 {
        return Err(CityValidationError::Missing);
    }
    if length < MIN_CITY_CHARS {
        return Err(CityValidationError::TooShort);
    }
    if length > MAX_CITY_CHARS {
        return Err(CityValidationError::TooLong);
    }
    if !city_pattern().is_match(city) {
        return Err(CityValidationError::InvalidCharacters);
    }
    if city.chars().filter(|c| c.is_alphabetic()).count() < MIN_CITY_CHARS {
        return Err(CityValidationError::TooShort);
    }

    let lowered = city.to_lowercase();
    if PLACEHOLDER_CITIES.contains(&lowered.as_str()) {
        return Err(CityValidationError::Placeholder);
    }

    let mut letters = lowered.chars().filter(|c| c.is_alphabetic());
    if let Some(first) = letters.next() {
        if letters.all(|c| c == first) {
            return Err(CityValidationError::RepeatedCharacter);
        }
    }

    Ok(city)
}
