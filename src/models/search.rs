use serde::{Deserialize, Serialize};

pub const DEFAULT_AGES: &str = "all ages";
pub const DEFAULT_AVAILABILITY: &str = "this weekend";
pub const DEFAULT_DISTANCE: &str = "10 miles";
pub const DEFAULT_PREFERENCES: &str = "none";

/// Raw body of `POST /api/activities`. Every field is optional free text.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct SearchRequest {
    pub city: Option<String>,
    pub ages: Option<String>,
    pub availability: Option<String>,
    pub distance: Option<String>,
    pub preferences: Option<String>,
}

/// Search criteria with defaults applied, echoed back as `searchCriteria`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct SearchCriteria {
    pub city: String,
    pub ages: String,
    pub availability: String,
    pub distance: String,
    pub preferences: String,
}

impl SearchRequest {
    pub fn into_criteria(self) -> SearchCriteria {
        SearchCriteria {
            city: self.city.map(|c| c.trim().to_string()).unwrap_or_default(),
            ages: or_default(self.ages, DEFAULT_AGES),
            availability: or_default(self.availability, DEFAULT_AVAILABILITY),
            distance: or_default(self.distance, DEFAULT_DISTANCE),
            preferences: or_default(self.preferences, DEFAULT_PREFERENCES),
        }
    }
}

fn or_default(value: Option<String>, default: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => default.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_fields_get_defaults() {
        let request = SearchRequest {
            city: Some("  Oakland ".to_string()),
            ages: Some("   ".to_string()),
            availability: None,
            distance: Some("5 miles".to_string()),
            preferences: None,
        };
        let criteria = request.into_criteria();
        assert_eq!(criteria.city, "Oakland");
        assert_eq!(criteria.ages, DEFAULT_AGES);
        assert_eq!(criteria.availability, DEFAULT_AVAILABILITY);
        assert_eq!(criteria.distance, "5 miles");
        assert_eq!(criteria.preferences, DEFAULT_PREFERENCES);
    }

    #[test]
    fn test_missing_city_stays_empty() {
        let criteria = SearchRequest::default().into_criteria();
        assert_eq!(criteria.city, "");
    }
}
