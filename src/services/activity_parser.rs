//! Turns the model's free-form answer into [`Activity`] records.
//!
//! Single forward pass over the lines with one record in progress:
//! - a line containing `**` with at least two markers opens a new record,
//!   closing the previous one;
//! - lines longer than [`MIN_DESCRIPTION_CHARS`] extend the description;
//! - a line starting with `📍` sets location and distance.
//!
//! Malformed input produces fewer or emptier records, never an error.

use crate::models::activity::{Activity, DISTANCE_NOT_SPECIFIED};
use regex::Regex;
use std::sync::OnceLock;

const BOLD_MARKER: &str = "**";
const PIN: char = '📍';
const BULLET: char = '•';

/// Shorter description lines are dropped as noise. This also loses genuinely
/// short descriptions; kept as is so parsed output stays stable.
///
/// Measured in UTF-16 code units, so an emoji counts as two.
pub const MIN_DESCRIPTION_CHARS: usize = 20;

fn location_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"📍\s*(.*?)\s*•\s*(.*)").expect("location pattern is valid"))
}

pub fn parse_activities(text: &str) -> Vec<Activity> {
    let mut activities = Vec::new();
    let mut current: Option<Activity> = None;

    for raw_line in text.split('\n') {
        let line = raw_line.trim();

        if line.contains(BOLD_MARKER) {
            let parts: Vec<&str> = line.split(BOLD_MARKER).collect();
            if parts.len() < 3 {
                continue;
            }
            if let Some(done) = current.take() {
                activities.push(done);
            }
            current = Some(Activity::from_title(parts[0].trim(), parts[1].trim()));
        } else if let Some(activity) = current.as_mut() {
            if line.starts_with(PIN) {
                apply_location(activity, line);
            } else if line.encode_utf16().count() > MIN_DESCRIPTION_CHARS {
                activity.append_description(line);
            }
        }
    }

    if let Some(done) = current {
        activities.push(done);
    }

    activities
}

fn apply_location(activity: &mut Activity, line: &str) {
    if let Some(captures) = location_pattern().captures(line) {
        activity.location = captures[1].trim().to_string();
        activity.distance = captures[2].trim().to_string();
        return;
    }

    let rest = line.trim_start_matches(PIN).trim();
    match rest.split_once(BULLET) {
        Some((location, distance)) => {
            activity.location = location.trim().to_string();
            activity.distance = distance.trim().to_string();
        }
        None => {
            activity.location = rest.to_string();
            activity.distance = DISTANCE_NOT_SPECIFIED.to_string();
        }
    }
}
