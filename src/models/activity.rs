use serde::{Deserialize, Serialize};

/// Placeholder used when a location line carries no distance part.
pub const DISTANCE_NOT_SPECIFIED: &str = "Distance not specified";

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Activity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    pub emoji: String,
    pub title: String,
    pub description: String,
    pub location: String,
    pub distance: String,
}

impl Activity {
    /// Start a record from a title line; the body fields are filled in as later lines arrive.
    pub fn from_title(emoji: &str, title: &str) -> Self {
        Self {
            id: None,
            emoji: emoji.to_string(),
            title: format!("<strong>{}</strong>", title),
            ..Default::default()
        }
    }

    pub fn append_description(&mut self, line: &str) {
        if self.description.is_empty() {
            self.description = line.to_string();
        } else {
            self.description.push(' ');
            self.description.push_str(line);
        }
    }
}

/// Number positions 1..=N in the order the records were produced.
pub fn assign_ids(activities: &mut [Activity]) {
    for (index, activity) in activities.iter_mut().enumerate() {
        activity.id = Some(index as u32 + 1);
    }
}
