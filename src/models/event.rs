use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_LOCATION: &str = "To be announced";
pub const DEFAULT_DESCRIPTION: &str = "No description provided";
pub const DEFAULT_CATEGORY: &str = "General";
pub const DEFAULT_ORGANIZER: &str = "TBA";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventStatus {
    #[default]
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Upcoming,
    #[serde(alias = "cancelled")]
    Cancelled,
}

/// An active (or snapshotted) conference/meetup record.
///
/// `name` is unique among active events when compared case-insensitively;
/// `id` is the stable identity used internally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    pub name: String,
    pub date: String,
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default = "default_description")]
    pub description: String,
    #[serde(default)]
    pub num_speaker: u32,
    #[serde(default)]
    pub speaker: Vec<String>,
    #[serde(default)]
    pub status: EventStatus,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default = "default_organizer")]
    pub organizer: String,
    #[serde(default)]
    pub max_attendees: Option<u32>,
    #[serde(default)]
    pub current_attendees: u32,
    #[serde(default)]
    pub is_virtual: bool,
    #[serde(default)]
    pub virtual_link: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub registration_deadline: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

fn default_location() -> String {
    DEFAULT_LOCATION.to_string()
}

fn default_description() -> String {
    DEFAULT_DESCRIPTION.to_string()
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn default_organizer() -> String {
    DEFAULT_ORGANIZER.to_string()
}

/// Request body shared by create and partial update.
///
/// Every field is optional at the wire level so that a missing `name` or
/// `date` surfaces as a validation failure rather than a decode failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventFields {
    pub name: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub num_speaker: Option<u32>,
    pub speaker: Option<Vec<String>>,
    pub status: Option<EventStatus>,
    pub category: Option<String>,
    pub organizer: Option<String>,
    pub max_attendees: Option<u32>,
    pub current_attendees: Option<u32>,
    pub is_virtual: Option<bool>,
    pub virtual_link: Option<String>,
    pub tags: Option<Vec<String>>,
    pub registration_deadline: Option<String>,
}

impl EventFields {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.date.is_none()
            && self.location.is_none()
            && self.description.is_none()
            && self.num_speaker.is_none()
            && self.speaker.is_none()
            && self.status.is_none()
            && self.category.is_none()
            && self.organizer.is_none()
            && self.max_attendees.is_none()
            && self.current_attendees.is_none()
            && self.is_virtual.is_none()
            && self.virtual_link.is_none()
            && self.tags.is_none()
            && self.registration_deadline.is_none()
    }
}

impl Event {
    /// Builds an event with every optional field at its default.
    pub fn new(name: String, date: String, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            date,
            location: default_location(),
            description: default_description(),
            num_speaker: 0,
            speaker: Vec::new(),
            status: EventStatus::Pending,
            category: default_category(),
            organizer: default_organizer(),
            max_attendees: None,
            current_attendees: 0,
            is_virtual: false,
            virtual_link: None,
            tags: Vec::new(),
            registration_deadline: None,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Overlays every field present in `fields`; absent fields are retained.
    /// `updated_at` is left to the caller.
    pub fn apply(&mut self, fields: EventFields) {
        if let Some(name) = fields.name {
            self.name = name;
        }
        if let Some(date) = fields.date {
            self.date = date;
        }
        if let Some(location) = fields.location {
            self.location = location;
        }
        if let Some(description) = fields.description {
            self.description = description;
        }
        if let Some(num_speaker) = fields.num_speaker {
            self.num_speaker = num_speaker;
        }
        if let Some(speaker) = fields.speaker {
            self.speaker = speaker;
        }
        if let Some(status) = fields.status {
            self.status = status;
        }
        if let Some(category) = fields.category {
            self.category = category;
        }
        if let Some(organizer) = fields.organizer {
            self.organizer = organizer;
        }
        if let Some(max_attendees) = fields.max_attendees {
            self.max_attendees = Some(max_attendees);
        }
        if let Some(current_attendees) = fields.current_attendees {
            self.current_attendees = current_attendees;
        }
        if let Some(is_virtual) = fields.is_virtual {
            self.is_virtual = is_virtual;
        }
        if let Some(virtual_link) = fields.virtual_link {
            self.virtual_link = Some(virtual_link);
        }
        if let Some(tags) = fields.tags {
            self.tags = tags;
        }
        if let Some(deadline) = fields.registration_deadline {
            self.registration_deadline = Some(deadline);
        }
    }
}

/// Accepts a calendar date (`2025-01-01`) or an RFC 3339 timestamp.
pub fn is_valid_date(value: &str) -> bool {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
        || DateTime::parse_from_rfc3339(value).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_event_defaults() {
        let event = Event::new("Demo Day".into(), "2025-01-01".into(), Utc::now());
        assert_eq!(event.location, DEFAULT_LOCATION);
        assert_eq!(event.description, DEFAULT_DESCRIPTION);
        assert_eq!(event.status, EventStatus::Pending);
        assert_eq!(event.num_speaker, 0);
        assert_eq!(event.created_at, event.updated_at);
        assert!(event.deleted_at.is_none());
    }

    #[test]
    fn test_status_wire_names() {
        let json = serde_json::to_string(&EventStatus::InProgress).unwrap();
        assert_eq!(json, "\"In Progress\"");

        let legacy: EventStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(legacy, EventStatus::Cancelled);
    }

    #[test]
    fn test_apply_keeps_unspecified_fields() {
        let mut event = Event::new("Meetup".into(), "2025-03-01".into(), Utc::now());
        event.tags = vec!["rust".into()];

        event.apply(EventFields {
            location: Some("Berlin".into()),
            ..Default::default()
        });

        assert_eq!(event.location, "Berlin");
        assert_eq!(event.tags, vec!["rust".to_string()]);
        assert_eq!(event.name, "Meetup");
    }

    #[test]
    fn test_empty_fields() {
        assert!(EventFields::default().is_empty());
        let fields: EventFields = serde_json::from_str(r#"{"tags": []}"#).unwrap();
        assert!(!fields.is_empty());
    }

    #[test]
    fn test_date_validation() {
        assert!(is_valid_date("2025-01-01"));
        assert!(is_valid_date("2025-01-01T10:00:00Z"));
        assert!(!is_valid_date("next tuesday"));
        assert!(!is_valid_date("2025-13-01"));
    }

    #[test]
    fn test_serialized_keys_are_camel_case() {
        let event = Event::new("Demo".into(), "2025-01-01".into(), Utc::now());
        let value = serde_json::to_value(&event).unwrap();
        assert!(value.get("numSpeaker").is_some());
        assert!(value.get("createdAt").is_some());
        assert_eq!(value["deletedAt"], serde_json::Value::Null);
    }
}
