use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    NewEvent,
    Update,
    TemporaryDelete,
    PermanentDelete,
    RestoredEvent,
    News,
    Registration,
}

/// One entry of the activity feed. Never updated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub timestamp: DateTime<Utc>,
}

impl Notification {
    pub fn new(kind: NotificationType, message: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            kind,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_is_snake_case_on_the_wire() {
        let notification = Notification::new(NotificationType::TemporaryDelete, "gone");
        let value = serde_json::to_value(&notification).unwrap();
        assert_eq!(value["type"], "temporary_delete");
        assert_eq!(value["message"], "gone");
    }
}
