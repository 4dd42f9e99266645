use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use super::event::Event;

/// A soft-deleted event. Carries the core identity fields plus the full
/// record as `original_data`, so restoring loses nothing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrashedEvent {
    pub id: Uuid,
    pub name: String,
    pub date: String,
    pub location: String,
    pub description: String,
    pub deleted_at: DateTime<Utc>,
    pub original_data: Value,
}

impl TrashedEvent {
    /// Stamps `deleted_at` on the event and snapshots it.
    pub fn from_event(mut event: Event, now: DateTime<Utc>) -> Result<Self, serde_json::Error> {
        event.deleted_at = Some(now);
        event.updated_at = now;
        let original_data = serde_json::to_value(&event)?;

        Ok(Self {
            id: event.id,
            name: event.name,
            date: event.date,
            location: event.location,
            description: event.description,
            deleted_at: now,
            original_data,
        })
    }

    /// Decodes the full snapshot, if it is still a valid event record.
    pub fn snapshot(&self) -> Option<Event> {
        serde_json::from_value(self.original_data.clone()).ok()
    }

    /// Rebuilds an active event from the snapshot, or from the core fields
    /// when the snapshot is unusable. The second value reports which path
    /// was taken.
    pub fn rehydrate(&self, now: DateTime<Utc>) -> (Event, bool) {
        let (mut event, from_snapshot) = match self.snapshot() {
            Some(event) => (event, true),
            None => {
                let mut event = Event::new(self.name.clone(), self.date.clone(), now);
                event.location = self.location.clone();
                event.description = self.description.clone();
                (event, false)
            }
        };

        event.id = self.id;
        event.name = self.name.clone();
        event.date = self.date.clone();
        event.created_at = now;
        event.updated_at = now;
        event.deleted_at = None;
        (event, from_snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::EventStatus;
    use chrono::Duration;

    #[test]
    fn test_from_event_snapshots_everything() {
        let created = Utc::now() - Duration::days(3);
        let mut event = Event::new("RustConf".into(), "2025-09-01".into(), created);
        event.status = EventStatus::Upcoming;
        event.tags = vec!["rust".into(), "conf".into()];

        let now = Utc::now();
        let trashed = TrashedEvent::from_event(event.clone(), now).unwrap();

        assert_eq!(trashed.id, event.id);
        assert_eq!(trashed.deleted_at, now);
        assert_eq!(trashed.original_data["tags"][1], "conf");
        assert_eq!(trashed.original_data["status"], "Upcoming");
        assert!(trashed.original_data["deletedAt"].is_string());
    }

    #[test]
    fn test_rehydrate_restores_extended_fields() {
        let mut event = Event::new("RustConf".into(), "2025-09-01".into(), Utc::now());
        event.organizer = "Rust Foundation".into();
        event.max_attendees = Some(400);
        let trashed = TrashedEvent::from_event(event.clone(), Utc::now()).unwrap();

        let now = Utc::now() + Duration::seconds(5);
        let (restored, from_snapshot) = trashed.rehydrate(now);

        assert!(from_snapshot);
        assert_eq!(restored.id, event.id);
        assert_eq!(restored.organizer, "Rust Foundation");
        assert_eq!(restored.max_attendees, Some(400));
        assert_eq!(restored.created_at, now);
        assert!(restored.deleted_at.is_none());
    }

    #[test]
    fn test_rehydrate_falls_back_to_core_fields() {
        let event = Event::new("Meetup".into(), "2025-02-02".into(), Utc::now());
        let mut trashed = TrashedEvent::from_event(event, Utc::now()).unwrap();
        trashed.location = "Lisbon".into();
        trashed.original_data = Value::String("garbage".into());

        let (restored, from_snapshot) = trashed.rehydrate(Utc::now());

        assert!(!from_snapshot);
        assert_eq!(restored.name, "Meetup");
        assert_eq!(restored.location, "Lisbon");
        assert_eq!(restored.id, trashed.id);
    }
}
