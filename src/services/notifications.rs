//! Bounded, newest-first notification log.

use uuid::Uuid;

use crate::models::{Notification, NotificationType};

pub const MAX_NOTIFICATIONS: usize = 50;

/// Prepends a new entry and drops whatever falls past the cap.
pub fn emit(
    log: &mut Vec<Notification>,
    kind: NotificationType,
    message: impl Into<String>,
) -> Notification {
    let notification = Notification::new(kind, message);
    log.insert(0, notification.clone());
    log.truncate(MAX_NOTIFICATIONS);
    notification
}

pub fn delete_by_id(log: &mut Vec<Notification>, id: Uuid) -> Option<Notification> {
    let idx = log.iter().position(|n| n.id == id)?;
    Some(log.remove(idx))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_is_capped_newest_first() {
        let mut log = Vec::new();
        for i in 0..60 {
            emit(&mut log, NotificationType::NewEvent, format!("event {i}"));
        }

        assert_eq!(log.len(), MAX_NOTIFICATIONS);
        assert_eq!(log[0].message, "event 59");
        assert_eq!(log[49].message, "event 10");
    }

    #[test]
    fn test_delete_by_id() {
        let mut log = Vec::new();
        let first = emit(&mut log, NotificationType::News, "first");
        emit(&mut log, NotificationType::News, "second");

        let removed = delete_by_id(&mut log, first.id).unwrap();
        assert_eq!(removed, first);
        assert_eq!(log.len(), 1);
        assert!(delete_by_id(&mut log, first.id).is_none());
    }
}
