pub mod event;
pub mod news;
pub mod notification;
pub mod registration;
pub mod snapshot;
pub mod summary;
pub mod trash;

pub use event::{Event, EventFields, EventStatus};
pub use news::{LatestNews, NewsInput};
pub use notification::{Notification, NotificationType};
pub use registration::{Registration, RegistrationInput};
pub use snapshot::Snapshot;
pub use summary::{Summary, SummaryInput};
pub use trash::TrashedEvent;

/// Trims a required text field; blank counts as missing.
pub(crate) fn required_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
