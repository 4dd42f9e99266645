use serde::{Deserialize, Serialize};

use super::{Event, LatestNews, Notification, Registration, Summary, TrashedEvent};

/// Every persisted collection, read and written as one unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub event: Vec<Event>,
    pub trash: Vec<TrashedEvent>,
    pub notifications: Vec<Notification>,
    #[serde(alias = "latestNews")]
    pub latest: Vec<LatestNews>,
    pub registration: Vec<Registration>,
    pub summary: Vec<Summary>,
}
