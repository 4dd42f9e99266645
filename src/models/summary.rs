use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::required_text;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub id: Uuid,
    #[serde(default)]
    pub event_id: Option<Uuid>,
    pub title: String,
    pub rate: String,
    pub percentage: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryInput {
    pub event_id: Option<Uuid>,
    pub title: Option<String>,
    pub rate: Option<String>,
    pub percentage: Option<String>,
}

impl SummaryInput {
    pub fn into_record(self, now: DateTime<Utc>) -> Result<Summary, Vec<&'static str>> {
        let title = required_text(self.title);
        let rate = required_text(self.rate);
        let percentage = required_text(self.percentage);

        match (title, rate, percentage) {
            (Some(title), Some(rate), Some(percentage)) => Ok(Summary {
                id: Uuid::new_v4(),
                event_id: self.event_id,
                title,
                rate,
                percentage,
                created_at: now,
                updated_at: now,
            }),
            (title, rate, percentage) => {
                let mut missing = Vec::new();
                if title.is_none() {
                    missing.push("title");
                }
                if rate.is_none() {
                    missing.push("rate");
                }
                if percentage.is_none() {
                    missing.push("percentage");
                }
                Err(missing)
            }
        }
    }
}
