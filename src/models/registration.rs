use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::required_text;

/// One bar of the monthly registrations chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: Uuid,
    pub height: f64,
    pub month_lg: String,
    pub month_sm: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationInput {
    pub height: Option<f64>,
    pub month_lg: Option<String>,
    pub month_sm: Option<String>,
}

impl RegistrationInput {
    pub fn into_record(self, now: DateTime<Utc>) -> Result<Registration, Vec<&'static str>> {
        let height = self.height.filter(|h| h.is_finite());
        let month_lg = required_text(self.month_lg);
        let month_sm = required_text(self.month_sm);

        match (height, month_lg, month_sm) {
            (Some(height), Some(month_lg), Some(month_sm)) => Ok(Registration {
                id: Uuid::new_v4(),
                height,
                month_lg,
                month_sm,
                created_at: now,
                updated_at: now,
            }),
            (height, month_lg, month_sm) => {
                let mut missing = Vec::new();
                if height.is_none() {
                    missing.push("height");
                }
                if month_lg.is_none() {
                    missing.push("monthLg");
                }
                if month_sm.is_none() {
                    missing.push("monthSm");
                }
                Err(missing)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_requires_height() {
        let input = RegistrationInput {
            height: None,
            month_lg: Some("January".into()),
            month_sm: Some("Jan".into()),
        };
        assert_eq!(input.into_record(Utc::now()).unwrap_err(), vec!["height"]);
    }
}
