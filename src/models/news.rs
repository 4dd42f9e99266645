use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::required_text;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestNews {
    pub id: Uuid,
    pub news_headline: String,
    pub news_note: String,
    pub news_img: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsInput {
    pub news_headline: Option<String>,
    pub news_note: Option<String>,
    pub news_img: Option<String>,
}

impl NewsInput {
    /// Converts into a record, or returns the names of the missing fields.
    pub fn into_record(self, now: DateTime<Utc>) -> Result<LatestNews, Vec<&'static str>> {
        let headline = required_text(self.news_headline);
        let note = required_text(self.news_note);
        let img = required_text(self.news_img);

        match (headline, note, img) {
            (Some(news_headline), Some(news_note), Some(news_img)) => Ok(LatestNews {
                id: Uuid::new_v4(),
                news_headline,
                news_note,
                news_img,
                created_at: now,
                updated_at: now,
            }),
            (headline, note, img) => {
                let mut missing = Vec::new();
                if headline.is_none() {
                    missing.push("newsHeadline");
                }
                if note.is_none() {
                    missing.push("newsNote");
                }
                if img.is_none() {
                    missing.push("newsImg");
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
    fn test_blank_fields_are_missing() {
        let input = NewsInput {
            news_headline: Some("  ".into()),
            news_note: Some("Body".into()),
            news_img: None,
        };
        assert_eq!(
            input.into_record(Utc::now()).unwrap_err(),
            vec!["newsHeadline", "newsImg"]
        );
    }

    #[test]
    fn test_values_are_trimmed() {
        let input = NewsInput {
            news_headline: Some(" Launch ".into()),
            news_note: Some("Body".into()),
            news_img: Some("/img/launch.png".into()),
        };
        let news = input.into_record(Utc::now()).unwrap();
        assert_eq!(news.news_headline, "Launch");
    }
}
