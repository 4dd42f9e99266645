//! News, registration statistics and summaries: flat records with
//! create and list only.

use chrono::Utc;

use super::notifications;
use super::{missing_fields, Repository};
use crate::models::{
    LatestNews, NewsInput, NotificationType, Registration, RegistrationInput, Summary,
    SummaryInput,
};
use crate::utils::error::AppError;

#[derive(Clone)]
pub struct FeedService {
    repo: Repository,
}

impl FeedService {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    pub async fn list_news(&self) -> Result<Vec<LatestNews>, AppError> {
        Ok(self.repo.read().await?.latest)
    }

    pub async fn create_news(&self, input: NewsInput) -> Result<LatestNews, AppError> {
        let news = input
            .into_record(Utc::now())
            .map_err(|missing| missing_fields(&missing))?;

        self.repo
            .mutate(move |snapshot| {
                snapshot.latest.insert(0, news.clone());
                notifications::emit(
                    &mut snapshot.notifications,
                    NotificationType::News,
                    format!("Latest news \"{}\" has been published", news.news_headline),
                );
                Ok(news)
            })
            .await
    }

    pub async fn list_registrations(&self) -> Result<Vec<Registration>, AppError> {
        Ok(self.repo.read().await?.registration)
    }

    pub async fn create_registration(
        &self,
        input: RegistrationInput,
    ) -> Result<Registration, AppError> {
        let registration = input
            .into_record(Utc::now())
            .map_err(|missing| missing_fields(&missing))?;

        self.repo
            .mutate(move |snapshot| {
                snapshot.registration.insert(0, registration.clone());
                notifications::emit(
                    &mut snapshot.notifications,
                    NotificationType::Registration,
                    format!("Registrations recorded for {}", registration.month_lg),
                );
                Ok(registration)
            })
            .await
    }

    pub async fn list_summaries(&self) -> Result<Vec<Summary>, AppError> {
        Ok(self.repo.read().await?.summary)
    }

    pub async fn create_summary(&self, input: SummaryInput) -> Result<Summary, AppError> {
        let summary = input
            .into_record(Utc::now())
            .map_err(|missing| missing_fields(&missing))?;

        self.repo
            .mutate(move |snapshot| {
                snapshot.summary.insert(0, summary.clone());
                Ok(summary)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use std::sync::Arc;

    fn service() -> (FeedService, Repository) {
        let repo = Repository::new(Arc::new(MemoryStore::new()));
        (FeedService::new(repo.clone()), repo)
    }

    #[tokio::test]
    async fn test_news_is_listed_newest_first_and_notifies() {
        let (svc, repo) = service();
        for headline in ["Call for papers", "Schedule out"] {
            svc.create_news(NewsInput {
                news_headline: Some(headline.into()),
                news_note: Some("details".into()),
                news_img: Some("/img.png".into()),
            })
            .await
            .unwrap();
        }

        let news = svc.list_news().await.unwrap();
        assert_eq!(news[0].news_headline, "Schedule out");

        let snapshot = repo.read().await.unwrap();
        assert_eq!(snapshot.notifications.len(), 2);
        assert_eq!(snapshot.notifications[0].kind, NotificationType::News);
    }

    #[tokio::test]
    async fn test_registration_notifies() {
        let (svc, repo) = service();
        svc.create_registration(RegistrationInput {
            height: Some(42.0),
            month_lg: Some("March".into()),
            month_sm: Some("Mar".into()),
        })
        .await
        .unwrap();

        let snapshot = repo.read().await.unwrap();
        assert_eq!(snapshot.registration.len(), 1);
        assert_eq!(snapshot.notifications[0].kind, NotificationType::Registration);
    }

    #[tokio::test]
    async fn test_summary_validation() {
        let (svc, _) = service();
        let err = svc
            .create_summary(SummaryInput {
                title: Some("Attendance".into()),
                ..Default::default()
            })
            .await
            .unwrap_err();
        match err {
            AppError::ValidationError(msg) => assert!(msg.contains("rate, percentage")),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(svc.list_summaries().await.unwrap().is_empty());
    }
}
