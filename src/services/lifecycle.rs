//! Event lifecycle: active -> trashed -> restored or purged.
//!
//! Every transition appends a notification to the log as part of the same
//! save, so the event collections and the feed never disagree.

use chrono::Utc;
use uuid::Uuid;

use super::lookup::{find_by_name, name_key, position_by_name};
use super::notifications::{self, MAX_NOTIFICATIONS};
use super::{missing_fields, Repository};
use crate::models::event::is_valid_date;
use crate::models::{
    required_text, Event, EventFields, Notification, NotificationType, Snapshot, TrashedEvent,
};
use crate::storage::StorageError;
use crate::utils::error::AppError;

#[derive(Clone)]
pub struct EventService {
    repo: Repository,
}

fn not_found(name: &str) -> AppError {
    AppError::NotFound(format!("Event '{}' was not found", name))
}

fn trash_not_found(name: &str) -> AppError {
    AppError::NotFound(format!("Event '{}' was not found in trash", name))
}

fn duplicate(name: &str) -> AppError {
    AppError::DuplicateName(format!("An event with the name '{}' already exists", name))
}

/// Trims the date fields in place, then checks they parse.
fn normalize_dates(fields: &mut EventFields) -> Result<(), AppError> {
    for value in [&mut fields.date, &mut fields.registration_deadline]
        .into_iter()
        .flatten()
    {
        *value = value.trim().to_string();
    }

    if let Some(date) = &fields.date {
        if !is_valid_date(date) {
            return Err(AppError::ValidationError(format!("Invalid date: '{}'", date)));
        }
    }
    if let Some(deadline) = &fields.registration_deadline {
        if !is_valid_date(deadline) {
            return Err(AppError::ValidationError(format!(
                "Invalid registrationDeadline: '{}'",
                deadline
            )));
        }
    }
    Ok(())
}

impl EventService {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Active events, most recently created first.
    pub async fn list(&self) -> Result<Vec<Event>, AppError> {
        Ok(self.repo.read().await?.event)
    }

    pub async fn get(&self, name: &str) -> Result<Event, AppError> {
        let snapshot = self.repo.read().await?;
        find_by_name(&snapshot.event, name)
            .cloned()
            .ok_or_else(|| not_found(name))
    }

    pub async fn create(&self, mut fields: EventFields) -> Result<Event, AppError> {
        let name = required_text(fields.name.take());
        let date = required_text(fields.date.take());
        let (name, date) = match (name, date) {
            (Some(name), Some(date)) => (name, date),
            (name, date) => {
                let mut missing = Vec::new();
                if name.is_none() {
                    missing.push("name");
                }
                if date.is_none() {
                    missing.push("date");
                }
                return Err(missing_fields(&missing));
            }
        };
        if !is_valid_date(&date) {
            return Err(AppError::ValidationError(format!("Invalid date: '{}'", date)));
        }
        normalize_dates(&mut fields)?;

        let event = self
            .repo
            .mutate(move |snapshot| {
                if find_by_name(&snapshot.event, &name).is_some() {
                    return Err(duplicate(&name));
                }

                let mut event = Event::new(name, date, Utc::now());
                event.apply(fields);
                snapshot.event.insert(0, event.clone());

                notifications::emit(
                    &mut snapshot.notifications,
                    NotificationType::NewEvent,
                    format!("New event \"{}\" has been created", event.name),
                );
                Ok(event)
            })
            .await?;

        tracing::info!(id = %event.id, name = %event.name, "Event created");
        Ok(event)
    }

    pub async fn update(&self, name: &str, mut patch: EventFields) -> Result<Event, AppError> {
        if patch.is_empty() {
            return Err(AppError::ValidationError("No fields to update".to_string()));
        }
        if patch.name.is_some() {
            patch.name = Some(
                required_text(patch.name.take())
                    .ok_or_else(|| AppError::ValidationError("name cannot be blank".to_string()))?,
            );
        }
        normalize_dates(&mut patch)?;

        let event = self
            .repo
            .mutate(|snapshot| {
                let idx = position_by_name(&snapshot.event, name).ok_or_else(|| not_found(name))?;

                if let Some(new_name) = &patch.name {
                    let clash = snapshot
                        .event
                        .iter()
                        .enumerate()
                        .any(|(i, e)| i != idx && name_key(&e.name) == name_key(new_name));
                    if clash {
                        return Err(duplicate(new_name));
                    }
                }

                let event = &mut snapshot.event[idx];
                event.apply(patch);
                event.updated_at = Utc::now();
                let event = event.clone();

                notifications::emit(
                    &mut snapshot.notifications,
                    NotificationType::Update,
                    format!("Event \"{}\" has been updated", event.name),
                );
                Ok(event)
            })
            .await?;

        tracing::info!(id = %event.id, name = %event.name, "Event updated");
        Ok(event)
    }

    /// Moves an active event to the trash.
    pub async fn soft_delete(&self, name: &str) -> Result<TrashedEvent, AppError> {
        let trashed = self
            .repo
            .mutate(|snapshot| {
                let idx = position_by_name(&snapshot.event, name).ok_or_else(|| not_found(name))?;
                let event = snapshot.event.remove(idx);

                let trashed =
                    TrashedEvent::from_event(event, Utc::now()).map_err(StorageError::Serialize)?;
                snapshot.trash.push(trashed.clone());

                notifications::emit(
                    &mut snapshot.notifications,
                    NotificationType::TemporaryDelete,
                    format!("Event \"{}\" has been moved to trash", trashed.name),
                );
                Ok(trashed)
            })
            .await?;

        tracing::info!(id = %trashed.id, name = %trashed.name, "Event moved to trash");
        Ok(trashed)
    }

    pub async fn list_trash(&self) -> Result<Vec<TrashedEvent>, AppError> {
        Ok(self.repo.read().await?.trash)
    }

    /// Brings a trashed event back to the head of the active list, with
    /// every field from its snapshot and a fresh `createdAt`.
    pub async fn restore(&self, name: &str) -> Result<Event, AppError> {
        let event = self
            .repo
            .mutate(|snapshot| {
                let idx =
                    position_by_name(&snapshot.trash, name).ok_or_else(|| trash_not_found(name))?;
                if find_by_name(&snapshot.event, name).is_some() {
                    return Err(duplicate(&snapshot.trash[idx].name));
                }

                let trashed = snapshot.trash.remove(idx);
                let (event, from_snapshot) = trashed.rehydrate(Utc::now());
                if !from_snapshot {
                    tracing::warn!(
                        name = %trashed.name,
                        "Trash snapshot unreadable, restoring core fields only"
                    );
                }
                snapshot.event.insert(0, event.clone());

                notifications::emit(
                    &mut snapshot.notifications,
                    NotificationType::RestoredEvent,
                    format!("Event \"{}\" has been restored", event.name),
                );
                Ok(event)
            })
            .await?;

        tracing::info!(id = %event.id, name = %event.name, "Event restored");
        Ok(event)
    }

    /// Deletes a trashed event for good.
    pub async fn purge(&self, name: &str) -> Result<TrashedEvent, AppError> {
        let trashed = self
            .repo
            .mutate(|snapshot| {
                let idx =
                    position_by_name(&snapshot.trash, name).ok_or_else(|| trash_not_found(name))?;
                let trashed = snapshot.trash.remove(idx);

                notifications::emit(
                    &mut snapshot.notifications,
                    NotificationType::PermanentDelete,
                    format!("Event \"{}\" has been permanently deleted", trashed.name),
                );
                Ok(trashed)
            })
            .await?;

        tracing::info!(id = %trashed.id, name = %trashed.name, "Event purged");
        Ok(trashed)
    }

    /// Newest first; never more than [`MAX_NOTIFICATIONS`].
    pub async fn list_notifications(&self) -> Result<Vec<Notification>, AppError> {
        let mut log = self.repo.read().await?.notifications;
        log.truncate(MAX_NOTIFICATIONS);
        Ok(log)
    }

    pub async fn delete_notification(&self, id: &str) -> Result<Notification, AppError> {
        let missing = || AppError::NotFound(format!("Notification '{}' was not found", id));
        // An id that is not even a UUID cannot match anything.
        let id_value = Uuid::parse_str(id).map_err(|_| missing())?;

        self.repo
            .mutate(|snapshot| {
                notifications::delete_by_id(&mut snapshot.notifications, id_value)
                    .ok_or_else(missing)
            })
            .await
    }

    /// Every collection at once.
    pub async fn all_data(&self) -> Result<Snapshot, AppError> {
        self.repo.read().await
    }
}
