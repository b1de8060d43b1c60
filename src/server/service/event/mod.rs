//! Event catalogue and lifecycle orchestration.

pub mod lifecycle;

#[cfg(test)]
mod test;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::event::EventRepository,
    error::{event::EventError, AppError},
    model::event::{ConcludeEventParam, Event, EventFieldsParam, EventFilter, EventStatus},
};

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists events matching the filter, earliest day first.
    pub async fn list(&self, filter: EventFilter) -> Result<Vec<Event>, AppError> {
        let repo = EventRepository::new(self.db);

        Ok(repo.get_all(&filter).await?)
    }

    /// Gets an event by ID.
    ///
    /// # Returns
    /// - `Ok(Event)` - Event found
    /// - `Err(AppError::NotFound)` - No event with that ID
    pub async fn get(&self, id: i32) -> Result<Event, AppError> {
        let repo = EventRepository::new(self.db);

        repo.get_by_id(id).await?.ok_or_else(|| not_found(id))
    }

    /// Validates and creates an Upcoming event.
    pub async fn create(&self, param: EventFieldsParam) -> Result<Event, AppError> {
        param.validate()?;

        let repo = EventRepository::new(self.db);
        let event = repo.create(param).await?;

        tracing::info!("Created event {} ({})", event.id, event.name);

        Ok(event)
    }

    /// Validates and replaces an event's descriptive fields.
    pub async fn update(&self, id: i32, param: EventFieldsParam) -> Result<Event, AppError> {
        param.validate()?;

        let repo = EventRepository::new(self.db);

        repo.update(id, param).await?.ok_or_else(|| not_found(id))
    }

    /// Deletes an event along with its tags, winners and photos.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = EventRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(not_found(id));
        }

        tracing::info!("Deleted event {}", id);

        Ok(())
    }

    /// Applies a status change requested through the status endpoint.
    ///
    /// The write is conditioned on the status read here, so a concurrent change
    /// between read and write surfaces as an invalid transition.
    ///
    /// # Returns
    /// - `Ok(Event)` - Updated event
    /// - `Err(AppError::NotFound)` - No event with that ID
    /// - `Err(AppError::EventErr)` - Transition not allowed; nothing was written
    pub async fn set_status(&self, id: i32, requested: EventStatus) -> Result<Event, AppError> {
        let repo = EventRepository::new(self.db);

        let event = self.get(id).await?;
        let from = event.status;
        let updated = lifecycle::set_status(event, requested)?;

        if !repo.update_status(id, from, updated.status).await? {
            return Err(EventError::InvalidTransition {
                from,
                to: requested,
            }
            .into());
        }

        tracing::info!("Event {} moved from {:?} to {:?}", id, from, updated.status);

        self.get(id).await
    }

    /// Concludes an event with winners.
    ///
    /// Runs the pure transition, then writes status, winners and result in a single
    /// transaction. The stored event is untouched when validation fails.
    ///
    /// # Returns
    /// - `Ok(Event)` - Concluded event
    /// - `Err(AppError::NotFound)` - No event with that ID
    /// - `Err(AppError::ValidationErr)` - No usable winners, or invalid points
    /// - `Err(AppError::EventErr)` - Event already concluded (including by a concurrent request)
    pub async fn conclude(&self, id: i32, param: ConcludeEventParam) -> Result<Event, AppError> {
        let repo = EventRepository::new(self.db);

        let event = self.get(id).await?;
        let concluded = lifecycle::conclude_with_winners(event, param)?;

        if !repo.save_conclusion(&concluded).await? {
            return Err(EventError::InvalidTransition {
                from: EventStatus::Concluded,
                to: EventStatus::Concluded,
            }
            .into());
        }

        tracing::info!(
            "Concluded event {} with {} winner(s)",
            id,
            concluded.winners.len()
        );

        self.get(id).await
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Event {} not found", id))
}
