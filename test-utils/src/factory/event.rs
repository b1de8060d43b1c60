//! Event factory for creating test event entities.
//!
//! Events are inserted together with their branch tags and, optionally, winners.
//! Adding a winner does not change the status; set it explicitly with `status()`
//! or use `create_concluded_event`.

use crate::{factory::helpers::next_id, fixture};
use chrono::{NaiveDate, Utc};
use entity::sea_orm_active_enums::{EventStatus, WinnerPosition};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test events with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let event = EventFactory::new(&db)
///     .game_type("Football")
///     .status(EventStatus::Concluded)
///     .winner(WinnerPosition::Team, "ECE", Some(7.0))
///     .build()
///     .await?;
/// ```
pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::event::Model,
    branch_tags: Vec<String>,
    winners: Vec<(WinnerPosition, String, Option<f64>)>,
}

impl<'a> EventFactory<'a> {
    /// Creates a new EventFactory with defaults from `fixture::event`.
    ///
    /// The name is suffixed with a unique counter and the branch tags default
    /// to `["CSE", "ECE"]`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::event::entity_builder()
            .name(format!("Event {}", id))
            .build();

        Self {
            db,
            entity,
            branch_tags: vec!["CSE".to_string(), "ECE".to_string()],
            winners: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    pub fn day(mut self, day: NaiveDate) -> Self {
        self.entity.day = day;
        self
    }

    pub fn game_type(mut self, game_type: impl Into<String>) -> Self {
        self.entity.game_type = game_type.into();
        self
    }

    pub fn status(mut self, status: EventStatus) -> Self {
        self.entity.status = status;
        self
    }

    pub fn branch_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.branch_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Appends a winner row for the event.
    pub fn winner(
        mut self,
        position: WinnerPosition,
        branch: impl Into<String>,
        points: Option<f64>,
    ) -> Self {
        self.winners.push((position, branch.into(), points));
        self
    }

    /// Builds and inserts the event, its branch tags and its winners.
    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        let now = Utc::now();
        let event = entity::event::ActiveModel {
            name: ActiveValue::Set(self.entity.name),
            description: ActiveValue::Set(self.entity.description),
            day: ActiveValue::Set(self.entity.day),
            time: ActiveValue::Set(self.entity.time),
            venue: ActiveValue::Set(self.entity.venue),
            game_type: ActiveValue::Set(self.entity.game_type),
            category: ActiveValue::Set(self.entity.category),
            event_type: ActiveValue::Set(self.entity.event_type),
            points_first: ActiveValue::Set(self.entity.points_first),
            points_second: ActiveValue::Set(self.entity.points_second),
            points_third: ActiveValue::Set(self.entity.points_third),
            result: ActiveValue::Set(self.entity.result),
            cover_image: ActiveValue::Set(self.entity.cover_image),
            status: ActiveValue::Set(self.entity.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for branch in self.branch_tags {
            entity::event_branch_tag::ActiveModel {
                event_id: ActiveValue::Set(event.id),
                branch: ActiveValue::Set(branch),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        for (position, branch, points) in self.winners {
            entity::event_winner::ActiveModel {
                event_id: ActiveValue::Set(event.id),
                position: ActiveValue::Set(position),
                branch: ActiveValue::Set(branch),
                points: ActiveValue::Set(points),
                player_of_the_match: ActiveValue::Set(None),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
        }

        Ok(event)
    }
}

/// Creates an Upcoming event with default values.
pub async fn create_event(db: &DatabaseConnection) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db).build().await
}

/// Creates a Concluded event with the provided winners.
pub async fn create_concluded_event(
    db: &DatabaseConnection,
    winners: &[(WinnerPosition, &str, Option<f64>)],
) -> Result<entity::event::Model, DbErr> {
    winners
        .iter()
        .fold(
            EventFactory::new(db).status(EventStatus::Concluded),
            |factory, (position, branch, points)| factory.winner(*position, *branch, *points),
        )
        .build()
        .await
}
