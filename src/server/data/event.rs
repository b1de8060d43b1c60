//! Event data repository for database operations.
//!
//! This module provides the `EventRepository` for managing events together with their
//! branch tags and winners. Multi-row writes (create, update, delete, conclude) run in a
//! single transaction so readers never observe a partially written event.

use std::collections::HashMap;

use chrono::Utc;
use entity::sea_orm_active_enums::EventStatus as DbEventStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::server::model::event::{Event, EventFieldsParam, EventFilter, EventStatus, Winner};

/// Repository providing database operations for events.
pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    /// Creates a new EventRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `EventRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an event with status Upcoming and no winners, along with its branch tags.
    ///
    /// # Arguments
    /// - `param` - Validated descriptive fields
    ///
    /// # Returns
    /// - `Ok(Event)` - The created event
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, param: EventFieldsParam) -> Result<Event, DbErr> {
        let txn = self.db.begin().await?;
        let now = Utc::now();

        let event = entity::event::ActiveModel {
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            day: ActiveValue::Set(param.day),
            time: ActiveValue::Set(param.time),
            venue: ActiveValue::Set(param.venue),
            game_type: ActiveValue::Set(param.game_type),
            category: ActiveValue::Set(param.category.into()),
            event_type: ActiveValue::Set(param.event_type.into()),
            points_first: ActiveValue::Set(param.points.first),
            points_second: ActiveValue::Set(param.points.second),
            points_third: ActiveValue::Set(param.points.third),
            result: ActiveValue::Set(None),
            cover_image: ActiveValue::Set(param.cover_image),
            status: ActiveValue::Set(DbEventStatus::Upcoming),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let tags = insert_branch_tags(&txn, event.id, param.branch_tags).await?;

        txn.commit().await?;

        Ok(Event::from_entity(event, tags, Vec::new()))
    }

    /// Finds an event by ID with its tags and winners.
    ///
    /// # Returns
    /// - `Ok(Some(Event))` - Event found
    /// - `Ok(None)` - No event with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Event>, DbErr> {
        let Some(event) = entity::prelude::Event::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        Ok(attach_relations(self.db, vec![event]).await?.pop())
    }

    /// Checks whether an event with the given ID exists.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Event::find()
            .filter(entity::event::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Lists events matching the filter, ordered by day ascending then ID.
    ///
    /// # Arguments
    /// - `filter` - Optional status, branch tag and game type constraints
    ///
    /// # Returns
    /// - `Ok(Vec<Event>)` - Matching events with tags and winners
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_all(&self, filter: &EventFilter) -> Result<Vec<Event>, DbErr> {
        let mut query = entity::prelude::Event::find();

        if let Some(status) = filter.status {
            query = query.filter(entity::event::Column::Status.eq(DbEventStatus::from(status)));
        }

        if let Some(game) = &filter.game {
            query = query.filter(entity::event::Column::GameType.eq(game.as_str()));
        }

        if let Some(branch) = &filter.branch {
            let event_ids: Vec<i32> = entity::prelude::EventBranchTag::find()
                .select_only()
                .column(entity::event_branch_tag::Column::EventId)
                .filter(entity::event_branch_tag::Column::Branch.eq(branch.as_str()))
                .distinct()
                .into_tuple()
                .all(self.db)
                .await?;

            query = query.filter(entity::event::Column::Id.is_in(event_ids));
        }

        let events = query
            .order_by_asc(entity::event::Column::Day)
            .order_by_asc(entity::event::Column::Id)
            .all(self.db)
            .await?;

        attach_relations(self.db, events).await
    }

    /// Replaces an event's descriptive fields and branch tags.
    ///
    /// Status, winners and result are left untouched.
    ///
    /// # Returns
    /// - `Ok(Some(Event))` - Updated event
    /// - `Ok(None)` - No event with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(&self, id: i32, param: EventFieldsParam) -> Result<Option<Event>, DbErr> {
        let txn = self.db.begin().await?;

        let Some(existing) = entity::prelude::Event::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut active: entity::event::ActiveModel = existing.into();
        active.name = ActiveValue::Set(param.name);
        active.description = ActiveValue::Set(param.description);
        active.day = ActiveValue::Set(param.day);
        active.time = ActiveValue::Set(param.time);
        active.venue = ActiveValue::Set(param.venue);
        active.game_type = ActiveValue::Set(param.game_type);
        active.category = ActiveValue::Set(param.category.into());
        active.event_type = ActiveValue::Set(param.event_type.into());
        active.points_first = ActiveValue::Set(param.points.first);
        active.points_second = ActiveValue::Set(param.points.second);
        active.points_third = ActiveValue::Set(param.points.third);
        active.cover_image = ActiveValue::Set(param.cover_image);
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(&txn).await?;

        entity::prelude::EventBranchTag::delete_many()
            .filter(entity::event_branch_tag::Column::EventId.eq(id))
            .exec(&txn)
            .await?;
        insert_branch_tags(&txn, id, param.branch_tags).await?;

        txn.commit().await?;

        self.get_by_id(id).await
    }

    /// Moves an event from `from` to `to` if its stored status is still `from`.
    ///
    /// # Returns
    /// - `Ok(true)` - Status updated
    /// - `Ok(false)` - Event missing or its status no longer matches `from`
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_status(
        &self,
        id: i32,
        from: EventStatus,
        to: EventStatus,
    ) -> Result<bool, DbErr> {
        let result = entity::prelude::Event::update_many()
            .set(entity::event::ActiveModel {
                status: ActiveValue::Set(to.into()),
                updated_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            })
            .filter(entity::event::Column::Id.eq(id))
            .filter(entity::event::Column::Status.eq(DbEventStatus::from(from)))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Persists a concluded event's status, result and winners in one transaction.
    ///
    /// The status update is conditioned on the stored status not already being
    /// Concluded, so of two concurrent conclusions only the first writes anything.
    ///
    /// # Arguments
    /// - `event` - Event value produced by the conclude transition
    ///
    /// # Returns
    /// - `Ok(true)` - Conclusion written
    /// - `Ok(false)` - Event missing or already concluded; nothing written
    /// - `Err(DbErr)` - Database error; the transaction is rolled back
    pub async fn save_conclusion(&self, event: &Event) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let result = entity::prelude::Event::update_many()
            .set(entity::event::ActiveModel {
                status: ActiveValue::Set(DbEventStatus::Concluded),
                result: ActiveValue::Set(event.result.clone()),
                updated_at: ActiveValue::Set(event.updated_at),
                ..Default::default()
            })
            .filter(entity::event::Column::Id.eq(event.id))
            .filter(entity::event::Column::Status.ne(DbEventStatus::Concluded))
            .exec(&txn)
            .await?;

        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Ok(false);
        }

        entity::prelude::EventWinner::delete_many()
            .filter(entity::event_winner::Column::EventId.eq(event.id))
            .exec(&txn)
            .await?;
        insert_winners(&txn, event.id, &event.winners).await?;

        txn.commit().await?;

        Ok(true)
    }

    /// Deletes an event with its tags, winners and photos.
    ///
    /// # Returns
    /// - `Ok(true)` - Event deleted
    /// - `Ok(false)` - No event with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let photo_ids: Vec<i32> = entity::prelude::Photo::find()
            .select_only()
            .column(entity::photo::Column::Id)
            .filter(entity::photo::Column::EventId.eq(id))
            .into_tuple()
            .all(&txn)
            .await?;

        if !photo_ids.is_empty() {
            entity::prelude::PhotoTag::delete_many()
                .filter(entity::photo_tag::Column::PhotoId.is_in(photo_ids))
                .exec(&txn)
                .await?;
        }
        entity::prelude::Photo::delete_many()
            .filter(entity::photo::Column::EventId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::EventWinner::delete_many()
            .filter(entity::event_winner::Column::EventId.eq(id))
            .exec(&txn)
            .await?;
        entity::prelude::EventBranchTag::delete_many()
            .filter(entity::event_branch_tag::Column::EventId.eq(id))
            .exec(&txn)
            .await?;

        let result = entity::prelude::Event::delete_by_id(id).exec(&txn).await?;

        txn.commit().await?;

        Ok(result.rows_affected > 0)
    }

    /// Removes every winner row from every event.
    ///
    /// Event statuses and results are left unchanged.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of winner rows removed
    /// - `Err(DbErr)` - Database error during delete
    pub async fn clear_winners(&self) -> Result<u64, DbErr> {
        let result = entity::prelude::EventWinner::delete_many()
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

async fn insert_branch_tags<C: ConnectionTrait>(
    conn: &C,
    event_id: i32,
    branches: Vec<String>,
) -> Result<Vec<entity::event_branch_tag::Model>, DbErr> {
    let mut tags = Vec::with_capacity(branches.len());

    for branch in branches {
        let tag = entity::event_branch_tag::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            branch: ActiveValue::Set(branch),
            ..Default::default()
        }
        .insert(conn)
        .await?;
        tags.push(tag);
    }

    Ok(tags)
}

async fn insert_winners<C: ConnectionTrait>(
    conn: &C,
    event_id: i32,
    winners: &[Winner],
) -> Result<(), DbErr> {
    for winner in winners {
        entity::event_winner::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            position: ActiveValue::Set(winner.position.into()),
            branch: ActiveValue::Set(winner.branch.clone()),
            points: ActiveValue::Set(winner.points),
            player_of_the_match: ActiveValue::Set(winner.player_of_the_match.clone()),
            ..Default::default()
        }
        .insert(conn)
        .await?;
    }

    Ok(())
}

/// Loads tags and winners for `events` with one query each, preserving event order.
async fn attach_relations<C: ConnectionTrait>(
    conn: &C,
    events: Vec<entity::event::Model>,
) -> Result<Vec<Event>, DbErr> {
    if events.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<i32> = events.iter().map(|e| e.id).collect();

    let mut tags_by_event: HashMap<i32, Vec<entity::event_branch_tag::Model>> = HashMap::new();
    for tag in entity::prelude::EventBranchTag::find()
        .filter(entity::event_branch_tag::Column::EventId.is_in(ids.clone()))
        .order_by_asc(entity::event_branch_tag::Column::Id)
        .all(conn)
        .await?
    {
        tags_by_event.entry(tag.event_id).or_default().push(tag);
    }

    let mut winners_by_event: HashMap<i32, Vec<entity::event_winner::Model>> = HashMap::new();
    for winner in entity::prelude::EventWinner::find()
        .filter(entity::event_winner::Column::EventId.is_in(ids))
        .order_by_asc(entity::event_winner::Column::Id)
        .all(conn)
        .await?
    {
        winners_by_event.entry(winner.event_id).or_default().push(winner);
    }

    Ok(events
        .into_iter()
        .map(|event| {
            let tags = tags_by_event.remove(&event.id).unwrap_or_default();
            let winners = winners_by_event.remove(&event.id).unwrap_or_default();
            Event::from_entity(event, tags, winners)
        })
        .collect())
}
