//! Manual leaderboard override repository.
//!
//! Overrides are keyed uniquely by branch; writes use insert-or-update on the branch
//! column so there is never more than one row per branch.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::leaderboard::{ManualOverride, UpsertOverrideParam};

pub struct LeaderboardOverrideRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeaderboardOverrideRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts or replaces the override for `param.branch`.
    ///
    /// # Arguments
    /// - `param` - Validated override values
    ///
    /// # Returns
    /// - `Ok(ManualOverride)` - The stored override
    /// - `Err(DbErr)` - Database error during upsert
    pub async fn upsert(&self, param: UpsertOverrideParam) -> Result<ManualOverride, DbErr> {
        let entity = entity::prelude::LeaderboardOverride::insert(
            entity::leaderboard_override::ActiveModel {
                branch: ActiveValue::Set(param.branch),
                points: ActiveValue::Set(param.points),
                first_count: ActiveValue::Set(param.first_count),
                second_count: ActiveValue::Set(param.second_count),
                third_count: ActiveValue::Set(param.third_count),
                updated_at: ActiveValue::Set(Utc::now()),
                ..Default::default()
            },
        )
        .on_conflict(
            OnConflict::column(entity::leaderboard_override::Column::Branch)
                .update_columns([
                    entity::leaderboard_override::Column::Points,
                    entity::leaderboard_override::Column::FirstCount,
                    entity::leaderboard_override::Column::SecondCount,
                    entity::leaderboard_override::Column::ThirdCount,
                    entity::leaderboard_override::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(ManualOverride::from_entity(entity))
    }

    /// Gets all overrides ordered by branch name.
    pub async fn get_all(&self) -> Result<Vec<ManualOverride>, DbErr> {
        let entities = entity::prelude::LeaderboardOverride::find()
            .order_by_asc(entity::leaderboard_override::Column::Branch)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ManualOverride::from_entity).collect())
    }

    /// Deletes the override for `branch`.
    ///
    /// # Returns
    /// - `Ok(true)` - Override removed
    /// - `Ok(false)` - No override existed for the branch
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete_by_branch(&self, branch: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::LeaderboardOverride::delete_many()
            .filter(entity::leaderboard_override::Column::Branch.eq(branch))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
