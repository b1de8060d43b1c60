//! Leaderboard override factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a manual override row for `branch`.
///
/// # Arguments
/// - `db` - Database connection
/// - `branch` - Branch the override applies to
/// - `points` - Replacement point total
/// - `medals` - Replacement `(first, second, third)` medal counts
pub async fn create_override(
    db: &DatabaseConnection,
    branch: &str,
    points: f64,
    medals: (i32, i32, i32),
) -> Result<entity::leaderboard_override::Model, DbErr> {
    entity::leaderboard_override::ActiveModel {
        branch: ActiveValue::Set(branch.to_string()),
        points: ActiveValue::Set(points),
        first_count: ActiveValue::Set(medals.0),
        second_count: ActiveValue::Set(medals.1),
        third_count: ActiveValue::Set(medals.2),
        updated_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
