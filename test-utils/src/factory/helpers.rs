//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an announcement together with a public user who can comment on it.
///
/// # Returns
/// - `Ok((user, announcement))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_announcement_with_commenter(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::announcement::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let announcement = crate::factory::announcement::create_announcement(db).await?;

    Ok((user, announcement))
}
