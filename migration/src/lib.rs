pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_user_table;
mod m20260301_000002_create_event_table;
mod m20260301_000003_create_event_branch_tag_table;
mod m20260301_000004_create_event_winner_table;
mod m20260301_000005_create_leaderboard_override_table;
mod m20260302_000006_create_announcement_table;
mod m20260302_000007_create_comment_table;
mod m20260302_000008_create_photo_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_user_table::Migration),
            Box::new(m20260301_000002_create_event_table::Migration),
            Box::new(m20260301_000003_create_event_branch_tag_table::Migration),
            Box::new(m20260301_000004_create_event_winner_table::Migration),
            Box::new(m20260301_000005_create_leaderboard_override_table::Migration),
            Box::new(m20260302_000006_create_announcement_table::Migration),
            Box::new(m20260302_000007_create_comment_table::Migration),
            Box::new(m20260302_000008_create_photo_table::Migration),
        ]
    }
}
