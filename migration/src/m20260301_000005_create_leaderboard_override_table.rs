use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LeaderboardOverride::Table)
                    .if_not_exists()
                    .col(pk_auto(LeaderboardOverride::Id))
                    .col(string_uniq(LeaderboardOverride::Branch))
                    .col(double(LeaderboardOverride::Points))
                    .col(integer(LeaderboardOverride::FirstCount).default(0))
                    .col(integer(LeaderboardOverride::SecondCount).default(0))
                    .col(integer(LeaderboardOverride::ThirdCount).default(0))
                    .col(
                        timestamp_with_time_zone(LeaderboardOverride::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LeaderboardOverride::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum LeaderboardOverride {
    Table,
    Id,
    Branch,
    Points,
    FirstCount,
    SecondCount,
    ThirdCount,
    UpdatedAt,
}
