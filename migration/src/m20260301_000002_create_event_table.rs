use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(string(Event::Name))
                    .col(text(Event::Description))
                    .col(date(Event::Day))
                    .col(string(Event::Time))
                    .col(string(Event::Venue))
                    .col(string(Event::GameType))
                    .col(string(Event::Category))
                    .col(string(Event::EventType))
                    .col(double(Event::PointsFirst))
                    .col(double(Event::PointsSecond))
                    .col(double(Event::PointsThird))
                    .col(text_null(Event::Result))
                    .col(string_null(Event::CoverImage))
                    .col(string(Event::Status).default("Upcoming"))
                    .col(
                        timestamp_with_time_zone(Event::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Event::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        for (name, column) in [
            ("idx_event_status", Event::Status),
            ("idx_event_game_type", Event::GameType),
            ("idx_event_day", Event::Day),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Event::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Event::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Event {
    Table,
    Id,
    Name,
    Description,
    Day,
    Time,
    Venue,
    GameType,
    Category,
    EventType,
    PointsFirst,
    PointsSecond,
    PointsThird,
    Result,
    CoverImage,
    Status,
    CreatedAt,
    UpdatedAt,
}
