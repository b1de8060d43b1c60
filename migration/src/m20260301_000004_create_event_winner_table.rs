use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000002_create_event_table::Event;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(EventWinner::Table)
                    .if_not_exists()
                    .col(pk_auto(EventWinner::Id))
                    .col(integer(EventWinner::EventId))
                    .col(string(EventWinner::Position))
                    .col(string(EventWinner::Branch))
                    .col(double_null(EventWinner::Points))
                    .col(string_null(EventWinner::PlayerOfTheMatch))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_winner_event_id")
                            .from(EventWinner::Table, EventWinner::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventWinner::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum EventWinner {
    Table,
    Id,
    EventId,
    Position,
    Branch,
    Points,
    PlayerOfTheMatch,
}
