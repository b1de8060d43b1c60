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
                    .table(EventBranchTag::Table)
                    .if_not_exists()
                    .col(pk_auto(EventBranchTag::Id))
                    .col(integer(EventBranchTag::EventId))
                    .col(string(EventBranchTag::Branch))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_event_branch_tag_event_id")
                            .from(EventBranchTag::Table, EventBranchTag::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_event_branch_tag_branch")
                    .table(EventBranchTag::Table)
                    .col(EventBranchTag::Branch)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(EventBranchTag::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum EventBranchTag {
    Table,
    Id,
    EventId,
    Branch,
}
