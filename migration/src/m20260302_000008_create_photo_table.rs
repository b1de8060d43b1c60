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
                    .table(Photo::Table)
                    .if_not_exists()
                    .col(pk_auto(Photo::Id))
                    .col(integer(Photo::EventId))
                    .col(string(Photo::Url))
                    .col(string_null(Photo::Caption))
                    .col(boolean(Photo::IsCover).default(false))
                    .col(
                        timestamp_with_time_zone(Photo::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_photo_event_id")
                            .from(Photo::Table, Photo::EventId)
                            .to(Event::Table, Event::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PhotoTag::Table)
                    .if_not_exists()
                    .col(pk_auto(PhotoTag::Id))
                    .col(integer(PhotoTag::PhotoId))
                    .col(string(PhotoTag::Tag))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_photo_tag_photo_id")
                            .from(PhotoTag::Table, PhotoTag::PhotoId)
                            .to(Photo::Table, Photo::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_photo_event_id")
                    .table(Photo::Table)
                    .col(Photo::EventId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PhotoTag::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Photo::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Photo {
    Table,
    Id,
    EventId,
    Url,
    Caption,
    IsCover,
    CreatedAt,
}

#[derive(DeriveIden)]
enum PhotoTag {
    Table,
    Id,
    PhotoId,
    Tag,
}
