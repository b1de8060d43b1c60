use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{EventCategory, EventStatus, EventType};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub day: Date,
    pub time: String,
    pub venue: String,
    pub game_type: String,
    pub category: EventCategory,
    pub event_type: EventType,
    pub points_first: f64,
    pub points_second: f64,
    pub points_third: f64,
    #[sea_orm(column_type = "Text", nullable)]
    pub result: Option<String>,
    pub cover_image: Option<String>,
    pub status: EventStatus,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::event_branch_tag::Entity")]
    EventBranchTag,
    #[sea_orm(has_many = "super::event_winner::Entity")]
    EventWinner,
    #[sea_orm(has_many = "super::photo::Entity")]
    Photo,
}

impl Related<super::event_branch_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventBranchTag.def()
    }
}

impl Related<super::event_winner::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EventWinner.def()
    }
}

impl Related<super::photo::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Photo.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
