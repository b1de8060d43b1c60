//! SeaORM entities for the festival database.
//!
//! One module per table plus the string-backed enums shared between them.

pub mod prelude;

pub mod announcement;
pub mod comment;
pub mod event;
pub mod event_branch_tag;
pub mod event_winner;
pub mod leaderboard_override;
pub mod photo;
pub mod photo_tag;
pub mod sea_orm_active_enums;
pub mod user;
