//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.

pub mod announcement;
pub mod comment;
pub mod event;
pub mod leaderboard_override;
pub mod photo;
pub mod user;

#[cfg(test)]
mod test;
