//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Validation, lifecycle rules and leaderboard aggregation
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod admin;
pub mod announcement;
pub mod auth;
pub mod comment;
pub mod event;
pub mod leaderboard;
pub mod photo;

#[cfg(test)]
mod test;
