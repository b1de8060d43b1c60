//! HTTP request handlers.
//!
//! Controllers check access with `AuthGuard`, convert DTOs into parameter types, call
//! the service layer and convert domain models back into DTOs.

pub mod announcement;
pub mod auth;
pub mod comment;
pub mod event;
pub mod health;
pub mod leaderboard;
pub mod photo;
