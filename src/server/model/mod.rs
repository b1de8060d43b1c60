//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and
//! transformed to DTOs at the controller boundary. Parameter types carry validated
//! request data into the service layer.

pub mod announcement;
pub mod comment;
pub mod event;
pub mod leaderboard;
pub mod photo;
pub mod user;
