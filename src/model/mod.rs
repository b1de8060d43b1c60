//! Data transfer objects shared by the HTTP API.
//!
//! Every type here is part of the JSON wire format. Field names are serialized in
//! camelCase and each DTO derives `ToSchema` so it appears in the OpenAPI document.

pub mod announcement;
pub mod api;
pub mod auth;
pub mod comment;
pub mod event;
pub mod leaderboard;
pub mod photo;
pub mod user;
