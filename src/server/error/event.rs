use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::model::event::EventStatus};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EventError {
    /// Requested status change is not allowed from the event's current status.
    ///
    /// Events only move forward (Upcoming → Active → Concluded), conclusion only
    /// happens through winner assignment, and a concluded event is final.
    /// Results in 409 Conflict.
    #[error("Cannot move event from {from:?} to {to:?}")]
    InvalidTransition {
        /// Status the event currently has
        from: EventStatus,
        /// Status that was requested
        to: EventStatus,
    },
}

impl IntoResponse for EventError {
    fn into_response(self) -> Response {
        (StatusCode::CONFLICT, Json(ErrorDto::new(self.to_string()))).into_response()
    }
}
