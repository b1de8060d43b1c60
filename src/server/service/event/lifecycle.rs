//! Event status transitions.
//!
//! Transitions are pure: they take an event value and return the transformed value or
//! an error, leaving persistence to the caller. Status only moves forward
//! (Upcoming → Active → Concluded) and conclusion requires at least one winner.

use chrono::Utc;

use crate::server::{
    error::{event::EventError, validation::ValidationError, AppError},
    model::event::{ConcludeEventParam, Event, EventStatus, Winner},
    util::validate::require_points,
};

/// Applies a status change requested through the status endpoint.
///
/// Only Upcoming → Active is accepted. Moving to Concluded must go through
/// `conclude_with_winners` so that a concluded event always has winners.
///
/// # Arguments
/// - `event` - Current event value
/// - `requested` - Desired status
///
/// # Returns
/// - `Ok(Event)` - Event with status Active and a fresh `updated_at`
/// - `Err(EventError::InvalidTransition)` - Any other transition
pub fn set_status(event: Event, requested: EventStatus) -> Result<Event, EventError> {
    match (event.status, requested) {
        (EventStatus::Upcoming, EventStatus::Active) => set_active(event),
        (from, to) => Err(EventError::InvalidTransition { from, to }),
    }
}

/// Moves an Upcoming event to Active.
pub fn set_active(mut event: Event) -> Result<Event, EventError> {
    if event.status != EventStatus::Upcoming {
        return Err(EventError::InvalidTransition {
            from: event.status,
            to: EventStatus::Active,
        });
    }

    event.status = EventStatus::Active;
    event.updated_at = Utc::now();
    Ok(event)
}

/// Concludes an event with the given winners.
///
/// Entries whose branch is missing or blank are dropped first; the remaining branches
/// are trimmed. At least one entry must survive and any points given must be
/// non-negative and finite.
///
/// # Arguments
/// - `event` - Current event value; must not already be Concluded
/// - `param` - Candidate winners and optional result text
///
/// # Returns
/// - `Ok(Event)` - Event with status Concluded, the filtered winners and the result
/// - `Err(AppError::EventErr)` - Event is already Concluded
/// - `Err(AppError::ValidationErr)` - No usable winners, or invalid points
pub fn conclude_with_winners(
    mut event: Event,
    param: ConcludeEventParam,
) -> Result<Event, AppError> {
    if event.status == EventStatus::Concluded {
        return Err(EventError::InvalidTransition {
            from: EventStatus::Concluded,
            to: EventStatus::Concluded,
        }
        .into());
    }

    let mut winners: Vec<Winner> = param
        .winners
        .into_iter()
        .filter_map(|input| {
            let branch = input.branch?.trim().to_string();
            (!branch.is_empty()).then(|| Winner {
                position: input.position,
                branch,
                points: input.points,
                player_of_the_match: input
                    .player_of_the_match
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty()),
            })
        })
        .collect();

    if winners.is_empty() {
        return Err(ValidationError::new(
            "winners",
            "At least one winner with a branch is required",
        )
        .into());
    }

    for winner in &mut winners {
        if let Some(points) = winner.points {
            winner.points = Some(require_points("winners.points", points)?);
        }
    }

    event.status = EventStatus::Concluded;
    event.winners = winners;
    if let Some(result) = param.result.map(|r| r.trim().to_string()).filter(|r| !r.is_empty()) {
        event.result = Some(result);
    }
    event.updated_at = Utc::now();

    Ok(event)
}
