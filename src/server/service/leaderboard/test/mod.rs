use chrono::Utc;
use entity::sea_orm_active_enums::EventStatus as DbEventStatus;
use test_utils::fixture;

use crate::{
    model::leaderboard::ManualOverrideDto,
    server::{
        error::AppError,
        model::{
            event::{Event, Winner, WinnerPosition},
            leaderboard::{ManualOverride, UpsertOverrideParam},
        },
        service::leaderboard::aggregate::{compute_standings, BRANCH_ROSTER},
    },
};

mod compute_standings;

/// Builds an in-memory event with the given status and winners.
fn event_with(
    id: i32,
    status: DbEventStatus,
    winners: &[(WinnerPosition, &str, Option<f64>)],
) -> Event {
    let mut event = Event::from_entity(
        fixture::event::entity_builder().id(id).status(status).build(),
        Vec::new(),
        Vec::new(),
    );
    event.winners = winners
        .iter()
        .map(|(position, branch, points)| Winner {
            position: *position,
            branch: branch.to_string(),
            points: *points,
            player_of_the_match: None,
        })
        .collect();
    event
}

fn concluded(id: i32, winners: &[(WinnerPosition, &str, Option<f64>)]) -> Event {
    event_with(id, DbEventStatus::Concluded, winners)
}

fn manual(branch: &str, points: f64, medals: (u32, u32, u32)) -> ManualOverride {
    ManualOverride {
        branch: branch.to_string(),
        points,
        first_count: medals.0,
        second_count: medals.1,
        third_count: medals.2,
        updated_at: Utc::now(),
    }
}
