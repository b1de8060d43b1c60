use chrono::NaiveDate;
use entity::sea_orm_active_enums::{
    EventStatus as DbEventStatus, WinnerPosition as DbWinnerPosition,
};
use test_utils::{builder::TestBuilder, factory, fixture};

use crate::server::{
    error::{event::EventError, AppError},
    model::event::{
        ConcludeEventParam, Event, EventCategory, EventFieldsParam, EventStatus, EventType,
        Points, WinnerInput, WinnerPosition,
    },
    service::event::{lifecycle, EventService},
};

mod lifecycle_transitions;
mod service;

/// In-memory event with the given stored status.
fn event_in(status: DbEventStatus) -> Event {
    Event::from_entity(
        fixture::event::entity_builder().status(status).build(),
        Vec::new(),
        Vec::new(),
    )
}

fn conclude_param(winners: Vec<WinnerInput>) -> ConcludeEventParam {
    ConcludeEventParam {
        winners,
        result: None,
    }
}

fn fields(name: &str) -> EventFieldsParam {
    EventFieldsParam {
        name: name.to_string(),
        description: "Round robin".to_string(),
        day: NaiveDate::from_ymd_opt(2026, 3, 15).unwrap(),
        time: "4:00 PM".to_string(),
        venue: "Court 2".to_string(),
        branch_tags: vec!["ME".to_string(), "EE".to_string()],
        game_type: "Volleyball".to_string(),
        category: EventCategory::Girls,
        event_type: EventType::Team,
        points: Points {
            first: 10.0,
            second: 6.0,
            third: 3.0,
        },
        cover_image: None,
    }
}
