//! Event fixtures for creating in-memory test data.

use chrono::{NaiveDate, TimeZone, Utc};
use entity::{
    event,
    sea_orm_active_enums::{EventCategory, EventStatus, EventType},
};

/// Default test event name.
pub const DEFAULT_NAME: &str = "Cricket Boys Final";

/// Default test event game type.
pub const DEFAULT_GAME_TYPE: &str = "Cricket";

/// Default test event venue.
pub const DEFAULT_VENUE: &str = "Main Ground";

/// Default points awarded for first, second and third place.
pub const DEFAULT_POINTS: (f64, f64, f64) = (5.0, 3.0, 1.0);

/// Default event day.
pub fn default_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 14).unwrap_or_default()
}

/// Creates an event entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Cricket Boys Final"`
/// - day: `2026-03-14`, time `"10:00 AM"`, venue `"Main Ground"`
/// - category: `Boys`, event type: `Team`
/// - points: `5 / 3 / 1`
/// - status: `Upcoming`
pub fn entity() -> event::Model {
    entity_builder().build()
}

/// Creates an event entity builder for customization.
pub fn entity_builder() -> EventEntityBuilder {
    EventEntityBuilder::default()
}

/// Builder for customized event entity models.
pub struct EventEntityBuilder {
    model: event::Model,
}

impl Default for EventEntityBuilder {
    fn default() -> Self {
        let created_at = Utc
            .with_ymd_and_hms(2026, 3, 1, 12, 0, 0)
            .single()
            .unwrap_or_else(Utc::now);

        Self {
            model: event::Model {
                id: 1,
                name: DEFAULT_NAME.to_string(),
                description: "Final match of the festival".to_string(),
                day: default_day(),
                time: "10:00 AM".to_string(),
                venue: DEFAULT_VENUE.to_string(),
                game_type: DEFAULT_GAME_TYPE.to_string(),
                category: EventCategory::Boys,
                event_type: EventType::Team,
                points_first: DEFAULT_POINTS.0,
                points_second: DEFAULT_POINTS.1,
                points_third: DEFAULT_POINTS.2,
                result: None,
                cover_image: None,
                status: EventStatus::Upcoming,
                created_at,
                updated_at: created_at,
            },
        }
    }
}

impl EventEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.model.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.model.name = name.into();
        self
    }

    pub fn day(mut self, day: NaiveDate) -> Self {
        self.model.day = day;
        self
    }

    pub fn game_type(mut self, game_type: impl Into<String>) -> Self {
        self.model.game_type = game_type.into();
        self
    }

    pub fn category(mut self, category: EventCategory) -> Self {
        self.model.category = category;
        self
    }

    pub fn event_type(mut self, event_type: EventType) -> Self {
        self.model.event_type = event_type;
        self
    }

    pub fn points(mut self, first: f64, second: f64, third: f64) -> Self {
        self.model.points_first = first;
        self.model.points_second = second;
        self.model.points_third = third;
        self
    }

    pub fn status(mut self, status: EventStatus) -> Self {
        self.model.status = status;
        self
    }

    pub fn result(mut self, result: Option<String>) -> Self {
        self.model.result = result;
        self
    }

    pub fn build(self) -> event::Model {
        self.model
    }
}
