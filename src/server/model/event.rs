//! Event domain models and parameters.
//!
//! An `Event` is the aggregate of an event row, its branch tags and its winners.
//! Status and winner changes go through the lifecycle functions in
//! `service::event::lifecycle`; the parameter types here only carry descriptive fields.

use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums as db;

use crate::{
    model::event::{
        ConcludeEventDto, EventCategoryDto, EventDto, EventFieldsDto, EventQueryDto,
        EventStatusDto, EventTypeDto, PointsDto, WinnerDto, WinnerInputDto, WinnerPositionDto,
    },
    server::{
        error::validation::ValidationError,
        util::validate::{require_points, require_text},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Upcoming,
    Active,
    Concluded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventCategory {
    Boys,
    Girls,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    Individual,
    Team,
}

/// Podium position of a winner entry. `Team` counts as a first-place medal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinnerPosition {
    First,
    Second,
    Third,
    Team,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Points {
    pub first: f64,
    pub second: f64,
    pub third: f64,
}

/// Winner entry recorded when an event concludes.
#[derive(Debug, Clone, PartialEq)]
pub struct Winner {
    pub position: WinnerPosition,
    pub branch: String,
    /// Points credited to the branch; `None` contributes nothing but still counts the medal.
    pub points: Option<f64>,
    pub player_of_the_match: Option<String>,
}

/// Event with its branch tags and winners.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub day: NaiveDate,
    pub time: String,
    pub venue: String,
    /// Branches taking part, in the order they were given.
    pub branch_tags: Vec<String>,
    pub game_type: String,
    pub category: EventCategory,
    pub event_type: EventType,
    pub points: Points,
    pub result: Option<String>,
    pub cover_image: Option<String>,
    pub status: EventStatus,
    /// Empty until the event is concluded.
    pub winners: Vec<Winner>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Converts an event row and its child rows into the domain model.
    ///
    /// Tags and winners are kept in primary key order, which is insertion order.
    ///
    /// # Arguments
    /// - `entity` - The event row
    /// - `tags` - Branch tag rows belonging to the event
    /// - `winners` - Winner rows belonging to the event
    ///
    /// # Returns
    /// - `Event` - The assembled domain model
    pub fn from_entity(
        entity: entity::event::Model,
        mut tags: Vec<entity::event_branch_tag::Model>,
        mut winners: Vec<entity::event_winner::Model>,
    ) -> Self {
        tags.sort_by_key(|t| t.id);
        winners.sort_by_key(|w| w.id);

        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            day: entity.day,
            time: entity.time,
            venue: entity.venue,
            branch_tags: tags.into_iter().map(|t| t.branch).collect(),
            game_type: entity.game_type,
            category: entity.category.into(),
            event_type: entity.event_type.into(),
            points: Points {
                first: entity.points_first,
                second: entity.points_second,
                third: entity.points_third,
            },
            result: entity.result,
            cover_image: entity.cover_image,
            status: entity.status.into(),
            winners: winners
                .into_iter()
                .map(|w| Winner {
                    position: w.position.into(),
                    branch: w.branch,
                    points: w.points,
                    player_of_the_match: w.player_of_the_match,
                })
                .collect(),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the event domain model to a DTO for API responses.
    pub fn into_dto(self) -> EventDto {
        EventDto {
            id: self.id,
            name: self.name,
            description: self.description,
            day: self.day,
            time: self.time,
            venue: self.venue,
            branch_tags: self.branch_tags,
            game_type: self.game_type,
            category: self.category.into(),
            event_type: self.event_type.into(),
            points: PointsDto {
                first: self.points.first,
                second: self.points.second,
                third: self.points.third,
            },
            result: self.result,
            cover_image: self.cover_image,
            status: self.status.into(),
            winners: self
                .winners
                .into_iter()
                .map(|w| WinnerDto {
                    position: w.position.into(),
                    branch: w.branch,
                    points: w.points,
                    player_of_the_match: w.player_of_the_match,
                })
                .collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Descriptive fields for creating or updating an event.
///
/// Status and winners are deliberately absent.
#[derive(Debug, Clone, PartialEq)]
pub struct EventFieldsParam {
    pub name: String,
    pub description: String,
    pub day: NaiveDate,
    pub time: String,
    pub venue: String,
    pub branch_tags: Vec<String>,
    pub game_type: String,
    pub category: EventCategory,
    pub event_type: EventType,
    pub points: Points,
    pub cover_image: Option<String>,
}

impl EventFieldsParam {
    /// Converts the request DTO, trimming text fields and branch tags.
    pub fn from_dto(dto: EventFieldsDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            description: dto.description,
            day: dto.day,
            time: dto.time.trim().to_string(),
            venue: dto.venue.trim().to_string(),
            branch_tags: dto
                .branch_tags
                .into_iter()
                .map(|t| t.trim().to_string())
                .collect(),
            game_type: dto.game_type.trim().to_string(),
            category: dto.category.into(),
            event_type: dto.event_type.into(),
            points: Points {
                first: dto.points.first,
                second: dto.points.second,
                third: dto.points.third,
            },
            cover_image: dto
                .cover_image
                .map(|url| url.trim().to_string())
                .filter(|url| !url.is_empty()),
        }
    }

    /// Validates required text, branch tags and point values.
    ///
    /// # Returns
    /// - `Ok(())` - All fields are acceptable
    /// - `Err(ValidationError)` - First offending field
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("name", &self.name)?;
        require_text("time", &self.time)?;
        require_text("venue", &self.venue)?;
        require_text("gameType", &self.game_type)?;

        if self.branch_tags.iter().any(|t| t.is_empty()) {
            return Err(ValidationError::new(
                "branchTags",
                "branchTags must not contain empty entries",
            ));
        }

        require_points("points.first", self.points.first)?;
        require_points("points.second", self.points.second)?;
        require_points("points.third", self.points.third)?;

        Ok(())
    }
}

/// Optional filters for listing events.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventFilter {
    pub status: Option<EventStatus>,
    /// Event's branch tags must contain this branch.
    pub branch: Option<String>,
    /// Exact game type.
    pub game: Option<String>,
}

impl EventFilter {
    pub fn from_dto(dto: EventQueryDto) -> Self {
        Self {
            status: dto.status.map(Into::into),
            branch: dto.branch.filter(|b| !b.trim().is_empty()),
            game: dto.game.filter(|g| !g.trim().is_empty()),
        }
    }

    /// Filter matching only concluded events.
    pub fn concluded() -> Self {
        Self {
            status: Some(EventStatus::Concluded),
            ..Default::default()
        }
    }
}

/// Candidate winner as submitted by an admin, before filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct WinnerInput {
    pub position: WinnerPosition,
    pub branch: Option<String>,
    pub points: Option<f64>,
    pub player_of_the_match: Option<String>,
}

impl WinnerInput {
    #[cfg(test)]
    pub fn new(position: WinnerPosition, branch: &str, points: Option<f64>) -> Self {
        Self {
            position,
            branch: Some(branch.to_string()),
            points,
            player_of_the_match: None,
        }
    }
}

/// Winner assignment request.
#[derive(Debug, Clone, PartialEq)]
pub struct ConcludeEventParam {
    pub winners: Vec<WinnerInput>,
    pub result: Option<String>,
}

impl ConcludeEventParam {
    pub fn from_dto(dto: ConcludeEventDto) -> Self {
        Self {
            winners: dto.winners.into_iter().map(WinnerInput::from).collect(),
            result: dto.result,
        }
    }
}

impl From<WinnerInputDto> for WinnerInput {
    fn from(dto: WinnerInputDto) -> Self {
        Self {
            position: dto.position.into(),
            branch: dto.branch,
            points: dto.points,
            player_of_the_match: dto.player_of_the_match,
        }
    }
}

impl From<db::EventStatus> for EventStatus {
    fn from(value: db::EventStatus) -> Self {
        match value {
            db::EventStatus::Upcoming => Self::Upcoming,
            db::EventStatus::Active => Self::Active,
            db::EventStatus::Concluded => Self::Concluded,
        }
    }
}

impl From<EventStatus> for db::EventStatus {
    fn from(value: EventStatus) -> Self {
        match value {
            EventStatus::Upcoming => Self::Upcoming,
            EventStatus::Active => Self::Active,
            EventStatus::Concluded => Self::Concluded,
        }
    }
}

impl From<EventStatusDto> for EventStatus {
    fn from(value: EventStatusDto) -> Self {
        match value {
            EventStatusDto::Upcoming => Self::Upcoming,
            EventStatusDto::Active => Self::Active,
            EventStatusDto::Concluded => Self::Concluded,
        }
    }
}

impl From<EventStatus> for EventStatusDto {
    fn from(value: EventStatus) -> Self {
        match value {
            EventStatus::Upcoming => Self::Upcoming,
            EventStatus::Active => Self::Active,
            EventStatus::Concluded => Self::Concluded,
        }
    }
}

impl From<db::EventCategory> for EventCategory {
    fn from(value: db::EventCategory) -> Self {
        match value {
            db::EventCategory::Boys => Self::Boys,
            db::EventCategory::Girls => Self::Girls,
        }
    }
}

impl From<EventCategory> for db::EventCategory {
    fn from(value: EventCategory) -> Self {
        match value {
            EventCategory::Boys => Self::Boys,
            EventCategory::Girls => Self::Girls,
        }
    }
}

impl From<EventCategoryDto> for EventCategory {
    fn from(value: EventCategoryDto) -> Self {
        match value {
            EventCategoryDto::Boys => Self::Boys,
            EventCategoryDto::Girls => Self::Girls,
        }
    }
}

impl From<EventCategory> for EventCategoryDto {
    fn from(value: EventCategory) -> Self {
        match value {
            EventCategory::Boys => Self::Boys,
            EventCategory::Girls => Self::Girls,
        }
    }
}

impl From<db::EventType> for EventType {
    fn from(value: db::EventType) -> Self {
        match value {
            db::EventType::Individual => Self::Individual,
            db::EventType::Team => Self::Team,
        }
    }
}

impl From<EventType> for db::EventType {
    fn from(value: EventType) -> Self {
        match value {
            EventType::Individual => Self::Individual,
            EventType::Team => Self::Team,
        }
    }
}

impl From<EventTypeDto> for EventType {
    fn from(value: EventTypeDto) -> Self {
        match value {
            EventTypeDto::Individual => Self::Individual,
            EventTypeDto::Team => Self::Team,
        }
    }
}

impl From<EventType> for EventTypeDto {
    fn from(value: EventType) -> Self {
        match value {
            EventType::Individual => Self::Individual,
            EventType::Team => Self::Team,
        }
    }
}

impl From<db::WinnerPosition> for WinnerPosition {
    fn from(value: db::WinnerPosition) -> Self {
        match value {
            db::WinnerPosition::First => Self::First,
            db::WinnerPosition::Second => Self::Second,
            db::WinnerPosition::Third => Self::Third,
            db::WinnerPosition::Team => Self::Team,
        }
    }
}

impl From<WinnerPosition> for db::WinnerPosition {
    fn from(value: WinnerPosition) -> Self {
        match value {
            WinnerPosition::First => Self::First,
            WinnerPosition::Second => Self::Second,
            WinnerPosition::Third => Self::Third,
            WinnerPosition::Team => Self::Team,
        }
    }
}

impl From<WinnerPositionDto> for WinnerPosition {
    fn from(value: WinnerPositionDto) -> Self {
        match value {
            WinnerPositionDto::First => Self::First,
            WinnerPositionDto::Second => Self::Second,
            WinnerPositionDto::Third => Self::Third,
            WinnerPositionDto::Team => Self::Team,
        }
    }
}

impl From<WinnerPosition> for WinnerPositionDto {
    fn from(value: WinnerPosition) -> Self {
        match value {
            WinnerPosition::First => Self::First,
            WinnerPosition::Second => Self::Second,
            WinnerPosition::Third => Self::Third,
            WinnerPosition::Team => Self::Team,
        }
    }
}
