use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum EventStatusDto {
    Upcoming,
    Active,
    Concluded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum EventCategoryDto {
    Boys,
    Girls,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum EventTypeDto {
    Individual,
    Team,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum WinnerPositionDto {
    First,
    Second,
    Third,
    Team,
}

/// Points awarded for each podium place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PointsDto {
    pub first: f64,
    pub second: f64,
    pub third: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WinnerDto {
    pub position: WinnerPositionDto,
    pub branch: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_of_the_match: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub day: NaiveDate,
    pub time: String,
    pub venue: String,
    pub branch_tags: Vec<String>,
    pub game_type: String,
    pub category: EventCategoryDto,
    pub event_type: EventTypeDto,
    pub points: PointsDto,
    pub result: Option<String>,
    pub cover_image: Option<String>,
    pub status: EventStatusDto,
    pub winners: Vec<WinnerDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Descriptive event fields accepted on create and update.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventFieldsDto {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub day: NaiveDate,
    pub time: String,
    pub venue: String,
    #[serde(default)]
    pub branch_tags: Vec<String>,
    pub game_type: String,
    pub category: EventCategoryDto,
    pub event_type: EventTypeDto,
    pub points: PointsDto,
    #[serde(default)]
    pub cover_image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateEventStatusDto {
    pub status: EventStatusDto,
}

/// Candidate winner entry; entries without a branch are discarded on conclusion.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WinnerInputDto {
    pub position: WinnerPositionDto,
    #[serde(default)]
    pub branch: Option<String>,
    #[serde(default)]
    pub points: Option<f64>,
    #[serde(default)]
    pub player_of_the_match: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConcludeEventDto {
    pub winners: Vec<WinnerInputDto>,
    #[serde(default)]
    pub result: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EventQueryDto {
    /// Only events with this status.
    pub status: Option<EventStatusDto>,
    /// Only events tagged with this branch.
    pub branch: Option<String>,
    /// Only events of this game type.
    pub game: Option<String>,
}
