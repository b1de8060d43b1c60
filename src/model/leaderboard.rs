use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One row of the leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BranchStandingDto {
    pub branch: String,
    pub points: f64,
    pub first_count: u32,
    pub second_count: u32,
    pub third_count: u32,
}

/// Manual correction request for one branch.
///
/// Counts are signed on the wire so that negative values reach validation
/// and produce a field error rather than a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ManualOverrideDto {
    pub branch: String,
    pub points: f64,
    pub first_count: i64,
    pub second_count: i64,
    pub third_count: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ManualOverrideEntryDto {
    pub branch: String,
    pub points: f64,
    pub first_count: u32,
    pub second_count: u32,
    pub third_count: u32,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SportPointsDto {
    pub sport: String,
    pub first: f64,
    pub second: f64,
    pub third: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PointsSystemDto {
    pub boys: Vec<SportPointsDto>,
    pub girls: Vec<SportPointsDto>,
}
