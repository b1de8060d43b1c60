//! Leaderboard domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::leaderboard::{BranchStandingDto, ManualOverrideDto, ManualOverrideEntryDto},
    server::{
        error::validation::ValidationError,
        util::validate::{require_count, require_points, require_text},
    },
};

/// Aggregated points and medal counts for one branch.
#[derive(Debug, Clone, PartialEq)]
pub struct BranchStanding {
    pub branch: String,
    pub points: f64,
    pub first_count: u32,
    pub second_count: u32,
    pub third_count: u32,
}

impl BranchStanding {
    /// Zeroed standing for `branch`.
    pub fn empty(branch: impl Into<String>) -> Self {
        Self {
            branch: branch.into(),
            points: 0.0,
            first_count: 0,
            second_count: 0,
            third_count: 0,
        }
    }

    pub fn into_dto(self) -> BranchStandingDto {
        BranchStandingDto {
            branch: self.branch,
            points: self.points,
            first_count: self.first_count,
            second_count: self.second_count,
            third_count: self.third_count,
        }
    }
}

/// Stored manual correction; replaces the computed values of its branch.
#[derive(Debug, Clone, PartialEq)]
pub struct ManualOverride {
    pub branch: String,
    pub points: f64,
    pub first_count: u32,
    pub second_count: u32,
    pub third_count: u32,
    pub updated_at: DateTime<Utc>,
}

impl ManualOverride {
    /// Converts an override row to the domain model.
    ///
    /// Counts are validated as non-negative on write; a negative stored value reads as zero.
    pub fn from_entity(entity: entity::leaderboard_override::Model) -> Self {
        Self {
            branch: entity.branch,
            points: entity.points,
            first_count: u32::try_from(entity.first_count).unwrap_or(0),
            second_count: u32::try_from(entity.second_count).unwrap_or(0),
            third_count: u32::try_from(entity.third_count).unwrap_or(0),
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ManualOverrideEntryDto {
        ManualOverrideEntryDto {
            branch: self.branch,
            points: self.points,
            first_count: self.first_count,
            second_count: self.second_count,
            third_count: self.third_count,
            updated_at: self.updated_at,
        }
    }
}

/// Validated override values ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct UpsertOverrideParam {
    pub branch: String,
    pub points: f64,
    pub first_count: i32,
    pub second_count: i32,
    pub third_count: i32,
}

impl UpsertOverrideParam {
    /// Validates and converts an override request.
    ///
    /// # Returns
    /// - `Ok(UpsertOverrideParam)` - Branch is non-empty, points finite and non-negative,
    ///   counts non-negative
    /// - `Err(ValidationError)` - First offending field
    pub fn try_from_dto(dto: ManualOverrideDto) -> Result<Self, ValidationError> {
        let branch = dto.branch.trim().to_string();
        require_text("branch", &branch)?;
        let points = require_points("points", dto.points)?;

        Ok(Self {
            branch,
            points,
            first_count: require_count("firstCount", dto.first_count)?,
            second_count: require_count("secondCount", dto.second_count)?,
            third_count: require_count("thirdCount", dto.third_count)?,
        })
    }
}
