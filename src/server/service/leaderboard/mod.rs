//! Leaderboard reads, manual overrides and reset.

pub mod aggregate;
pub mod points_system;

#[cfg(test)]
mod test;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{event::EventRepository, leaderboard_override::LeaderboardOverrideRepository},
    error::AppError,
    model::{
        event::EventFilter,
        leaderboard::{BranchStanding, ManualOverride, UpsertOverrideParam},
    },
    service::leaderboard::aggregate::{compute_standings, BRANCH_ROSTER},
};

pub struct LeaderboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LeaderboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Computes the current standings from concluded events and overrides.
    pub async fn standings(&self) -> Result<Vec<BranchStanding>, AppError> {
        let events = EventRepository::new(self.db)
            .get_all(&EventFilter::concluded())
            .await?;
        let overrides = LeaderboardOverrideRepository::new(self.db).get_all().await?;

        Ok(compute_standings(&events, &BRANCH_ROSTER, &overrides))
    }

    /// Removes all winners from all events. Overrides and statuses stay as they are.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of winner entries removed
    /// - `Err(AppError)` - Database error
    pub async fn clear(&self) -> Result<u64, AppError> {
        let removed = EventRepository::new(self.db).clear_winners().await?;

        tracing::info!("Leaderboard cleared, removed {} winner entries", removed);

        Ok(removed)
    }

    /// Inserts or replaces the manual override of a branch.
    pub async fn upsert_override(
        &self,
        param: UpsertOverrideParam,
    ) -> Result<ManualOverride, AppError> {
        let stored = LeaderboardOverrideRepository::new(self.db)
            .upsert(param)
            .await?;

        tracing::info!(
            "Manual override for {} set to {} points ({}/{}/{})",
            stored.branch,
            stored.points,
            stored.first_count,
            stored.second_count,
            stored.third_count
        );

        Ok(stored)
    }

    pub async fn list_overrides(&self) -> Result<Vec<ManualOverride>, AppError> {
        Ok(LeaderboardOverrideRepository::new(self.db).get_all().await?)
    }

    /// Removes the manual override of a branch.
    ///
    /// # Returns
    /// - `Ok(())` - Override removed
    /// - `Err(AppError::NotFound)` - Branch had no override
    pub async fn delete_override(&self, branch: &str) -> Result<(), AppError> {
        if !LeaderboardOverrideRepository::new(self.db)
            .delete_by_branch(branch)
            .await?
        {
            return Err(AppError::NotFound(format!(
                "No manual override for branch {}",
                branch
            )));
        }

        tracing::info!("Manual override for {} removed", branch);

        Ok(())
    }
}
