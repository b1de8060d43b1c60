//! Leaderboard aggregation.
//!
//! A pure fold over the winners of concluded events. Roster branches always appear,
//! manual overrides replace computed values, and the result is sorted with
//! deterministic tie-breaks. Nothing here can fail.

use std::{cmp::Ordering, collections::HashMap};

use crate::server::model::{
    event::{Event, EventStatus, WinnerPosition},
    leaderboard::{BranchStanding, ManualOverride},
};

/// Branches that always appear on the leaderboard, in display order.
pub const BRANCH_ROSTER: [&str; 7] = ["CSE", "ECE", "CE", "ME", "EE", "MME", "PIE+ECM"];

/// Insertion-ordered map from branch to its running standing.
struct Accumulator {
    standings: Vec<BranchStanding>,
    index: HashMap<String, usize>,
}

impl Accumulator {
    fn with_roster(roster: &[&str]) -> Self {
        let mut acc = Self {
            standings: Vec::with_capacity(roster.len()),
            index: HashMap::with_capacity(roster.len()),
        };
        for branch in roster {
            acc.entry(branch);
        }
        acc
    }

    fn entry(&mut self, branch: &str) -> &mut BranchStanding {
        let idx = match self.index.get(branch) {
            Some(idx) => *idx,
            None => {
                self.standings.push(BranchStanding::empty(branch));
                self.index.insert(branch.to_string(), self.standings.len() - 1);
                self.standings.len() - 1
            }
        };
        &mut self.standings[idx]
    }
}

/// Computes the ranked standings.
///
/// # Arguments
/// - `events` - Events to scan; anything not Concluded is ignored
/// - `roster` - Branches that appear even without results, in tie order
/// - `overrides` - Manual corrections replacing the computed values of their branch
///
/// # Returns
/// - `Vec<BranchStanding>` - One entry per branch, sorted descending by points then
///   first, second and third place counts. Ties keep roster order, then order of
///   first appearance.
pub fn compute_standings(
    events: &[Event],
    roster: &[&str],
    overrides: &[ManualOverride],
) -> Vec<BranchStanding> {
    let mut acc = Accumulator::with_roster(roster);

    for winner in events
        .iter()
        .filter(|e| e.status == EventStatus::Concluded)
        .flat_map(|e| e.winners.iter())
    {
        let branch = winner.branch.trim();
        if branch.is_empty() {
            continue;
        }

        let standing = acc.entry(branch);
        if let Some(points) = winner.points.filter(|p| p.is_finite()) {
            standing.points += points;
        }
        match winner.position {
            WinnerPosition::First | WinnerPosition::Team => standing.first_count += 1,
            WinnerPosition::Second => standing.second_count += 1,
            WinnerPosition::Third => standing.third_count += 1,
        }
    }

    for correction in overrides {
        let standing = acc.entry(&correction.branch);
        standing.points = correction.points;
        standing.first_count = correction.first_count;
        standing.second_count = correction.second_count;
        standing.third_count = correction.third_count;
    }

    let mut standings = acc.standings;
    standings.sort_by(rank);
    standings
}

/// Descending order on (points, first, second, third). `0.0` and `-0.0` tie on points.
fn rank(a: &BranchStanding, b: &BranchStanding) -> Ordering {
    b.points
        .partial_cmp(&a.points)
        .unwrap_or(Ordering::Equal)
        .then(b.first_count.cmp(&a.first_count))
        .then(b.second_count.cmp(&a.second_count))
        .then(b.third_count.cmp(&a.third_count))
}
