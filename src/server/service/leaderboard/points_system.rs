//! Static points reference table shown to visitors.

use crate::model::leaderboard::{PointsSystemDto, SportPointsDto};

/// `(sport, first, second, third)` points, identical for both categories.
const SPORT_POINTS: [(&str, f64, f64, f64); 7] = [
    ("Cricket", 5.0, 3.0, 1.0),
    ("Football", 7.0, 4.0, 2.0),
    ("Basketball", 6.0, 3.0, 1.0),
    ("Volleyball", 5.0, 3.0, 1.0),
    ("Badminton", 4.0, 2.0, 1.0),
    ("TableTennis", 3.0, 2.0, 1.0),
    ("Athletics", 5.0, 3.0, 1.0),
];

/// Builds the points table with each category sorted by first-place value, highest first.
///
/// The sort is stable, so sports with equal first-place values keep table order.
pub fn points_system() -> PointsSystemDto {
    PointsSystemDto {
        boys: category_table(),
        girls: category_table(),
    }
}

fn category_table() -> Vec<SportPointsDto> {
    let mut sports: Vec<SportPointsDto> = SPORT_POINTS
        .iter()
        .map(|(sport, first, second, third)| SportPointsDto {
            sport: sport.to_string(),
            first: *first,
            second: *second,
            third: *third,
        })
        .collect();

    sports.sort_by(|a, b| b.first.total_cmp(&a.first));
    sports
}
