use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{AckDto, ErrorDto},
        leaderboard::{
            BranchStandingDto, ManualOverrideDto, ManualOverrideEntryDto, PointsSystemDto,
        },
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            token::BearerToken,
        },
        model::leaderboard::UpsertOverrideParam,
        service::leaderboard::{points_system::points_system, LeaderboardService},
        state::AppState,
    },
};

/// Tag for grouping leaderboard endpoints in OpenAPI documentation
pub static LEADERBOARD_TAG: &str = "leaderboard";

/// Get the current leaderboard.
///
/// Recomputed on every request from concluded events and manual overrides.
///
/// # Returns
/// - `200 OK` - Standings, best first; every roster branch is present
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/leaderboard",
    tag = LEADERBOARD_TAG,
    responses(
        (status = 200, description = "Ordered standings", body = Vec<BranchStandingDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_leaderboard(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let standings = LeaderboardService::new(&state.db).standings().await?;
    let standings_dto: Vec<BranchStandingDto> =
        standings.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(standings_dto)))
}

/// Reset the leaderboard by removing winners from every event.
///
/// Manual overrides and event statuses are kept. This cannot be undone.
///
/// # Access Control
/// - `Admin` - Only admins can reset the leaderboard
#[utoipa::path(
    post,
    path = "/api/leaderboard/clear",
    tag = LEADERBOARD_TAG,
    responses(
        (status = 200, description = "Leaderboard cleared", body = AckDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn clear_leaderboard(
    State(state): State<AppState>,
    bearer: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[Permission::Admin])
        .await?;

    let removed = LeaderboardService::new(&state.db).clear().await?;

    Ok((
        StatusCode::OK,
        Json(AckDto {
            message: format!("Leaderboard cleared ({} winner entries removed)", removed),
        }),
    ))
}

/// Set a manual override for a branch.
///
/// Replaces the branch's computed points and medal counts on the leaderboard.
///
/// # Access Control
/// - `Admin` - Only admins can set overrides
///
/// # Returns
/// - `200 OK` - Override stored
/// - `400 Bad Request` - Empty branch or negative values
#[utoipa::path(
    patch,
    path = "/api/leaderboard/manual",
    tag = LEADERBOARD_TAG,
    request_body = ManualOverrideDto,
    responses(
        (status = 200, description = "Override stored", body = AckDto),
        (status = 400, description = "Invalid override", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn upsert_manual_override(
    State(state): State<AppState>,
    bearer: BearerToken,
    Json(payload): Json<ManualOverrideDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[Permission::Admin])
        .await?;

    let param = UpsertOverrideParam::try_from_dto(payload)?;
    let stored = LeaderboardService::new(&state.db)
        .upsert_override(param)
        .await?;

    Ok((
        StatusCode::OK,
        Json(AckDto {
            message: format!("Manual override saved for {}", stored.branch),
        }),
    ))
}

/// List manual overrides.
///
/// # Access Control
/// - `Admin` - Only admins can view overrides
#[utoipa::path(
    get,
    path = "/api/leaderboard/manual",
    tag = LEADERBOARD_TAG,
    responses(
        (status = 200, description = "Current overrides", body = Vec<ManualOverrideEntryDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn list_manual_overrides(
    State(state): State<AppState>,
    bearer: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[Permission::Admin])
        .await?;

    let overrides = LeaderboardService::new(&state.db).list_overrides().await?;
    let overrides_dto: Vec<ManualOverrideEntryDto> =
        overrides.into_iter().map(|o| o.into_dto()).collect();

    Ok((StatusCode::OK, Json(overrides_dto)))
}

/// Remove the manual override of a branch.
///
/// # Access Control
/// - `Admin` - Only admins can remove overrides
///
/// # Returns
/// - `204 No Content` - Override removed
/// - `404 Not Found` - Branch had no override
#[utoipa::path(
    delete,
    path = "/api/leaderboard/manual/{branch}",
    tag = LEADERBOARD_TAG,
    params(("branch" = String, Path, description = "Branch name")),
    responses(
        (status = 204, description = "Override removed"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "No override for branch", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_manual_override(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(branch): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[Permission::Admin])
        .await?;

    LeaderboardService::new(&state.db)
        .delete_override(&branch)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the static points table per category and sport.
#[utoipa::path(
    get,
    path = "/api/leaderboard/points-system",
    tag = LEADERBOARD_TAG,
    responses(
        (
            status = 200,
            description = "Points per sport, highest first-place value first",
            body = PointsSystemDto
        )
    ),
)]
pub async fn get_points_system() -> impl IntoResponse {
    (StatusCode::OK, Json(points_system()))
}
