use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        announcement::{AnnouncementDto, AnnouncementFieldsDto},
        api::ErrorDto,
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            token::BearerToken,
        },
        model::announcement::AnnouncementParam,
        service::announcement::AnnouncementService,
        state::AppState,
    },
};

/// Tag for grouping announcement endpoints in OpenAPI documentation
pub static ANNOUNCEMENT_TAG: &str = "announcement";

/// List announcements, newest first.
#[utoipa::path(
    get,
    path = "/api/announcements",
    tag = ANNOUNCEMENT_TAG,
    responses(
        (status = 200, description = "Announcements, newest first", body = Vec<AnnouncementDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_announcements(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let announcements = AnnouncementService::new(&state.db).list().await?;
    let announcements_dto: Vec<AnnouncementDto> =
        announcements.into_iter().map(|a| a.into_dto()).collect();

    Ok((StatusCode::OK, Json(announcements_dto)))
}

#[utoipa::path(
    get,
    path = "/api/announcements/{id}",
    tag = ANNOUNCEMENT_TAG,
    params(("id" = i32, Path, description = "Announcement ID")),
    responses(
        (status = 200, description = "The announcement", body = AnnouncementDto),
        (status = 404, description = "Announcement not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_announcement(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let announcement = AnnouncementService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(announcement.into_dto())))
}

/// Post an announcement.
///
/// # Access Control
/// - `Admin` - Only admins can post announcements
#[utoipa::path(
    post,
    path = "/api/announcements",
    tag = ANNOUNCEMENT_TAG,
    request_body = AnnouncementFieldsDto,
    responses(
        (status = 201, description = "Successfully posted announcement", body = AnnouncementDto),
        (status = 400, description = "Invalid announcement", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_announcement(
    State(state): State<AppState>,
    bearer: BearerToken,
    Json(payload): Json<AnnouncementFieldsDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[Permission::Admin])
        .await?;

    let announcement = AnnouncementService::new(&state.db)
        .create(AnnouncementParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(announcement.into_dto())))
}

/// Replace an announcement's title, body and image.
///
/// # Access Control
/// - `Admin` - Only admins can edit announcements
#[utoipa::path(
    put,
    path = "/api/announcements/{id}",
    tag = ANNOUNCEMENT_TAG,
    params(("id" = i32, Path, description = "Announcement ID")),
    request_body = AnnouncementFieldsDto,
    responses(
        (status = 200, description = "Successfully updated announcement", body = AnnouncementDto),
        (status = 400, description = "Invalid announcement", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Announcement not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_announcement(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(id): Path<i32>,
    Json(payload): Json<AnnouncementFieldsDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[Permission::Admin])
        .await?;

    let announcement = AnnouncementService::new(&state.db)
        .update(id, AnnouncementParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(announcement.into_dto())))
}

/// Delete an announcement and its comments.
///
/// # Access Control
/// - `Admin` - Only admins can delete announcements
#[utoipa::path(
    delete,
    path = "/api/announcements/{id}",
    tag = ANNOUNCEMENT_TAG,
    params(("id" = i32, Path, description = "Announcement ID")),
    responses(
        (status = 204, description = "Successfully deleted announcement"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Announcement not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_announcement(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[Permission::Admin])
        .await?;

    AnnouncementService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
