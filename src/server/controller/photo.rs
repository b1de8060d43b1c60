use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        photo::{PhotoDto, PhotoFieldsDto, PhotoQueryDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            token::BearerToken,
        },
        model::photo::PhotoParam,
        service::photo::PhotoService,
        state::AppState,
    },
};

/// Tag for grouping gallery endpoints in OpenAPI documentation
pub static PHOTO_TAG: &str = "photo";

/// List gallery photos, newest first.
#[utoipa::path(
    get,
    path = "/api/photos",
    tag = PHOTO_TAG,
    params(PhotoQueryDto),
    responses(
        (status = 200, description = "Photos, newest first", body = Vec<PhotoDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_photos(
    State(state): State<AppState>,
    Query(query): Query<PhotoQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let photos = PhotoService::new(&state.db).list(query.event_id).await?;
    let photos_dto: Vec<PhotoDto> = photos.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(photos_dto)))
}

#[utoipa::path(
    get,
    path = "/api/photos/{id}",
    tag = PHOTO_TAG,
    params(("id" = i32, Path, description = "Photo ID")),
    responses(
        (status = 200, description = "The photo", body = PhotoDto),
        (status = 404, description = "Photo not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_photo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let photo = PhotoService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(photo.into_dto())))
}

/// Add a photo to an event's gallery.
///
/// The image itself is hosted elsewhere; only its public URL is stored.
///
/// # Access Control
/// - `Admin` - Only admins can add photos
#[utoipa::path(
    post,
    path = "/api/photos",
    tag = PHOTO_TAG,
    request_body = PhotoFieldsDto,
    responses(
        (status = 201, description = "Successfully added photo", body = PhotoDto),
        (status = 400, description = "Invalid photo", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_photo(
    State(state): State<AppState>,
    bearer: BearerToken,
    Json(payload): Json<PhotoFieldsDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[Permission::Admin])
        .await?;

    let photo = PhotoService::new(&state.db)
        .create(PhotoParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(photo.into_dto())))
}

/// Replace a photo's fields and tags.
///
/// # Access Control
/// - `Admin` - Only admins can edit photos
#[utoipa::path(
    put,
    path = "/api/photos/{id}",
    tag = PHOTO_TAG,
    params(("id" = i32, Path, description = "Photo ID")),
    request_body = PhotoFieldsDto,
    responses(
        (status = 200, description = "Successfully updated photo", body = PhotoDto),
        (status = 400, description = "Invalid photo", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Photo or event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_photo(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(id): Path<i32>,
    Json(payload): Json<PhotoFieldsDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[Permission::Admin])
        .await?;

    let photo = PhotoService::new(&state.db)
        .update(id, PhotoParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(photo.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/photos/{id}",
    tag = PHOTO_TAG,
    params(("id" = i32, Path, description = "Photo ID")),
    responses(
        (status = 204, description = "Successfully deleted photo"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Photo not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_photo(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[Permission::Admin])
        .await?;

    PhotoService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
