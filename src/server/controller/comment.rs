use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        comment::{CommentDto, CommentQueryDto, CreateCommentDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            token::BearerToken,
        },
        service::comment::CommentService,
        state::AppState,
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

/// List comments, newest first.
#[utoipa::path(
    get,
    path = "/api/comments",
    tag = COMMENT_TAG,
    params(CommentQueryDto),
    responses(
        (status = 200, description = "Comments, newest first", body = Vec<CommentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_comments(
    State(state): State<AppState>,
    Query(query): Query<CommentQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let comments = CommentService::new(&state.db)
        .list(query.announcement_id)
        .await?;
    let comments_dto: Vec<CommentDto> = comments.into_iter().map(|c| c.into_dto()).collect();

    Ok((StatusCode::OK, Json(comments_dto)))
}

/// Comment on an announcement.
///
/// # Access Control
/// - `PublicUser` - Only logged-in public users can comment
///
/// # Returns
/// - `201 Created` - The created comment
/// - `400 Bad Request` - Empty name or content
/// - `404 Not Found` - Announcement does not exist
#[utoipa::path(
    post,
    path = "/api/comments",
    tag = COMMENT_TAG,
    request_body = CreateCommentDto,
    responses(
        (status = 201, description = "Successfully posted comment", body = CommentDto),
        (status = 400, description = "Invalid comment", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not a public user", body = ErrorDto),
        (status = 404, description = "Announcement not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_comment(
    State(state): State<AppState>,
    bearer: BearerToken,
    Json(payload): Json<CreateCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[Permission::PublicUser])
        .await?;

    let comment = CommentService::new(&state.db)
        .create(&user, payload.announcement_id, payload.name, payload.content)
        .await?;

    Ok((StatusCode::CREATED, Json(comment.into_dto())))
}

/// Delete a comment.
///
/// # Access Control
/// - `Admin` - Only admins can moderate comments
#[utoipa::path(
    delete,
    path = "/api/comments/{id}",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Comment ID")),
    responses(
        (status = 204, description = "Successfully deleted comment"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_comment(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[Permission::Admin])
        .await?;

    CommentService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
