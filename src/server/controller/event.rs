use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        event::{ConcludeEventDto, EventDto, EventFieldsDto, EventQueryDto, UpdateEventStatusDto},
    },
    server::{
        error::AppError,
        middleware::{
            auth::{AuthGuard, Permission},
            token::BearerToken,
        },
        model::event::{ConcludeEventParam, EventFieldsParam, EventFilter},
        service::event::EventService,
        state::AppState,
    },
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "event";

/// List events.
///
/// Returns all events matching the optional filters, earliest day first.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Matching events
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/events",
    tag = EVENT_TAG,
    params(EventQueryDto),
    responses(
        (status = 200, description = "Events sorted by day ascending", body = Vec<EventDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<EventQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = EventService::new(&state.db);

    let events = service.list(EventFilter::from_dto(query)).await?;
    let events_dto: Vec<EventDto> = events.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(events_dto)))
}

/// Get a single event by ID.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - The event
/// - `404 Not Found` - No event with that ID
#[utoipa::path(
    get,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    responses(
        (status = 200, description = "The event", body = EventDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let event = EventService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

/// Create a new event.
///
/// The event starts Upcoming with no winners.
///
/// # Access Control
/// - `Admin` - Only admins can create events
///
/// # Returns
/// - `201 Created` - The created event
/// - `400 Bad Request` - Invalid event fields
/// - `401 Unauthorized` / `403 Forbidden` - Not an authenticated admin
#[utoipa::path(
    post,
    path = "/api/events",
    tag = EVENT_TAG,
    request_body = EventFieldsDto,
    responses(
        (status = 201, description = "Successfully created event", body = EventDto),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_event(
    State(state): State<AppState>,
    bearer: BearerToken,
    Json(payload): Json<EventFieldsDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[Permission::Admin])
        .await?;

    let event = EventService::new(&state.db)
        .create(EventFieldsParam::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(event.into_dto())))
}

/// Update an event's descriptive fields.
///
/// Status and winners are not affected; use the status and winners endpoints.
///
/// # Access Control
/// - `Admin` - Only admins can update events
///
/// # Returns
/// - `200 OK` - The updated event
/// - `400 Bad Request` - Invalid event fields
/// - `404 Not Found` - No event with that ID
#[utoipa::path(
    put,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    request_body = EventFieldsDto,
    responses(
        (status = 200, description = "Successfully updated event", body = EventDto),
        (status = 400, description = "Invalid event data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_event(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(id): Path<i32>,
    Json(payload): Json<EventFieldsDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[Permission::Admin])
        .await?;

    let event = EventService::new(&state.db)
        .update(id, EventFieldsParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

/// Delete an event with its winners, tags and photos.
///
/// # Access Control
/// - `Admin` - Only admins can delete events
///
/// # Returns
/// - `204 No Content` - Event deleted
/// - `404 Not Found` - No event with that ID
#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    responses(
        (status = 204, description = "Successfully deleted event"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[Permission::Admin])
        .await?;

    EventService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Change an event's status.
///
/// Only Upcoming → Active is accepted here. Concluding goes through the winners
/// endpoint.
///
/// # Access Control
/// - `Admin` - Only admins can change event status
///
/// # Returns
/// - `200 OK` - The updated event
/// - `404 Not Found` - No event with that ID
/// - `409 Conflict` - Transition not allowed
#[utoipa::path(
    patch,
    path = "/api/events/{id}/status",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    request_body = UpdateEventStatusDto,
    responses(
        (status = 200, description = "Successfully updated status", body = EventDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 409, description = "Invalid status transition", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_event_status(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateEventStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[Permission::Admin])
        .await?;

    let event = EventService::new(&state.db)
        .set_status(id, payload.status.into())
        .await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

/// Conclude an event with its winners.
///
/// Winner entries without a branch are ignored. The event becomes Concluded and its
/// winners count towards the leaderboard.
///
/// # Access Control
/// - `Admin` - Only admins can assign winners
///
/// # Returns
/// - `200 OK` - The concluded event
/// - `400 Bad Request` - No winner with a branch, or invalid points
/// - `404 Not Found` - No event with that ID
/// - `409 Conflict` - Event already concluded
#[utoipa::path(
    patch,
    path = "/api/events/{id}/winners",
    tag = EVENT_TAG,
    params(("id" = i32, Path, description = "Event ID")),
    request_body = ConcludeEventDto,
    responses(
        (status = 200, description = "Successfully concluded event", body = EventDto),
        (status = 400, description = "Invalid winners", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 409, description = "Event already concluded", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn conclude_event(
    State(state): State<AppState>,
    bearer: BearerToken,
    Path(id): Path<i32>,
    Json(payload): Json<ConcludeEventDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[Permission::Admin])
        .await?;

    let event = EventService::new(&state.db)
        .conclude(id, ConcludeEventParam::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}
