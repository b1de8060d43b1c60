use axum::{
    routing::{get, patch, post},
    Json, Router,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

use crate::{
    model::{
        announcement::{AnnouncementDto, AnnouncementFieldsDto},
        api::{AckDto, ErrorDto, HealthDto},
        auth::{AdminLoginDto, AdminRegisterDto, PublicLoginDto, TokenDto},
        comment::{CommentDto, CreateCommentDto},
        event::{
            ConcludeEventDto, EventCategoryDto, EventDto, EventFieldsDto, EventStatusDto,
            EventTypeDto, PointsDto, UpdateEventStatusDto, WinnerDto, WinnerInputDto,
            WinnerPositionDto,
        },
        leaderboard::{
            BranchStandingDto, ManualOverrideDto, ManualOverrideEntryDto, PointsSystemDto,
            SportPointsDto,
        },
        photo::{PhotoDto, PhotoFieldsDto},
        user::{UserDto, UserRoleDto},
    },
    server::{
        controller::{announcement, auth, comment, event, health, leaderboard, photo},
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        auth::admin_login,
        auth::public_login,
        auth::admin_register,
        auth::get_me,
        event::list_events,
        event::get_event,
        event::create_event,
        event::update_event,
        event::delete_event,
        event::update_event_status,
        event::conclude_event,
        leaderboard::get_leaderboard,
        leaderboard::clear_leaderboard,
        leaderboard::upsert_manual_override,
        leaderboard::list_manual_overrides,
        leaderboard::delete_manual_override,
        leaderboard::get_points_system,
        announcement::list_announcements,
        announcement::get_announcement,
        announcement::create_announcement,
        announcement::update_announcement,
        announcement::delete_announcement,
        comment::list_comments,
        comment::create_comment,
        comment::delete_comment,
        photo::list_photos,
        photo::get_photo,
        photo::create_photo,
        photo::update_photo,
        photo::delete_photo,
    ),
    components(schemas(
        ErrorDto, AckDto, HealthDto,
        AdminLoginDto, PublicLoginDto, AdminRegisterDto, TokenDto, UserDto, UserRoleDto,
        EventDto, EventFieldsDto, EventStatusDto, EventCategoryDto, EventTypeDto, PointsDto,
        WinnerDto, WinnerInputDto, WinnerPositionDto, UpdateEventStatusDto, ConcludeEventDto,
        BranchStandingDto, ManualOverrideDto, ManualOverrideEntryDto, PointsSystemDto,
        SportPointsDto,
        AnnouncementDto, AnnouncementFieldsDto, CommentDto, CreateCommentDto,
        PhotoDto, PhotoFieldsDto,
    )),
    modifiers(&BearerSecurity),
    tags(
        (name = "event", description = "Event catalogue and lifecycle"),
        (name = "leaderboard", description = "Branch standings and manual overrides"),
        (name = "announcement", description = "Festival announcements"),
        (name = "comment", description = "Announcement comments"),
        (name = "photo", description = "Event photo gallery"),
        (name = "auth", description = "Login and admin registration"),
    ),
)]
pub struct ApiDoc;

/// Registers the `bearer` security scheme referenced by protected endpoints.
struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health::health))
        .route(
            "/api/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .route("/api/auth/admin/login", post(auth::admin_login))
        .route("/api/auth/public/login", post(auth::public_login))
        .route("/api/auth/admin/register", post(auth::admin_register))
        .route("/api/auth/me", get(auth::get_me))
        .route(
            "/api/events",
            get(event::list_events).post(event::create_event),
        )
        .route(
            "/api/events/{id}",
            get(event::get_event)
                .put(event::update_event)
                .delete(event::delete_event),
        )
        .route("/api/events/{id}/status", patch(event::update_event_status))
        .route("/api/events/{id}/winners", patch(event::conclude_event))
        .route("/api/leaderboard", get(leaderboard::get_leaderboard))
        .route("/api/leaderboard/clear", post(leaderboard::clear_leaderboard))
        .route(
            "/api/leaderboard/manual",
            get(leaderboard::list_manual_overrides).patch(leaderboard::upsert_manual_override),
        )
        .route(
            "/api/leaderboard/manual/{branch}",
            axum::routing::delete(leaderboard::delete_manual_override),
        )
        .route(
            "/api/leaderboard/points-system",
            get(leaderboard::get_points_system),
        )
        .route(
            "/api/announcements",
            get(announcement::list_announcements).post(announcement::create_announcement),
        )
        .route(
            "/api/announcements/{id}",
            get(announcement::get_announcement)
                .put(announcement::update_announcement)
                .delete(announcement::delete_announcement),
        )
        .route(
            "/api/comments",
            get(comment::list_comments).post(comment::create_comment),
        )
        .route(
            "/api/comments/{id}",
            axum::routing::delete(comment::delete_comment),
        )
        .route(
            "/api/photos",
            get(photo::list_photos).post(photo::create_photo),
        )
        .route(
            "/api/photos/{id}",
            get(photo::get_photo)
                .put(photo::update_photo)
                .delete(photo::delete_photo),
        )
}
