use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{AdminLoginDto, AdminRegisterDto, PublicLoginDto, TokenDto},
        user::UserDto,
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, token::BearerToken},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in as an admin.
///
/// # Returns
/// - `200 OK` - Bearer token and the admin
/// - `401 Unauthorized` - Wrong credentials or not an admin account
#[utoipa::path(
    post,
    path = "/api/auth/admin/login",
    tag = AUTH_TAG,
    request_body = AdminLoginDto,
    responses(
        (status = 200, description = "Logged in", body = TokenDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn admin_login(
    State(state): State<AppState>,
    Json(payload): Json<AdminLoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let (token, user) = AuthService::new(&state.db, &state.tokens)
        .admin_login(&payload.email, &payload.password)
        .await?;

    Ok((
        StatusCode::OK,
        Json(TokenDto {
            token,
            user: user.into_dto(),
        }),
    ))
}

/// Log in as a public user, registering on first login.
///
/// # Returns
/// - `200 OK` - Bearer token and the user
/// - `400 Bad Request` - Registration fields missing or invalid
/// - `401 Unauthorized` - Wrong password
#[utoipa::path(
    post,
    path = "/api/auth/public/login",
    tag = AUTH_TAG,
    request_body = PublicLoginDto,
    responses(
        (status = 200, description = "Logged in", body = TokenDto),
        (status = 400, description = "Invalid registration fields", body = ErrorDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn public_login(
    State(state): State<AppState>,
    Json(payload): Json<PublicLoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let (token, user) = AuthService::new(&state.db, &state.tokens)
        .public_login(&payload.email, &payload.password, payload.name.as_deref())
        .await?;

    Ok((
        StatusCode::OK,
        Json(TokenDto {
            token,
            user: user.into_dto(),
        }),
    ))
}

/// Register the first admin with the code logged at startup.
///
/// # Returns
/// - `201 Created` - Bearer token and the new admin
/// - `400 Bad Request` - Invalid code or fields
#[utoipa::path(
    post,
    path = "/api/auth/admin/register",
    tag = AUTH_TAG,
    request_body = AdminRegisterDto,
    responses(
        (status = 201, description = "Admin registered", body = TokenDto),
        (status = 400, description = "Invalid code or fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn admin_register(
    State(state): State<AppState>,
    Json(payload): Json<AdminRegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let (token, user) = AuthService::new(&state.db, &state.tokens)
        .register_admin(
            &state.admin_code_service,
            &payload.code,
            &payload.email,
            &payload.password,
            &payload.name,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(TokenDto {
            token,
            user: user.into_dto(),
        }),
    ))
}

/// Get the user the bearer token belongs to.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_me(
    State(state): State<AppState>,
    bearer: BearerToken,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &bearer)
        .require(&[])
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
