use chrono::Duration;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::token::TokenService,
    model::user::{User, UserRole},
};

mod photo;

fn tokens() -> TokenService {
    TokenService::new("service-test-secret", Duration::hours(1))
}

fn validation_field(result: Result<impl std::fmt::Debug, AppError>) -> String {
    match result {
        Err(AppError::ValidationErr(err)) => err.field,
        other => panic!("Expected validation error, got: {:?}", other),
    }
}

fn public_user(model: entity::user::Model) -> User {
    let user = User::from_entity(model);
    assert_eq!(user.role, UserRole::Public);
    user
}
