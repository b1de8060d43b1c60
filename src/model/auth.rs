use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::user::UserDto;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminLoginDto {
    pub email: String,
    pub password: String,
}

/// Public login; unknown emails are registered on the fly and then require `name`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicLoginDto {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// First-admin registration using the code logged at startup.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminRegisterDto {
    pub code: String,
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenDto {
    pub token: String,
    pub user: UserDto,
}
