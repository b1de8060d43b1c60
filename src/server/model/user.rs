//! User domain models and parameters.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::UserRole as DbUserRole;

use crate::model::user::{UserDto, UserRoleDto};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRole {
    Admin,
    Public,
}

/// Application user without credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    /// Lower-cased email address.
    pub email: String,
    pub name: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            role: match self.role {
                UserRole::Admin => UserRoleDto::Admin,
                UserRole::Public => UserRoleDto::Public,
            },
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            role: entity.role.into(),
            created_at: entity.created_at,
        }
    }
}

/// User together with the stored password hash, used only for login.
#[derive(Debug, Clone)]
pub struct UserCredentials {
    pub user: User,
    pub password_hash: String,
}

/// Parameters for inserting a new user.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    /// Email, normalized to lower case by the caller.
    pub email: String,
    pub name: String,
    pub password_hash: String,
    pub role: UserRole,
}

impl From<DbUserRole> for UserRole {
    fn from(value: DbUserRole) -> Self {
        match value {
            DbUserRole::Admin => Self::Admin,
            DbUserRole::Public => Self::Public,
        }
    }
}

impl From<UserRole> for DbUserRole {
    fn from(value: UserRole) -> Self {
        match value {
            UserRole::Admin => Self::Admin,
            UserRole::Public => Self::Public,
        }
    }
}
