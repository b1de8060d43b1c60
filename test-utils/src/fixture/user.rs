//! User fixtures for creating in-memory test data.

use chrono::Utc;
use entity::{sea_orm_active_enums::UserRole, user};

/// Default test user email.
pub const DEFAULT_EMAIL: &str = "fan@college.edu";

/// Default test user name.
pub const DEFAULT_NAME: &str = "Test Fan";

/// Creates a public user entity model with default values.
///
/// The password hash is a placeholder and will not verify against any password.
pub fn entity() -> user::Model {
    entity_builder().build()
}

/// Creates a user entity builder for customization.
pub fn entity_builder() -> UserEntityBuilder {
    UserEntityBuilder::default()
}

/// Builder for customized user entity models.
pub struct UserEntityBuilder {
    model: user::Model,
}

impl Default for UserEntityBuilder {
    fn default() -> Self {
        Self {
            model: user::Model {
                id: 1,
                email: DEFAULT_EMAIL.to_string(),
                name: DEFAULT_NAME.to_string(),
                password_hash: "not-a-real-hash".to_string(),
                role: UserRole::Public,
                created_at: Utc::now(),
            },
        }
    }
}

impl UserEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.model.id = id;
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.model.email = email.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.model.name = name.into();
        self
    }

    pub fn role(mut self, role: UserRole) -> Self {
        self.model.role = role;
        self
    }

    pub fn password_hash(mut self, password_hash: impl Into<String>) -> Self {
        self.model.password_hash = password_hash.into();
        self
    }

    pub fn build(self) -> user::Model {
        self.model
    }
}
