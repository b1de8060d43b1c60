use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::token::{BearerToken, TokenService},
    model::user::{User, UserRole},
};

/// Role a request must hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// User has the admin role.
    Admin,
    /// User has the public (visitor) role.
    PublicUser,
}

/// Resolves the bearer token's user and checks permissions.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
    bearer: &'a BearerToken,
}

impl<'a> AuthGuard<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        tokens: &'a TokenService,
        bearer: &'a BearerToken,
    ) -> Self {
        Self { db, tokens, bearer }
    }

    /// Requires an authenticated user holding every listed permission.
    ///
    /// An empty slice only requires authentication.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AuthError::MissingToken | InvalidToken | UserNotInDatabase)` - Not authenticated
    /// - `Err(AuthError::AccessDenied)` - Authenticated but missing a permission
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let Some(token) = self.bearer.0.as_deref() else {
            return Err(AuthError::MissingToken.into());
        };

        let user_id = self.tokens.verify(token)?;

        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        for permission in permissions {
            let (required, action) = match permission {
                Permission::Admin => (UserRole::Admin, "requires admin role"),
                Permission::PublicUser => (UserRole::Public, "requires public user role"),
            };

            if user.role != required {
                return Err(AuthError::AccessDenied(user.id, action.to_string()).into());
            }
        }

        Ok(user)
    }
}
