//! Login, self-registration and first-admin registration.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, validation::ValidationError, AppError},
    middleware::token::TokenService,
    model::user::{CreateUserParam, User, UserRole},
    service::admin::code::AdminCodeService,
    util::validate::require_text,
};

/// bcrypt work factor; tests use the minimum to stay fast.
const BCRYPT_COST: u32 = if cfg!(test) { 4 } else { bcrypt::DEFAULT_COST };

const MIN_PASSWORD_LENGTH: usize = 6;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Logs in an admin.
    ///
    /// # Returns
    /// - `Ok((token, User))` - Issued token and the admin
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email, wrong password or not an admin
    pub async fn admin_login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(String, User), AppError> {
        let user = self.verify_credentials(email, password).await?;

        if user.role != UserRole::Admin {
            return Err(AuthError::InvalidCredentials.into());
        }

        tracing::info!("Admin {} logged in", user.id);

        Ok((self.tokens.issue(user.id)?, user))
    }

    /// Logs in a public user, registering them first if the email is unknown.
    ///
    /// # Arguments
    /// - `email` - Login email
    /// - `password` - Plain-text password
    /// - `name` - Display name, required only when registering
    ///
    /// # Returns
    /// - `Ok((token, User))` - Issued token and the user
    /// - `Err(AuthError::InvalidCredentials)` - Wrong password or the account is an admin
    /// - `Err(AppError::ValidationErr)` - Registration fields missing or invalid
    pub async fn public_login(
        &self,
        email: &str,
        password: &str,
        name: Option<&str>,
    ) -> Result<(String, User), AppError> {
        let repo = UserRepository::new(self.db);

        let user = match repo.find_credentials_by_email(email).await? {
            Some(credentials) => {
                if !bcrypt::verify(password, &credentials.password_hash)?
                    || credentials.user.role != UserRole::Public
                {
                    return Err(AuthError::InvalidCredentials.into());
                }
                credentials.user
            }
            None => {
                let registration = self
                    .validate_registration(email, password, name.unwrap_or_default())
                    .await?;
                self.create_user(registration, password, UserRole::Public).await?
            }
        };

        Ok((self.tokens.issue(user.id)?, user))
    }

    /// Creates the first admin using the startup registration code.
    ///
    /// Fields are checked before the code is consumed so a rejected request leaves it usable.
    ///
    /// # Returns
    /// - `Ok((token, User))` - Issued token and the new admin
    /// - `Err(AuthError::InvalidAdminCode)` - Code wrong, expired or already used
    /// - `Err(AppError::ValidationErr)` - Invalid fields or email already registered
    pub async fn register_admin(
        &self,
        codes: &AdminCodeService,
        code: &str,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<(String, User), AppError> {
        let registration = self.validate_registration(email, password, name).await?;

        if !codes.validate_and_consume(code).await {
            return Err(AuthError::InvalidAdminCode.into());
        }

        let user = self
            .create_user(registration, password, UserRole::Admin)
            .await?;

        tracing::info!("Registered admin {} ({})", user.id, user.email);

        Ok((self.tokens.issue(user.id)?, user))
    }

    async fn verify_credentials(&self, email: &str, password: &str) -> Result<User, AppError> {
        let Some(credentials) = UserRepository::new(self.db)
            .find_credentials_by_email(email)
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !bcrypt::verify(password, &credentials.password_hash)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(credentials.user)
    }

    /// Normalizes and checks registration fields, including email uniqueness.
    async fn validate_registration(
        &self,
        email: &str,
        password: &str,
        name: &str,
    ) -> Result<Registration, AppError> {
        let email = email.trim().to_lowercase();
        let name = name.trim();

        if !email.contains('@') {
            return Err(ValidationError::new("email", "email must be a valid address").into());
        }
        require_text("name", name)?;
        if password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ValidationError::new(
                "password",
                format!("password must be at least {} characters", MIN_PASSWORD_LENGTH),
            )
            .into());
        }

        if UserRepository::new(self.db)
            .find_credentials_by_email(&email)
            .await?
            .is_some()
        {
            return Err(ValidationError::new("email", "email is already registered").into());
        }

        Ok(Registration {
            email,
            name: name.to_string(),
        })
    }

    async fn create_user(
        &self,
        registration: Registration,
        password: &str,
        role: UserRole,
    ) -> Result<User, AppError> {
        let user = UserRepository::new(self.db)
            .create(CreateUserParam {
                email: registration.email,
                name: registration.name,
                password_hash: bcrypt::hash(password, BCRYPT_COST)?,
                role,
            })
            .await?;

        Ok(user)
    }
}

/// Registration fields after normalization.
struct Registration {
    email: String,
    name: String,
}
