use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::{config::ConfigError, AppError},
    service::admin::code::AdminCodeService,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Generates and logs a first-admin registration code when no admin exists.
///
/// # Arguments
/// - `db` - Database connection
/// - `admin_code_service` - Service storing the generated code
///
/// # Returns
/// - `Ok(Some(code))` - No admin existed; a code was generated
/// - `Ok(None)` - An admin already exists
/// - `Err(AppError)` - Database error while checking for admins
pub async fn check_for_admin(
    db: &sea_orm::DatabaseConnection,
    admin_code_service: &AdminCodeService,
) -> Result<Option<String>, AppError> {
    if UserRepository::new(db).admin_exists().await? {
        return Ok(None);
    }

    let code = admin_code_service.generate().await;

    tracing::info!(
        "No admin account exists. Register one within 10 minutes with \
         POST /api/auth/admin/register using code: {}",
        code
    );

    Ok(Some(code))
}

/// Builds the CORS layer, restricted to `cors_origin` when configured.
pub fn cors_layer(config: &Config) -> Result<CorsLayer, ConfigError> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    match &config.cors_origin {
        Some(origin) => {
            let origin = origin
                .parse::<HeaderValue>()
                .map_err(|e| ConfigError::InvalidEnvVar {
                    name: "CORS_ORIGIN".to_string(),
                    reason: e.to_string(),
                })?;
            Ok(layer.allow_origin(origin))
        }
        None => Ok(layer.allow_origin(Any)),
    }
}
