use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5001";
const DEFAULT_TOKEN_TTL_HOURS: i64 = 168;

pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,

    pub bind_addr: SocketAddr,
    pub token_ttl_hours: i64,
    /// Allowed CORS origin; any origin when unset.
    pub cors_origin: Option<String>,
}

impl Config {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads configuration through `lookup`, which returns a variable's value if set.
    ///
    /// # Returns
    /// - `Ok(Config)` - All required variables present and valid
    /// - `Err(ConfigError::MissingEnvVar)` - `DATABASE_URL` or `JWT_SECRET` unset
    /// - `Err(ConfigError::InvalidEnvVar)` - `BIND_ADDR` or `TOKEN_TTL_HOURS` unparsable
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
        };

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "BIND_ADDR".to_string(),
                reason: e.to_string(),
            })?;

        let token_ttl_hours = match lookup("TOKEN_TTL_HOURS") {
            Some(value) => value
                .parse::<i64>()
                .ok()
                .filter(|hours| *hours > 0)
                .ok_or_else(|| ConfigError::InvalidEnvVar {
                    name: "TOKEN_TTL_HOURS".to_string(),
                    reason: format!("expected a positive number of hours, got '{}'", value),
                })?,
            None => DEFAULT_TOKEN_TTL_HOURS,
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            jwt_secret: required("JWT_SECRET")?,
            bind_addr,
            token_ttl_hours,
            cors_origin: lookup("CORS_ORIGIN").filter(|v| !v.trim().is_empty()),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn applies_defaults() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("JWT_SECRET", "secret"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND_ADDR);
        assert_eq!(config.token_ttl_hours, DEFAULT_TOKEN_TTL_HOURS);
        assert!(config.cors_origin.is_none());
    }

    #[test]
    fn reports_missing_secret() {
        let result = Config::from_lookup(lookup(&[("DATABASE_URL", "sqlite::memory:")]));

        assert!(matches!(result, Err(ConfigError::MissingEnvVar(name)) if name == "JWT_SECRET"));
    }

    #[test]
    fn rejects_malformed_values() {
        let result = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("JWT_SECRET", "secret"),
            ("TOKEN_TTL_HOURS", "soon"),
        ]));

        assert!(matches!(result, Err(ConfigError::InvalidEnvVar { .. })));
    }
}
