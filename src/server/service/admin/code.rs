//! Admin code service for managing temporary registration codes.
//!
//! This module provides the `AdminCodeService` for generating and validating one-time-use
//! admin registration codes. A code is generated at startup when no admin exists, stored
//! in memory with a 10-minute TTL and invalidated after successful use or expiration.

use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tokio::{sync::RwLock, time::Instant};

/// Time-to-live for admin codes.
const ADMIN_CODE_TTL: Duration = Duration::from_secs(10 * 60);

/// Stored admin code with expiration timestamp.
#[derive(Clone)]
struct AdminCode {
    /// The registration code string.
    code: String,
    /// Timestamp when this code expires.
    expires_at: Instant,
}

impl AdminCode {
    /// Creates a new admin code expiring after `ADMIN_CODE_TTL`.
    fn new(code: String) -> Self {
        Self {
            code,
            expires_at: Instant::now() + ADMIN_CODE_TTL,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }

    fn matches(&self, input: &str) -> bool {
        self.code == input
    }
}

/// Service for managing the temporary code used to register the first admin.
///
/// Cloning shares the stored code, so the instance held in `AppState` and the one used
/// at startup see the same state.
#[derive(Clone)]
pub struct AdminCodeService {
    /// The currently active admin code, if any.
    code: Arc<RwLock<Option<AdminCode>>>,
}

impl AdminCodeService {
    /// Creates a new AdminCodeService instance with no active code.
    pub fn new() -> Self {
        Self {
            code: Arc::new(RwLock::new(None)),
        }
    }

    /// Generates a new random admin code and stores it with a 10-minute TTL.
    ///
    /// Any previously generated code is replaced.
    ///
    /// # Returns
    /// - `String` - The generated 32-character admin registration code
    pub async fn generate(&self) -> String {
        let code_string = Self::generate_random_code();
        *self.code.write().await = Some(AdminCode::new(code_string.clone()));
        code_string
    }

    /// Validates the provided code against the stored admin code.
    ///
    /// A matching, unexpired code is consumed so it cannot be reused. An expired code is
    /// discarded and fails validation.
    ///
    /// # Arguments
    /// - `input_code` - The code string to validate
    ///
    /// # Returns
    /// - `true` - Code matched and was still valid; it has been consumed
    /// - `false` - Code doesn't match, is expired, or no code exists
    pub async fn validate_and_consume(&self, input_code: &str) -> bool {
        let mut code = self.code.write().await;

        if let Some(stored_code) = code.as_ref() {
            if stored_code.is_expired() {
                *code = None;
                return false;
            }

            if stored_code.matches(input_code) {
                *code = None;
                return true;
            }
        }

        false
    }

    /// Generates a random 32-character alphanumeric code.
    fn generate_random_code() -> String {
        const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ\
                                 abcdefghijklmnopqrstuvwxyz\
                                 0123456789";
        const CODE_LENGTH: usize = 32;

        let mut rng = rand::rng();

        (0..CODE_LENGTH)
            .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
            .collect()
    }

    /// Checks if a valid, unexpired code is stored.
    #[cfg(test)]
    pub async fn has_valid_code(&self) -> bool {
        let mut code = self.code.write().await;

        match code.as_ref() {
            Some(stored_code) if stored_code.is_expired() => {
                *code = None;
                false
            }
            Some(_) => true,
            None => false,
        }
    }
}

impl Default for AdminCodeService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests generating a new admin code.
    ///
    /// Expected: 32-character code stored as valid
    #[tokio::test]
    async fn generates_code() {
        let service = AdminCodeService::new();
        assert!(!service.has_valid_code().await);

        let code = service.generate().await;
        assert_eq!(code.len(), 32);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(service.has_valid_code().await);
    }

    /// Tests that a correct code validates once and is then consumed.
    ///
    /// Expected: first validation succeeds, second fails
    #[tokio::test]
    async fn consumes_code_on_success() {
        let service = AdminCodeService::new();
        let code = service.generate().await;

        assert!(service.validate_and_consume(&code).await);
        assert!(!service.has_valid_code().await);
        assert!(!service.validate_and_consume(&code).await);
    }

    /// Tests that a wrong code is rejected without consuming the stored one.
    ///
    /// Expected: validation fails, stored code remains valid
    #[tokio::test]
    async fn keeps_code_after_wrong_attempt() {
        let service = AdminCodeService::new();
        let code = service.generate().await;

        assert!(!service.validate_and_consume("wrong_code").await);
        assert!(service.has_valid_code().await);
        assert!(service.validate_and_consume(&code).await);
    }

    /// Tests validating when no code was generated.
    ///
    /// Expected: validation fails
    #[tokio::test]
    async fn rejects_when_no_code_exists() {
        let service = AdminCodeService::new();
        assert!(!service.validate_and_consume("any_code").await);
    }

    /// Tests that clones share the stored code.
    ///
    /// Expected: code generated through one handle validates through the other
    #[tokio::test]
    async fn clones_share_state() {
        let service = AdminCodeService::new();
        let handle = service.clone();
        let code = service.generate().await;

        assert!(handle.validate_and_consume(&code).await);
        assert!(!service.has_valid_code().await);
    }

    /// Tests that codes expire after the TTL.
    ///
    /// Uses a paused clock so no real time passes.
    ///
    /// Expected: valid just before the TTL, rejected after it
    #[tokio::test(start_paused = true)]
    async fn expires_after_ttl() {
        let service = AdminCodeService::new();
        let code = service.generate().await;

        tokio::time::advance(ADMIN_CODE_TTL - Duration::from_secs(1)).await;
        assert!(service.has_valid_code().await);

        tokio::time::advance(Duration::from_secs(2)).await;
        assert!(!service.has_valid_code().await);
        assert!(!service.validate_and_consume(&code).await);
    }
}
