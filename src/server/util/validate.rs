//! Field validation helpers shared by request parameter types.

use crate::server::error::validation::ValidationError;

/// Rejects empty or whitespace-only text.
///
/// # Arguments
/// - `field` - Field name reported on failure
/// - `value` - Text to check
///
/// # Returns
/// - `Ok(())` - Value has at least one non-whitespace character
/// - `Err(ValidationError)` - Value is blank
pub fn require_text(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, format!("{} must not be empty", field)));
    }
    Ok(())
}

/// Rejects negative, NaN and infinite point values.
///
/// Returns the value with `-0.0` folded into `0.0` so stored points rank as equal.
pub fn require_points(field: &str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::new(
            field,
            format!("{} must be a non-negative number", field),
        ));
    }
    Ok(value + 0.0)
}

/// Rejects medal counts outside `0..=i32::MAX` and returns the stored width.
pub fn require_count(field: &str, value: i64) -> Result<i32, ValidationError> {
    i32::try_from(value)
        .ok()
        .filter(|count| *count >= 0)
        .ok_or_else(|| {
            ValidationError::new(field, format!("{} must be a non-negative integer", field))
        })
}

/// Requires an absolute `http://` or `https://` URL.
pub fn require_http_url(field: &str, value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    let rest = value
        .strip_prefix("https://")
        .or_else(|| value.strip_prefix("http://"));

    match rest {
        Some(host) if !host.is_empty() && !host.starts_with('/') => Ok(()),
        _ => Err(ValidationError::new(
            field,
            format!("{} must be an http(s) URL", field),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_text() {
        assert!(require_text("name", "Relay").is_ok());
        let err = require_text("name", "   ").unwrap_err();
        assert_eq!(err.field, "name");
    }

    #[test]
    fn rejects_negative_and_non_finite_points() {
        assert!(require_points("points", 0.0).is_ok());
        assert!(require_points("points", 2.5).is_ok());
        assert!(require_points("points", -1.0).is_err());
        assert!(require_points("points", f64::NAN).is_err());
        assert!(require_points("points", f64::INFINITY).is_err());
    }

    #[test]
    fn folds_negative_zero_points() {
        let points = require_points("points", -0.0).unwrap();
        assert!(points.is_sign_positive());
        assert_eq!(points, 0.0);
    }

    #[test]
    fn converts_counts_in_range() {
        assert_eq!(require_count("firstCount", 3), Ok(3));
        assert!(require_count("firstCount", -1).is_err());
        assert!(require_count("firstCount", i64::from(i32::MAX) + 1).is_err());
    }

    #[test]
    fn accepts_only_http_urls() {
        assert!(require_http_url("url", "https://media.example.com/a.jpg").is_ok());
        assert!(require_http_url("url", "http://localhost:8080/a.jpg").is_ok());
        assert!(require_http_url("url", "ftp://media.example.com/a.jpg").is_err());
        assert!(require_http_url("url", "https://").is_err());
        assert!(require_http_url("url", "photo.jpg").is_err());
    }
}
