//! Common validation utilities.

use validator::ValidationError;

/// Lowest score a call or metric may carry.
pub const MIN_SCORE: f64 = 0.0;

/// Highest score a call or metric may carry.
pub const MAX_SCORE: f64 = 100.0;

/// Maximum length of campaign, record and metric identifiers.
pub const MAX_IDENTIFIER_LENGTH: usize = 64;

/// Validates that a quality score lies within 0 to 100.
///
/// NaN is rejected along with out-of-range values.
pub fn validate_score(score: f64) -> Result<(), ValidationError> {
    if (MIN_SCORE..=MAX_SCORE).contains(&score) {
        Ok(())
    } else {
        let mut err = ValidationError::new("score_range");
        err.message = Some("Score must be between 0 and 100".into());
        Err(err)
    }
}

/// Validates an identifier used for campaigns and call records.
///
/// Identifiers are non-empty, at most 64 characters, and contain only
/// alphanumeric characters, hyphens, and underscores.
pub fn validate_identifier(id: &str) -> Result<(), ValidationError> {
    if id.is_empty() || id.len() > MAX_IDENTIFIER_LENGTH {
        let mut err = ValidationError::new("identifier_length");
        err.message = Some("Identifier must be between 1 and 64 characters".into());
        return Err(err);
    }

    if id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        Ok(())
    } else {
        let mut err = ValidationError::new("invalid_identifier");
        err.message = Some(
            "Identifier may only contain alphanumeric characters, hyphens, and underscores".into(),
        );
        Err(err)
    }
}

/// Validates a metric name such as `compliance` or `proper_greeting`.
pub fn validate_metric_name(name: &str) -> Result<(), ValidationError> {
    if !name.is_empty()
        && name.len() <= MAX_IDENTIFIER_LENGTH
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    {
        Ok(())
    } else {
        let mut err = ValidationError::new("invalid_metric_name");
        err.message = Some("Metric names must be lowercase snake_case".into());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::Fake;

    #[test]
    fn test_validate_score_bounds() {
        assert!(validate_score(0.0).is_ok());
        assert!(validate_score(100.0).is_ok());
        assert!(validate_score(57.5).is_ok());
        assert!(validate_score(-0.1).is_err());
        assert!(validate_score(100.1).is_err());
    }

    #[test]
    fn test_validate_score_rejects_nan() {
        assert!(validate_score(f64::NAN).is_err());
        assert!(validate_score(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_score_random_in_range() {
        for _ in 0..100 {
            let score: f64 = (0.0..100.0).fake();
            assert!(validate_score(score).is_ok(), "score {score} rejected");
        }
    }

    #[test]
    fn test_validate_score_error_message() {
        let err = validate_score(150.0).unwrap_err();
        assert_eq!(
            err.message.unwrap().to_string(),
            "Score must be between 0 and 100"
        );
    }

    #[test]
    fn test_validate_identifier() {
        assert!(validate_identifier("camp-1").is_ok());
        assert!(validate_identifier("spring_outreach_2024").is_ok());
        assert!(validate_identifier("").is_err());
        assert!(validate_identifier("has space").is_err());
        assert!(validate_identifier("slash/id").is_err());
        assert!(validate_identifier(&"a".repeat(65)).is_err());
        assert!(validate_identifier(&"a".repeat(64)).is_ok());
    }

    #[test]
    fn test_validate_identifier_error_codes() {
        assert_eq!(validate_identifier("").unwrap_err().code, "identifier_length");
        assert_eq!(
            validate_identifier("bad id").unwrap_err().code,
            "invalid_identifier"
        );
    }

    #[test]
    fn test_validate_metric_name() {
        assert!(validate_metric_name("compliance").is_ok());
        assert!(validate_metric_name("proper_greeting").is_ok());
        assert!(validate_metric_name("step2").is_ok());
        assert!(validate_metric_name("").is_err());
        assert!(validate_metric_name("ProperGreeting").is_err());
        assert!(validate_metric_name("objection-handling").is_err());
    }
}
