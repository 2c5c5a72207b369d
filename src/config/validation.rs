//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Keep simulated latency below the request timeout
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is a pure function: ServiceConfig → Result<(), Vec<ValidationError>>

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::ServiceConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a config.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: '{value}' is not a valid socket address")]
    InvalidAddress { field: &'static str, value: String },

    #[error("{field} must be greater than zero")]
    Zero { field: &'static str },

    #[error("{field} ({delay_ms}ms) must be shorter than the request timeout ({timeout_secs}s)")]
    DelayExceedsTimeout {
        field: &'static str,
        delay_ms: u64,
        timeout_secs: u64,
    },

    #[error("unknown log level '{0}'")]
    UnknownLogLevel(String),
}

/// Check a config for semantic errors.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }

    if config.listener.max_body_bytes == 0 {
        errors.push(ValidationError::Zero {
            field: "listener.max_body_bytes",
        });
    }

    let timeout_secs = config.timeouts.request_secs;
    if timeout_secs == 0 {
        errors.push(ValidationError::Zero {
            field: "timeouts.request_secs",
        });
    } else {
        let timeout_ms = timeout_secs.saturating_mul(1000);
        for (field, delay_ms) in [
            ("latency.catalog_delay_ms", config.latency.catalog_delay_ms),
            ("latency.submission_delay_ms", config.latency.submission_delay_ms),
        ] {
            if delay_ms >= timeout_ms {
                errors.push(ValidationError::DelayExceedsTimeout {
                    field,
                    delay_ms,
                    timeout_secs,
                });
            }
        }
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::UnknownLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(validate_config(&ServiceConfig::default()), Ok(()));
    }

    #[test]
    fn test_reports_every_error() {
        let mut config = ServiceConfig::default();
        config.listener.bind_address = "localhost".into();
        config.listener.max_body_bytes = 0;
        config.observability.log_level = "loud".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::UnknownLogLevel("loud".into())));
        assert!(errors.contains(&ValidationError::Zero {
            field: "listener.max_body_bytes"
        }));
    }

    #[test]
    fn test_delay_must_fit_in_timeout() {
        let mut config = ServiceConfig::default();
        config.timeouts.request_secs = 1;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::DelayExceedsTimeout {
                field: "latency.catalog_delay_ms",
                delay_ms: 1000,
                timeout_secs: 1,
            }]
        );
    }

    #[test]
    fn test_zero_timeout() {
        let mut config = ServiceConfig::default();
        config.timeouts.request_secs = 0;
        assert_eq!(
            validate_config(&config).unwrap_err(),
            vec![ValidationError::Zero {
                field: "timeouts.request_secs"
            }]
        );
    }

    #[test]
    fn test_metrics_address_only_checked_when_enabled() {
        let mut config = ServiceConfig::default();
        config.observability.metrics_address = "nowhere".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        assert!(validate_config(&config).is_err());
    }
}
