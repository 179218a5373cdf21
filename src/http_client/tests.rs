use super::*;
use crate::error::{ConfigValidationError, Error};
use std::time::Duration;

#[test]
fn test_default_config() {
    let config = HttpConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(config.connect_timeout, Duration::from_secs(10));
    assert_eq!(config.max_response_size, 10 * 1024 * 1024);
    assert_eq!(config.pool_max_idle_per_host, 10);
    assert_eq!(config.pool_idle_timeout, Duration::from_secs(90));
}

#[test]
fn test_default_user_agent_carries_version() {
    let config = HttpConfig::default();
    assert!(config.user_agent.starts_with("isapi-client/"));
    assert!(config.user_agent.len() > "isapi-client/".len());
}

#[test]
fn test_validate_default_config() {
    let report = HttpConfig::default().validate().unwrap();
    assert!(report.is_ok());
}

#[test]
fn test_validate_rejects_excessive_timeout() {
    let config = HttpConfig {
        timeout: Duration::from_secs(600),
        ..HttpConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigValidationError::ValueTooHigh { .. }));
    assert_eq!(err.field_name(), "timeout");
}

#[test]
fn test_validate_warns_on_very_short_timeout() {
    let config = HttpConfig {
        timeout: Duration::from_millis(200),
        ..HttpConfig::default()
    };
    let report = config.validate().unwrap();
    assert!(report.has_warnings());
    assert!(report.warnings[0].contains("very short"));
}

#[test]
fn test_validate_rejects_zero_connect_timeout() {
    let config = HttpConfig {
        connect_timeout: Duration::ZERO,
        ..HttpConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert_eq!(err.field_name(), "connect_timeout");
}

#[test]
fn test_validate_rejects_zero_response_size() {
    let config = HttpConfig {
        max_response_size: 0,
        ..HttpConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigValidationError::ValueInvalid { .. }));
    assert_eq!(err.field_name(), "max_response_size");
}

#[test]
fn test_validate_rejects_excessive_response_size() {
    let config = HttpConfig {
        max_response_size: 200 * 1024 * 1024,
        ..HttpConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert!(matches!(err, ConfigValidationError::ValueTooHigh { .. }));
    assert_eq!(err.field_name(), "max_response_size");
}

#[test]
fn test_validate_rejects_empty_user_agent() {
    let config = HttpConfig {
        user_agent: String::new(),
        ..HttpConfig::default()
    };
    let err = config.validate().unwrap_err();
    assert_eq!(err.field_name(), "user_agent");
}

#[test]
fn test_client_with_defaults() {
    let client = DigestClient::with_defaults().unwrap();
    assert_eq!(client.config().timeout, Duration::from_secs(30));
}

#[test]
fn test_client_rejects_invalid_config() {
    let config = HttpConfig {
        timeout: Duration::from_secs(600),
        ..HttpConfig::default()
    };
    let err = DigestClient::new(config).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    assert!(err.to_string().contains("timeout"));
}

#[test]
fn test_client_clone_shares_configuration() {
    let client = DigestClient::with_defaults().unwrap();
    let clone = client.clone();
    assert_eq!(clone.config().user_agent, client.config().user_agent);
}
