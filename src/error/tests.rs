use super::*;

#[test]
fn test_error_display() {
    let err = Error::device(404, "<ResponseStatus>Invalid Operation</ResponseStatus>");
    assert_eq!(
        err.to_string(),
        "Device error: HTTP 404: <ResponseStatus>Invalid Operation</ResponseStatus>"
    );

    let err = Error::server_misconfigured("401 without WWW-Authenticate");
    assert_eq!(
        err.to_string(),
        "Server misconfigured: 401 without WWW-Authenticate"
    );

    let err = Error::response_too_large(2048, 1024);
    assert_eq!(
        err.to_string(),
        "Response size 2048 exceeds limit of 1024 bytes"
    );
}

#[test]
fn test_device_error_display_truncates_long_bodies() {
    let body = "e".repeat(500);
    let err = Error::device(500, body);
    let rendered = err.to_string();
    assert!(rendered.ends_with("..."));
    assert!(rendered.len() < 300);
}

#[test]
fn test_device_error_keeps_full_body() {
    let body = "e".repeat(500);
    let err = Error::device(500, body.clone());
    assert_eq!(err.device_body(), Some(body.as_str()));
}

#[test]
fn test_context_wrapping_and_root_cause() {
    let err = Error::device(403, "<ResponseStatus/>")
        .context("while toggling motion detection")
        .context("during camera setup");

    assert_eq!(err.to_string(), "during camera setup");
    assert_eq!(err.iter_chain().count(), 3);
    assert!(matches!(err.root_cause(), Error::Device(_)));
    assert_eq!(err.device_status(), Some(403));
}

#[test]
fn test_context_ext_on_result() {
    let result: Result<()> = Err(Error::network("connection refused"));
    let err = result.context("probing device").unwrap_err();
    assert_eq!(err.to_string(), "probing device");
    assert!(matches!(err.root_cause(), Error::Network(_)));

    let result: Result<()> = Err(Error::network("connection refused"));
    let err = result
        .with_context(|| format!("probing device {}", "10.0.0.5"))
        .unwrap_err();
    assert_eq!(err.to_string(), "probing device 10.0.0.5");
}

#[test]
fn test_authentication_failed_exposes_cause() {
    let err = Error::authentication_failed(Error::device(401, "<ResponseStatus/>"));

    assert!(err.is_auth_failure());
    assert_eq!(err.to_string(), "Digest authentication failed");
    assert!(matches!(
        err.auth_failure_cause(),
        Some(Error::Device(details)) if details.status == 401
    ));
    // status of the rejected retry stays reachable without unwrapping by hand
    assert_eq!(err.device_status(), Some(401));
}

#[test]
fn test_auth_failure_detected_under_context() {
    let err = Error::authentication_failed(Error::device(401, "")).context("reading device info");
    assert!(err.is_auth_failure());
    assert_eq!(err.device_status(), Some(401));
}

#[test]
fn test_report_renders_chain() {
    let err = Error::authentication_failed(Error::device(401, "denied")).context("device setup");
    let report = err.report();

    assert!(report.starts_with("device setup"));
    assert!(report.contains("Caused by: Digest authentication failed"));
    assert!(report.contains("Caused by: Device error: HTTP 401: denied"));
}

#[test]
fn test_retryability() {
    assert!(Error::network("refused").is_retryable());
    assert!(Error::from(NetworkError::Timeout).is_retryable());
    assert!(Error::network("refused").context("probe").is_retryable());

    assert!(!Error::device(500, "").is_retryable());
    assert!(!Error::server_misconfigured("basic only").is_retryable());
    assert!(!Error::authentication_failed(Error::device(401, "")).is_retryable());
}

#[test]
fn test_as_network_penetrates_context() {
    let err = Error::from(NetworkError::Timeout).context("probe");
    assert!(matches!(err.as_network(), Some(NetworkError::Timeout)));
    assert!(err.device_status().is_none());
}

#[test]
fn test_as_malformed_challenge() {
    let err: Error = ChallengeError::unsupported_qop("auth-int").into();
    assert!(matches!(
        err.as_malformed_challenge(),
        Some(ChallengeError::UnsupportedQop { offered }) if offered == "auth-int"
    ));
}

#[test]
fn test_error_stays_small() {
    // boxed payloads keep the enum cheap to move through Result
    assert!(std::mem::size_of::<Error>() <= 56);
}
