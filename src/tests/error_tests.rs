use crate::error::{ErrorContext, PlacerError};
use crate::placer_error;

#[test]
fn test_error_context_on_result() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "file not found"
    ));

    let placer_result = result.context("Failed to read event payload");
    assert!(placer_result.is_err());

    match placer_result {
        Err(PlacerError::Unknown(msg)) => {
            assert!(msg.contains("Failed to read event payload"));
            assert!(msg.contains("file not found"));
        }
        _ => panic!("Expected PlacerError::Unknown"),
    }
}

#[test]
fn test_error_context_on_option() {
    let option: Option<String> = None;
    let result = option.context("Project id missing");

    match result {
        Err(PlacerError::Unknown(msg)) => assert_eq!(msg, "Project id missing"),
        _ => panic!("Expected PlacerError::Unknown"),
    }
}

#[test]
fn test_error_context_with_closure() {
    let result: Result<i32, std::io::Error> = Err(std::io::Error::new(
        std::io::ErrorKind::PermissionDenied,
        "access denied"
    ));

    let placer_result = result.with_context(|| {
        format!("Failed to append output to: {}", "/tmp/github_output")
    });

    match placer_result {
        Err(PlacerError::Unknown(msg)) => {
            assert!(msg.contains("Failed to append output to: /tmp/github_output"));
            assert!(msg.contains("access denied"));
        }
        _ => panic!("Expected PlacerError::Unknown"),
    }
}

#[test]
fn test_placer_error_macro() {
    let error = placer_error!(FieldNotFound, "Status");
    match error {
        PlacerError::FieldNotFound(msg) => assert_eq!(msg, "Status"),
        _ => panic!("Expected PlacerError::FieldNotFound"),
    }

    let error = placer_error!(InvalidProjectUrl, "not a project: {}", "https://github.com/acme");
    match error {
        PlacerError::InvalidProjectUrl(msg) => assert_eq!(msg, "not a project: https://github.com/acme"),
        _ => panic!("Expected PlacerError::InvalidProjectUrl"),
    }
}

#[test]
fn test_configuration_errors_are_classified() {
    assert!(PlacerError::InvalidProjectUrl("x".to_string()).is_configuration());
    assert!(PlacerError::UnsupportedOwnerType("x".to_string()).is_configuration());
    assert!(PlacerError::ConfigError("x".to_string()).is_configuration());
    assert!(!PlacerError::ProjectNotFound("x".to_string()).is_configuration());
    assert!(!PlacerError::NoIterations("Iteration".to_string()).is_configuration());
}
