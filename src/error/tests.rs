//! Error type tests
//!
//! Tests for SiteStackError and its conversions.

use crate::error::SiteStackError;
use crate::error::config::{invalid, invalid_argument, missing, parse_failed, read_failed};
use crate::error::fs::{io_error, write_failed};
use crate::error::template::{duplicate_id, serialization_failed};
use miette::Diagnostic;

macro_rules! test_error_contains {
    ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
        #[test]
        fn $test_name() {
            let err = $err;
            let error_string = err.to_string();
            $(
                assert!(error_string.contains($contains),
                    "Error message should contain '{}', got: {}",
                    $contains,
                    error_string
                );
            )+
        }
    };
}

#[test]
fn test_missing_configuration_display() {
    let err = missing("domain");
    assert_eq!(err.to_string(), "Could not get domain from context!");
}

#[test]
fn test_missing_configuration_carries_key() {
    let err = missing("subDomain");
    assert!(matches!(
        err,
        SiteStackError::MissingConfiguration { ref key } if key == "subDomain"
    ));
}

#[test]
fn test_error_code() {
    let err = missing("domain");
    assert_eq!(
        err.code().map(|c| c.to_string()),
        Some("sitestack::config::missing".to_string())
    );
}

#[test]
fn test_missing_configuration_help_names_key() {
    let err = missing("subDomain");
    let help = err.help().map(|h| h.to_string()).unwrap_or_default();
    assert!(help.contains("-c subDomain=<value>"));
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: SiteStackError = io_err.into();
    assert!(matches!(err, SiteStackError::IoError { .. }));
}

#[test]
fn test_json_error_conversion() {
    let parse_result: std::result::Result<serde_json::Value, _> =
        serde_json::from_str("invalid json content");
    let err: SiteStackError = parse_result.unwrap_err().into();
    assert!(matches!(err, SiteStackError::TemplateSerializationFailed { .. }));
}

#[test]
fn test_yaml_error_conversion() {
    let parse_result: std::result::Result<serde_yaml::Value, _> =
        serde_yaml::from_str("invalid: yaml: content: [unclosed");
    let err: SiteStackError = parse_result.unwrap_err().into();
    assert!(matches!(err, SiteStackError::TemplateSerializationFailed { .. }));
}

test_error_contains!(
    test_invalid_configuration,
    invalid("subDomain", "must not be empty"),
    "subDomain",
    "must not be empty"
);

test_error_contains!(
    test_invalid_context_argument,
    invalid_argument("domain"),
    "Invalid context argument: domain"
);

test_error_contains!(
    test_context_read_failed,
    read_failed("sitestack.json", "permission denied"),
    "sitestack.json"
);

test_error_contains!(
    test_context_parse_failed,
    parse_failed("sitestack.yaml", "expected a map"),
    "sitestack.yaml",
    "expected a map"
);

test_error_contains!(
    test_duplicate_logical_id,
    duplicate_id("SiteBucketwwwexamplecom"),
    "SiteBucketwwwexamplecom"
);

test_error_contains!(
    test_serialization_failed,
    serialization_failed("recursion limit"),
    "recursion limit"
);

test_error_contains!(
    test_file_write_failed,
    write_failed("/tmp/template.json", "read-only"),
    "/tmp/template.json"
);

test_error_contains!(test_io_error, io_error("broken pipe"), "IO error: broken pipe");
