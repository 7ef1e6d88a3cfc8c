//! Error types and handling for sitestack
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Context and site configuration errors
//! - [`template`]: Template assembly and rendering errors
//! - [`fs`]: File system errors

pub mod config;
pub mod fs;
pub mod template;

#[cfg(test)]
mod tests;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for sitestack operations
#[derive(Error, Diagnostic, Debug)]
pub enum SiteStackError {
    // Configuration errors
    #[error("Could not get {key} from context!")]
    #[diagnostic(
        code(sitestack::config::missing),
        help("Pass it with `-c {key}=<value>` or add it to the \"context\" map of sitestack.json")
    )]
    MissingConfiguration { key: String },

    #[error("Invalid value for context key '{key}': {reason}")]
    #[diagnostic(code(sitestack::config::invalid))]
    InvalidConfiguration { key: String, reason: String },

    #[error("Invalid context argument: {arg}")]
    #[diagnostic(
        code(sitestack::config::invalid_argument),
        help("Context arguments use the form key=value, e.g. -c subDomain=www")
    )]
    InvalidContextArgument { arg: String },

    #[error("Failed to read context file: {path}: {reason}")]
    #[diagnostic(code(sitestack::config::read_failed))]
    ContextReadFailed { path: String, reason: String },

    #[error("Failed to parse context file: {path}: {reason}")]
    #[diagnostic(code(sitestack::config::parse_failed))]
    ContextParseFailed { path: String, reason: String },

    // Template errors
    #[error("Duplicate logical id in template: {id}")]
    #[diagnostic(
        code(sitestack::template::duplicate_id),
        help("Every site in a stack needs a distinct subDomain")
    )]
    DuplicateLogicalId { id: String },

    #[error("Failed to serialize template: {reason}")]
    #[diagnostic(code(sitestack::template::serialization_failed))]
    TemplateSerializationFailed { reason: String },

    // CLI errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(sitestack::cli::unsupported_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnsupportedShell { shell: String },

    // File system errors
    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(sitestack::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(sitestack::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for SiteStackError {
    fn from(err: std::io::Error) -> Self {
        SiteStackError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for SiteStackError {
    fn from(err: serde_yaml::Error) -> Self {
        SiteStackError::TemplateSerializationFailed {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for SiteStackError {
    fn from(err: serde_json::Error) -> Self {
        SiteStackError::TemplateSerializationFailed {
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, SiteStackError>;
