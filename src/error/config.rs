//! Configuration errors

use super::SiteStackError;

/// Creates a missing configuration error
pub fn missing(key: impl Into<String>) -> SiteStackError {
    SiteStackError::MissingConfiguration { key: key.into() }
}

/// Creates an invalid configuration error
pub fn invalid(key: impl Into<String>, reason: impl Into<String>) -> SiteStackError {
    SiteStackError::InvalidConfiguration {
        key: key.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid context argument error
pub fn invalid_argument(arg: impl Into<String>) -> SiteStackError {
    SiteStackError::InvalidContextArgument { arg: arg.into() }
}

/// Creates a context read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> SiteStackError {
    SiteStackError::ContextReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a context parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> SiteStackError {
    SiteStackError::ContextParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
