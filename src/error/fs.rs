//! File system errors

use super::SiteStackError;

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> SiteStackError {
    SiteStackError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> SiteStackError {
    SiteStackError::IoError {
        message: message.into(),
    }
}
