//! Template errors

use super::SiteStackError;

/// Creates a duplicate logical id error
pub fn duplicate_id(id: impl Into<String>) -> SiteStackError {
    SiteStackError::DuplicateLogicalId { id: id.into() }
}

/// Creates a template serialization error
pub fn serialization_failed(reason: impl Into<String>) -> SiteStackError {
    SiteStackError::TemplateSerializationFailed {
        reason: reason.into(),
    }
}
