//! Command helper utilities

use std::path::{Path, PathBuf};

use crate::config::{Context, StackEnv};
use crate::error::fs::io_error;
use crate::error::Result;
use crate::stack::SiteStack;

/// Where the stack definition reads its inputs from
#[derive(Debug, Clone, Default)]
pub struct StackInputs {
    pub context_file: Option<PathBuf>,
    pub context_args: Vec<String>,
    pub account: Option<String>,
}

/// Build the layered context: context file first, then `-c` arguments
///
/// An explicit context file must exist; without one, `dir` is searched for
/// a default context file and it is fine to find none.
pub fn load_context(inputs: &StackInputs, dir: &Path) -> Result<Context> {
    let file = match &inputs.context_file {
        Some(path) => Some(path.clone()),
        None => Context::discover(dir),
    };

    let mut context = match file {
        Some(path) => Context::load_file(&path)?,
        None => {
            tracing::debug!(dir = %dir.display(), "No context file found");
            Context::new()
        }
    };
    context.apply_args(&inputs.context_args)?;
    if context.is_empty() {
        tracing::debug!("Context is empty");
    }
    Ok(context)
}

/// Validate the inputs found from the current directory into a stack
pub fn load_stack(inputs: &StackInputs) -> Result<SiteStack> {
    let dir = std::env::current_dir()
        .map_err(|e| io_error(format!("Failed to get current directory: {}", e)))?;
    load_stack_from(inputs, &dir)
}

pub fn load_stack_from(inputs: &StackInputs, dir: &Path) -> Result<SiteStack> {
    let context = load_context(inputs, dir)?;
    SiteStack::new(&context, StackEnv::with_account(inputs.account.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SiteStackError;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_discovered_file_and_args_are_layered() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("sitestack.json"),
            r#"{ "context": { "domain": "example.com", "subDomain": "www" } }"#,
        )
        .unwrap();

        let inputs = StackInputs {
            context_args: vec!["subDomain=blog".to_string()],
            ..StackInputs::default()
        };
        let context = load_context(&inputs, temp.path()).unwrap();
        assert_eq!(context.try_get("domain"), Some(&json!("example.com")));
        assert_eq!(context.try_get("subDomain"), Some(&json!("blog")));
    }

    #[test]
    fn test_no_context_file_is_not_an_error() {
        let temp = TempDir::new().unwrap();
        let context = load_context(&StackInputs::default(), temp.path()).unwrap();
        assert!(context.is_empty());
    }

    #[test]
    fn test_explicit_context_file_must_exist() {
        let temp = TempDir::new().unwrap();
        let inputs = StackInputs {
            context_file: Some(temp.path().join("missing.json")),
            ..StackInputs::default()
        };
        let err = load_context(&inputs, temp.path()).unwrap_err();
        assert!(matches!(err, SiteStackError::ContextReadFailed { .. }));
    }

    #[test]
    fn test_load_stack_reports_missing_domain() {
        let temp = TempDir::new().unwrap();
        let inputs = StackInputs {
            context_args: vec!["subDomain=www".to_string()],
            ..StackInputs::default()
        };
        let err = load_stack_from(&inputs, temp.path()).unwrap_err();
        assert!(matches!(
            err,
            SiteStackError::MissingConfiguration { ref key } if key == "domain"
        ));
    }
}
