//! Key-value context the stack definition reads its inputs from
//!
//! Values come from a context file (`sitestack.json`, `.yaml` or `.yml`) and
//! from `-c key=value` arguments, applied in that order so arguments win.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;

use crate::error::config::{invalid_argument, parse_failed, read_failed};
use crate::error::Result;

/// File names searched for, in order, when no context file is given
pub const CONTEXT_FILE_NAMES: &[&str] = &["sitestack.json", "sitestack.yaml", "sitestack.yml"];

/// Either `{"context": {...}}` as in `cdk.json`, or the bare map
#[derive(Deserialize)]
#[serde(untagged)]
enum ContextFile {
    Wrapped { context: BTreeMap<String, Value> },
    Bare(BTreeMap<String, Value>),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Context {
    values: BTreeMap<String, Value>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Find the first known context file in `dir`
    pub fn discover(dir: &Path) -> Option<PathBuf> {
        CONTEXT_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }

    /// Load a context file; YAML when the extension says so, JSON otherwise
    pub fn load_file(path: &Path) -> Result<Self> {
        let display = path.display().to_string();
        let content =
            std::fs::read_to_string(path).map_err(|e| read_failed(&display, e.to_string()))?;
        let is_yaml = matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("yaml" | "yml")
        );
        let file: ContextFile = if is_yaml {
            serde_yaml::from_str(&content).map_err(|e| parse_failed(&display, e.to_string()))?
        } else {
            serde_json::from_str(&content).map_err(|e| parse_failed(&display, e.to_string()))?
        };
        let values = match file {
            ContextFile::Wrapped { context } => context,
            ContextFile::Bare(values) => values,
        };
        tracing::debug!(path = %path.display(), keys = values.len(), "Loaded context file");
        Ok(Self { values })
    }

    /// Apply `key=value` arguments; values are kept as plain strings
    pub fn apply_args<S: AsRef<str>>(&mut self, args: &[S]) -> Result<()> {
        for arg in args {
            let arg = arg.as_ref();
            let (key, value) = arg
                .split_once('=')
                .filter(|(key, _)| !key.trim().is_empty())
                .ok_or_else(|| invalid_argument(arg))?;
            self.set(key.trim(), value);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SiteStackError;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_load_wrapped_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("sitestack.json");
        std::fs::write(
            &path,
            r#"{ "app": "ignored", "context": { "domain": "example.com", "subDomain": "www" } }"#,
        )
        .unwrap();

        let context = Context::load_file(&path).unwrap();
        assert_eq!(context.try_get("domain"), Some(&json!("example.com")));
        assert_eq!(context.try_get("subDomain"), Some(&json!("www")));
        assert!(context.try_get("app").is_none());
    }

    #[test]
    fn test_load_bare_yaml() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("sitestack.yaml");
        std::fs::write(&path, "domain: example.com\nsubDomain:\n  - www\n  - blog\n").unwrap();

        let context = Context::load_file(&path).unwrap();
        assert_eq!(context.try_get("subDomain"), Some(&json!(["www", "blog"])));
    }

    #[test]
    fn test_load_invalid_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("sitestack.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let err = Context::load_file(&path).unwrap_err();
        assert!(matches!(err, SiteStackError::ContextParseFailed { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = Context::load_file(&temp.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, SiteStackError::ContextReadFailed { .. }));
    }

    #[test]
    fn test_discover_prefers_json() {
        let temp = TempDir::new().unwrap();
        assert!(Context::discover(temp.path()).is_none());

        std::fs::write(temp.path().join("sitestack.yml"), "{}").unwrap();
        std::fs::write(temp.path().join("sitestack.json"), "{}").unwrap();
        assert_eq!(
            Context::discover(temp.path()),
            Some(temp.path().join("sitestack.json"))
        );
    }

    #[test]
    fn test_args_override_file_values() {
        let mut context = Context::new();
        context.set("subDomain", "www");
        context
            .apply_args(&["subDomain=blog", "domain=example.com"])
            .unwrap();
        assert_eq!(context.try_get("subDomain"), Some(&json!("blog")));
        assert_eq!(context.try_get("domain"), Some(&json!("example.com")));
    }

    #[test]
    fn test_arg_value_may_contain_equals() {
        let mut context = Context::new();
        context.apply_args(&["note=a=b"]).unwrap();
        assert_eq!(context.try_get("note"), Some(&json!("a=b")));
    }

    #[test]
    fn test_arg_without_equals_rejected() {
        let mut context = Context::new();
        let err = context.apply_args(&["domain"]).unwrap_err();
        assert!(matches!(err, SiteStackError::InvalidContextArgument { .. }));

        let err = context.apply_args(&["=value"]).unwrap_err();
        assert!(matches!(err, SiteStackError::InvalidContextArgument { .. }));
    }
}
