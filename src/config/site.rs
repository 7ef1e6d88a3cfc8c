//! Site inputs read from the context
//!
//! `domain` and `subDomain` are required. Both are checked before anything
//! else happens, `domain` first, so a missing key never leaves a half-built
//! template behind.

use std::collections::BTreeMap;

use serde_json::Value;

use super::context::Context;
use crate::common::string_utils::alphanumeric_suffix;
use crate::error::Result;
use crate::error::config::{invalid, missing};

pub const DOMAIN_KEY: &str = "domain";
pub const SUB_DOMAIN_KEY: &str = "subDomain";

/// One site served at `<sub_domain>.<domain>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    pub domain: String,
    pub sub_domain: String,
}

impl Site {
    /// Fully-qualified host name of the site
    pub fn site_domain(&self) -> String {
        format!("{}.{}", self.sub_domain, self.domain)
    }

    /// Appended to every logical id so several sites fit in one template
    pub fn id_suffix(&self) -> String {
        alphanumeric_suffix(&self.site_domain())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub domain: String,
    pub sub_domains: Vec<String>,
}

impl SiteConfig {
    pub fn from_context(context: &Context) -> Result<Self> {
        let domain = required_string(context, DOMAIN_KEY)?;
        let sub_domains = match context.try_get(SUB_DOMAIN_KEY) {
            None | Some(Value::Null) => return Err(missing(SUB_DOMAIN_KEY)),
            Some(Value::Array(items)) => {
                if items.is_empty() {
                    return Err(invalid(SUB_DOMAIN_KEY, "list must not be empty"));
                }
                items
                    .iter()
                    .map(|item| non_empty_string(SUB_DOMAIN_KEY, item))
                    .collect::<Result<Vec<_>>>()?
            }
            Some(value) => vec![non_empty_string(SUB_DOMAIN_KEY, value)?],
        };
        let config = Self {
            domain,
            sub_domains,
        };
        config.check_distinct_ids()?;
        Ok(config)
    }

    /// Every site needs its own logical-id suffix
    fn check_distinct_ids(&self) -> Result<()> {
        let mut seen: BTreeMap<String, Site> = BTreeMap::new();
        for site in self.sites() {
            if let Some(other) = seen.get(&site.id_suffix()) {
                let reason = if other.sub_domain == site.sub_domain {
                    format!("'{}' is listed more than once", site.sub_domain)
                } else {
                    format!(
                        "'{}' and '{}' both reduce to the resource name suffix '{}'",
                        other.sub_domain,
                        site.sub_domain,
                        site.id_suffix()
                    )
                };
                return Err(invalid(SUB_DOMAIN_KEY, reason));
            }
            seen.insert(site.id_suffix(), site);
        }
        Ok(())
    }

    pub fn sites(&self) -> impl Iterator<Item = Site> + '_ {
        self.sub_domains.iter().map(|sub_domain| Site {
            domain: self.domain.clone(),
            sub_domain: sub_domain.clone(),
        })
    }
}

fn required_string(context: &Context, key: &str) -> Result<String> {
    match context.try_get(key) {
        None | Some(Value::Null) => Err(missing(key)),
        Some(value) => non_empty_string(key, value),
    }
}

fn non_empty_string(key: &str, value: &Value) -> Result<String> {
    let text = value
        .as_str()
        .ok_or_else(|| invalid(key, format!("expected a string, found {value}")))?
        .trim();
    if text.is_empty() {
        return Err(invalid(key, "must not be empty"));
    }
    Ok(text.to_string())
}
