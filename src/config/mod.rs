//! Configuration for sitestack
//!
//! This module contains:
//! - [`context`]: the key-value context (`sitestack.json` plus `-c` arguments)
//! - [`site`]: the validated `domain`/`subDomain` inputs
//! - [`env`]: the deployment environment (account)

pub mod context;
pub mod env;
pub mod site;

pub use context::Context;
pub use env::StackEnv;
pub use site::{Site, SiteConfig};
