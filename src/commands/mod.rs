//! Command implementations for sitestack CLI

pub mod completions;
pub mod helpers;
pub mod list;
pub mod synth;
pub mod version;
