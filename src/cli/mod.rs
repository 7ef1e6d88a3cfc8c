//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - synth: Synth command arguments
//! - list: List command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod list;
pub mod synth;

pub use completions::CompletionsArgs;
pub use list::ListArgs;
pub use synth::{OutputFormat, SynthArgs};

/// Shown by `--version` and the `version` command
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nMinimum Rust version: ",
    env!("CARGO_PKG_RUST_VERSION"),
    "\nTemplate format version: 2010-09-09",
    "\nCertificate region: us-east-1",
);

/// sitestack - static website stack synthesizer
///
/// Declare a static website on a subdomain and render it as a CloudFormation template.
#[derive(Parser, Debug)]
#[command(
    name = "sitestack",
    author,
    version,
    long_version = LONG_VERSION,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Static website hosting stacks for CloudFormation",
    long_about = "sitestack declares an S3 bucket, CloudFront distribution, ACM certificate, \
                  Route 53 alias record and publisher role for a site at <subDomain>.<domain>, \
                  and renders them as a CloudFormation template.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  sitestack synth -c domain=example.com -c subDomain=www   \x1b[90m# Print the template\x1b[0m\n   \
                  sitestack synth --format yaml -o site.yaml               \x1b[90m# Write YAML to a file\x1b[0m\n   \
                  sitestack list --counts                                  \x1b[90m# Count resources per type\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Context file (defaults to sitestack.json, .yaml or .yml in the current directory)
    #[arg(long, global = true, env = "SITESTACK_CONTEXT_FILE")]
    pub context_file: Option<PathBuf>,

    /// Context value as key=value (repeatable, overrides the context file)
    #[arg(long = "context", short = 'c', value_name = "KEY=VALUE")]
    pub context: Vec<String>,

    /// Account id used for the admin role ARN (resolved at deploy time when omitted)
    #[arg(long, global = true, env = "CDK_DEFAULT_ACCOUNT")]
    pub account: Option<String>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the stack as a CloudFormation template
    Synth(SynthArgs),

    /// List the resources the stack declares
    List(ListArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

impl Cli {
    /// Context arguments in the order they were given
    ///
    /// Values after the subcommand come last, so they win over the ones
    /// before it.
    pub fn context_args(&self) -> Vec<String> {
        let after: &[String] = match &self.command {
            Commands::Synth(args) => args.context.as_slice(),
            Commands::List(args) => args.context.as_slice(),
            Commands::Version | Commands::Completions(_) => &[],
        };
        self.context.iter().chain(after).cloned().collect()
    }
}
