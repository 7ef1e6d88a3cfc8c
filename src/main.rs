//! sitestack - static website stack synthesizer
//!
//! Declares the hosting topology of a static website on a subdomain (S3
//! bucket, CloudFront distribution, ACM certificate, Route 53 alias record and
//! a publisher role) and renders it as a CloudFormation template.

use clap::Parser;
use miette::Diagnostic;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod common;
mod config;
mod error;
mod resources;
mod stack;
mod template;

use cli::{Cli, Commands};
use commands::helpers::StackInputs;

/// Log to stderr so a template printed on stdout stays clean
fn init_tracing(verbose: bool) {
    let log_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let inputs = StackInputs {
        context_args: cli.context_args(),
        context_file: cli.context_file,
        account: cli.account,
    };

    let result = match cli.command {
        Commands::Synth(args) => commands::synth::run(inputs, args),
        Commands::List(args) => commands::list::run(inputs, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        if let Some(help) = e.help() {
            eprintln!("  help: {}", help);
        }
        std::process::exit(1);
    }
}
