use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Template rendering format
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

/// Arguments for the synth command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Print the template for www.example.com:\n    sitestack synth -c domain=example.com -c subDomain=www\n\n\
                  Use the values from sitestack.json:\n    sitestack synth\n\n\
                  Write YAML to a file:\n    sitestack synth --format yaml -o site.template.yaml")]
pub struct SynthArgs {
    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Write the template to this file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Context value as key=value (repeatable, applied after the ones before the subcommand)
    #[arg(long = "context", short = 'c', value_name = "KEY=VALUE")]
    pub context: Vec<String>,
}
