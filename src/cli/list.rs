use clap::Parser;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List every resource with its type:\n    sitestack list\n\n\
                  Count resources per type:\n    sitestack list --counts")]
pub struct ListArgs {
    /// Show the number of resources per type instead of each resource
    #[arg(long)]
    pub counts: bool,

    /// Context value as key=value (repeatable, applied after the ones before the subcommand)
    #[arg(long = "context", short = 'c', value_name = "KEY=VALUE")]
    pub context: Vec<String>,
}
