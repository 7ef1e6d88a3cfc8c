//! Version command implementation

use clap::CommandFactory;

use crate::cli::Cli;
use crate::error::Result;

/// Print the same text as `sitestack --version`
pub fn run() -> Result<()> {
    print!("{}", Cli::command().render_long_version());
    Ok(())
}
