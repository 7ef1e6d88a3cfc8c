//! Synth command implementation
//!
//! Renders the stack as a CloudFormation template, to stdout or a file.

use std::io::Write;

use crate::cli::{OutputFormat, SynthArgs};
use crate::commands::helpers::{StackInputs, load_stack};
use crate::error::fs::{io_error, write_failed};
use crate::error::Result;
use crate::template::Template;

/// Run synth command
pub fn run(inputs: StackInputs, args: SynthArgs) -> Result<()> {
    let stack = load_stack(&inputs)?;
    let template = stack.synthesize()?;
    let rendered = render(&template, args.format)?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, rendered)
                .map_err(|e| write_failed(path.display().to_string(), e.to_string()))?;
            tracing::info!(path = %path.display(), "Wrote template");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|e| io_error(format!("Failed to write template: {}", e)))?;
        }
    }

    Ok(())
}

pub fn render(template: &Template, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => template.to_json(),
        OutputFormat::Yaml => template.to_yaml(),
    }
}
