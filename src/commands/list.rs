//! List command implementation
//!
//! Prints the resources the stack declares, grouped per site by logical id,
//! or the number of resources per CloudFormation type.

use console::Style;

use crate::cli::ListArgs;
use crate::commands::helpers::{StackInputs, load_stack};
use crate::error::Result;
use crate::template::Template;

/// Run list command
pub fn run(inputs: StackInputs, args: ListArgs) -> Result<()> {
    let stack = load_stack(&inputs)?;
    let template = stack.synthesize()?;

    let sites: Vec<String> = stack.config().sites().map(|s| s.site_domain()).collect();
    println!(
        "{} {}",
        Style::new().bold().apply_to("Sites:"),
        sites.join(", ")
    );
    println!();

    let lines = if args.counts {
        count_lines(&template)
    } else {
        resource_lines(&template)
    };
    for line in lines {
        println!("{}", line);
    }

    Ok(())
}

fn resource_lines(template: &Template) -> Vec<String> {
    let width = template.resources.keys().map(String::len).max().unwrap_or(0);
    let dim = Style::new().dim();
    template
        .resources
        .iter()
        .map(|(id, resource)| {
            format!(
                "  {:<width$}  {}",
                id,
                dim.apply_to(&resource.resource_type),
                width = width
            )
        })
        .collect()
}

fn count_lines(template: &Template) -> Vec<String> {
    template
        .resource_counts()
        .into_iter()
        .map(|(resource_type, count)| format!("  {:>3}  {}", count, resource_type))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::load_stack_from;
    use crate::common::string_utils::alphanumeric_suffix;
    use tempfile::TempDir;

    fn template() -> Template {
        let temp = TempDir::new().unwrap();
        let inputs = StackInputs {
            context_args: vec![
                "domain=testdomain.com".to_string(),
                "subDomain=test".to_string(),
            ],
            ..StackInputs::default()
        };
        load_stack_from(&inputs, temp.path())
            .unwrap()
            .synthesize()
            .unwrap()
    }

    #[test]
    fn test_resource_lines_cover_every_resource() {
        let template = template();
        let lines = resource_lines(&template);
        assert_eq!(lines.len(), template.resources.len());
        let suffix = alphanumeric_suffix("test.testdomain.com");
        assert!(
            lines
                .iter()
                .any(|l| l.contains(&format!("SiteBucket{suffix}")) && l.contains("AWS::S3::Bucket"))
        );
    }

    #[test]
    fn test_count_lines() {
        let lines = count_lines(&template());
        assert!(lines.contains(&"    2  AWS::IAM::Role".to_string()));
        assert!(lines.contains(&"    1  AWS::Route53::RecordSet".to_string()));
    }
}
