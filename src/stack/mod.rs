//! Static site stack definition
//!
//! Turns the `domain`/`subDomain` context into a CloudFormation template.
//! For every site it declares, in dependency order: a publisher role, the
//! content bucket and its policy, an origin access identity, a certificate
//! issued in `us-east-1`, the CloudFront distribution and the alias record.
//!
//! Construction is pure: nothing here talks to AWS, and building twice from
//! the same inputs renders byte-identical templates.

mod site;


use crate::config::{Context, SiteConfig, StackEnv};
use crate::error::Result;
use crate::template::Template;

pub const INDEX_DOCUMENT: &str = "index.html";
pub const ERROR_DOCUMENT: &str = "error.html";
pub const ERROR_PAGE_PATH: &str = "/error.html";
pub const ERROR_RESPONSE_CODE: u16 = 404;

/// Origin and server errors answered with the custom error page
pub const ERROR_CODES: [u16; 11] = [400, 403, 404, 405, 414, 416, 500, 501, 502, 503, 504];

/// Export holding the ARN of the user allowed to assume the publisher role
pub const PUBLISHER_EXPORT: &str = "UserArn";

/// Role in the deploying account that gets unrestricted bucket access
pub const ADMIN_ROLE_NAME: &str = "admin";

/// A validated stack definition, ready to synthesize
#[derive(Debug, Clone)]
pub struct SiteStack {
    config: SiteConfig,
    env: StackEnv,
}

impl SiteStack {
    /// Validate the context; fails before any resource exists
    pub fn new(context: &Context, env: StackEnv) -> Result<Self> {
        let config = SiteConfig::from_context(context)?;
        Ok(Self { config, env })
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn synthesize(&self) -> Result<Template> {
        let site_domains: Vec<String> = self.config.sites().map(|s| s.site_domain()).collect();
        let mut template = Template::new().with_description(format!(
            "Static website hosting for {}",
            site_domains.join(", ")
        ));

        for site in self.config.sites() {
            let resources = site::add_site(&mut template, &site, &self.env)?;
            site::add_outputs(&mut template, &site, &resources)?;
        }

        tracing::info!(
            sites = site_domains.len(),
            resources = template.resources.len(),
            "Synthesized stack"
        );
        Ok(template)
    }
}
