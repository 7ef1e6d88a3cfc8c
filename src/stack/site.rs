use crate::common::string_utils::logical_id;
use crate::config::{Site, StackEnv};
use crate::error::Result;
use crate::resources::acm::{self, CertificateIds};
use crate::resources::cloudfront::{
    self, DefaultCacheBehavior, Distribution, DistributionConfig, Origin, OriginAccessIdentity,
    PriceClass, SecurityPolicyProtocol, SslSupportMethod, ViewerCertificate, ViewerProtocolPolicy,
};
use crate::resources::iam::{PolicyDocument, PolicyStatement, Principal, Role};
use crate::resources::route53::{HostedZoneRef, RecordSet};
use crate::resources::s3::{
    self, Bucket, BucketEncryption, BucketPolicy, PublicAccessBlockConfiguration,
    WebsiteConfiguration,
};
use crate::template::{Expr, RemovalPolicy, ResourceRef, Template};

use super::{
    ADMIN_ROLE_NAME, ERROR_CODES, ERROR_DOCUMENT, ERROR_PAGE_PATH, ERROR_RESPONSE_CODE,
    INDEX_DOCUMENT, PUBLISHER_EXPORT,
};

const ORIGIN_ID: &str = "origin1";

/// Handles to the resources declared for one site
#[derive(Debug, Clone)]
pub struct SiteResources {
    pub publisher_role: ResourceRef,
    pub bucket: ResourceRef,
    pub distribution: ResourceRef,
}

pub(super) fn add_site(
    template: &mut Template,
    site: &Site,
    env: &StackEnv,
) -> Result<SiteResources> {
    let site_domain = site.site_domain();
    let suffix = site.id_suffix();
    let id = |base: &str| logical_id(base, &suffix);

    let zone = HostedZoneRef::from_export(&site.domain);
    tracing::debug!(site = %site_domain, zone = %zone.zone_name, "Defining site");

    let publisher_role = template.add(
        id("SitePublisherRole"),
        &Role::assumed_by(Principal::Aws(Expr::import_value(PUBLISHER_EXPORT)))
            .description("This role can be used to publish site content.")
            .role_name(format!("{site_domain}Publisher")),
    )?;

    let bucket = template.add(
        id("SiteBucket"),
        &Bucket {
            bucket_encryption: Some(BucketEncryption::s3_managed()),
            public_access_block_configuration: Some(PublicAccessBlockConfiguration::block_all()),
            website_configuration: Some(WebsiteConfiguration {
                index_document: INDEX_DOCUMENT.to_string(),
                error_document: ERROR_DOCUMENT.to_string(),
            }),
            removal_policy: Some(RemovalPolicy::Delete),
            ..Bucket::named(&site_domain)
        },
    )?;

    let origin_access_identity = template.add(
        id("OAI"),
        &OriginAccessIdentity::with_comment(format!("Allows CloudFront to reach {site_domain}")),
    )?;

    let bucket_resources = [s3::arn_for_objects(&bucket, "*"), s3::bucket_arn(&bucket)];
    let mut policy = PolicyDocument::default();
    policy.push(s3::enforce_ssl_statement(&bucket));
    policy.push(
        PolicyStatement::allow()
            .principal(Principal::Aws(publisher_role.get_att("Arn")))
            .actions(["s3:List*", "s3:Get*", "s3:Put*"])
            .resources(bucket_resources.clone()),
    );
    policy.push(
        PolicyStatement::allow()
            .principal(Principal::Aws(env.role_arn(ADMIN_ROLE_NAME)))
            .actions(["*"])
            .resources(bucket_resources),
    );
    policy.push(s3::grant_read_statement(
        &bucket,
        Principal::CanonicalUser(cloudfront::canonical_user_id(&origin_access_identity)),
    ));
    template.add(
        id("SiteBucketPolicy"),
        &BucketPolicy {
            bucket: bucket.reference(),
            policy_document: policy,
        },
    )?;

    let certificate = acm::add_dns_validated_certificate(
        template,
        &CertificateIds {
            certificate: id("SiteCertificate"),
            requestor_role: id("SiteCertificateRequestorRole"),
            requestor_policy: id("SiteCertificateRequestorPolicy"),
            requestor_function: id("SiteCertificateRequestorFunction"),
        },
        &site_domain,
        &zone,
    )?;

    let distribution = template.add(
        id("SiteDistribution"),
        &Distribution {
            distribution_config: DistributionConfig {
                aliases: vec![site_domain.clone()],
                custom_error_responses: cloudfront::error_responses(
                    &ERROR_CODES,
                    ERROR_RESPONSE_CODE,
                    ERROR_PAGE_PATH,
                ),
                default_cache_behavior: DefaultCacheBehavior::static_content(
                    ORIGIN_ID,
                    ViewerProtocolPolicy::RedirectToHttps,
                ),
                default_root_object: INDEX_DOCUMENT.to_string(),
                enabled: true,
                http_version: "http2".to_string(),
                ipv6_enabled: true,
                origins: vec![Origin::s3_bucket(ORIGIN_ID, &bucket, &origin_access_identity)],
                price_class: PriceClass::PriceClass100,
                viewer_certificate: ViewerCertificate {
                    acm_certificate_arn: certificate.get_att("Arn"),
                    minimum_protocol_version: SecurityPolicyProtocol::TlsV1_2_2019,
                    ssl_support_method: SslSupportMethod::SniOnly,
                },
            },
        },
    )?;

    template.add(
        id("SiteAliasRecord"),
        &RecordSet::cloudfront_alias(&site_domain, &zone, &distribution),
    )?;

    Ok(SiteResources {
        publisher_role,
        bucket,
        distribution,
    })
}

/// Values publishing tooling needs after deployment
pub(super) fn add_outputs(
    template: &mut Template,
    site: &Site,
    resources: &SiteResources,
) -> Result<()> {
    let suffix = site.id_suffix();
    template.add_output(
        logical_id("SiteUrl", &suffix),
        "Public URL of the site",
        Expr::literal(format!("https://{}", site.site_domain())),
    )?;
    template.add_output(
        logical_id("BucketName", &suffix),
        "Bucket holding the site content",
        resources.bucket.reference(),
    )?;
    template.add_output(
        logical_id("DistributionId", &suffix),
        "CloudFront distribution to invalidate after publishing",
        resources.distribution.reference(),
    )?;
    template.add_output(
        logical_id("PublisherRoleArn", &suffix),
        "Role to assume when publishing content",
        resources.publisher_role.get_att("Arn"),
    )?;
    Ok(())
}
