//! CloudFront distributions and origin access identities

use serde::Serialize;

use crate::template::{CfnResource, Expr, ResourceRef};

/// Canonical hosted zone of every CloudFront distribution, used by alias records
pub const CLOUDFRONT_HOSTED_ZONE_ID: &str = "Z2FDTNDATAQYW2";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct OriginAccessIdentityConfig {
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct OriginAccessIdentity {
    pub cloud_front_origin_access_identity_config: OriginAccessIdentityConfig,
}

impl CfnResource for OriginAccessIdentity {
    const TYPE: &'static str = "AWS::CloudFront::CloudFrontOriginAccessIdentity";
}

impl OriginAccessIdentity {
    pub fn with_comment(comment: impl Into<String>) -> Self {
        Self {
            cloud_front_origin_access_identity_config: OriginAccessIdentityConfig {
                comment: comment.into(),
            },
        }
    }
}

/// Principal expression S3 bucket policies use to admit `identity`
pub fn canonical_user_id(identity: &ResourceRef) -> Expr {
    identity.get_att("S3CanonicalUserId")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewerProtocolPolicy {
    RedirectToHttps,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SslSupportMethod {
    SniOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SecurityPolicyProtocol {
    #[serde(rename = "TLSv1.2_2019")]
    TlsV1_2_2019,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PriceClass {
    #[serde(rename = "PriceClass_100")]
    PriceClass100,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomErrorResponse {
    pub error_code: u16,
    pub response_code: u16,
    pub response_page_path: String,
}

/// Rewrite every code in `error_codes` to `response_code` served from `page_path`
pub fn error_responses(
    error_codes: &[u16],
    response_code: u16,
    page_path: &str,
) -> Vec<CustomErrorResponse> {
    error_codes
        .iter()
        .map(|&error_code| CustomErrorResponse {
            error_code,
            response_code,
            response_page_path: page_path.to_string(),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Cookies {
    pub forward: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ForwardedValues {
    pub query_string: bool,
    pub cookies: Cookies,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DefaultCacheBehavior {
    pub allowed_methods: Vec<String>,
    pub cached_methods: Vec<String>,
    pub compress: bool,
    pub forwarded_values: ForwardedValues,
    pub target_origin_id: String,
    pub viewer_protocol_policy: ViewerProtocolPolicy,
}

impl DefaultCacheBehavior {
    /// GET/HEAD only, no query strings or cookies forwarded
    pub fn static_content(target_origin_id: impl Into<String>, policy: ViewerProtocolPolicy) -> Self {
        let read_methods = vec!["GET".to_string(), "HEAD".to_string()];
        Self {
            allowed_methods: read_methods.clone(),
            cached_methods: read_methods,
            compress: true,
            forwarded_values: ForwardedValues {
                query_string: false,
                cookies: Cookies {
                    forward: "none".to_string(),
                },
            },
            target_origin_id: target_origin_id.into(),
            viewer_protocol_policy: policy,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct S3OriginConfig {
    pub origin_access_identity: Expr,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Origin {
    pub domain_name: Expr,
    pub id: String,
    pub s3_origin_config: S3OriginConfig,
}

impl Origin {
    /// Bucket origin reachable only through `identity`
    pub fn s3_bucket(id: impl Into<String>, bucket: &ResourceRef, identity: &ResourceRef) -> Self {
        Self {
            domain_name: bucket.get_att("RegionalDomainName"),
            id: id.into(),
            s3_origin_config: S3OriginConfig {
                origin_access_identity: Expr::join(
                    "",
                    vec![
                        Expr::literal("origin-access-identity/cloudfront/"),
                        identity.reference(),
                    ],
                ),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ViewerCertificate {
    pub acm_certificate_arn: Expr,
    pub minimum_protocol_version: SecurityPolicyProtocol,
    pub ssl_support_method: SslSupportMethod,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DistributionConfig {
    pub aliases: Vec<String>,
    pub custom_error_responses: Vec<CustomErrorResponse>,
    pub default_cache_behavior: DefaultCacheBehavior,
    pub default_root_object: String,
    pub enabled: bool,
    pub http_version: String,
    #[serde(rename = "IPV6Enabled")]
    pub ipv6_enabled: bool,
    pub origins: Vec<Origin>,
    pub price_class: PriceClass,
    pub viewer_certificate: ViewerCertificate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Distribution {
    pub distribution_config: DistributionConfig,
}

impl CfnResource for Distribution {
    const TYPE: &'static str = "AWS::CloudFront::Distribution";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_responses_map_every_code() {
        let responses = error_responses(&[403, 404, 500], 404, "/error.html");
        assert_eq!(responses.len(), 3);
        assert!(responses.iter().all(|r| r.response_code == 404));
        assert_eq!(responses[2].error_code, 500);
        assert_eq!(responses[0].response_page_path, "/error.html");
    }

    #[test]
    fn test_enum_wire_names() {
        assert_eq!(
            serde_json::to_value(ViewerProtocolPolicy::RedirectToHttps).unwrap(),
            json!("redirect-to-https")
        );
        assert_eq!(
            serde_json::to_value(SslSupportMethod::SniOnly).unwrap(),
            json!("sni-only")
        );
        assert_eq!(
            serde_json::to_value(SecurityPolicyProtocol::TlsV1_2_2019).unwrap(),
            json!("TLSv1.2_2019")
        );
        assert_eq!(
            serde_json::to_value(PriceClass::PriceClass100).unwrap(),
            json!("PriceClass_100")
        );
    }

    #[test]
    fn test_origin_access_identity_shape() {
        let identity = OriginAccessIdentity::with_comment("site");
        assert_eq!(
            serde_json::to_value(&identity).unwrap(),
            json!({ "CloudFrontOriginAccessIdentityConfig": { "Comment": "site" } })
        );
    }

    #[test]
    fn test_static_content_behavior() {
        let behavior =
            DefaultCacheBehavior::static_content("origin1", ViewerProtocolPolicy::RedirectToHttps);
        let value = serde_json::to_value(&behavior).unwrap();
        assert_eq!(value["AllowedMethods"], json!(["GET", "HEAD"]));
        assert_eq!(value["ForwardedValues"]["Cookies"]["Forward"], json!("none"));
        assert_eq!(value["ViewerProtocolPolicy"], json!("redirect-to-https"));
    }
}
