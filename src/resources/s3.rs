//! S3 buckets and bucket policies

use serde::Serialize;

use super::iam::{PolicyDocument, PolicyStatement, Principal};
use crate::template::{CfnResource, Expr, RemovalPolicy, ResourceRef};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct WebsiteConfiguration {
    pub index_document: String,
    pub error_document: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PublicAccessBlockConfiguration {
    pub block_public_acls: bool,
    pub block_public_policy: bool,
    pub ignore_public_acls: bool,
    pub restrict_public_buckets: bool,
}

impl PublicAccessBlockConfiguration {
    pub fn block_all() -> Self {
        Self {
            block_public_acls: true,
            block_public_policy: true,
            ignore_public_acls: true,
            restrict_public_buckets: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BucketEncryption {
    pub server_side_encryption_configuration: Vec<ServerSideEncryptionRule>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServerSideEncryptionRule {
    pub server_side_encryption_by_default: ServerSideEncryptionByDefault,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServerSideEncryptionByDefault {
    #[serde(rename = "SSEAlgorithm")]
    pub sse_algorithm: String,
}

impl BucketEncryption {
    /// SSE-S3: objects encrypted with keys S3 manages
    pub fn s3_managed() -> Self {
        Self {
            server_side_encryption_configuration: vec![ServerSideEncryptionRule {
                server_side_encryption_by_default: ServerSideEncryptionByDefault {
                    sse_algorithm: "AES256".to_string(),
                },
            }],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Bucket {
    pub bucket_name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bucket_encryption: Option<BucketEncryption>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_access_block_configuration: Option<PublicAccessBlockConfiguration>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_configuration: Option<WebsiteConfiguration>,

    #[serde(skip)]
    pub removal_policy: Option<RemovalPolicy>,
}

impl CfnResource for Bucket {
    const TYPE: &'static str = "AWS::S3::Bucket";

    fn removal_policy(&self) -> Option<RemovalPolicy> {
        self.removal_policy
    }
}

impl Bucket {
    pub fn named(bucket_name: impl Into<String>) -> Self {
        Self {
            bucket_name: bucket_name.into(),
            bucket_encryption: None,
            public_access_block_configuration: None,
            website_configuration: None,
            removal_policy: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BucketPolicy {
    pub bucket: Expr,
    pub policy_document: PolicyDocument,
}

impl CfnResource for BucketPolicy {
    const TYPE: &'static str = "AWS::S3::BucketPolicy";
}

/// `Fn::GetAtt <bucket>.Arn`
pub fn bucket_arn(bucket: &ResourceRef) -> Expr {
    bucket.get_att("Arn")
}

/// ARN pattern matching objects in `bucket` by `key_pattern`
pub fn arn_for_objects(bucket: &ResourceRef, key_pattern: &str) -> Expr {
    Expr::join(
        "",
        vec![bucket_arn(bucket), Expr::literal(format!("/{key_pattern}"))],
    )
}

/// Deny every request to `bucket` that does not arrive over TLS
pub fn enforce_ssl_statement(bucket: &ResourceRef) -> PolicyStatement {
    PolicyStatement::deny()
        .principal(Principal::Aws(Expr::literal("*")))
        .actions(["s3:*"])
        .resources([bucket_arn(bucket), arn_for_objects(bucket, "*")])
        .condition(serde_json::json!({ "Bool": { "aws:SecureTransport": "false" } }))
}

/// Read-only access to `bucket` and its objects for `principal`
pub fn grant_read_statement(bucket: &ResourceRef, principal: Principal) -> PolicyStatement {
    PolicyStatement::allow()
        .principal(principal)
        .actions(["s3:GetObject*", "s3:GetBucket*", "s3:List*"])
        .resources([bucket_arn(bucket), arn_for_objects(bucket, "*")])
}
