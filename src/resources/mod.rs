//! Typed CloudFormation resources
//!
//! Each resource kind serializes to its `Properties` object and knows its
//! CloudFormation type name through [`crate::template::CfnResource`].

pub mod acm;
pub mod cloudfront;
pub mod iam;
pub mod lambda;
pub mod route53;
pub mod s3;
