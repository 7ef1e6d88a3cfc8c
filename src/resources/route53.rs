//! Route 53 hosted zone lookups and alias records

use serde::Serialize;

use crate::template::intrinsic::PARTITION;
use crate::template::{CfnResource, Expr, ResourceRef};

use super::cloudfront::CLOUDFRONT_HOSTED_ZONE_ID;

/// A hosted zone created elsewhere and published as a stack export
#[derive(Debug, Clone, PartialEq)]
pub struct HostedZoneRef {
    pub zone_id: Expr,
    pub zone_name: String,
}

impl HostedZoneRef {
    /// Resolve the zone for `domain` through the `<domain without dots>ZoneId` export
    pub fn from_export(domain: &str) -> Self {
        Self {
            zone_id: Expr::import_value(zone_export_name(domain)),
            zone_name: domain.to_string(),
        }
    }

    pub fn arn(&self) -> Expr {
        Expr::join(
            "",
            vec![
                Expr::literal("arn:"),
                Expr::reference(PARTITION),
                Expr::literal(":route53:::hostedzone/"),
                self.zone_id.clone(),
            ],
        )
    }
}

/// Export name the zone stack publishes its id under
pub fn zone_export_name(domain: &str) -> String {
    format!("{}ZoneId", domain.replace('.', ""))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AliasTarget {
    #[serde(rename = "DNSName")]
    pub dns_name: Expr,
    pub hosted_zone_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecordSet {
    pub alias_target: AliasTarget,
    pub hosted_zone_id: Expr,
    pub name: String,
    #[serde(rename = "Type")]
    pub record_type: String,
}

impl CfnResource for RecordSet {
    const TYPE: &'static str = "AWS::Route53::RecordSet";
}

impl RecordSet {
    /// `A` alias record pointing `name` at a CloudFront distribution
    pub fn cloudfront_alias(name: &str, zone: &HostedZoneRef, distribution: &ResourceRef) -> Self {
        Self {
            alias_target: AliasTarget {
                dns_name: distribution.get_att("DomainName"),
                hosted_zone_id: CLOUDFRONT_HOSTED_ZONE_ID.to_string(),
            },
            hosted_zone_id: zone.zone_id.clone(),
            name: name.to_string(),
            record_type: "A".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::Template;
    use serde_json::json;

    #[test]
    fn test_zone_export_name_strips_dots() {
        assert_eq!(zone_export_name("testdomain.com"), "testdomaincomZoneId");
        assert_eq!(zone_export_name("blog.example.co.uk"), "blogexamplecoukZoneId");
    }

    #[test]
    fn test_from_export_keeps_zone_name() {
        let zone = HostedZoneRef::from_export("testdomain.com");
        assert_eq!(zone.zone_name, "testdomain.com");
        assert_eq!(zone.zone_id, Expr::import_value("testdomaincomZoneId"));
    }

    #[test]
    fn test_cloudfront_alias_record() {
        let mut template = Template::new();
        let distribution = template
            .add_resource(
                "Dist",
                crate::template::Resource {
                    resource_type: "AWS::CloudFront::Distribution".to_string(),
                    properties: json!({}),
                    depends_on: Vec::new(),
                    deletion_policy: None,
                    update_replace_policy: None,
                },
            )
            .unwrap();
        let zone = HostedZoneRef::from_export("testdomain.com");
        let record = RecordSet::cloudfront_alias("test.testdomain.com", &zone, &distribution);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            json!({
                "AliasTarget": {
                    "DNSName": { "Fn::GetAtt": ["Dist", "DomainName"] },
                    "HostedZoneId": "Z2FDTNDATAQYW2"
                },
                "HostedZoneId": { "Fn::ImportValue": "testdomaincomZoneId" },
                "Name": "test.testdomain.com",
                "Type": "A"
            })
        );
    }
}
