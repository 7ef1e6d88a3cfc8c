//! DNS-validated ACM certificates requested in a fixed region
//!
//! `AWS::CertificateManager::Certificate` can only issue certificates in the
//! stack's own region, while CloudFront only accepts certificates from
//! `us-east-1`. The certificate is therefore a custom resource backed by a
//! small requestor function that calls ACM in the requested region, publishes
//! the validation record into the hosted zone and waits for issuance.

use serde::Serialize;

use super::iam::{self, Policy, PolicyDocument, PolicyStatement, Principal, Role};
use super::lambda::Function;
use super::route53::HostedZoneRef;
use crate::error::Result;
use crate::template::{CfnResource, Expr, RemovalPolicy, ResourceRef, Template};

/// The only region CloudFront reads viewer certificates from
pub const CERTIFICATE_REGION: &str = "us-east-1";

const CUSTOM_RESOURCE_TYPE: &str = "AWS::CloudFormation::CustomResource";

/// Seconds; certificate validation can take several minutes
const REQUESTOR_TIMEOUT: u32 = 900;

const REQUESTOR_SOURCE: &str = r#"const response = require('cfn-response');
const { ACMClient, RequestCertificateCommand, DescribeCertificateCommand, DeleteCertificateCommand } = require('@aws-sdk/client-acm');
const { Route53Client, ChangeResourceRecordSetsCommand } = require('@aws-sdk/client-route-53');
const sleep = (ms) => new Promise((resolve) => setTimeout(resolve, ms));

async function describe(acm, arn) {
  const { Certificate } = await acm.send(new DescribeCertificateCommand({ CertificateArn: arn }));
  return Certificate;
}

async function validationRecord(acm, arn) {
  for (let attempt = 0; attempt < 30; attempt++) {
    const options = (await describe(acm, arn)).DomainValidationOptions || [];
    if (options.length > 0 && options[0].ResourceRecord) return options[0].ResourceRecord;
    await sleep(5000);
  }
  throw new Error('No DNS validation record for ' + arn);
}

async function waitForIssued(acm, arn) {
  for (;;) {
    const status = (await describe(acm, arn)).Status;
    if (status === 'ISSUED') return;
    if (status !== 'PENDING_VALIDATION') throw new Error('Certificate ' + arn + ' is ' + status);
    await sleep(10000);
  }
}

exports.handler = async (event, context) => {
  const props = event.ResourceProperties;
  const acm = new ACMClient({ region: props.Region });
  let arn = event.PhysicalResourceId;
  try {
    if (event.RequestType === 'Delete') {
      if (arn && arn.startsWith('arn:')) await acm.send(new DeleteCertificateCommand({ CertificateArn: arn }));
    } else {
      const requested = await acm.send(new RequestCertificateCommand({
        DomainName: props.DomainName,
        ValidationMethod: 'DNS',
        IdempotencyToken: event.RequestId.replace(/-/g, '').slice(0, 32),
      }));
      arn = requested.CertificateArn;
      const record = await validationRecord(acm, arn);
      await new Route53Client({}).send(new ChangeResourceRecordSetsCommand({
        HostedZoneId: props.HostedZoneId,
        ChangeBatch: { Changes: [{ Action: 'UPSERT', ResourceRecordSet: {
          Name: record.Name, Type: record.Type, TTL: 60, ResourceRecords: [{ Value: record.Value }],
        } }] },
      }));
      await waitForIssued(acm, arn);
    }
    await response.send(event, context, response.SUCCESS, { Arn: arn }, arn);
  } catch (err) {
    console.log(err);
    await response.send(event, context, response.FAILED, {}, arn || context.logStreamName);
  }
};
"#;

/// Properties handed to the requestor function
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DnsValidatedCertificate {
    pub service_token: Expr,
    pub domain_name: String,
    pub hosted_zone_id: Expr,
    pub region: String,
}

impl CfnResource for DnsValidatedCertificate {
    const TYPE: &'static str = CUSTOM_RESOURCE_TYPE;

    fn removal_policy(&self) -> Option<RemovalPolicy> {
        Some(RemovalPolicy::Delete)
    }
}

/// Logical ids of the resources that make up one certificate
pub struct CertificateIds {
    pub certificate: String,
    pub requestor_role: String,
    pub requestor_policy: String,
    pub requestor_function: String,
}

/// Add a certificate for `domain_name` validated against `zone`.
///
/// Returns the certificate handle; its ARN is the `Arn` attribute.
pub fn add_dns_validated_certificate(
    template: &mut Template,
    ids: &CertificateIds,
    domain_name: &str,
    zone: &HostedZoneRef,
) -> Result<ResourceRef> {
    let role = template.add(
        &ids.requestor_role,
        &Role::assumed_by(Principal::Service("lambda.amazonaws.com".to_string())).managed_policy(
            iam::managed_policy_arn("service-role/AWSLambdaBasicExecutionRole"),
        ),
    )?;

    let policy = template.add(
        &ids.requestor_policy,
        &Policy {
            policy_document: PolicyDocument::new(vec![
                PolicyStatement::allow()
                    .actions([
                        "acm:RequestCertificate",
                        "acm:DescribeCertificate",
                        "acm:DeleteCertificate",
                    ])
                    .resources([Expr::literal("*")]),
                PolicyStatement::allow()
                    .actions(["route53:GetChange"])
                    .resources([Expr::literal("*")]),
                PolicyStatement::allow()
                    .actions(["route53:ChangeResourceRecordSets"])
                    .resources([zone.arn()]),
            ]),
            policy_name: format!("{}DefaultPolicy", ids.requestor_role),
            roles: vec![role.reference()],
        },
    )?;

    let function = template.add(
        &ids.requestor_function,
        &Function::inline_nodejs(REQUESTOR_SOURCE, role.get_att("Arn"), REQUESTOR_TIMEOUT),
    )?;
    template.add_dependency(&function, &role);

    let certificate = template.add(
        &ids.certificate,
        &DnsValidatedCertificate {
            service_token: function.get_att("Arn"),
            domain_name: domain_name.to_string(),
            hosted_zone_id: zone.zone_id.clone(),
            region: CERTIFICATE_REGION.to_string(),
        },
    )?;
    // the function may only run once its policy is attached
    template.add_dependency(&certificate, &policy);

    Ok(certificate)
}
