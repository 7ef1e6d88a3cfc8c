//! CloudFormation template model
//!
//! A [`Template`] is the declarative resource graph handed to the
//! CloudFormation engine. Resources and outputs live in sorted maps keyed by
//! logical id, so rendering the same graph twice yields identical text.

pub mod intrinsic;

pub use intrinsic::Expr;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::template::{duplicate_id, serialization_failed};
use crate::error::Result;

const FORMAT_VERSION: &str = "2010-09-09";

/// What happens to a resource when it leaves the stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RemovalPolicy {
    Delete,
}

/// A resource kind with a fixed CloudFormation type name
///
/// Implementors serialize to the resource's `Properties` object.
pub trait CfnResource: Serialize {
    const TYPE: &'static str;

    fn removal_policy(&self) -> Option<RemovalPolicy> {
        None
    }
}

/// One entry of the template's `Resources` section
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Resource {
    #[serde(rename = "Type")]
    pub resource_type: String,

    pub properties: serde_json::Value,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_policy: Option<RemovalPolicy>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_replace_policy: Option<RemovalPolicy>,
}

/// One entry of the template's `Outputs` section
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Output {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub value: Expr,
}

/// Handle to a resource already placed in a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRef {
    logical_id: String,
}

impl ResourceRef {
    pub fn logical_id(&self) -> &str {
        &self.logical_id
    }

    /// `{"Ref": <id>}`: the resource's primary identifier
    pub fn reference(&self) -> Expr {
        Expr::reference(&self.logical_id)
    }

    pub fn get_att(&self, attribute: &str) -> Expr {
        Expr::get_att(&self.logical_id, attribute)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Template {
    #[serde(rename = "AWSTemplateFormatVersion")]
    pub format_version: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    pub resources: BTreeMap<String, Resource>,

    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub outputs: BTreeMap<String, Output>,
}

impl Default for Template {
    fn default() -> Self {
        Self::new()
    }
}

impl Template {
    pub fn new() -> Self {
        Self {
            format_version: FORMAT_VERSION.to_string(),
            description: None,
            resources: BTreeMap::new(),
            outputs: BTreeMap::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Serialize `resource` into the template under `logical_id`
    pub fn add<R: CfnResource>(
        &mut self,
        logical_id: impl Into<String>,
        resource: &R,
    ) -> Result<ResourceRef> {
        let properties =
            serde_json::to_value(resource).map_err(|e| serialization_failed(e.to_string()))?;
        let removal_policy = resource.removal_policy();
        self.add_resource(
            logical_id,
            Resource {
                resource_type: R::TYPE.to_string(),
                properties,
                depends_on: Vec::new(),
                deletion_policy: removal_policy,
                update_replace_policy: removal_policy,
            },
        )
    }

    /// Insert a pre-built resource; logical ids must be unique
    pub fn add_resource(
        &mut self,
        logical_id: impl Into<String>,
        resource: Resource,
    ) -> Result<ResourceRef> {
        let logical_id = logical_id.into();
        if self.resources.contains_key(&logical_id) {
            return Err(duplicate_id(logical_id));
        }
        tracing::debug!(logical_id = %logical_id, resource_type = %resource.resource_type, "Added resource");
        self.resources.insert(logical_id.clone(), resource);
        Ok(ResourceRef { logical_id })
    }

    /// Record an explicit ordering edge the references alone do not express
    pub fn add_dependency(&mut self, dependent: &ResourceRef, dependency: &ResourceRef) {
        if let Some(resource) = self.resources.get_mut(dependent.logical_id()) {
            let id = dependency.logical_id().to_string();
            if !resource.depends_on.contains(&id) {
                resource.depends_on.push(id);
            }
        }
    }

    pub fn add_output(
        &mut self,
        logical_id: impl Into<String>,
        description: impl Into<String>,
        value: Expr,
    ) -> Result<()> {
        let logical_id = logical_id.into();
        if self.outputs.contains_key(&logical_id) {
            return Err(duplicate_id(logical_id));
        }
        self.outputs.insert(
            logical_id,
            Output {
                description: Some(description.into()),
                value,
            },
        );
        Ok(())
    }

    /// Number of resources per type, sorted by type name
    pub fn resource_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for resource in self.resources.values() {
            *counts.entry(resource.resource_type.as_str()).or_insert(0) += 1;
        }
        counts
    }

    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

/// Lookups used when asserting on synthesized templates
#[cfg(test)]
impl Template {
    pub fn resource(&self, logical_id: &str) -> Option<&Resource> {
        self.resources.get(logical_id)
    }

    pub fn resources_of_type<'a>(
        &'a self,
        resource_type: &'a str,
    ) -> impl Iterator<Item = (&'a String, &'a Resource)> + 'a {
        self.resources
            .iter()
            .filter(move |(_, resource)| resource.resource_type == resource_type)
    }

    pub fn count_resources(&self, resource_type: &str) -> usize {
        self.resources_of_type(resource_type).count()
    }
}
