//! IAM roles, inline policies and policy documents

use serde::Serialize;

use crate::template::{CfnResource, Expr};

const POLICY_VERSION: &str = "2012-10-17";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Effect {
    Allow,
    Deny,
}

/// Who a statement applies to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Principal {
    #[serde(rename = "AWS")]
    Aws(Expr),
    Service(String),
    CanonicalUser(Expr),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyStatement {
    pub effect: Effect,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal: Option<Principal>,

    pub action: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resource: Vec<Expr>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<serde_json::Value>,
}

impl PolicyStatement {
    fn new(effect: Effect) -> Self {
        Self {
            effect,
            principal: None,
            action: Vec::new(),
            resource: Vec::new(),
            condition: None,
        }
    }

    pub fn allow() -> Self {
        Self::new(Effect::Allow)
    }

    pub fn deny() -> Self {
        Self::new(Effect::Deny)
    }

    pub fn principal(mut self, principal: Principal) -> Self {
        self.principal = Some(principal);
        self
    }

    pub fn actions<I, S>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.action.extend(actions.into_iter().map(Into::into));
        self
    }

    pub fn resources<I>(mut self, resources: I) -> Self
    where
        I: IntoIterator<Item = Expr>,
    {
        self.resource.extend(resources);
        self
    }

    pub fn condition(mut self, condition: serde_json::Value) -> Self {
        self.condition = Some(condition);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyDocument {
    pub version: String,
    pub statement: Vec<PolicyStatement>,
}

impl Default for PolicyDocument {
    fn default() -> Self {
        Self {
            version: POLICY_VERSION.to_string(),
            statement: Vec::new(),
        }
    }
}

impl PolicyDocument {
    pub fn new(statement: Vec<PolicyStatement>) -> Self {
        Self {
            version: POLICY_VERSION.to_string(),
            statement,
        }
    }

    pub fn push(&mut self, statement: PolicyStatement) {
        self.statement.push(statement);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Role {
    pub assume_role_policy_document: PolicyDocument,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub managed_policy_arns: Vec<Expr>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
}

impl CfnResource for Role {
    const TYPE: &'static str = "AWS::IAM::Role";
}

impl Role {
    /// A role that `principal` may assume through `sts:AssumeRole`
    pub fn assumed_by(principal: Principal) -> Self {
        let trust = PolicyStatement::allow()
            .principal(principal)
            .actions(["sts:AssumeRole"]);
        Self {
            assume_role_policy_document: PolicyDocument::new(vec![trust]),
            description: None,
            managed_policy_arns: Vec::new(),
            role_name: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn role_name(mut self, role_name: impl Into<String>) -> Self {
        self.role_name = Some(role_name.into());
        self
    }

    pub fn managed_policy(mut self, arn: Expr) -> Self {
        self.managed_policy_arns.push(arn);
        self
    }
}

/// Inline policy attached to one or more roles
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Policy {
    pub policy_document: PolicyDocument,
    pub policy_name: String,
    pub roles: Vec<Expr>,
}

impl CfnResource for Policy {
    const TYPE: &'static str = "AWS::IAM::Policy";
}

/// ARN of an AWS managed policy in the current partition
pub fn managed_policy_arn(name: &str) -> Expr {
    Expr::join(
        "",
        vec![
            Expr::literal("arn:"),
            Expr::reference(crate::template::intrinsic::PARTITION),
            Expr::literal(format!(":iam::aws:policy/{name}")),
        ],
    )
}
