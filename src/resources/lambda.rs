//! Lambda functions with inline source

use serde::Serialize;

use crate::template::{CfnResource, Expr};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Code {
    #[serde(rename = "ZipFile")]
    pub zip_file: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Function {
    pub code: Code,
    pub handler: String,
    pub role: Expr,
    pub runtime: String,
    pub timeout: u32,
}

impl CfnResource for Function {
    const TYPE: &'static str = "AWS::Lambda::Function";
}

impl Function {
    /// Node.js function whose source is embedded in the template.
    ///
    /// CloudFormation stores inline source as `index.js` and makes the
    /// `cfn-response` module available to it.
    pub fn inline_nodejs(source: &str, role: Expr, timeout: u32) -> Self {
        Self {
            code: Code {
                zip_file: source.to_string(),
            },
            handler: "index.handler".to_string(),
            role,
            runtime: "nodejs20.x".to_string(),
            timeout,
        }
    }
}
