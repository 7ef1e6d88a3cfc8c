//! CloudFormation intrinsic functions
//!
//! Values inside a template are either plain strings or one of the
//! intrinsic function objects (`Ref`, `Fn::GetAtt`, ...). [`Expr`] serializes
//! to exactly the JSON shape CloudFormation expects for each of them.

use serde::Serialize;

/// Pseudo parameter holding the deploying account id
pub const ACCOUNT_ID: &str = "AWS::AccountId";

/// Pseudo parameter holding the partition (`aws`, `aws-cn`, ...)
pub const PARTITION: &str = "AWS::Partition";

/// A template value: literal string or intrinsic function call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Expr {
    Literal(String),
    Ref {
        #[serde(rename = "Ref")]
        logical_id: String,
    },
    GetAtt {
        #[serde(rename = "Fn::GetAtt")]
        target: [String; 2],
    },
    ImportValue {
        #[serde(rename = "Fn::ImportValue")]
        export_name: String,
    },
    Join {
        #[serde(rename = "Fn::Join")]
        parts: (String, Vec<Expr>),
    },
}

impl Expr {
    pub fn literal(value: impl Into<String>) -> Self {
        Expr::Literal(value.into())
    }

    /// `{"Ref": logical_id}`; also used for pseudo parameters
    pub fn reference(logical_id: impl Into<String>) -> Self {
        Expr::Ref {
            logical_id: logical_id.into(),
        }
    }

    pub fn get_att(logical_id: impl Into<String>, attribute: impl Into<String>) -> Self {
        Expr::GetAtt {
            target: [logical_id.into(), attribute.into()],
        }
    }

    /// Reads a value exported by another stack in the same account and region
    pub fn import_value(export_name: impl Into<String>) -> Self {
        Expr::ImportValue {
            export_name: export_name.into(),
        }
    }

    /// Concatenates `parts` with `separator`.
    ///
    /// Collapses to a literal when every part is already a literal, so the
    /// rendered template only carries `Fn::Join` where it is needed.
    pub fn join(separator: impl Into<String>, parts: Vec<Expr>) -> Self {
        let separator = separator.into();
        let literals: Option<Vec<&str>> = parts.iter().map(Expr::as_literal).collect();
        match literals {
            Some(literals) => Expr::Literal(literals.join(&separator)),
            None => Expr::Join {
                parts: (separator, parts),
            },
        }
    }

    pub fn as_literal(&self) -> Option<&str> {
        match self {
            Expr::Literal(value) => Some(value),
            _ => None,
        }
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Expr::Literal(value.to_string())
    }
}

impl From<String> for Expr {
    fn from(value: String) -> Self {
        Expr::Literal(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_literal_serializes_as_string() {
        let value = serde_json::to_value(Expr::literal("index.html")).unwrap();
        assert_eq!(value, json!("index.html"));
    }

    #[test]
    fn test_ref_shape() {
        let value = serde_json::to_value(Expr::reference("SiteBucket")).unwrap();
        assert_eq!(value, json!({ "Ref": "SiteBucket" }));
    }

    #[test]
    fn test_get_att_shape() {
        let value = serde_json::to_value(Expr::get_att("SiteBucket", "Arn")).unwrap();
        assert_eq!(value, json!({ "Fn::GetAtt": ["SiteBucket", "Arn"] }));
    }

    #[test]
    fn test_import_value_shape() {
        let value = serde_json::to_value(Expr::import_value("UserArn")).unwrap();
        assert_eq!(value, json!({ "Fn::ImportValue": "UserArn" }));
    }

    #[test]
    fn test_join_with_intrinsic_part() {
        let expr = Expr::join(
            "",
            vec![Expr::get_att("SiteBucket", "Arn"), Expr::literal("/*")],
        );
        let value = serde_json::to_value(expr).unwrap();
        assert_eq!(
            value,
            json!({ "Fn::Join": ["", [{ "Fn::GetAtt": ["SiteBucket", "Arn"] }, "/*"]] })
        );
    }

    #[test]
    fn test_join_of_literals_collapses() {
        let expr = Expr::join(
            ":",
            vec![Expr::literal("arn"), Expr::literal("aws"), Expr::literal("iam")],
        );
        assert_eq!(expr, Expr::literal("arn:aws:iam"));
    }
}
