//! Deployment environment of the stack

use crate::template::Expr;
use crate::template::intrinsic::ACCOUNT_ID;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackEnv {
    /// Literal account id; when unset the template resolves it at deploy time
    pub account: Option<String>,
}

impl StackEnv {
    pub fn with_account(account: Option<String>) -> Self {
        Self {
            account: account.filter(|a| !a.trim().is_empty()),
        }
    }

    /// The current account id as a template value
    pub fn account_id(&self) -> Expr {
        match &self.account {
            Some(account) => Expr::literal(account),
            None => Expr::reference(ACCOUNT_ID),
        }
    }

    /// ARN of an IAM role in the current account
    pub fn role_arn(&self, role_name: &str) -> Expr {
        Expr::join(
            "",
            vec![
                Expr::literal("arn:aws:iam::"),
                self.account_id(),
                Expr::literal(format!(":role/{role_name}")),
            ],
        )
    }
}
