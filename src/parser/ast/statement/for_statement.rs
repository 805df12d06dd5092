use serde::Serialize;

use crate::parser::ast::{Expression, Statement, VariableStatement};

/// A C-style `for`. All three header slots may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForStatement {
    pub init: Option<ForInit>,
    pub test: Option<Expression>,
    pub update: Option<Expression>,
    pub body: Box<Statement>,
}

/// The initializer slot: either a `let` declaration list or a plain
/// expression. The enclosing `for` consumes the terminating `;`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ForInit {
    Variable(VariableStatement),
    Expression(Expression),
}

impl From<ForStatement> for Statement {
    fn from(value: ForStatement) -> Self {
        Statement::For(value)
    }
}
