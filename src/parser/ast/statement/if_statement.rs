use serde::Serialize;

use crate::parser::ast::{Expression, Statement};

/// An `if` with an optional `else`. The `else` binds to the nearest
/// preceding `if` without one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IfStatement {
    pub test: Expression,
    pub consequent: Box<Statement>,
    pub alternate: Option<Box<Statement>>,
}

impl From<IfStatement> for Statement {
    fn from(value: IfStatement) -> Self {
        Statement::If(value)
    }
}
