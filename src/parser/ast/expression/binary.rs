use serde::Serialize;

use super::Expression;

/// Arithmetic, equality, and relational operators. The operator is the
/// token lexeme, verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BinaryExpression {
    pub operator: String,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

/// `&&` and `||`, kept apart from [`BinaryExpression`] so consumers
/// can short-circuit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogicalExpression {
    pub operator: String,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

impl From<BinaryExpression> for Expression {
    fn from(value: BinaryExpression) -> Self {
        Expression::Binary(value)
    }
}

impl From<LogicalExpression> for Expression {
    fn from(value: LogicalExpression) -> Self {
        Expression::Logical(value)
    }
}
