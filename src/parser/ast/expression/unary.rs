use serde::Serialize;

use super::Expression;

/// Prefix `+`, `-`, and `!`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnaryExpression {
    pub operator: String,
    pub argument: Box<Expression>,
}

impl From<UnaryExpression> for Expression {
    fn from(value: UnaryExpression) -> Self {
        Expression::Unary(value)
    }
}
