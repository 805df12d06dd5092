use serde::Serialize;

use super::Expression;

/// `=`, `+=`, `-=`, `*=`, `/=`. The parser guarantees that `left` is
/// an identifier or a member expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssignmentExpression {
    pub operator: String,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
}

impl From<AssignmentExpression> for Expression {
    fn from(value: AssignmentExpression) -> Self {
        Expression::Assignment(value)
    }
}
