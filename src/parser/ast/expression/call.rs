use serde::Serialize;

use super::Expression;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallExpression {
    pub callee: Box<Expression>,
    pub arguments: Vec<Expression>,
}

/// `new Callee(args)`, where the callee is a member expression or an
/// identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewExpression {
    pub callee: Box<Expression>,
    pub arguments: Vec<Expression>,
}

impl From<CallExpression> for Expression {
    fn from(value: CallExpression) -> Self {
        Expression::Call(value)
    }
}

impl From<NewExpression> for Expression {
    fn from(value: NewExpression) -> Self {
        Expression::New(value)
    }
}
