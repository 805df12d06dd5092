use serde::Serialize;

use super::Expression;

/// Property access. `computed` distinguishes `obj[expr]` from
/// `obj.name`; the property of a non-computed access is always an
/// identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberExpression {
    pub computed: bool,
    pub object: Box<Expression>,
    pub property: Box<Expression>,
}

impl From<MemberExpression> for Expression {
    fn from(value: MemberExpression) -> Self {
        Expression::Member(value)
    }
}
