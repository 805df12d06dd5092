use serde::Serialize;

use super::Expression;

/// An integer literal. The value is the base-10 reading of the lexeme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumericLiteral {
    pub value: i64,
}

/// A string literal with the quotes stripped. No escape handling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StringLiteral {
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BooleanLiteral {
    pub value: bool,
}

/// `null`. The unit value serializes as an explicit null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NullLiteral {
    pub value: (),
}

impl From<NumericLiteral> for Expression {
    fn from(value: NumericLiteral) -> Self {
        Expression::Number(value)
    }
}

impl From<StringLiteral> for Expression {
    fn from(value: StringLiteral) -> Self {
        Expression::String(value)
    }
}

impl From<BooleanLiteral> for Expression {
    fn from(value: BooleanLiteral) -> Self {
        Expression::Boolean(value)
    }
}

impl From<NullLiteral> for Expression {
    fn from(value: NullLiteral) -> Self {
        Expression::Null(value)
    }
}
