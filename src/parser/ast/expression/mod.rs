mod assignment;
mod binary;
mod call;
mod id;
mod literal;
mod member;
mod unary;

pub use self::assignment::*;
pub use self::binary::*;
pub use self::call::*;
pub use self::id::*;
pub use self::literal::*;
pub use self::member::*;
pub use self::unary::*;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Expression {
    #[serde(rename = "BinaryExpression")]
    Binary(BinaryExpression),
    #[serde(rename = "LogicalExpression")]
    Logical(LogicalExpression),
    #[serde(rename = "UnaryExpression")]
    Unary(UnaryExpression),
    #[serde(rename = "AssignmentExpression")]
    Assignment(AssignmentExpression),
    #[serde(rename = "MemberExpression")]
    Member(MemberExpression),
    #[serde(rename = "CallExpression")]
    Call(CallExpression),
    #[serde(rename = "NewExpression")]
    New(NewExpression),
    #[serde(rename = "ThisExpression")]
    This,
    Super,
    #[serde(rename = "NumericLiteral")]
    Number(NumericLiteral),
    #[serde(rename = "StringLiteral")]
    String(StringLiteral),
    #[serde(rename = "BooleanLiteral")]
    Boolean(BooleanLiteral),
    #[serde(rename = "NullLiteral")]
    Null(NullLiteral),
    // untagged: identifiers also appear as bare attributes (names,
    // params, declaration targets), so the node carries its own `type`
    #[serde(untagged)]
    Identifier(Identifier),
}
