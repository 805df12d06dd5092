mod class;
mod for_statement;
mod function;
mod if_statement;
mod return_statement;
mod variable;
mod while_loop;

pub use self::class::*;
pub use self::for_statement::*;
pub use self::function::*;
pub use self::if_statement::*;
pub use self::return_statement::*;
pub use self::variable::*;
pub use self::while_loop::*;

use serde::Serialize;

use super::Expression;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Statement {
    #[serde(rename = "EmptyStatement")]
    Empty,
    #[serde(rename = "BlockStatement")]
    Block(BlockStatement),
    #[serde(rename = "ExpressionStatement")]
    Expression(ExpressionStatement),
    #[serde(rename = "IfStatement")]
    If(IfStatement),
    #[serde(rename = "WhileStatement")]
    While(WhileStatement),
    #[serde(rename = "DoWhileStatement")]
    DoWhile(DoWhileStatement),
    #[serde(rename = "ForStatement")]
    For(ForStatement),
    #[serde(rename = "FunctionDeclaration")]
    Function(FunctionDeclaration),
    #[serde(rename = "ReturnStatement")]
    Return(ReturnStatement),
    #[serde(rename = "ClassDeclaration")]
    Class(ClassDeclaration),
    // untagged: the node carries its own `type` so it serializes the
    // same here and in a `for` initializer
    #[serde(untagged)]
    Variable(VariableStatement),
}

/// A braces-delimited statement list. May be empty, unlike the
/// program body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockStatement {
    pub body: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpressionStatement {
    pub expression: Expression,
}

impl From<BlockStatement> for Statement {
    fn from(value: BlockStatement) -> Self {
        Statement::Block(value)
    }
}

impl From<ExpressionStatement> for Statement {
    fn from(value: ExpressionStatement) -> Self {
        Statement::Expression(value)
    }
}
