use serde::Serialize;

use crate::parser::ast::{Expression, Statement};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WhileStatement {
    pub test: Expression,
    pub body: Box<Statement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoWhileStatement {
    pub test: Expression,
    pub body: Box<Statement>,
}

impl From<WhileStatement> for Statement {
    fn from(value: WhileStatement) -> Self {
        Statement::While(value)
    }
}

impl From<DoWhileStatement> for Statement {
    fn from(value: DoWhileStatement) -> Self {
        Statement::DoWhile(value)
    }
}
