use serde::Serialize;

use crate::parser::ast::{Expression, Statement};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReturnStatement {
    pub argument: Option<Expression>,
}

impl From<ReturnStatement> for Statement {
    fn from(value: ReturnStatement) -> Self {
        Statement::Return(value)
    }
}
