use serde::Serialize;

use crate::parser::ast::{Identifier, Statement};

/// A `def` declaration. `body` is always a block statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionDeclaration {
    pub name: Identifier,
    pub params: Vec<Identifier>,
    pub body: Box<Statement>,
}

impl From<FunctionDeclaration> for Statement {
    fn from(value: FunctionDeclaration) -> Self {
        Statement::Function(value)
    }
}
