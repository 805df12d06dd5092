use serde::Serialize;

use crate::parser::ast::{Identifier, Statement};

/// A `class` declaration with an optional superclass. `body` is always
/// a block statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassDeclaration {
    pub id: Identifier,
    #[serde(rename = "superClass")]
    pub super_class: Option<Identifier>,
    pub body: Box<Statement>,
}

impl From<ClassDeclaration> for Statement {
    fn from(value: ClassDeclaration) -> Self {
        Statement::Class(value)
    }
}
