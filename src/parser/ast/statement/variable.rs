use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::parser::ast::{Expression, Identifier, Statement};

/// A `let` statement with one or more declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableStatement {
    pub declarations: Vec<VariableDeclaration>,
}

/// One declared name with an optional initializer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableDeclaration {
    pub id: Identifier,
    pub init: Option<Expression>,
}

// Both carry their own `type` tag so they serialize identically as a
// statement and as a `for` initializer.
impl Serialize for VariableStatement {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("VariableStatement", 2)?;
        state.serialize_field("type", "VariableStatement")?;
        state.serialize_field("declarations", &self.declarations)?;
        state.end()
    }
}

impl Serialize for VariableDeclaration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("VariableDeclaration", 3)?;
        state.serialize_field("type", "VariableDeclaration")?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("init", &self.init)?;
        state.end()
    }
}

impl From<VariableStatement> for Statement {
    fn from(value: VariableStatement) -> Self {
        Statement::Variable(value)
    }
}
