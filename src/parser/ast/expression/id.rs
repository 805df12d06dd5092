use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::Expression;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub name: String,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

// Identifiers appear both as expressions and as bare attributes
// (function names, parameters, declaration targets), so the node
// carries its own `type` tag.
impl Serialize for Identifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Identifier", 2)?;
        state.serialize_field("type", "Identifier")?;
        state.serialize_field("name", &self.name)?;
        state.end()
    }
}

impl From<Identifier> for Expression {
    fn from(value: Identifier) -> Self {
        Expression::Identifier(value)
    }
}
