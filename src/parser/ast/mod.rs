//! The AST vocabulary shared by parser, dumper, and tests.
//!
//! Every node serializes as a map carrying a `type` discriminator
//! followed by its attributes in schema order, so the dumped tree is
//! identical regardless of output format.

pub mod expression;
pub mod statement;

pub use self::expression::*;
pub use self::statement::*;

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// The root node. The grammar requires at least one statement, so
/// `body` is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub body: Vec<Statement>,
}

impl Serialize for Program {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Program", 2)?;
        state.serialize_field("type", "Program")?;
        state.serialize_field("body", &self.body)?;
        state.end()
    }
}
