//! Serialises a parsed [`Program`] to YAML or JSON for golden
//! comparison and for the command line driver.

use std::error::Error;

use crate::parser::ast::Program;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

/// Dump the AST in the requested format, keys in declaration order.
pub fn dump(program: &Program, format: Format) -> Result<String, Box<dyn Error>> {
    let out = match format {
        Format::Yaml => serde_yaml::to_string(program)?,
        Format::Json => serde_json::to_string_pretty(program)?,
    };

    Ok(out)
}
