use std::{error::Error, fmt::Display};

use crate::lexer::TokenKind;

/// The single error family shared by lexer and parser. The first
/// violation aborts the whole parse; there is no recovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
    /// No lexical rule matches the remaining input.
    UnexpectedChar { ch: char, offset: usize },
    /// Another token was needed but the input ended. `expected` is the
    /// kind `consume` was waiting for; `None` when a statement was
    /// required and the input was already exhausted.
    UnexpectedEof { expected: Option<TokenKind> },
    /// The lookahead did not have the kind `consume` expected.
    UnexpectedToken {
        lexeme: String,
        kind: TokenKind,
        expected: TokenKind,
    },
    /// A literal was required but the lookahead is not one.
    UnexpectedLiteral,
    /// Left side of an assignment is neither an identifier nor a
    /// member expression.
    InvalidAssignmentTarget,
    /// A decimal literal too large for the host integer.
    NumberOutOfRange { lexeme: String },
}

pub type ParseResult<T> = Result<T, SyntaxError>;

impl Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyntaxError::UnexpectedChar { ch, offset } => {
                write!(f, "unexpected character '{ch}' at offset {offset}")
            }
            SyntaxError::UnexpectedEof { expected: Some(expected) } => {
                write!(f, "unexpected end of input, expected: {expected}")
            }
            SyntaxError::UnexpectedEof { expected: None } => {
                write!(f, "unexpected end of input")
            }
            SyntaxError::UnexpectedToken {
                lexeme,
                kind,
                expected,
            } => {
                write!(f, "unexpected token '{lexeme}' ({kind}), expected {expected}")
            }
            SyntaxError::UnexpectedLiteral => f.write_str("unexpected literal production"),
            SyntaxError::InvalidAssignmentTarget => {
                f.write_str("invalid left-hand side in assignment expression")
            }
            SyntaxError::NumberOutOfRange { lexeme } => {
                write!(f, "numeric literal '{lexeme}' is out of range")
            }
        }
    }
}

impl Error for SyntaxError {}
