//! The lexical analyzer for Jot.
//!
//! The lexer walks the source with a byte cursor and tries the rules of
//! [`rules`] in priority order against the remaining input. Tokens are
//! produced on demand; the parser pulls them one at a time. Whitespace
//! and comments match skip rules and never surface as tokens.

mod rules;
mod token;

pub use token::*;

use crate::error::{ParseResult, SyntaxError};

use rules::RULES;

#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    cursor: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, cursor: 0 }
    }

    /// Produce the next token, or `Ok(None)` once the input is
    /// exhausted. Fails if no rule matches the remaining input.
    pub fn next_token(&mut self) -> ParseResult<Option<Token>> {
        'scan: while self.cursor < self.input.len() {
            let rest = &self.input[self.cursor..];

            for rule in RULES.iter() {
                let Some(matched) = rule.pattern.find(rest) else {
                    continue;
                };

                self.cursor += matched.end();

                let Some(kind) = rule.kind else {
                    // skip rule: eat the match and start over
                    continue 'scan;
                };

                return Ok(Some(Token::new(kind, matched.as_str())));
            }

            let Some(ch) = rest.chars().next() else {
                break;
            };
            return Err(SyntaxError::UnexpectedChar {
                ch,
                offset: self.cursor,
            });
        }

        Ok(None)
    }

    /// Drain the lexer into a token vector.
    pub fn lex(mut self) -> ParseResult<Vec<Token>> {
        let mut tokens = vec![];
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        Ok(tokens)
    }
}
