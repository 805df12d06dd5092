//! The recursive-descent parser for Jot.
//!
//! The parser drives the lexer through exactly one token of lookahead
//! and descends the (stratified) grammar, building the AST bottom-up.
//! Statement-level productions live in [`statements`], expression
//! levels in [`expressions`]; this module holds the lookahead
//! machinery they share.

pub mod ast;
mod expressions;
mod statements;

use crate::error::{ParseResult, SyntaxError};
use crate::lexer::{Lexer, Token, TokenKind};

use ast::Program;

pub struct Parser<'a> {
    input: &'a str,
    lexer: Lexer<'a>,
    lookahead: Option<Token>,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            lexer: Lexer::new(input),
            lookahead: None,
        }
    }

    /// Parse the whole input into a [`Program`]. Resets cursor and
    /// lookahead, so a parser value may be reused sequentially.
    pub fn parse(&mut self) -> ParseResult<Program> {
        self.lexer = Lexer::new(self.input);
        self.lookahead = self.lexer.next_token()?;
        self.program()
    }

    fn program(&mut self) -> ParseResult<Program> {
        // the grammar requires at least one statement at the root
        let mut body = vec![self.statement()?];
        while self.lookahead.is_some() {
            body.push(self.statement()?);
        }
        Ok(Program { body })
    }

    fn peek(&self) -> Option<TokenKind> {
        self.lookahead.as_ref().map(|token| token.kind)
    }

    fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek() == Some(kind)
    }

    /// Check the lookahead against `expected`, return it, and refill
    /// the cache from the lexer.
    fn consume(&mut self, expected: TokenKind) -> ParseResult<Token> {
        let Some(token) = self.lookahead.take() else {
            return Err(SyntaxError::UnexpectedEof {
                expected: Some(expected),
            });
        };

        if token.kind != expected {
            return Err(SyntaxError::UnexpectedToken {
                lexeme: token.lexeme,
                kind: token.kind,
                expected,
            });
        }

        self.lookahead = self.lexer.next_token()?;
        Ok(token)
    }
}

/// Parse `input` into a [`Program`] in one shot.
pub fn parse(input: &str) -> ParseResult<Program> {
    Parser::new(input).parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_deterministic() {
        let input = "let x = 1 + 2 * 3; x += 1;";

        assert_eq!(parse(input), parse(input));
    }

    #[test]
    fn test_parser_reuse_resets_state() {
        let mut parser = Parser::new("x;");

        let first = parser.parse();
        let second = parser.parse();

        assert!(first.is_ok());
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_input_is_an_error() {
        assert_eq!(
            Err(SyntaxError::UnexpectedEof { expected: None }),
            parse("")
        );
        assert_eq!(
            Err(SyntaxError::UnexpectedEof { expected: None }),
            parse("  /* nothing here */  ")
        );
    }

    #[test]
    fn test_comments_do_not_change_the_tree() {
        let plain = parse("let x = 42;");
        let commented = parse("let /* binding */ x = // trailing\n 42;");

        assert_eq!(plain, commented);
    }
}
