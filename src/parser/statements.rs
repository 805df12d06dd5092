use crate::error::{ParseResult, SyntaxError};
use crate::lexer::TokenKind;

use super::ast::{
    BlockStatement, ClassDeclaration, DoWhileStatement, ExpressionStatement, ForInit,
    ForStatement, FunctionDeclaration, Identifier, IfStatement, ReturnStatement, Statement,
    VariableDeclaration, VariableStatement, WhileStatement,
};
use super::Parser;

impl<'a> Parser<'a> {
    /// Dispatch on the lookahead kind; anything that is not a keyword
    /// or punctuation opener is an expression statement.
    pub(super) fn statement(&mut self) -> ParseResult<Statement> {
        match self.peek() {
            Some(TokenKind::Semi) => self.empty_statement(),
            Some(TokenKind::LBrace) => self.block_statement(),
            Some(TokenKind::Let) => self.variable_statement(),
            Some(TokenKind::If) => self.if_statement(),
            Some(TokenKind::While) => self.while_statement(),
            Some(TokenKind::Do) => self.do_while_statement(),
            Some(TokenKind::For) => self.for_statement(),
            Some(TokenKind::Def) => self.function_declaration(),
            Some(TokenKind::Return) => self.return_statement(),
            Some(TokenKind::Class) => self.class_declaration(),
            Some(_) => self.expression_statement(),
            None => Err(SyntaxError::UnexpectedEof { expected: None }),
        }
    }

    fn empty_statement(&mut self) -> ParseResult<Statement> {
        self.consume(TokenKind::Semi)?;
        Ok(Statement::Empty)
    }

    fn block_statement(&mut self) -> ParseResult<Statement> {
        self.consume(TokenKind::LBrace)?;

        let mut body = vec![];
        while let Some(kind) = self.peek() {
            if kind == TokenKind::RBrace {
                break;
            }
            body.push(self.statement()?);
        }

        self.consume(TokenKind::RBrace)?;
        Ok(BlockStatement { body }.into())
    }

    fn expression_statement(&mut self) -> ParseResult<Statement> {
        let expression = self.expression()?;
        self.consume(TokenKind::Semi)?;
        Ok(ExpressionStatement { expression }.into())
    }

    fn variable_statement(&mut self) -> ParseResult<Statement> {
        let statement = self.variable_declarations()?;
        self.consume(TokenKind::Semi)?;
        Ok(statement.into())
    }

    /// The `let` declaration list without its terminating `;`, shared
    /// with the `for` initializer, which eats the `;` itself.
    pub(super) fn variable_declarations(&mut self) -> ParseResult<VariableStatement> {
        self.consume(TokenKind::Let)?;

        let mut declarations = vec![self.variable_declaration()?];
        while self.peek_is(TokenKind::Comma) {
            self.consume(TokenKind::Comma)?;
            declarations.push(self.variable_declaration()?);
        }

        Ok(VariableStatement { declarations })
    }

    fn variable_declaration(&mut self) -> ParseResult<VariableDeclaration> {
        let id = self.identifier()?;

        let init = if self.peek_is(TokenKind::SimpleAssign) {
            self.consume(TokenKind::SimpleAssign)?;
            Some(self.assignment_expression()?)
        } else {
            None
        };

        Ok(VariableDeclaration { id, init })
    }

    fn if_statement(&mut self) -> ParseResult<Statement> {
        self.consume(TokenKind::If)?;
        self.consume(TokenKind::LParen)?;
        let test = self.expression()?;
        self.consume(TokenKind::RParen)?;

        let consequent = Box::new(self.statement()?);

        // greedy: the else belongs to the nearest open if
        let alternate = if self.peek_is(TokenKind::Else) {
            self.consume(TokenKind::Else)?;
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Ok(IfStatement {
            test,
            consequent,
            alternate,
        }
        .into())
    }

    fn while_statement(&mut self) -> ParseResult<Statement> {
        self.consume(TokenKind::While)?;
        self.consume(TokenKind::LParen)?;
        let test = self.expression()?;
        self.consume(TokenKind::RParen)?;
        let body = Box::new(self.statement()?);

        Ok(WhileStatement { test, body }.into())
    }

    fn do_while_statement(&mut self) -> ParseResult<Statement> {
        self.consume(TokenKind::Do)?;
        let body = Box::new(self.statement()?);
        self.consume(TokenKind::While)?;
        self.consume(TokenKind::LParen)?;
        let test = self.expression()?;
        self.consume(TokenKind::RParen)?;
        self.consume(TokenKind::Semi)?;

        Ok(DoWhileStatement { test, body }.into())
    }

    fn for_statement(&mut self) -> ParseResult<Statement> {
        self.consume(TokenKind::For)?;
        self.consume(TokenKind::LParen)?;

        let init = match self.peek() {
            Some(TokenKind::Semi) => None,
            Some(TokenKind::Let) => Some(ForInit::Variable(self.variable_declarations()?)),
            _ => Some(ForInit::Expression(self.expression()?)),
        };
        self.consume(TokenKind::Semi)?;

        let test = if self.peek_is(TokenKind::Semi) {
            None
        } else {
            Some(self.expression()?)
        };
        self.consume(TokenKind::Semi)?;

        let update = if self.peek_is(TokenKind::RParen) {
            None
        } else {
            Some(self.expression()?)
        };
        self.consume(TokenKind::RParen)?;

        let body = Box::new(self.statement()?);

        Ok(ForStatement {
            init,
            test,
            update,
            body,
        }
        .into())
    }

    fn function_declaration(&mut self) -> ParseResult<Statement> {
        self.consume(TokenKind::Def)?;
        let name = self.identifier()?;

        self.consume(TokenKind::LParen)?;
        let mut params = vec![];
        if !self.peek_is(TokenKind::RParen) {
            params.push(self.identifier()?);
            while self.peek_is(TokenKind::Comma) {
                self.consume(TokenKind::Comma)?;
                params.push(self.identifier()?);
            }
        }
        self.consume(TokenKind::RParen)?;

        let body = Box::new(self.block_statement()?);

        Ok(FunctionDeclaration { name, params, body }.into())
    }

    fn return_statement(&mut self) -> ParseResult<Statement> {
        self.consume(TokenKind::Return)?;

        let argument = if self.peek_is(TokenKind::Semi) {
            None
        } else {
            Some(self.expression()?)
        };
        self.consume(TokenKind::Semi)?;

        Ok(ReturnStatement { argument }.into())
    }

    fn class_declaration(&mut self) -> ParseResult<Statement> {
        self.consume(TokenKind::Class)?;
        let id = self.identifier()?;

        let super_class = if self.peek_is(TokenKind::Extends) {
            self.consume(TokenKind::Extends)?;
            Some(self.identifier()?)
        } else {
            None
        };

        let body = Box::new(self.block_statement()?);

        Ok(ClassDeclaration {
            id,
            super_class,
            body,
        }
        .into())
    }

    pub(super) fn identifier(&mut self) -> ParseResult<Identifier> {
        let token = self.consume(TokenKind::Identifier)?;
        Ok(Identifier { name: token.lexeme })
    }
}
