use crate::error::{ParseResult, SyntaxError};
use crate::lexer::{Token, TokenKind};

use super::ast::{
    AssignmentExpression, BinaryExpression, BooleanLiteral, CallExpression, Expression,
    LogicalExpression, MemberExpression, NewExpression, NullLiteral, NumericLiteral,
    StringLiteral, UnaryExpression,
};
use super::Parser;

impl<'a> Parser<'a> {
    pub(super) fn expression(&mut self) -> ParseResult<Expression> {
        self.assignment_expression()
    }

    /// Assignment is right-associative and only legal onto an
    /// identifier or a member expression, checked once the operator
    /// is actually seen.
    pub(super) fn assignment_expression(&mut self) -> ParseResult<Expression> {
        let left = self.logical_or_expression()?;

        if !matches!(
            self.peek(),
            Some(TokenKind::SimpleAssign | TokenKind::ComplexAssign)
        ) {
            return Ok(left);
        }

        let operator = self.assignment_operator()?.lexeme;

        if !matches!(left, Expression::Identifier(_) | Expression::Member(_)) {
            return Err(SyntaxError::InvalidAssignmentTarget);
        }

        let right = self.assignment_expression()?;

        Ok(AssignmentExpression {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
        .into())
    }

    fn assignment_operator(&mut self) -> ParseResult<Token> {
        if self.peek_is(TokenKind::SimpleAssign) {
            self.consume(TokenKind::SimpleAssign)
        } else {
            self.consume(TokenKind::ComplexAssign)
        }
    }

    fn logical_or_expression(&mut self) -> ParseResult<Expression> {
        self.logical_expression(Self::logical_and_expression, TokenKind::Or)
    }

    fn logical_and_expression(&mut self) -> ParseResult<Expression> {
        self.logical_expression(Self::equality_expression, TokenKind::And)
    }

    fn equality_expression(&mut self) -> ParseResult<Expression> {
        self.binary_expression(Self::relational_expression, TokenKind::EqualityOperator)
    }

    fn relational_expression(&mut self) -> ParseResult<Expression> {
        self.binary_expression(Self::additive_expression, TokenKind::RelationalOperator)
    }

    fn additive_expression(&mut self) -> ParseResult<Expression> {
        self.binary_expression(Self::multiplicative_expression, TokenKind::AdditiveOperator)
    }

    fn multiplicative_expression(&mut self) -> ParseResult<Expression> {
        self.binary_expression(Self::unary_expression, TokenKind::MultiplicativeOperator)
    }

    /// One parse of `operand`, then fold further `operator` hits
    /// leftward. Both left-associative families share this shape; the
    /// sub-parser comes in as a plain function value.
    fn binary_expression(
        &mut self,
        operand: fn(&mut Self) -> ParseResult<Expression>,
        operator: TokenKind,
    ) -> ParseResult<Expression> {
        let mut left = operand(self)?;

        while self.peek_is(operator) {
            let operator = self.consume(operator)?.lexeme;
            let right = operand(self)?;

            left = BinaryExpression {
                operator,
                left: Box::new(left),
                right: Box::new(right),
            }
            .into();
        }

        Ok(left)
    }

    fn logical_expression(
        &mut self,
        operand: fn(&mut Self) -> ParseResult<Expression>,
        operator: TokenKind,
    ) -> ParseResult<Expression> {
        let mut left = operand(self)?;

        while self.peek_is(operator) {
            let operator = self.consume(operator)?.lexeme;
            let right = operand(self)?;

            left = LogicalExpression {
                operator,
                left: Box::new(left),
                right: Box::new(right),
            }
            .into();
        }

        Ok(left)
    }

    fn unary_expression(&mut self) -> ParseResult<Expression> {
        let operator = match self.peek() {
            Some(TokenKind::AdditiveOperator) => {
                Some(self.consume(TokenKind::AdditiveOperator)?.lexeme)
            }
            Some(TokenKind::Not) => Some(self.consume(TokenKind::Not)?.lexeme),
            _ => None,
        };

        if let Some(operator) = operator {
            // unary operators nest: !!x, --x
            let argument = Box::new(self.unary_expression()?);
            return Ok(UnaryExpression { operator, argument }.into());
        }

        self.left_hand_side_expression()
    }

    fn left_hand_side_expression(&mut self) -> ParseResult<Expression> {
        self.call_member_expression()
    }

    /// `super` is only legal as the head of a call. Everything else
    /// starts as a member expression and may turn into a call chain.
    fn call_member_expression(&mut self) -> ParseResult<Expression> {
        if self.peek_is(TokenKind::Super) {
            self.consume(TokenKind::Super)?;
            let arguments = self.arguments()?;

            let call = CallExpression {
                callee: Box::new(Expression::Super),
                arguments,
            };
            return self.call_tail(call.into());
        }

        let member = self.member_expression()?;

        if self.peek_is(TokenKind::LParen) {
            return self.call_tail(member);
        }

        Ok(member)
    }

    /// Extend a call head with further calls and member accesses:
    /// `f(x)(y)`, `f(x).g`, `f(x)[0]`.
    fn call_tail(&mut self, mut expr: Expression) -> ParseResult<Expression> {
        loop {
            match self.peek() {
                Some(TokenKind::LParen) => {
                    let arguments = self.arguments()?;
                    expr = CallExpression {
                        callee: Box::new(expr),
                        arguments,
                    }
                    .into();
                }
                Some(TokenKind::Dot) => {
                    self.consume(TokenKind::Dot)?;
                    let property = Expression::Identifier(self.identifier()?);
                    expr = MemberExpression {
                        computed: false,
                        object: Box::new(expr),
                        property: Box::new(property),
                    }
                    .into();
                }
                Some(TokenKind::LBracket) => {
                    self.consume(TokenKind::LBracket)?;
                    let property = self.expression()?;
                    self.consume(TokenKind::RBracket)?;
                    expr = MemberExpression {
                        computed: true,
                        object: Box::new(expr),
                        property: Box::new(property),
                    }
                    .into();
                }
                _ => return Ok(expr),
            }
        }
    }

    fn arguments(&mut self) -> ParseResult<Vec<Expression>> {
        self.consume(TokenKind::LParen)?;

        let mut arguments = vec![];
        if !self.peek_is(TokenKind::RParen) {
            arguments.push(self.assignment_expression()?);
            while self.peek_is(TokenKind::Comma) {
                self.consume(TokenKind::Comma)?;
                arguments.push(self.assignment_expression()?);
            }
        }

        self.consume(TokenKind::RParen)?;
        Ok(arguments)
    }

    fn member_expression(&mut self) -> ParseResult<Expression> {
        let mut object = self.primary_expression()?;

        loop {
            match self.peek() {
                Some(TokenKind::Dot) => {
                    self.consume(TokenKind::Dot)?;
                    let property = Expression::Identifier(self.identifier()?);
                    object = MemberExpression {
                        computed: false,
                        object: Box::new(object),
                        property: Box::new(property),
                    }
                    .into();
                }
                Some(TokenKind::LBracket) => {
                    self.consume(TokenKind::LBracket)?;
                    let property = self.expression()?;
                    self.consume(TokenKind::RBracket)?;
                    object = MemberExpression {
                        computed: true,
                        object: Box::new(object),
                        property: Box::new(property),
                    }
                    .into();
                }
                _ => return Ok(object),
            }
        }
    }

    fn primary_expression(&mut self) -> ParseResult<Expression> {
        match self.peek() {
            Some(TokenKind::LParen) => self.parenthesized_expression(),
            Some(TokenKind::Identifier) => Ok(self.identifier()?.into()),
            Some(TokenKind::This) => {
                self.consume(TokenKind::This)?;
                Ok(Expression::This)
            }
            Some(TokenKind::New) => self.new_expression(),
            _ => self.literal(),
        }
    }

    /// Grouping only; no node of its own.
    fn parenthesized_expression(&mut self) -> ParseResult<Expression> {
        self.consume(TokenKind::LParen)?;
        let expression = self.expression()?;
        self.consume(TokenKind::RParen)?;
        Ok(expression)
    }

    fn new_expression(&mut self) -> ParseResult<Expression> {
        self.consume(TokenKind::New)?;
        let callee = Box::new(self.member_expression()?);
        let arguments = self.arguments()?;

        Ok(NewExpression { callee, arguments }.into())
    }

    fn literal(&mut self) -> ParseResult<Expression> {
        match self.peek() {
            Some(TokenKind::Number) => self.numeric_literal(),
            Some(TokenKind::String) => self.string_literal(),
            Some(TokenKind::True) => {
                self.consume(TokenKind::True)?;
                Ok(BooleanLiteral { value: true }.into())
            }
            Some(TokenKind::False) => {
                self.consume(TokenKind::False)?;
                Ok(BooleanLiteral { value: false }.into())
            }
            Some(TokenKind::Null) => {
                self.consume(TokenKind::Null)?;
                Ok(NullLiteral { value: () }.into())
            }
            _ => Err(SyntaxError::UnexpectedLiteral),
        }
    }

    fn numeric_literal(&mut self) -> ParseResult<Expression> {
        let token = self.consume(TokenKind::Number)?;
        let value = token
            .lexeme
            .parse::<i64>()
            .map_err(|_| SyntaxError::NumberOutOfRange {
                lexeme: token.lexeme.clone(),
            })?;

        Ok(NumericLiteral { value }.into())
    }

    fn string_literal(&mut self) -> ParseResult<Expression> {
        let token = self.consume(TokenKind::String)?;
        // drop the surrounding quotes, nothing else
        let value = token.lexeme[1..token.lexeme.len() - 1].to_string();

        Ok(StringLiteral { value }.into())
    }
}

#[cfg(test)]
mod tests {
    use crate::error::SyntaxError;
    use crate::parser::ast::*;
    use crate::parser::parse;

    fn expression(input: &str) -> Expression {
        let mut body = parse(input).expect("should parse").body;
        match body.pop() {
            Some(Statement::Expression(ExpressionStatement { expression })) => expression,
            other => panic!("expected an expression statement, got {other:?}"),
        }
    }

    fn number(value: i64) -> Box<Expression> {
        Box::new(NumericLiteral { value }.into())
    }

    fn id(name: &str) -> Box<Expression> {
        Box::new(Identifier::new(name).into())
    }

    #[test]
    fn test_numeric_literal() {
        assert_eq!(Expression::Number(NumericLiteral { value: 42 }), expression("42;"));
    }

    #[test]
    fn test_string_literal_strips_quotes() {
        assert_eq!(
            Expression::String(StringLiteral {
                value: "hello, world".into(),
            }),
            expression("'hello, world';")
        );
        assert_eq!(
            Expression::String(StringLiteral {
                value: "double".into(),
            }),
            expression("\"double\";")
        );
    }

    #[test]
    fn test_keyword_literals() {
        assert_eq!(
            Expression::Boolean(BooleanLiteral { value: true }),
            expression("true;")
        );
        assert_eq!(
            Expression::Boolean(BooleanLiteral { value: false }),
            expression("false;")
        );
        assert_eq!(
            Expression::Null(NullLiteral { value: () }),
            expression("null;")
        );
    }

    #[test]
    fn test_multiplication_binds_tighter_than_addition() {
        assert_eq!(
            Expression::Binary(BinaryExpression {
                operator: "+".into(),
                left: number(2),
                right: Box::new(
                    BinaryExpression {
                        operator: "*".into(),
                        left: number(2),
                        right: number(3),
                    }
                    .into()
                ),
            }),
            expression("2 + 2 * 3;")
        );
    }

    #[test]
    fn test_parentheses_override_precedence() {
        assert_eq!(
            Expression::Binary(BinaryExpression {
                operator: "*".into(),
                left: Box::new(
                    BinaryExpression {
                        operator: "+".into(),
                        left: number(2),
                        right: number(2),
                    }
                    .into()
                ),
                right: number(3),
            }),
            expression("(2 + 2) * 3;")
        );
    }

    #[test]
    fn test_subtraction_is_left_associative() {
        assert_eq!(
            Expression::Binary(BinaryExpression {
                operator: "-".into(),
                left: Box::new(
                    BinaryExpression {
                        operator: "-".into(),
                        left: id("a"),
                        right: id("b"),
                    }
                    .into()
                ),
                right: id("c"),
            }),
            expression("a - b - c;")
        );
    }

    #[test]
    fn test_assignment_is_right_associative() {
        assert_eq!(
            Expression::Assignment(AssignmentExpression {
                operator: "=".into(),
                left: id("x"),
                right: Box::new(
                    AssignmentExpression {
                        operator: "=".into(),
                        left: id("y"),
                        right: number(42),
                    }
                    .into()
                ),
            }),
            expression("x = y = 42;")
        );
    }

    #[test]
    fn test_and_binds_tighter_than_or() {
        assert_eq!(
            Expression::Logical(LogicalExpression {
                operator: "||".into(),
                left: id("a"),
                right: Box::new(
                    LogicalExpression {
                        operator: "&&".into(),
                        left: id("b"),
                        right: id("c"),
                    }
                    .into()
                ),
            }),
            expression("a || b && c;")
        );
    }

    #[test]
    fn test_relational_binds_tighter_than_equality() {
        assert_eq!(
            Expression::Binary(BinaryExpression {
                operator: "==".into(),
                left: id("a"),
                right: Box::new(
                    BinaryExpression {
                        operator: "<".into(),
                        left: id("b"),
                        right: id("c"),
                    }
                    .into()
                ),
            }),
            expression("a == b < c;")
        );
    }

    #[test]
    fn test_unary_minus_binds_tighter_than_multiplication() {
        assert_eq!(
            Expression::Binary(BinaryExpression {
                operator: "*".into(),
                left: Box::new(
                    UnaryExpression {
                        operator: "-".into(),
                        argument: id("x"),
                    }
                    .into()
                ),
                right: id("y"),
            }),
            expression("-x * y;")
        );
    }

    #[test]
    fn test_unary_operators_nest() {
        assert_eq!(
            Expression::Unary(UnaryExpression {
                operator: "!".into(),
                argument: Box::new(
                    UnaryExpression {
                        operator: "!".into(),
                        argument: id("x"),
                    }
                    .into()
                ),
            }),
            expression("!!x;")
        );
    }

    #[test]
    fn test_member_chain() {
        assert_eq!(
            Expression::Member(MemberExpression {
                computed: false,
                object: Box::new(
                    MemberExpression {
                        computed: false,
                        object: id("a"),
                        property: id("b"),
                    }
                    .into()
                ),
                property: id("c"),
            }),
            expression("a.b.c;")
        );
    }

    #[test]
    fn test_computed_member() {
        assert_eq!(
            Expression::Member(MemberExpression {
                computed: true,
                object: id("s"),
                property: Box::new(
                    BinaryExpression {
                        operator: "+".into(),
                        left: id("i"),
                        right: number(1),
                    }
                    .into()
                ),
            }),
            expression("s[i + 1];")
        );
    }

    #[test]
    fn test_call_with_arguments() {
        assert_eq!(
            Expression::Call(CallExpression {
                callee: id("foo"),
                arguments: vec![
                    Identifier::new("x").into(),
                    NumericLiteral { value: 2 }.into(),
                ],
            }),
            expression("foo(x, 2);")
        );
    }

    #[test]
    fn test_chained_calls_and_members() {
        // f(x).g[0](y)
        assert_eq!(
            Expression::Call(CallExpression {
                callee: Box::new(
                    MemberExpression {
                        computed: true,
                        object: Box::new(
                            MemberExpression {
                                computed: false,
                                object: Box::new(
                                    CallExpression {
                                        callee: id("f"),
                                        arguments: vec![Identifier::new("x").into()],
                                    }
                                    .into()
                                ),
                                property: id("g"),
                            }
                            .into()
                        ),
                        property: number(0),
                    }
                    .into()
                ),
                arguments: vec![Identifier::new("y").into()],
            }),
            expression("f(x).g[0](y);")
        );
    }

    #[test]
    fn test_curried_call() {
        assert_eq!(
            Expression::Call(CallExpression {
                callee: Box::new(
                    CallExpression {
                        callee: id("f"),
                        arguments: vec![],
                    }
                    .into()
                ),
                arguments: vec![],
            }),
            expression("f()();")
        );
    }

    #[test]
    fn test_super_call() {
        assert_eq!(
            Expression::Call(CallExpression {
                callee: Box::new(Expression::Super),
                arguments: vec![Identifier::new("x").into()],
            }),
            expression("super(x);")
        );
    }

    #[test]
    fn test_super_requires_a_call() {
        assert!(parse("super.x;").is_err());
    }

    #[test]
    fn test_this_and_member_assignment() {
        assert_eq!(
            Expression::Assignment(AssignmentExpression {
                operator: "=".into(),
                left: Box::new(
                    MemberExpression {
                        computed: false,
                        object: Box::new(Expression::This),
                        property: id("x"),
                    }
                    .into()
                ),
                right: number(1),
            }),
            expression("this.x = 1;")
        );
    }

    #[test]
    fn test_new_with_member_callee() {
        assert_eq!(
            Expression::New(NewExpression {
                callee: Box::new(
                    MemberExpression {
                        computed: false,
                        object: id("geometry"),
                        property: id("Point"),
                    }
                    .into()
                ),
                arguments: vec![
                    NumericLiteral { value: 1 }.into(),
                    NumericLiteral { value: 2 }.into(),
                ],
            }),
            expression("new geometry.Point(1, 2);")
        );
    }

    #[test]
    fn test_invalid_assignment_target() {
        assert_eq!(
            Err(SyntaxError::InvalidAssignmentTarget),
            parse("2 = 3;")
        );
        assert_eq!(
            Err(SyntaxError::InvalidAssignmentTarget),
            parse("f() = 1;")
        );
    }

    #[test]
    fn test_compound_assignment() {
        assert_eq!(
            Expression::Assignment(AssignmentExpression {
                operator: "+=".into(),
                left: id("i"),
                right: number(1),
            }),
            expression("i += 1;")
        );
    }

    #[test]
    fn test_missing_literal_production() {
        assert_eq!(Err(SyntaxError::UnexpectedLiteral), parse("let x = ;"));
    }

    #[test]
    fn test_number_out_of_range() {
        assert_eq!(
            Err(SyntaxError::NumberOutOfRange {
                lexeme: "99999999999999999999".into(),
            }),
            parse("99999999999999999999;")
        );
    }
}
