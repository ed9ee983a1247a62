use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a factor.
    ///
    /// Unary prefixes recurse onto `factor` itself, so `- - 5` produces two
    /// nested [`Expr::UnaryOp`] nodes.
    ///
    /// Grammar:
    /// ```text
    /// factor := PLUS factor | MINUS factor | INTEGER_CONST | REAL_CONST
    ///         | LPAREN expr RPAREN | variable
    /// ```
    pub(in crate::interpreter::parser) fn parse_factor(&mut self) -> ParseResult<Expr> {
        match self.current().kind {
            TokenKind::Plus => self.parse_unary(TokenKind::Plus, UnaryOperator::Plus),
            TokenKind::Minus => self.parse_unary(TokenKind::Minus, UnaryOperator::Minus),
            TokenKind::IntegerConst => {
                let token = self.eat(TokenKind::IntegerConst)?;
                let value = parse_integer(&token)?;
                Ok(Expr::Literal { value: LiteralValue::Integer(value),
                                   line:  token.line, })
            },
            TokenKind::RealConst => {
                let token = self.eat(TokenKind::RealConst)?;
                let value = parse_real(&token)?;
                Ok(Expr::Literal { value: LiteralValue::Real(value),
                                   line:  token.line, })
            },
            TokenKind::LParen => {
                self.eat(TokenKind::LParen)?;
                let expr = self.parse_expr()?;
                self.eat(TokenKind::RParen)?;
                Ok(expr)
            },
            _ => Ok(Expr::Variable(self.parse_variable()?)),
        }
    }

    fn parse_unary(&mut self, kind: TokenKind, op: UnaryOperator) -> ParseResult<Expr> {
        let line = self.eat(kind)?.line;
        let operand = self.parse_factor()?;

        Ok(Expr::UnaryOp { op,
                           expr: Box::new(operand),
                           line })
    }
}

/// Parses an integer literal from its lexeme.
///
/// # Errors
/// Returns `LiteralTooLarge` if the literal does not fit in an `i64`.
fn parse_integer(token: &Token) -> ParseResult<i64> {
    token.text()
         .parse()
         .map_err(|_| ParseError::LiteralTooLarge { literal: token.text().to_string(),
                                                    line:    token.line, })
}

/// Parses a real literal from its lexeme.
///
/// # Errors
/// Returns `LiteralTooLarge` if the literal overflows to infinity.
fn parse_real(token: &Token) -> ParseResult<f64> {
    token.text()
         .parse::<f64>()
         .ok()
         .filter(|value| value.is_finite())
         .ok_or_else(|| ParseError::LiteralTooLarge { literal: token.text().to_string(),
                                                      line:    token.line, })
}
