use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses an additive expression.
    ///
    /// Each additional operator/operand pair is folded onto the node built so
    /// far, so `a - b - c` becomes `(a - b) - c`.
    ///
    /// Grammar: `expr := term ((PLUS | MINUS) term)*`
    pub fn parse_expr(&mut self) -> ParseResult<Expr> {
        let mut node = self.parse_term()?;

        while let Some(op) = additive_operator(self.current().kind) {
            let kind = self.current().kind;
            let line = self.eat(kind)?.line;
            let right = self.parse_term()?;
            node = Expr::BinaryOp { left: Box::new(node),
                                    op,
                                    right: Box::new(right),
                                    line };
        }

        Ok(node)
    }

    /// Parses a multiplicative term.
    ///
    /// Grammar: `term := factor ((MUL | INTEGER_DIV | FLOAT_DIV) factor)*`
    pub(in crate::interpreter::parser) fn parse_term(&mut self) -> ParseResult<Expr> {
        let mut node = self.parse_factor()?;

        while let Some(op) = multiplicative_operator(self.current().kind) {
            let kind = self.current().kind;
            let line = self.eat(kind)?.line;
            let right = self.parse_factor()?;
            node = Expr::BinaryOp { left: Box::new(node),
                                    op,
                                    right: Box::new(right),
                                    line };
        }

        Ok(node)
    }
}

const fn additive_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        _ => None,
    }
}

const fn multiplicative_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Mul => Some(BinaryOperator::Mul),
        TokenKind::IntegerDiv => Some(BinaryOperator::IntegerDiv),
        TokenKind::FloatDiv => Some(BinaryOperator::FloatDiv),
        _ => None,
    }
}
