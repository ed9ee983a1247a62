use crate::{
    ast::{Assign, Compound, Statement},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a compound statement.
    ///
    /// Grammar: `compound := BEGIN statement_list END`
    pub(in crate::interpreter::parser) fn parse_compound(&mut self) -> ParseResult<Compound> {
        self.eat(TokenKind::Begin)?;
        let statements = self.parse_statement_list()?;
        self.eat(TokenKind::End)?;

        Ok(Compound { statements })
    }

    /// Parses semicolon-separated statements.
    ///
    /// A trailing `;` before `END` yields a final empty statement.
    ///
    /// Grammar: `statement_list := statement (SEMI statement)*`
    fn parse_statement_list(&mut self) -> ParseResult<Vec<Statement>> {
        let mut statements = vec![self.parse_statement()?];

        while self.at(TokenKind::Semi) {
            self.eat(TokenKind::Semi)?;
            statements.push(self.parse_statement()?);
        }

        Ok(statements)
    }

    /// Parses a single statement.
    ///
    /// Grammar: `statement := compound | assignment | empty`
    fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.current().kind {
            TokenKind::Begin => Ok(Statement::Compound(self.parse_compound()?)),
            TokenKind::Id => Ok(Statement::Assign(self.parse_assignment()?)),
            _ => Ok(Statement::NoOp),
        }
    }

    /// Grammar: `assignment := variable ASSIGN expr`
    fn parse_assignment(&mut self) -> ParseResult<Assign> {
        let target = self.parse_variable()?;
        let line = self.eat(TokenKind::Assign)?.line;
        let value = self.parse_expr()?;

        Ok(Assign { target,
                    value,
                    line })
    }
}
