use crate::{
    ast::{TypeRef, VarRef},
    error::ParseError,
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses a variable reference.
    ///
    /// Grammar: `variable := ID`
    pub(in crate::interpreter::parser) fn parse_variable(&mut self) -> ParseResult<VarRef> {
        let token = self.eat(TokenKind::Id)?;

        Ok(VarRef { name: token.text().to_string(),
                    line: token.line, })
    }

    /// Parses a comma-separated identifier list followed by a type.
    ///
    /// This is shared by variable declarations and formal parameters, which
    /// have the same shape.
    ///
    /// Grammar: `ID (COMMA ID)* COLON type_spec`
    ///
    /// # Returns
    /// The declared variables in source order and their common type.
    pub(in crate::interpreter::parser) fn parse_typed_identifiers(
        &mut self)
        -> ParseResult<(Vec<VarRef>, TypeRef)> {
        let mut variables = vec![self.parse_variable()?];

        while self.at(TokenKind::Comma) {
            self.eat(TokenKind::Comma)?;
            variables.push(self.parse_variable()?);
        }

        self.eat(TokenKind::Colon)?;
        let type_spec = self.parse_type_spec()?;

        Ok((variables, type_spec))
    }

    /// Parses a type specification.
    ///
    /// Grammar: `type_spec := INTEGER | REAL`
    ///
    /// # Errors
    /// Returns `InvalidTypeSpec` for any other token.
    pub(in crate::interpreter::parser) fn parse_type_spec(&mut self) -> ParseResult<TypeRef> {
        let kind = self.current().kind;
        match kind {
            TokenKind::Integer | TokenKind::Real => {
                let token = self.eat(kind)?;
                Ok(TypeRef { name: token.text().to_string(),
                             line: token.line, })
            },
            _ => Err(ParseError::InvalidTypeSpec { found: self.current().clone(),
                                                   line:  self.current().line, }),
        }
    }
}
