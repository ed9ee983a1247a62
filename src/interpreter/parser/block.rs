use crate::{
    ast::{Block, Declaration, Param, ProcedureDecl, Program, VarDecl},
    interpreter::{
        lexer::TokenKind,
        parser::core::{ParseResult, Parser},
    },
};

impl Parser<'_> {
    /// Parses the top-level program production.
    ///
    /// Grammar: `program := PROGRAM variable SEMI block DOT`
    pub(in crate::interpreter::parser) fn parse_program(&mut self) -> ParseResult<Program> {
        self.eat(TokenKind::Program)?;
        let name = self.parse_variable()?.name;
        self.eat(TokenKind::Semi)?;
        let block = self.parse_block()?;
        self.eat(TokenKind::Dot)?;

        Ok(Program { name, block })
    }

    /// Grammar: `block := declarations compound_statement`
    pub(in crate::interpreter::parser) fn parse_block(&mut self) -> ParseResult<Block> {
        let declarations = self.parse_declarations()?;
        let body = self.parse_compound()?;

        Ok(Block { declarations,
                   body })
    }

    /// Parses an optional `VAR` section followed by any number of procedure
    /// declarations.
    ///
    /// A `VAR` keyword must be followed by at least one variable declaration.
    /// Each `ID, ID : TYPE` line expands into one [`VarDecl`] per identifier.
    ///
    /// Grammar: `declarations := (VAR (var_decl SEMI)+)? (procedure_decl SEMI)*`
    fn parse_declarations(&mut self) -> ParseResult<Vec<Declaration>> {
        let mut declarations = Vec::new();

        if self.at(TokenKind::Var) {
            self.eat(TokenKind::Var)?;

            loop {
                declarations.extend(self.parse_var_decl()?
                                        .into_iter()
                                        .map(Declaration::Variable));
                self.eat(TokenKind::Semi)?;

                if !self.at(TokenKind::Id) {
                    break;
                }
            }
        }

        while self.at(TokenKind::Procedure) {
            declarations.push(Declaration::Procedure(self.parse_procedure_decl()?));
            self.eat(TokenKind::Semi)?;
        }

        Ok(declarations)
    }

    /// Parses a procedure declaration. The procedure's block may itself
    /// declare further procedures.
    ///
    /// Grammar: `procedure_decl := PROCEDURE ID (LPAREN param_list RPAREN)?
    /// SEMI block`
    fn parse_procedure_decl(&mut self) -> ParseResult<ProcedureDecl> {
        let line = self.eat(TokenKind::Procedure)?.line;
        let name = self.eat(TokenKind::Id)?.text().to_string();

        let mut params = Vec::new();
        if self.at(TokenKind::LParen) {
            self.eat(TokenKind::LParen)?;
            params = self.parse_param_list()?;
            self.eat(TokenKind::RParen)?;
        }

        self.eat(TokenKind::Semi)?;
        let block = self.parse_block()?;

        Ok(ProcedureDecl { name,
                           params,
                           block,
                           line })
    }

    /// Grammar: `param_list := params (SEMI params)*`
    fn parse_param_list(&mut self) -> ParseResult<Vec<Param>> {
        let mut params = self.parse_params()?;

        while self.at(TokenKind::Semi) {
            self.eat(TokenKind::Semi)?;
            params.extend(self.parse_params()?);
        }

        Ok(params)
    }

    /// Grammar: `params := ID (COMMA ID)* COLON type_spec`
    fn parse_params(&mut self) -> ParseResult<Vec<Param>> {
        let (variables, type_spec) = self.parse_typed_identifiers()?;

        Ok(variables.into_iter()
                    .map(|variable| Param { variable,
                                            type_spec: type_spec.clone() })
                    .collect())
    }

    /// Grammar: `var_decl := ID (COMMA ID)* COLON type_spec`
    fn parse_var_decl(&mut self) -> ParseResult<Vec<VarDecl>> {
        let (variables, type_spec) = self.parse_typed_identifiers()?;

        Ok(variables.into_iter()
                    .map(|variable| VarDecl { variable,
                                              type_spec: type_spec.clone() })
                    .collect())
    }
}
