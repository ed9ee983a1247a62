use std::collections::VecDeque;

use crate::{
    ast::Program,
    error::ParseError,
    interpreter::lexer::{Lexer, Token, TokenKind},
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Number of consumed tokens kept for error previews.
pub const RECENT_TOKENS: usize = 5;

/// Recursive-descent parser over a [`Lexer`].
///
/// The parser holds exactly one token of lookahead. Every successful
/// [`Parser::eat`] pulls exactly one more token from the lexer, which is what
/// lets the grammar tell `:` and `:=` apart without backtracking.
///
/// ## Example
/// ```
/// use minipas::interpreter::{lexer::Lexer, parser::core::Parser};
///
/// let source = "PROGRAM Demo; VAR x : INTEGER; BEGIN x := 1 + 2 END.";
/// let program = Parser::new(Lexer::new(source)).unwrap().parse().unwrap();
///
/// assert_eq!(program.name, "Demo");
/// assert_eq!(program.block.declarations.len(), 1);
/// ```
pub struct Parser<'src> {
    lexer:   Lexer<'src>,
    current: Token,
    recent:  VecDeque<Token>,
}

impl<'src> Parser<'src> {
    /// Creates a parser and primes the lookahead with the first token.
    ///
    /// # Errors
    /// Returns [`ParseError::Lexical`] if the first token cannot be scanned.
    pub fn new(mut lexer: Lexer<'src>) -> ParseResult<Self> {
        let current = lexer.next_token()?;

        Ok(Self { lexer,
                  current,
                  recent: VecDeque::with_capacity(RECENT_TOKENS) })
    }

    /// Parses a whole program and checks that nothing follows it.
    ///
    /// Grammar: `program EOF`
    ///
    /// # Errors
    /// Returns the first [`ParseError`] encountered, or
    /// [`ParseError::UnexpectedTrailingTokens`] if input remains after the
    /// closing `.`.
    pub fn parse(mut self) -> ParseResult<Program> {
        let program = self.parse_program()?;

        if self.current.kind != TokenKind::Eof {
            return Err(ParseError::UnexpectedTrailingTokens { token: self.current.clone(),
                                                              line:  self.current.line, });
        }

        Ok(program)
    }

    /// The current lookahead token.
    #[must_use]
    pub const fn current(&self) -> &Token {
        &self.current
    }

    /// Returns `true` if the lookahead has the given kind.
    pub(in crate::interpreter::parser) fn at(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Consumes the lookahead if it has the expected kind and pulls the next
    /// token from the lexer.
    ///
    /// # Returns
    /// The consumed token.
    ///
    /// # Errors
    /// - `UnexpectedToken` if the lookahead does not match `expected`.
    /// - `Lexical` if the lexer fails while scanning the next token.
    pub(in crate::interpreter::parser) fn eat(&mut self, expected: TokenKind) -> ParseResult<Token> {
        if !self.at(expected) {
            return Err(self.unexpected(expected));
        }

        let next = self.lexer.next_token()?;
        let eaten = std::mem::replace(&mut self.current, next);

        if self.recent.len() == RECENT_TOKENS {
            self.recent.pop_front();
        }
        self.recent.push_back(eaten.clone());

        Ok(eaten)
    }

    /// Builds an `UnexpectedToken` error for the current lookahead.
    pub(in crate::interpreter::parser) fn unexpected(&self, expected: TokenKind) -> ParseError {
        ParseError::UnexpectedToken { expected,
                                      found: self.current.clone(),
                                      recent: self.recent.iter().cloned().collect(),
                                      line: self.current.line }
    }
}
