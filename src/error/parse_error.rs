use crate::{
    error::LexError,
    interpreter::lexer::{Token, TokenKind},
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// The lookahead token did not match the kind the grammar expected.
    UnexpectedToken {
        /// The token kind the grammar required.
        expected: TokenKind,
        /// The token actually found.
        found:    Token,
        /// The most recently consumed tokens, oldest first.
        recent:   Vec<Token>,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Found extra tokens after the program's final `.`.
    UnexpectedTrailingTokens {
        /// The first extra token.
        token: Token,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A type specification was neither `INTEGER` nor `REAL`.
    InvalidTypeSpec {
        /// The token found in type position.
        found: Token,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An integer literal was too large to be represented.
    LiteralTooLarge {
        /// The literal's source text.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// The scanner failed while the parser was pulling the next token.
    Lexical(LexError),
}

impl From<LexError> for ParseError {
    fn from(error: LexError) -> Self {
        Self::Lexical(error)
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    recent,
                                    line, } => {
                write!(f, "Error on line {line}: Expected {expected}, but got {found}.")?;
                if !recent.is_empty() {
                    let preview = recent.iter()
                                        .map(ToString::to_string)
                                        .collect::<Vec<_>>()
                                        .join(", ");
                    write!(f, " Recent tokens: [{preview}]")?;
                }
                Ok(())
            },
            Self::UnexpectedTrailingTokens { token, line } => write!(f,
                                                                     "Error on line {line}: Extra tokens after the end of the program: {token}."),
            Self::InvalidTypeSpec { found, line } => write!(f,
                                                            "Error on line {line}: Expected a type (INTEGER or REAL), but got {found}."),
            Self::LiteralTooLarge { literal, line } => {
                write!(f, "Error on line {line}: Literal {literal} is too large.")
            },
            Self::Lexical(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ParseError {}
