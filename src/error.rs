/// Lexical errors.
///
/// Raised by the scanner when the source contains a character that cannot
/// start any token.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree:
/// unexpected tokens, trailing input, invalid type specifications and
/// oversized literals.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation, such as
/// reading a variable that was never assigned, division by zero, or integer
/// overflow.
pub mod runtime_error;
/// Semantic errors.
///
/// Raised by the static scope checker when a name does not resolve in the
/// visible scope chain, or when a redeclaration is rejected.
pub mod semantic_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use semantic_error::SemanticError;

/// Any error produced by the pipeline.
///
/// Each variant corresponds to one phase, so callers can tell which stage
/// failed and inspect the phase-specific details.
#[derive(Debug)]
pub enum Error {
    /// The scanner hit an unrecognized character.
    Lex(LexError),
    /// The token stream did not match the grammar.
    Parse(ParseError),
    /// A name did not resolve during static analysis.
    Semantic(SemanticError),
    /// Evaluation failed.
    Runtime(RuntimeError),
}

impl From<LexError> for Error {
    fn from(error: LexError) -> Self {
        Self::Lex(error)
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        match error {
            ParseError::Lexical(error) => Self::Lex(error),
            other => Self::Parse(other),
        }
    }
}

impl From<SemanticError> for Error {
    fn from(error: SemanticError) -> Self {
        Self::Semantic(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "[Lexical error] {e}"),
            Self::Parse(e) => write!(f, "[Syntax error] {e}"),
            Self::Semantic(e) => write!(f, "[Semantic error] {e}"),
            Self::Runtime(e) => write!(f, "[Runtime error] {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Semantic(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
