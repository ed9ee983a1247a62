#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during scanning.
pub enum LexError {
    /// Found a character that does not start any token.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Source text around the offending character.
        snippet:   String,
        /// The source line where the error occurred.
        line:      usize,
    },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { character,
                                     snippet,
                                     line, } => write!(f,
                                                       "Error on line {line}: Invalid character {character:?} near \"{snippet}\"."),
        }
    }
}

impl std::error::Error for LexError {}
