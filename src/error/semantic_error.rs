#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during static analysis.
pub enum SemanticError {
    /// A variable reference did not resolve in the visible scope chain.
    UnknownIdentifier {
        /// The name that failed to resolve.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A type name did not resolve to a type symbol.
    UnknownType {
        /// The type name that failed to resolve.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A name was declared twice in one scope while redeclaration is
    /// rejected.
    DuplicateIdentifier {
        /// The redeclared name.
        name:  String,
        /// The scope in which both declarations appear.
        scope: String,
        /// The source line of the second declaration.
        line:  usize,
    },
}

impl std::fmt::Display for SemanticError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownIdentifier { name, line } => {
                write!(f, "Error on line {line}: Identifier '{name}' not found.")
            },
            Self::UnknownType { name, line } => {
                write!(f, "Error on line {line}: Unknown type '{name}'.")
            },
            Self::DuplicateIdentifier { name, scope, line } => write!(f,
                                                                      "Error on line {line}: Duplicate identifier '{name}' in scope '{scope}'."),
        }
    }
}

impl std::error::Error for SemanticError {}
