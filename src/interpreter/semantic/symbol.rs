/// Names of the built-in type symbols seeded into every root scope.
pub const BUILTIN_TYPES: [&str; 2] = ["INTEGER", "REAL"];

/// The name and declared type of a procedure parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamSignature {
    /// The parameter's name.
    pub name:      String,
    /// The parameter's declared type.
    pub type_name: String,
}

/// What a symbol stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolKind {
    /// A variable or parameter with its resolved type.
    Variable {
        /// The name of the variable's type symbol.
        type_name: String,
    },
    /// A procedure and its formal parameters.
    Procedure {
        /// Formal parameters, in declaration order.
        params: Vec<ParamSignature>,
    },
    /// A built-in type such as `INTEGER`.
    BuiltinType,
}

/// A named entry in a scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    /// The symbol's name.
    pub name: String,
    /// What the name refers to.
    pub kind: SymbolKind,
}

impl Symbol {
    /// Creates a variable symbol of the given type.
    #[must_use]
    pub fn variable(name: &str, type_name: &str) -> Self {
        Self { name: name.to_string(),
               kind: SymbolKind::Variable { type_name: type_name.to_string() }, }
    }

    /// Creates a procedure signature symbol.
    #[must_use]
    pub fn procedure(name: &str, params: Vec<ParamSignature>) -> Self {
        Self { name: name.to_string(),
               kind: SymbolKind::Procedure { params }, }
    }

    /// Creates a built-in type symbol.
    #[must_use]
    pub fn builtin(name: &str) -> Self {
        Self { name: name.to_string(),
               kind: SymbolKind::BuiltinType, }
    }

    /// Returns `true` if this symbol names a type.
    #[must_use]
    pub const fn is_type(&self) -> bool {
        matches!(self.kind, SymbolKind::BuiltinType)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            SymbolKind::Variable { type_name } => write!(f, "<Var {}: {type_name}>", self.name),
            SymbolKind::Procedure { params } => {
                let params = params.iter()
                                   .map(|p| format!("{}: {}", p.name, p.type_name))
                                   .collect::<Vec<_>>()
                                   .join("; ");
                write!(f, "<Procedure {}({params})>", self.name)
            },
            SymbolKind::BuiltinType => write!(f, "<Builtin {}>", self.name),
        }
    }
}
