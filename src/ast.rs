/// Represents a numeric literal value in the language.
///
/// The variant records whether the literal was written as an integer
/// (`42`) or as a real (`3.14`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A 64-bit floating-point literal.
    Real(f64),
}

impl LiteralValue {
    /// Returns `true` if the literal was written as a real constant.
    #[must_use]
    pub const fn is_real(&self) -> bool {
        matches!(self, Self::Real(_))
    }
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

/// The root of every syntax tree: `PROGRAM name; block.`
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// The program's name.
    pub name:  String,
    /// The program's top-level block.
    pub block: Block,
}

/// A block: declarations followed by a compound statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Variable and procedure declarations, in source order.
    pub declarations: Vec<Declaration>,
    /// The `BEGIN ... END` body.
    pub body:         Compound,
}

/// A single declaration inside a block.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    /// A variable declaration from a `VAR` section.
    Variable(VarDecl),
    /// A (possibly nested) procedure declaration.
    Procedure(ProcedureDecl),
}

/// Declares one variable with a type.
///
/// `VAR a, b : INTEGER;` produces two `VarDecl` nodes with equal type
/// references.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    /// The declared variable.
    pub variable:  VarRef,
    /// Its declared type.
    pub type_spec: TypeRef,
}

/// A procedure declaration with its formal parameters and body.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcedureDecl {
    /// The procedure's name.
    pub name:   String,
    /// Formal parameters, in source order.
    pub params: Vec<Param>,
    /// The procedure's body, which may declare further procedures.
    pub block:  Block,
    /// Line number in the source code.
    pub line:   usize,
}

/// A formal parameter of a procedure.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    /// The parameter variable.
    pub variable:  VarRef,
    /// The parameter's declared type.
    pub type_spec: TypeRef,
}

/// A `BEGIN ... END` statement list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Compound {
    /// Statements, in source order.
    pub statements: Vec<Statement>,
}

/// Represents a statement inside a compound statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A nested `BEGIN ... END`.
    Compound(Compound),
    /// An assignment `target := value`.
    Assign(Assign),
    /// The empty statement.
    NoOp,
}

/// An assignment statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Assign {
    /// The assigned variable.
    pub target: VarRef,
    /// The expression whose value is stored.
    pub value:  Expr,
    /// Line number in the source code.
    pub line:   usize,
}

/// A reference to a variable by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarRef {
    /// Name of the variable.
    pub name: String,
    /// Line number in the source code.
    pub line: usize,
}

/// A reference to a built-in type by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    /// Name of the type (`INTEGER` or `REAL`).
    pub name: String,
    /// Line number in the source code.
    pub line: usize,
}

/// An abstract syntax tree (AST) node representing an arithmetic expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Variable(VarRef),
    /// A unary operation (`+x`, `-x`).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use minipas::ast::{Expr, VarRef};
    ///
    /// let expr = Expr::Variable(VarRef { name: "x".to_string(),
    ///                                    line: 5, });
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. } | Self::UnaryOp { line, .. } | Self::BinaryOp { line, .. } => {
                *line
            },
            Self::Variable(var) => var.line,
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Floor division (`DIV`)
    IntegerDiv,
    /// Real division (`/`)
    FloatDiv,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Identity (`+x`).
    Plus,
    /// Arithmetic negation (`-x`).
    Minus,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::IntegerDiv => "DIV",
            Self::FloatDiv => "/",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
        }
    }
}
