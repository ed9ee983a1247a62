/// The evaluator module executes the syntax tree and computes results.
///
/// The evaluator walks the program's top-level compound statement, evaluates
/// arithmetic expressions and stores assigned values in a flat global
/// variable store owned by an explicit context.
///
/// # Responsibilities
/// - Evaluates literals, variable references, unary and binary operations.
/// - Keeps integer and real arithmetic apart, promoting when they mix.
/// - Reports runtime errors such as unassigned variables or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces one token per call,
/// skipping whitespace and `{ ... }` comments. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind, lexeme and
///   source line.
/// - Distinguishes reserved words from identifiers, and integer from real
///   constants.
/// - Reports lexical errors, with a snippet of the surrounding source.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from the lexer with a single token of lookahead
/// and constructs the AST by recursive descent, one method per grammar
/// production.
///
/// # Responsibilities
/// - Converts tokens into programs, blocks, declarations, statements and
///   expressions.
/// - Encodes operator precedence through grammar layering.
/// - Validates the grammar, reporting the expected and actual token.
pub mod parser;
/// The semantic module checks identifier scoping before evaluation.
///
/// The analyzer builds a chain of scopes that mirrors the lexical nesting of
/// procedures and verifies that every name used in the program is visible
/// where it is used.
///
/// # Responsibilities
/// - Creates one scope per program and per procedure body.
/// - Resolves variable and type references through the scope chain.
/// - Records procedure signatures and parameters as symbols.
pub mod semantic;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the numeric `Value` enum with integer and real variants.
/// - Provides promotion from integer to real.
pub mod value;
