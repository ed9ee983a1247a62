/// Parses arithmetic expressions and terms.
///
/// Handles left-associative chains of `+`/`-` (expressions) and
/// `*`/`DIV`/`/` (terms). Operator precedence comes from the grammar layering.
pub mod binary;
/// Parses programs, blocks and declarations.
///
/// Covers the top-level `PROGRAM` production, `VAR` sections and (nested)
/// `PROCEDURE` declarations with their formal parameter lists.
pub mod block;
/// Core parser state and the token-matching primitive.
///
/// Holds the single lookahead token, pulls tokens from the lexer on demand
/// and reports mismatches together with a window of recent tokens.
pub mod core;
/// Parses statements.
///
/// Implements compound statements, statement lists, assignments and the
/// empty statement.
pub mod statement;
/// Parses factors.
///
/// Handles unary `+`/`-`, numeric literals, parenthesised expressions and
/// variable references.
pub mod unary;
/// Shared parsing helpers.
///
/// Identifier lists, variable references and type specifications used by
/// both variable and parameter declarations.
pub mod utils;
