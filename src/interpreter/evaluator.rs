/// Core evaluation logic.
///
/// Contains the evaluation context holding the global variable store, and
/// the walk over blocks, statements and expressions.
pub mod core;

/// Unary operator evaluation.
///
/// Handles identity and negation.
pub mod unary;

/// Binary operator evaluation.
///
/// Implements `+`, `-`, `*`, `DIV` and `/` over integer and real operands.
pub mod binary;
