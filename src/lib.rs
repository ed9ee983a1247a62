//! # minipas
//!
//! minipas is a front end and evaluator for a small Pascal subset, written in
//! Rust. It scans and parses programs made of variable declarations, nested
//! procedure declarations and compound assignment statements, checks
//! identifier scoping statically, and evaluates the program into a set of
//! global variable bindings.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::collections::BTreeMap;

use log::debug;

use crate::{
    ast::Program,
    error::Error,
    interpreter::{
        evaluator::core::Context,
        lexer::Lexer,
        parser::core::Parser,
        semantic::core::{RedeclarationPolicy, SemanticAnalyzer},
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the program, block, declaration, statement and
/// expression types that represent source code as a tree. The AST is built by
/// the parser and walked, read-only, by the semantic analyzer and the
/// evaluator.
///
/// # Responsibilities
/// - Defines a closed set of node types for every language construct.
/// - Attaches source line numbers to nodes for error reporting.
pub mod ast;
/// Provides unified error types for every phase.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// semantic analysis or evaluation. Each phase has its own error enum, and
/// [`error::Error`] wraps them so callers can tell which phase failed.
///
/// # Responsibilities
/// - Defines error enums for all failure modes.
/// - Attaches line numbers and offending names or tokens for context.
/// - Implements the standard error traits for reporting.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, semantic analysis, evaluation
/// and value representations.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, analyzer, evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// The final variable bindings of a program, ordered by name.
pub type Globals = BTreeMap<String, Value>;

/// Settings for a pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// How the analyzer treats a name declared twice in one scope.
    pub redeclaration: RedeclarationPolicy,
    /// Whether to run the semantic analyzer before evaluation.
    pub analyze:       bool,
}

impl Default for Options {
    fn default() -> Self {
        Self { redeclaration: RedeclarationPolicy::default(),
               analyze:       true, }
    }
}

/// Parses `source` into a program without analyzing or evaluating it.
///
/// # Errors
/// Returns [`Error::Lex`] or [`Error::Parse`].
///
/// # Examples
/// ```
/// use minipas::{error::Error, parse_program};
///
/// let program = parse_program("PROGRAM Empty; BEGIN END.").unwrap();
/// assert_eq!(program.name, "Empty");
///
/// // Missing semicolon after the program name.
/// let err = parse_program("PROGRAM Broken BEGIN END.").unwrap_err();
/// assert!(matches!(err, Error::Parse(_)));
/// ```
pub fn parse_program(source: &str) -> Result<Program, Error> {
    let program = Parser::new(Lexer::new(source))?.parse()?;

    debug!("Parsed program '{}' with {} top-level declaration(s)",
           program.name,
           program.block.declarations.len());
    Ok(program)
}

/// Runs the semantic analyzer over an already parsed program.
///
/// # Errors
/// Returns [`Error::Semantic`] if a name does not resolve.
pub fn analyze_program(program: &Program, options: &Options) -> Result<(), Error> {
    SemanticAnalyzer::new(options.redeclaration).analyze(program)?;
    Ok(())
}

/// Parses, analyzes and evaluates `source` with default [`Options`].
///
/// # Errors
/// Returns the first error raised by any phase.
///
/// # Examples
/// ```
/// use minipas::{error::Error, interpreter::value::core::Value, run};
///
/// let globals = run("PROGRAM T; VAR y : REAL; BEGIN y := 7 / 2 END.").unwrap();
/// assert_eq!(globals["y"], Value::Real(3.5));
///
/// // 'x' is never declared.
/// let err = run("PROGRAM T; BEGIN x := 1 END.").unwrap_err();
/// assert!(matches!(err, Error::Semantic(_)));
/// ```
pub fn run(source: &str) -> Result<Globals, Error> {
    run_with_options(source, &Options::default())
}

/// Parses, optionally analyzes, and evaluates `source`.
///
/// # Errors
/// Returns the first error raised by any phase.
pub fn run_with_options(source: &str, options: &Options) -> Result<Globals, Error> {
    let program = parse_program(source)?;

    if options.analyze {
        analyze_program(&program, options)?;
    }

    let mut context = Context::new();
    context.interpret(&program)?;

    Ok(context.into_globals())
}
