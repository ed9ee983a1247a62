use std::collections::BTreeMap;

use log::{debug, trace};

use crate::{
    ast::{Assign, Block, Compound, Declaration, Expr, Program, Statement, VarRef},
    error::RuntimeError,
    interpreter::value::core::Value,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// The context owns the flat global variable store. Every variable assigned
/// anywhere in the program lands here; there are no per-procedure frames,
/// since procedures are declared but never called.
///
/// ## Usage
///
/// Each `Context` is independent, so separate interpretations never share
/// state. Running [`Context::interpret`] twice over the same deterministic
/// program leaves the globals unchanged after the first run.
///
/// ```
/// use minipas::{
///     interpreter::{evaluator::core::Context, value::core::Value},
///     parse_program,
/// };
///
/// let program = parse_program("PROGRAM T; VAR a, b : INTEGER; \
///                              BEGIN a := 2; b := 10 * a + 10 * a DIV 4 END.").unwrap();
///
/// let mut context = Context::new();
/// context.interpret(&program).unwrap();
///
/// assert_eq!(context.get_globals()["a"], Value::Integer(2));
/// assert_eq!(context.get_globals()["b"], Value::Integer(25));
/// ```
#[derive(Debug, Default, Clone)]
pub struct Context {
    globals: BTreeMap<String, Value>,
}

impl Context {
    /// Creates a new evaluation context with an empty global store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Executes the program's top-level block.
    ///
    /// Declarations have no runtime effect and procedure bodies are not
    /// executed.
    ///
    /// # Errors
    /// Returns the first `RuntimeError` raised while evaluating a statement.
    pub fn interpret(&mut self, program: &Program) -> EvalResult<()> {
        self.eval_block(&program.block)?;

        debug!("Program '{}' finished with {} global(s)",
               program.name,
               self.globals.len());
        Ok(())
    }

    /// The global variable store, ordered by name.
    #[must_use]
    pub const fn get_globals(&self) -> &BTreeMap<String, Value> {
        &self.globals
    }

    /// Consumes the context and returns the global variable store.
    #[must_use]
    pub fn into_globals(self) -> BTreeMap<String, Value> {
        self.globals
    }

    fn eval_block(&mut self, block: &Block) -> EvalResult<()> {
        for declaration in &block.declarations {
            match declaration {
                Declaration::Variable(_) | Declaration::Procedure(_) => {},
            }
        }

        self.eval_compound(&block.body)
    }

    fn eval_compound(&mut self, compound: &Compound) -> EvalResult<()> {
        for statement in &compound.statements {
            self.eval_statement(statement)?;
        }
        Ok(())
    }

    /// Evaluates a single statement.
    ///
    /// Assignments overwrite the global entry unconditionally; the declared
    /// type of the target is not consulted.
    pub fn eval_statement(&mut self, statement: &Statement) -> EvalResult<()> {
        match statement {
            Statement::Compound(compound) => self.eval_compound(compound),
            Statement::Assign(assign) => self.eval_assign(assign),
            Statement::NoOp => Ok(()),
        }
    }

    fn eval_assign(&mut self, assign: &Assign) -> EvalResult<()> {
        let value = self.eval(&assign.value)?;

        trace!("line {}: {} := {value}", assign.line, assign.target.name);
        self.globals.insert(assign.target.name.clone(), value);
        Ok(())
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Both operands of a binary operation are always evaluated.
    ///
    /// # Errors
    /// - `UnknownVariable` if a referenced variable has not been assigned.
    /// - Any error from [`Context::eval_binary`] or [`Context::eval_unary`].
    pub fn eval(&self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value, .. } => Ok(Value::from(*value)),
            Expr::Variable(var) => self.eval_variable(var),
            Expr::UnaryOp { op, expr, line } => {
                let value = self.eval(expr)?;
                Self::eval_unary(*op, value, *line)
            },
            Expr::BinaryOp { left,
                             op,
                             right,
                             line, } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary(*op, left, right, *line)
            },
        }
    }

    fn eval_variable(&self, var: &VarRef) -> EvalResult<Value> {
        self.globals
            .get(&var.name)
            .copied()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: var.name.clone(),
                                                           line: var.line, })
    }
}
