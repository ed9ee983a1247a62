use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a unary operation on a value.
    ///
    /// # Errors
    /// Returns `Overflow` when negating `i64::MIN`.
    ///
    /// # Example
    /// ```
    /// use minipas::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let v = Context::eval_unary(UnaryOperator::Minus, Value::Integer(5), 1).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// let v = Context::eval_unary(UnaryOperator::Plus, Value::Real(-1.5), 1).unwrap();
    /// assert_eq!(v, Value::Real(-1.5));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: Value, line: usize) -> EvalResult<Value> {
        match (op, value) {
            (UnaryOperator::Plus, _) => Ok(value),
            (UnaryOperator::Minus, Value::Integer(n)) => {
                n.checked_neg()
                 .map(Value::Integer)
                 .ok_or(RuntimeError::Overflow { line })
            },
            (UnaryOperator::Minus, Value::Real(r)) => Ok(Value::Real(-r)),
        }
    }
}
