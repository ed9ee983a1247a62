use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a binary operation between two values.
    ///
    /// Two integers stay integers for `+`, `-`, `*` and `DIV`; if either side
    /// is real both are promoted. `/` always produces a real. `DIV` floors the
    /// quotient toward negative infinity, and on real operands the floored
    /// result stays real.
    ///
    /// # Errors
    /// - `DivisionByZero` if the divisor of `DIV` or `/` is zero.
    /// - `Overflow` if integer arithmetic overflows.
    ///
    /// # Example
    /// ```
    /// use minipas::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let div = |l, r| Context::eval_binary(BinaryOperator::IntegerDiv, l, r, 1).unwrap();
    /// assert_eq!(div(Value::Integer(7), Value::Integer(2)), Value::Integer(3));
    /// assert_eq!(div(Value::Integer(-7), Value::Integer(2)), Value::Integer(-4));
    /// assert_eq!(div(Value::Real(7.5), Value::Integer(2)), Value::Real(3.0));
    ///
    /// let quotient =
    ///     Context::eval_binary(BinaryOperator::FloatDiv, Value::Integer(7), Value::Integer(2), 1);
    /// assert_eq!(quotient.unwrap(), Value::Real(3.5));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: Value,
                       right: Value,
                       line: usize)
                       -> EvalResult<Value> {
        match (left, right) {
            (Value::Integer(a), Value::Integer(b)) => Self::eval_integer_op(op, a, b, line),
            _ => Self::eval_real_op(op, left.as_real(), right.as_real(), line),
        }
    }

    fn eval_integer_op(op: BinaryOperator, a: i64, b: i64, line: usize) -> EvalResult<Value> {
        use BinaryOperator::{Add, FloatDiv, IntegerDiv, Mul, Sub};

        let overflow = RuntimeError::Overflow { line };
        match op {
            Add => a.checked_add(b).map(Value::Integer).ok_or(overflow),
            Sub => a.checked_sub(b).map(Value::Integer).ok_or(overflow),
            Mul => a.checked_mul(b).map(Value::Integer).ok_or(overflow),
            IntegerDiv => floor_div(a, b, line).map(Value::Integer),
            FloatDiv => {
                Self::eval_real_op(op, Value::Integer(a).as_real(), Value::Integer(b).as_real(), line)
            },
        }
    }

    fn eval_real_op(op: BinaryOperator, a: f64, b: f64, line: usize) -> EvalResult<Value> {
        use BinaryOperator::{Add, FloatDiv, IntegerDiv, Mul, Sub};

        Ok(Value::Real(match op {
                           Add => a + b,
                           Sub => a - b,
                           Mul => a * b,
                           IntegerDiv | FloatDiv => {
                               if b == 0.0 {
                                   return Err(RuntimeError::DivisionByZero { line });
                               }
                               let quotient = a / b;
                               if op == IntegerDiv { quotient.floor() } else { quotient }
                           },
                       }))
    }
}

/// Integer division rounding toward negative infinity.
///
/// # Errors
/// - `DivisionByZero` if `b` is zero.
/// - `Overflow` for `i64::MIN DIV -1`.
///
/// # Example
/// ```
/// use minipas::interpreter::evaluator::binary::floor_div;
///
/// assert_eq!(floor_div(7, 2, 1).unwrap(), 3);
/// assert_eq!(floor_div(-7, 2, 1).unwrap(), -4);
/// assert_eq!(floor_div(7, -2, 1).unwrap(), -4);
/// assert_eq!(floor_div(-8, 2, 1).unwrap(), -4);
/// assert!(floor_div(1, 0, 1).is_err());
/// ```
pub fn floor_div(a: i64, b: i64, line: usize) -> EvalResult<i64> {
    if b == 0 {
        return Err(RuntimeError::DivisionByZero { line });
    }

    let quotient = a.checked_div(b).ok_or(RuntimeError::Overflow { line })?;
    if a % b != 0 && (a < 0) != (b < 0) {
        Ok(quotient - 1)
    } else {
        Ok(quotient)
    }
}
