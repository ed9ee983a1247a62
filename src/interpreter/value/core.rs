use crate::ast::LiteralValue;

/// Represents a runtime value in the interpreter.
///
/// The language only has numbers. Integer and real values are kept apart so
/// that integer arithmetic stays exact and `DIV` on two integers yields an
/// integer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A 64-bit integer value.
    Integer(i64),
    /// A double precision floating-point value.
    Real(f64),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl From<LiteralValue> for Value {
    fn from(literal: LiteralValue) -> Self {
        match literal {
            LiteralValue::Integer(n) => Self::Integer(n),
            LiteralValue::Real(r) => Self::Real(r),
        }
    }
}

impl Value {
    /// Converts the value to an `f64`, promoting integers.
    ///
    /// # Example
    /// ```
    /// use minipas::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(10).as_real(), 10.0);
    /// assert_eq!(Value::Real(2.5).as_real(), 2.5);
    /// ```
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_real(self) -> f64 {
        match self {
            Self::Integer(n) => n as f64,
            Self::Real(r) => r,
        }
    }

    /// Returns `true` for real values.
    #[must_use]
    pub const fn is_real(self) -> bool {
        matches!(self, Self::Real(_))
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r:?}"),
        }
    }
}
