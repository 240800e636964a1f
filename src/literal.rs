use crate::{FloatExt, StatementError};

/// A constant number. Always finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NumericalLiteral<R = f64> {
    value: R,
}

impl<R: FloatExt> NumericalLiteral<R> {
    pub fn new(value: R) -> Result<Self, StatementError> {
        if !value.is_finite() {
            return Err(StatementError::InvalidValue(value.to_string()));
        }
        Ok(Self { value })
    }

    pub fn value(&self) -> R {
        self.value
    }

    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.value < R::zero()
    }

    /// The literal with its sign flipped. Negating a finite value stays finite.
    pub fn negated(&self) -> Self {
        Self { value: -self.value }
    }
}

/// A constant `bool`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BooleanLiteral {
    value: bool,
}

impl BooleanLiteral {
    pub fn new(value: bool) -> Self {
        Self { value }
    }

    pub fn value(&self) -> bool {
        self.value
    }
}
