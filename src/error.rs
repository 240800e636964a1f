use std::fmt;

use thiserror::Error;

use crate::StatementKind;

/// Which operand slot of a compound statement an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperandPosition {
    Left,
    Right,
    Only,
}

impl fmt::Display for OperandPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Only => "only",
        })
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StatementError {
    #[error("Missing {0} operand")]
    InvalidOperand(OperandPosition),
    #[error("Invalid literal value: {0}")]
    InvalidValue(String),
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Index {index} is out of range for a statement with {length} operands")]
    IndexOutOfRange { index: usize, length: usize },
    #[error("Invalid variable name: {0:?}")]
    InvalidVariableName(String),
    #[error("Unknown {expected}: {value:?}")]
    InvalidTag {
        expected: &'static str,
        value: String,
    },
    #[error("Normalization of {0} statements is not implemented")]
    NotImplemented(StatementKind),
}
