//! Typed statement trees for ITIL priority formulas.
//!
//! A priority formula combines an incident's urgency and impact (and
//! optionally whether the caller is a VIP or the incident is business
//! related) into a single number. Formulas are built as trees of
//! [`NumericStatement`] and [`BooleanStatement`] nodes, evaluated against a
//! context, rendered back to infix text, and partially rewritten into a
//! canonical form by the [`normalize`] module.
//!
//! # Example
//!
//! ```rust
//! use priority_statements::*;
//!
//! let urgency: NumericStatement<BaseContext> = NumericalVariable::urgency().into();
//! let impact = NumericalVariable::impact().into();
//! let average = Quotient::new(
//!     Sum::new(urgency, impact).into(),
//!     NumericalLiteral::new(2.0)?.into(),
//! )?;
//! let priority: NumericStatement<BaseContext> =
//!     Round::new(RoundingType::Nearest, average.into()).into();
//!
//! assert_eq!(priority.to_string(), "Math.round((urgency + impact) / 2)");
//! assert_eq!(priority.evaluate(&BaseContext { urgency: 3, impact: 2 }), 3.0);
//! # Ok::<(), StatementError>(())
//! ```

mod context;
mod error;
mod evaluate;
mod literal;
pub mod normalize;
mod operation;
mod operator;
#[cfg(test)]
mod parse;
mod print;
mod round;
mod statement;
mod ternary;
mod variable;

pub use context::*;
pub use error::*;
pub use literal::*;
pub use operation::*;
pub use operator::*;
pub use round::*;
pub use statement::*;
pub use ternary::*;
pub use variable::*;

/// Number type statements compute with.
pub trait FloatExt:
    num_traits::Float
    + std::str::FromStr
    + std::fmt::Display
    + std::fmt::Debug
    + From<u8>
    + Send
    + Sync
    + 'static
{
}
impl FloatExt for f32 {}
impl FloatExt for f64 {}
