//! Rewrites statement trees into a canonical form.
//!
//! Rewriting reassociates additive chains, so a normalized tree evaluates to
//! exactly the same result only when every intermediate value is exactly
//! representable (integers, halves, quarters and the like). Otherwise the
//! result may differ in the last bits: `0.1 + (0.2 + 0.3)` is `0.6`, its
//! normalized form `0.1 + 0.2 + 0.3` is `0.6000000000000001`.
//!
//! Every operator kind has a submodule with four entry points:
//!
//! - `create(first, rest)` builds a canonical chain from a list of operands.
//! - `from_normalized(statement, on_normalized, on_not_normalized)` normalizes
//!   the operands first, then the node itself, and hands the result to exactly
//!   one of the two continuations depending on whether anything changed. The
//!   caller decides what happens next.
//! - `try_normalize(statement)` reports the result as a [`Normalized`].
//! - `normalize(statement, on_normalized, on_not_normalized)` takes optional
//!   continuations and defaults each to returning the statement unchanged.
//!
//! Sums, differences, conjunctions and disjunctions are flattened into
//! left-deep chains. Products, quotients, rounding and ternaries have no
//! algorithm yet: their entry points fail with
//! [`StatementError::NotImplemented`] instead of passing the input through.

use log::trace;

use crate::{BooleanStatement, FloatExt, NumericStatement, Statement, StatementError};

/// Generates `try_normalize` and `normalize` on top of a module's
/// `from_normalized`.
macro_rules! entry_points {
    ([$($generics:tt)*], $node:ty, $statement:ty) => {
        /// Normalizes `statement`, reporting whether anything changed.
        pub fn try_normalize<$($generics)*>(
            statement: $node,
        ) -> Result<$crate::normalize::Normalized<$statement>, $crate::StatementError> {
            from_normalized(
                statement,
                $crate::normalize::Normalized::changed,
                $crate::normalize::Normalized::unchanged,
            )
        }

        /// Normalizes `statement`, passing the result through whichever
        /// continuation applies. A missing continuation returns the statement
        /// as is.
        pub fn normalize<'a, $($generics)*>(
            statement: $node,
            on_normalized: Option<$crate::normalize::Continuation<'a, $statement>>,
            on_not_normalized: Option<$crate::normalize::Continuation<'a, $statement>>,
        ) -> Result<$statement, $crate::StatementError> {
            from_normalized(
                statement,
                |normalized| match on_normalized {
                    Some(continuation) => continuation(normalized),
                    None => normalized,
                },
                |unchanged| match on_not_normalized {
                    Some(continuation) => continuation(unchanged),
                    None => unchanged,
                },
            )
        }
    };
}

pub mod and;
pub mod boolean_ternary;
mod chain;
pub mod difference;
pub mod numeric_ternary;
pub mod or;
pub mod product;
pub mod quotient;
pub mod round;
pub mod sum;

/// Outcome of [`try_normalize_numeric`] and friends.
#[derive(Debug)]
pub struct Normalized<S> {
    pub statement: S,
    /// Whether the statement or any of its operands was rewritten.
    pub was_normalized: bool,
}

impl<S> Normalized<S> {
    pub fn changed(statement: S) -> Self {
        Self {
            statement,
            was_normalized: true,
        }
    }

    pub fn unchanged(statement: S) -> Self {
        Self {
            statement,
            was_normalized: false,
        }
    }
}

/// Caller-supplied step applied to the outcome of a normalization.
pub type Continuation<'a, S> = Box<dyn FnOnce(S) -> S + 'a>;

/// Dispatches `statement` to the normalizer of its kind. Literals and
/// variables are never rewritten.
pub fn from_normalized_numeric<C, R: FloatExt, T>(
    statement: NumericStatement<C, R>,
    on_normalized: impl FnOnce(NumericStatement<C, R>) -> T,
    on_not_normalized: impl FnOnce(NumericStatement<C, R>) -> T,
) -> Result<T, StatementError> {
    trace!("normalizing {} statement", statement.kind());
    match statement {
        NumericStatement::Sum(s) => sum::from_normalized(s, on_normalized, on_not_normalized),
        NumericStatement::Difference(s) => {
            difference::from_normalized(s, on_normalized, on_not_normalized)
        }
        NumericStatement::Product(s) => {
            product::from_normalized(s, on_normalized, on_not_normalized)
        }
        NumericStatement::Quotient(s) => {
            quotient::from_normalized(s, on_normalized, on_not_normalized)
        }
        NumericStatement::Round(s) => round::from_normalized(s, on_normalized, on_not_normalized),
        NumericStatement::Ternary(s) => {
            numeric_ternary::from_normalized(s, on_normalized, on_not_normalized)
        }
        leaf @ (NumericStatement::Literal(_) | NumericStatement::Variable(_)) => {
            Ok(on_not_normalized(leaf))
        }
    }
}

/// Dispatches `statement` to the normalizer of its kind. Literals and
/// variables are never rewritten.
pub fn from_normalized_boolean<C, T>(
    statement: BooleanStatement<C>,
    on_normalized: impl FnOnce(BooleanStatement<C>) -> T,
    on_not_normalized: impl FnOnce(BooleanStatement<C>) -> T,
) -> Result<T, StatementError> {
    trace!("normalizing {} statement", statement.kind());
    match statement {
        BooleanStatement::And(s) => and::from_normalized(s, on_normalized, on_not_normalized),
        BooleanStatement::Or(s) => or::from_normalized(s, on_normalized, on_not_normalized),
        BooleanStatement::Ternary(s) => {
            boolean_ternary::from_normalized(s, on_normalized, on_not_normalized)
        }
        leaf @ (BooleanStatement::Literal(_) | BooleanStatement::Variable(_)) => {
            Ok(on_not_normalized(leaf))
        }
    }
}

pub fn try_normalize_numeric<C, R: FloatExt>(
    statement: NumericStatement<C, R>,
) -> Result<Normalized<NumericStatement<C, R>>, StatementError> {
    from_normalized_numeric(statement, Normalized::changed, Normalized::unchanged)
}

pub fn try_normalize_boolean<C>(
    statement: BooleanStatement<C>,
) -> Result<Normalized<BooleanStatement<C>>, StatementError> {
    from_normalized_boolean(statement, Normalized::changed, Normalized::unchanged)
}

pub fn normalize_numeric<'a, C, R: FloatExt>(
    statement: NumericStatement<C, R>,
    on_normalized: Option<Continuation<'a, NumericStatement<C, R>>>,
    on_not_normalized: Option<Continuation<'a, NumericStatement<C, R>>>,
) -> Result<NumericStatement<C, R>, StatementError> {
    from_normalized_numeric(
        statement,
        |normalized| match on_normalized {
            Some(continuation) => continuation(normalized),
            None => normalized,
        },
        |unchanged| match on_not_normalized {
            Some(continuation) => continuation(unchanged),
            None => unchanged,
        },
    )
}

pub fn normalize_boolean<'a, C>(
    statement: BooleanStatement<C>,
    on_normalized: Option<Continuation<'a, BooleanStatement<C>>>,
    on_not_normalized: Option<Continuation<'a, BooleanStatement<C>>>,
) -> Result<BooleanStatement<C>, StatementError> {
    from_normalized_boolean(
        statement,
        |normalized| match on_normalized {
            Some(continuation) => continuation(normalized),
            None => normalized,
        },
        |unchanged| match on_not_normalized {
            Some(continuation) => continuation(unchanged),
            None => unchanged,
        },
    )
}
