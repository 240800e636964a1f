//! `a - b`: the right operand's terms are merged into the chain with their
//! signs flipped, and `a - -3` becomes `a + 3`.

use super::chain;
use crate::print::Sign;
use crate::{Difference, FloatExt, NumericStatement, StatementError};

/// Builds `first - rest[0] - rest[1] ...` as a flat chain.
pub fn create<C, R: FloatExt>(
    first: NumericStatement<C, R>,
    rest: impl IntoIterator<Item = NumericStatement<C, R>>,
) -> Result<NumericStatement<C, R>, StatementError> {
    Ok(chain::create_additive(first, Sign::Minus, rest))
}

pub fn from_normalized<C, R: FloatExt, T>(
    statement: Difference<C, R>,
    on_normalized: impl FnOnce(NumericStatement<C, R>) -> T,
    on_not_normalized: impl FnOnce(NumericStatement<C, R>) -> T,
) -> Result<T, StatementError> {
    let (id, l_operand, r_operand) = statement.into_parts();
    chain::normalize_additive(
        id,
        Sign::Minus,
        l_operand,
        r_operand,
        on_normalized,
        on_not_normalized,
    )
}

entry_points!([C, R: FloatExt], Difference<C, R>, NumericStatement<C, R>);
