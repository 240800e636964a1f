//! `a + b`: nested sums and differences on the right are merged into one
//! left-deep chain, and `a + -3` becomes `a - 3`.

use super::chain;
use crate::print::Sign;
use crate::{FloatExt, NumericStatement, StatementError, Sum};

/// Builds `first + rest[0] + rest[1] ...` as a flat chain. Operands that are
/// themselves sums or differences are unrolled into it.
pub fn create<C, R: FloatExt>(
    first: NumericStatement<C, R>,
    rest: impl IntoIterator<Item = NumericStatement<C, R>>,
) -> Result<NumericStatement<C, R>, StatementError> {
    Ok(chain::create_additive(first, Sign::Plus, rest))
}

pub fn from_normalized<C, R: FloatExt, T>(
    statement: Sum<C, R>,
    on_normalized: impl FnOnce(NumericStatement<C, R>) -> T,
    on_not_normalized: impl FnOnce(NumericStatement<C, R>) -> T,
) -> Result<T, StatementError> {
    let (id, l_operand, r_operand) = statement.into_parts();
    chain::normalize_additive(
        id,
        Sign::Plus,
        l_operand,
        r_operand,
        on_normalized,
        on_not_normalized,
    )
}

entry_points!([C, R: FloatExt], Sum<C, R>, NumericStatement<C, R>);
