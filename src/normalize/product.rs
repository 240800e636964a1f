//! `a * b`. No canonical form is defined for products yet.

use crate::{FloatExt, NumericStatement, Product, StatementError, StatementKind};

pub fn create<C, R: FloatExt>(
    _first: NumericStatement<C, R>,
    _rest: impl IntoIterator<Item = NumericStatement<C, R>>,
) -> Result<NumericStatement<C, R>, StatementError> {
    Err(StatementError::NotImplemented(StatementKind::Product))
}

pub fn from_normalized<C, R: FloatExt, T>(
    _statement: Product<C, R>,
    _on_normalized: impl FnOnce(NumericStatement<C, R>) -> T,
    _on_not_normalized: impl FnOnce(NumericStatement<C, R>) -> T,
) -> Result<T, StatementError> {
    Err(StatementError::NotImplemented(StatementKind::Product))
}

entry_points!([C, R: FloatExt], Product<C, R>, NumericStatement<C, R>);
