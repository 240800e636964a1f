//! `a / b`. No canonical form is defined for quotients yet.

use crate::{FloatExt, NumericStatement, Quotient, StatementError, StatementKind};

pub fn create<C, R: FloatExt>(
    _first: NumericStatement<C, R>,
    _rest: impl IntoIterator<Item = NumericStatement<C, R>>,
) -> Result<NumericStatement<C, R>, StatementError> {
    Err(StatementError::NotImplemented(StatementKind::Quotient))
}

pub fn from_normalized<C, R: FloatExt, T>(
    _statement: Quotient<C, R>,
    _on_normalized: impl FnOnce(NumericStatement<C, R>) -> T,
    _on_not_normalized: impl FnOnce(NumericStatement<C, R>) -> T,
) -> Result<T, StatementError> {
    Err(StatementError::NotImplemented(StatementKind::Quotient))
}

entry_points!([C, R: FloatExt], Quotient<C, R>, NumericStatement<C, R>);
