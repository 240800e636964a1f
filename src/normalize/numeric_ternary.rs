//! `cond ? a : b` with numeric branches. Not normalized yet.

use crate::{
    BooleanStatement, FloatExt, NumericStatement, NumericalTernary, StatementError, StatementKind,
};

pub fn create<C, R: FloatExt>(
    _conditional: BooleanStatement<C>,
    _if_true: NumericStatement<C, R>,
    _otherwise: NumericStatement<C, R>,
) -> Result<NumericStatement<C, R>, StatementError> {
    Err(StatementError::NotImplemented(StatementKind::NumericalTernary))
}

pub fn from_normalized<C, R: FloatExt, T>(
    _statement: NumericalTernary<C, R>,
    _on_normalized: impl FnOnce(NumericStatement<C, R>) -> T,
    _on_not_normalized: impl FnOnce(NumericStatement<C, R>) -> T,
) -> Result<T, StatementError> {
    Err(StatementError::NotImplemented(StatementKind::NumericalTernary))
}

entry_points!([C, R: FloatExt], NumericalTernary<C, R>, NumericStatement<C, R>);
