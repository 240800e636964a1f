//! `Math.ceil(a)`, `Math.floor(a)`, `Math.round(a)`. Not normalized yet.

use crate::{FloatExt, NumericStatement, Round, RoundingType, StatementError, StatementKind};

pub fn create<C, R: FloatExt>(
    _rounding: RoundingType,
    _operand: NumericStatement<C, R>,
) -> Result<NumericStatement<C, R>, StatementError> {
    Err(StatementError::NotImplemented(StatementKind::Round))
}

pub fn from_normalized<C, R: FloatExt, T>(
    _statement: Round<C, R>,
    _on_normalized: impl FnOnce(NumericStatement<C, R>) -> T,
    _on_not_normalized: impl FnOnce(NumericStatement<C, R>) -> T,
) -> Result<T, StatementError> {
    Err(StatementError::NotImplemented(StatementKind::Round))
}

entry_points!([C, R: FloatExt], Round<C, R>, NumericStatement<C, R>);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BaseContext, NumericalVariable};

    #[test]
    fn every_entry_point_reports_not_implemented() {
        let impact = || NumericStatement::<BaseContext>::from(NumericalVariable::impact());
        let error = StatementError::NotImplemented(StatementKind::Round);

        assert_eq!(create(RoundingType::Ceiling, impact()).unwrap_err(), error);
        let round = Round::new(RoundingType::Nearest, impact());
        assert_eq!(try_normalize(round).unwrap_err(), error);
        let round = Round::new(RoundingType::Floor, impact());
        assert_eq!(normalize(round, None, None).unwrap_err(), error);
    }
}
