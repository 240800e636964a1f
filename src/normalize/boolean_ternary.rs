//! `cond ? a : b` with boolean branches. Not normalized yet.

use crate::{BooleanStatement, BooleanTernary, StatementError, StatementKind};

pub fn create<C>(
    _conditional: BooleanStatement<C>,
    _if_true: BooleanStatement<C>,
    _otherwise: BooleanStatement<C>,
) -> Result<BooleanStatement<C>, StatementError> {
    Err(StatementError::NotImplemented(StatementKind::BooleanTernary))
}

pub fn from_normalized<C, T>(
    _statement: BooleanTernary<C>,
    _on_normalized: impl FnOnce(BooleanStatement<C>) -> T,
    _on_not_normalized: impl FnOnce(BooleanStatement<C>) -> T,
) -> Result<T, StatementError> {
    Err(StatementError::NotImplemented(StatementKind::BooleanTernary))
}

entry_points!([C], BooleanTernary<C>, BooleanStatement<C>);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BooleanLiteral, BooleanVariable, BusinessContext};

    #[test]
    fn every_entry_point_reports_not_implemented() {
        let flag =
            || BooleanStatement::<BusinessContext>::from(BooleanVariable::business_related());
        let yes = || BooleanStatement::<BusinessContext>::from(BooleanLiteral::new(true));
        let error = StatementError::NotImplemented(StatementKind::BooleanTernary);

        assert_eq!(create(flag(), yes(), flag()).unwrap_err(), error);
        let ternary = BooleanTernary::new(flag(), yes(), flag());
        assert_eq!(try_normalize(ternary).unwrap_err(), error);
        let ternary = BooleanTernary::new(flag(), yes(), flag());
        assert_eq!(normalize(ternary, None, None).unwrap_err(), error);
    }
}
