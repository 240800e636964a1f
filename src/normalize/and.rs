//! `a && b`: nested conjunctions on the right are merged into one left-deep
//! chain. Operand order is kept, so short-circuiting is unaffected.

use super::chain::{self, Connective};
use crate::{And, BooleanStatement, StatementError};

/// Builds `first && rest[0] && rest[1] ...` as a flat chain.
pub fn create<C>(
    first: BooleanStatement<C>,
    rest: impl IntoIterator<Item = BooleanStatement<C>>,
) -> Result<BooleanStatement<C>, StatementError> {
    Ok(chain::create_logical(Connective::And, first, rest))
}

pub fn from_normalized<C, T>(
    statement: And<C>,
    on_normalized: impl FnOnce(BooleanStatement<C>) -> T,
    on_not_normalized: impl FnOnce(BooleanStatement<C>) -> T,
) -> Result<T, StatementError> {
    let (id, l_operand, r_operand) = statement.into_parts();
    chain::normalize_logical(
        Connective::And,
        id,
        l_operand,
        r_operand,
        on_normalized,
        on_not_normalized,
    )
}

entry_points!([C], And<C>, BooleanStatement<C>);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        BooleanLiteral, BooleanVariable, Compound, FullContext, Operation, Or, Statement,
        StatementKind,
    };

    type Boolean = BooleanStatement<FullContext>;

    fn vip() -> Boolean {
        BooleanVariable::vip().into()
    }

    fn business() -> Boolean {
        BooleanVariable::business_related().into()
    }

    fn yes() -> Boolean {
        BooleanLiteral::new(true).into()
    }

    fn context() -> FullContext {
        FullContext {
            urgency: 1,
            impact: 1,
            vip: true,
            business_related: false,
        }
    }

    #[test]
    fn flat_conjunction_is_left_alone() {
        let and = And::new(And::new(vip(), business()).into(), yes());
        let id = and.id();
        let result = try_normalize(and).unwrap();
        assert!(!result.was_normalized);
        assert_eq!(result.statement.id(), Some(id));
        assert_eq!(result.statement.to_string(), "vip && businessRelated && true");
    }

    #[test]
    fn right_nested_conjunction_becomes_left_deep() {
        let and = And::new(vip(), And::new(business(), yes()).into());
        let expected = and.evaluate(&context());
        let result = try_normalize(and).unwrap();
        assert!(result.was_normalized);
        assert_eq!(result.statement.evaluate(&context()), expected);

        let BooleanStatement::And(root) = &result.statement else {
            panic!("expected a conjunction, got {:?}", result.statement.kind());
        };
        assert_eq!(root.l_operand().kind(), StatementKind::And);
        assert_eq!(root.r_operand().kind(), StatementKind::BooleanLiteral);
        assert_eq!(result.statement.to_string(), "vip && businessRelated && true");
    }

    #[test]
    fn disjunction_operand_is_not_merged() {
        let and = And::new(vip(), Or::new(business(), yes()).into());
        let result = try_normalize(and).unwrap();
        assert!(!result.was_normalized);
        assert_eq!(result.statement.to_string(), "vip && (businessRelated || true)");
    }

    #[test]
    fn nested_disjunction_is_normalized_in_place() {
        let or = Or::new(business(), Or::new(vip(), yes()).into());
        let and = And::new(vip(), or.into());
        let id = and.id();
        let result = try_normalize(and).unwrap();
        assert!(result.was_normalized);
        assert_eq!(result.statement.id(), Some(id));
        assert_eq!(
            result.statement.to_string(),
            "vip && (businessRelated || vip || true)"
        );
    }

    #[test]
    fn create_keeps_operand_order() {
        let first: Boolean = And::new(vip(), business()).into();
        let statement = create(first, [And::new(yes(), vip()).into(), business()]).unwrap();
        assert_eq!(
            statement.to_string(),
            "vip && businessRelated && true && vip && businessRelated"
        );
        assert!(!statement.evaluate(&context()));
        assert!(
            !super::super::try_normalize_boolean(statement)
                .unwrap()
                .was_normalized
        );
    }
}
