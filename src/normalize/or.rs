//! `a || b`: nested disjunctions on the right are merged into one left-deep
//! chain. Operand order is kept, so short-circuiting is unaffected.

use super::chain::{self, Connective};
use crate::{BooleanStatement, Or, StatementError};

/// Builds `first || rest[0] || rest[1] ...` as a flat chain.
pub fn create<C>(
    first: BooleanStatement<C>,
    rest: impl IntoIterator<Item = BooleanStatement<C>>,
) -> Result<BooleanStatement<C>, StatementError> {
    Ok(chain::create_logical(Connective::Or, first, rest))
}

pub fn from_normalized<C, T>(
    statement: Or<C>,
    on_normalized: impl FnOnce(BooleanStatement<C>) -> T,
    on_not_normalized: impl FnOnce(BooleanStatement<C>) -> T,
) -> Result<T, StatementError> {
    let (id, l_operand, r_operand) = statement.into_parts();
    chain::normalize_logical(
        Connective::Or,
        id,
        l_operand,
        r_operand,
        on_normalized,
        on_not_normalized,
    )
}

entry_points!([C], Or<C>, BooleanStatement<C>);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{And, BooleanLiteral, BooleanVariable, FullContext, Statement, StatementKind};

    type Boolean = BooleanStatement<FullContext>;

    fn vip() -> Boolean {
        BooleanVariable::vip().into()
    }

    fn business() -> Boolean {
        BooleanVariable::business_related().into()
    }

    fn no() -> Boolean {
        BooleanLiteral::new(false).into()
    }

    #[test]
    fn right_nested_disjunction_becomes_left_deep() {
        let or = Or::new(no(), Or::new(vip(), business()).into());
        let result = try_normalize(or).unwrap();
        assert!(result.was_normalized);
        assert_eq!(result.statement.kind(), StatementKind::Or);
        assert_eq!(result.statement.to_string(), "false || vip || businessRelated");

        let context = FullContext {
            vip: false,
            business_related: true,
            ..FullContext::default()
        };
        assert!(result.statement.evaluate(&context));
    }

    #[test]
    fn conjunction_operand_stays_grouped() {
        let or = Or::new(vip(), And::new(business(), no()).into());
        let result = try_normalize(or).unwrap();
        assert!(!result.was_normalized);
        assert_eq!(result.statement.to_string(), "vip || (businessRelated && false)");
    }

    #[test]
    fn create_flattens_operand_list() {
        let statement = create(no(), [Or::new(vip(), no()).into(), business()]).unwrap();
        assert_eq!(
            statement.to_string(),
            "false || vip || false || businessRelated"
        );
        assert!(!statement.evaluate(&FullContext::default()));
    }

    #[test]
    fn normalize_applies_continuation_to_unchanged_input() {
        let or = Or::new(vip(), business());
        let result = normalize(
            or,
            None,
            Some(Box::new(|statement: Boolean| -> Boolean {
                And::new(statement, no()).into()
            })),
        )
        .unwrap();
        assert_eq!(result.to_string(), "(vip || businessRelated) && false");
    }
}
