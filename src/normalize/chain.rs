//! Flattening shared by the associative normalizers.

use log::debug;

use super::{try_normalize_boolean, try_normalize_numeric};
use crate::print::Sign;
use crate::{
    And, BooleanStatement, Difference, FloatExt, NumericStatement, Or, StatementError,
    StatementId, Sum,
};

type Term<C, R> = (Sign, NumericStatement<C, R>);

fn additive<C, R>(
    id: StatementId,
    sign: Sign,
    l_operand: NumericStatement<C, R>,
    r_operand: NumericStatement<C, R>,
) -> NumericStatement<C, R> {
    match sign {
        Sign::Plus => Sum::from_parts(id, l_operand, r_operand).into(),
        Sign::Minus => Difference::from_parts(id, l_operand, r_operand).into(),
    }
}

/// A right operand that has to be merged into its parent: another sum or
/// difference, or a negative literal whose sign belongs to the operator.
fn is_mergeable_term<C, R: FloatExt>(statement: &NumericStatement<C, R>) -> bool {
    match statement {
        NumericStatement::Literal(literal) => literal.is_negative(),
        other => other.is_additive(),
    }
}

/// Appends the signed terms of `statement` to `terms`.
fn push_terms<C, R: FloatExt>(
    terms: &mut Vec<Term<C, R>>,
    sign: Sign,
    statement: NumericStatement<C, R>,
) {
    match statement {
        NumericStatement::Sum(s) => {
            let (_, l_operand, r_operand) = s.into_parts();
            push_terms(terms, sign, l_operand);
            push_terms(terms, sign, r_operand);
        }
        NumericStatement::Difference(s) => {
            let (_, l_operand, r_operand) = s.into_parts();
            push_terms(terms, sign, l_operand);
            push_terms(terms, sign.flipped(), r_operand);
        }
        NumericStatement::Literal(literal) if literal.is_negative() => {
            terms.push((sign.flipped(), literal.negated().into()));
        }
        other => terms.push((sign, other)),
    }
}

/// Splits a chain into its leftmost operand and the signed terms after it.
fn split_head<C, R: FloatExt>(
    statement: NumericStatement<C, R>,
) -> (NumericStatement<C, R>, Vec<Term<C, R>>) {
    let (sign, l_operand, r_operand) = match statement {
        NumericStatement::Sum(s) => {
            let (_, l_operand, r_operand) = s.into_parts();
            (Sign::Plus, l_operand, r_operand)
        }
        NumericStatement::Difference(s) => {
            let (_, l_operand, r_operand) = s.into_parts();
            (Sign::Minus, l_operand, r_operand)
        }
        other => return (other, Vec::new()),
    };
    let (head, mut terms) = split_head(l_operand);
    push_terms(&mut terms, sign, r_operand);
    (head, terms)
}

fn fold_terms<C, R>(
    head: NumericStatement<C, R>,
    terms: Vec<Term<C, R>>,
) -> NumericStatement<C, R> {
    terms.into_iter().fold(head, |chain, (sign, term)| {
        additive(StatementId::next(), sign, chain, term)
    })
}

/// Normalizes `l_operand ± r_operand`, where `id` belonged to the original
/// node.
pub(super) fn normalize_additive<C, R: FloatExt, T>(
    id: StatementId,
    sign: Sign,
    l_operand: NumericStatement<C, R>,
    r_operand: NumericStatement<C, R>,
    on_normalized: impl FnOnce(NumericStatement<C, R>) -> T,
    on_not_normalized: impl FnOnce(NumericStatement<C, R>) -> T,
) -> Result<T, StatementError> {
    let left = try_normalize_numeric(l_operand)?;
    let right = try_normalize_numeric(r_operand)?;

    if !is_mergeable_term(&right.statement) {
        let statement = additive(id, sign, left.statement, right.statement);
        return Ok(if left.was_normalized || right.was_normalized {
            on_normalized(statement)
        } else {
            on_not_normalized(statement)
        });
    }

    let mut terms = Vec::new();
    push_terms(&mut terms, sign, right.statement);
    let statement = fold_terms(left.statement, terms);
    debug!("merged additive operand into {statement}");
    Ok(on_normalized(statement))
}

/// Builds `first ± rest[0] ± rest[1] ...` as one flat left-deep chain.
pub(super) fn create_additive<C, R: FloatExt>(
    first: NumericStatement<C, R>,
    sign: Sign,
    rest: impl IntoIterator<Item = NumericStatement<C, R>>,
) -> NumericStatement<C, R> {
    let (head, mut terms) = split_head(first);
    for operand in rest {
        push_terms(&mut terms, sign, operand);
    }
    let statement = fold_terms(head, terms);
    debug!("created additive chain {statement}");
    statement
}

/// `&&` or `||`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Connective {
    And,
    Or,
}

impl Connective {
    fn node<C>(
        self,
        id: StatementId,
        l_operand: BooleanStatement<C>,
        r_operand: BooleanStatement<C>,
    ) -> BooleanStatement<C> {
        match self {
            Self::And => And::from_parts(id, l_operand, r_operand).into(),
            Self::Or => Or::from_parts(id, l_operand, r_operand).into(),
        }
    }

    fn joins<C>(self, statement: &BooleanStatement<C>) -> bool {
        matches!(
            (self, statement),
            (Self::And, BooleanStatement::And(_)) | (Self::Or, BooleanStatement::Or(_))
        )
    }

    /// The two operands of `statement` if it uses this connective.
    fn split<C>(
        self,
        statement: BooleanStatement<C>,
    ) -> Result<(BooleanStatement<C>, BooleanStatement<C>), BooleanStatement<C>> {
        match (self, statement) {
            (Self::And, BooleanStatement::And(s)) => {
                let (_, l_operand, r_operand) = s.into_parts();
                Ok((l_operand, r_operand))
            }
            (Self::Or, BooleanStatement::Or(s)) => {
                let (_, l_operand, r_operand) = s.into_parts();
                Ok((l_operand, r_operand))
            }
            (_, other) => Err(other),
        }
    }

    fn push_operands<C>(
        self,
        operands: &mut Vec<BooleanStatement<C>>,
        statement: BooleanStatement<C>,
    ) {
        match self.split(statement) {
            Ok((l_operand, r_operand)) => {
                self.push_operands(operands, l_operand);
                self.push_operands(operands, r_operand);
            }
            Err(other) => operands.push(other),
        }
    }

    fn split_head<C>(
        self,
        statement: BooleanStatement<C>,
    ) -> (BooleanStatement<C>, Vec<BooleanStatement<C>>) {
        match self.split(statement) {
            Ok((l_operand, r_operand)) => {
                let (head, mut operands) = self.split_head(l_operand);
                self.push_operands(&mut operands, r_operand);
                (head, operands)
            }
            Err(other) => (other, Vec::new()),
        }
    }

    fn fold<C>(
        self,
        head: BooleanStatement<C>,
        operands: Vec<BooleanStatement<C>>,
    ) -> BooleanStatement<C> {
        operands.into_iter().fold(head, |chain, operand| {
            self.node(StatementId::next(), chain, operand)
        })
    }
}

/// Normalizes `l_operand && r_operand` or `l_operand || r_operand`, where `id`
/// belonged to the original node.
pub(super) fn normalize_logical<C, T>(
    connective: Connective,
    id: StatementId,
    l_operand: BooleanStatement<C>,
    r_operand: BooleanStatement<C>,
    on_normalized: impl FnOnce(BooleanStatement<C>) -> T,
    on_not_normalized: impl FnOnce(BooleanStatement<C>) -> T,
) -> Result<T, StatementError> {
    let left = try_normalize_boolean(l_operand)?;
    let right = try_normalize_boolean(r_operand)?;

    if !connective.joins(&right.statement) {
        let statement = connective.node(id, left.statement, right.statement);
        return Ok(if left.was_normalized || right.was_normalized {
            on_normalized(statement)
        } else {
            on_not_normalized(statement)
        });
    }

    let mut operands = Vec::new();
    connective.push_operands(&mut operands, right.statement);
    let statement = connective.fold(left.statement, operands);
    debug!("merged {connective:?} operand into {statement}");
    Ok(on_normalized(statement))
}

/// Builds `first op rest[0] op rest[1] ...` as one flat left-deep chain.
pub(super) fn create_logical<C>(
    connective: Connective,
    first: BooleanStatement<C>,
    rest: impl IntoIterator<Item = BooleanStatement<C>>,
) -> BooleanStatement<C> {
    let (head, mut operands) = connective.split_head(first);
    for operand in rest {
        connective.push_operands(&mut operands, operand);
    }
    let statement = connective.fold(head, operands);
    debug!("created {connective:?} chain {statement}");
    statement
}
