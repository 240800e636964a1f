use crate::{
    Compound, NumericStatement, OperandPosition, RoundingType, StatementError, StatementId,
};

/// Rounds its operand to a whole number by [`RoundingType`].
#[derive(Debug)]
pub struct Round<C, R = f64> {
    id: StatementId,
    rounding: RoundingType,
    operand: Box<NumericStatement<C, R>>,
}

impl<C, R> Round<C, R> {
    pub fn new(rounding: RoundingType, operand: NumericStatement<C, R>) -> Self {
        Self {
            id: StatementId::next(),
            rounding,
            operand: Box::new(operand),
        }
    }

    /// Builds the node from an operand list holding exactly one statement.
    pub fn from_operands(
        rounding: RoundingType,
        operands: impl IntoIterator<Item = NumericStatement<C, R>>,
    ) -> Result<Self, StatementError> {
        let mut operands = operands.into_iter();
        let operand = operands
            .next()
            .ok_or(StatementError::InvalidOperand(OperandPosition::Only))?;
        if operands.next().is_some() {
            return Err(StatementError::IndexOutOfRange {
                index: 1,
                length: 1,
            });
        }
        Ok(Self::new(rounding, operand))
    }

    pub fn rounding(&self) -> RoundingType {
        self.rounding
    }

    pub fn inner(&self) -> &NumericStatement<C, R> {
        &self.operand
    }
}

impl<C, R> Compound for Round<C, R> {
    type Child<'a> = &'a NumericStatement<C, R> where Self: 'a;

    fn id(&self) -> StatementId {
        self.id
    }

    fn length(&self) -> usize {
        1
    }

    fn operand(&self, index: usize) -> Option<Self::Child<'_>> {
        (index == 0).then_some(&*self.operand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BaseContext, NumericalLiteral, Statement};

    fn lit(value: f64) -> NumericStatement<BaseContext> {
        NumericalLiteral::new(value).unwrap().into()
    }

    #[test]
    fn single_operand() {
        let round = Round::new(RoundingType::Ceiling, lit(2.1));
        assert_eq!(round.length(), 1);
        assert_eq!(round.rounding(), RoundingType::Ceiling);
        assert!(round.get(0).is_ok());
        assert_eq!(
            round.get(1).unwrap_err(),
            StatementError::IndexOutOfRange {
                index: 1,
                length: 1
            }
        );
        assert_eq!(round.operands().count(), 1);
    }

    #[test]
    fn from_operands_checks_arity() {
        assert_eq!(
            Round::<BaseContext, f64>::from_operands(RoundingType::Floor, []).unwrap_err(),
            StatementError::InvalidOperand(OperandPosition::Only)
        );
        assert!(Round::from_operands(RoundingType::Floor, [lit(1.0), lit(2.0)]).is_err());
        let round = Round::from_operands(RoundingType::Floor, [lit(2.9)]).unwrap();
        assert_eq!(round.evaluate(&BaseContext::default()), 2.0);
    }
}
