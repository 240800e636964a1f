use crate::statement::take_pair;
use crate::{
    BooleanStatement, Compound, NumericStatement, Operation, Operator, StatementError, StatementId,
};

macro_rules! binary_operation {
    ($(#[$meta:meta])* $name:ident<$($gen:ident),+>, $operand:ty, $operator:expr) => {
        $(#[$meta])*
        #[derive(Debug)]
        pub struct $name<$($gen),+> {
            id: StatementId,
            l_operand: Box<$operand>,
            r_operand: Box<$operand>,
        }

        impl<$($gen),+> $name<$($gen),+> {
            /// Rebuilds a node around operands that were already validated.
            pub(crate) fn from_parts(
                id: StatementId,
                l_operand: $operand,
                r_operand: $operand,
            ) -> Self {
                Self {
                    id,
                    l_operand: Box::new(l_operand),
                    r_operand: Box::new(r_operand),
                }
            }

            pub(crate) fn into_parts(self) -> (StatementId, $operand, $operand) {
                (self.id, *self.l_operand, *self.r_operand)
            }
        }

        impl<$($gen),+> Compound for $name<$($gen),+> {
            type Child<'a> = &'a $operand where Self: 'a;

            fn id(&self) -> StatementId {
                self.id
            }

            fn length(&self) -> usize {
                2
            }

            fn operand(&self, index: usize) -> Option<Self::Child<'_>> {
                match index {
                    0 => Some(&*self.l_operand),
                    1 => Some(&*self.r_operand),
                    _ => None,
                }
            }
        }

        impl<$($gen),+> Operation for $name<$($gen),+> {
            type Operand = $operand;

            fn operator(&self) -> Operator {
                $operator
            }

            fn l_operand(&self) -> &Self::Operand {
                &self.l_operand
            }

            fn r_operand(&self) -> &Self::Operand {
                &self.r_operand
            }
        }
    };
}

binary_operation!(
    /// `l + r`
    Sum<C, R>,
    NumericStatement<C, R>,
    Operator::Add
);
binary_operation!(
    /// `l - r`
    Difference<C, R>,
    NumericStatement<C, R>,
    Operator::Subtract
);
binary_operation!(
    /// `l * r`
    Product<C, R>,
    NumericStatement<C, R>,
    Operator::Multiply
);
binary_operation!(
    /// `l / r`. The divisor is never a literal zero.
    Quotient<C, R>,
    NumericStatement<C, R>,
    Operator::Divide
);
binary_operation!(
    /// `l && r`, short-circuiting.
    And<C>,
    BooleanStatement<C>,
    Operator::And
);
binary_operation!(
    /// `l || r`, short-circuiting.
    Or<C>,
    BooleanStatement<C>,
    Operator::Or
);

macro_rules! infallible_constructors {
    ($($name:ident<$($gen:ident),+>, $operand:ty;)+) => {
        $(
            impl<$($gen),+> $name<$($gen),+> {
                pub fn new(l_operand: $operand, r_operand: $operand) -> Self {
                    Self::from_parts(StatementId::next(), l_operand, r_operand)
                }

                /// Builds the node from an ordered list of exactly two operands.
                pub fn from_operands(
                    operands: impl IntoIterator<Item = $operand>,
                ) -> Result<Self, StatementError> {
                    let (l_operand, r_operand) = take_pair(operands)?;
                    Ok(Self::new(l_operand, r_operand))
                }
            }
        )+
    };
}

infallible_constructors! {
    Sum<C, R>, NumericStatement<C, R>;
    Difference<C, R>, NumericStatement<C, R>;
    Product<C, R>, NumericStatement<C, R>;
    And<C>, BooleanStatement<C>;
    Or<C>, BooleanStatement<C>;
}

impl<C, R: crate::FloatExt> Quotient<C, R> {
    /// Fails with [`StatementError::DivisionByZero`] when `r_operand` is a
    /// literal zero. Divisors that merely evaluate to zero are accepted.
    pub fn new(
        l_operand: NumericStatement<C, R>,
        r_operand: NumericStatement<C, R>,
    ) -> Result<Self, StatementError> {
        if let NumericStatement::Literal(divisor) = &r_operand {
            if divisor.is_zero() {
                return Err(StatementError::DivisionByZero);
            }
        }
        Ok(Self::from_parts(StatementId::next(), l_operand, r_operand))
    }

    /// Builds the node from an ordered list of exactly two operands.
    pub fn from_operands(
        operands: impl IntoIterator<Item = NumericStatement<C, R>>,
    ) -> Result<Self, StatementError> {
        let (l_operand, r_operand) = take_pair(operands)?;
        Self::new(l_operand, r_operand)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        BaseContext, BooleanLiteral, NumericalLiteral, NumericalVariable, OperandPosition,
        Statement, StatementKind,
    };

    type Numeric = NumericStatement<BaseContext>;
    type Boolean = BooleanStatement<BaseContext>;

    fn lit(value: f64) -> Numeric {
        NumericalLiteral::new(value).unwrap().into()
    }

    fn truth(value: bool) -> Boolean {
        BooleanLiteral::new(value).into()
    }

    #[test]
    fn literal_zero_divisor_is_rejected() {
        let err = Quotient::new(lit(1.0), lit(0.0)).unwrap_err();
        assert_eq!(err, StatementError::DivisionByZero);
        let err = Quotient::new(lit(1.0), lit(-0.0)).unwrap_err();
        assert_eq!(err, StatementError::DivisionByZero);
    }

    #[test]
    fn variable_divisor_is_accepted_at_construction() {
        let divisor = NumericalVariable::new("x", |_: &BaseContext| 0.0).unwrap();
        assert!(Quotient::new(lit(1.0), divisor.into()).is_ok());
        // An expression that evaluates to zero is not inspected either.
        assert!(Quotient::new(lit(1.0), Difference::new(lit(2.0), lit(2.0)).into()).is_ok());
    }

    #[test]
    fn operation_accessors() {
        let sum = Sum::new(lit(1.0), lit(2.0));
        assert_eq!(sum.operator(), Operator::Add);
        assert_eq!(sum.l_operand().kind(), StatementKind::NumericalLiteral);
        assert_eq!(Difference::new(lit(1.0), lit(2.0)).operator(), Operator::Subtract);
        assert_eq!(Product::new(lit(1.0), lit(2.0)).operator(), Operator::Multiply);
        assert_eq!(
            Quotient::new(lit(1.0), lit(2.0)).unwrap().operator(),
            Operator::Divide
        );
        assert_eq!(And::new(truth(true), truth(false)).operator(), Operator::And);
        assert_eq!(Or::new(truth(true), truth(false)).operator(), Operator::Or);
    }

    #[test]
    fn get_validates_index() {
        let sum = Sum::new(lit(1.0), lit(2.0));
        assert_eq!(sum.length(), 2);
        assert!(sum.get(0).is_ok());
        assert!(sum.get(1).is_ok());
        assert_eq!(
            sum.get(2).unwrap_err(),
            StatementError::IndexOutOfRange {
                index: 2,
                length: 2
            }
        );

        let or = Or::new(truth(true), truth(false));
        assert!(or.get(usize::MAX).is_err());
        assert!(And::new(truth(true), truth(false)).get(5).is_err());
        assert!(Difference::new(lit(1.0), lit(2.0)).get(2).is_err());
        assert!(Product::new(lit(1.0), lit(2.0)).get(3).is_err());
        assert!(Quotient::new(lit(1.0), lit(2.0)).unwrap().get(2).is_err());
    }

    #[test]
    fn operands_iterate_in_order() {
        let difference = Difference::new(lit(5.0), lit(3.0));
        let values: Vec<f64> = difference
            .operands()
            .map(|operand| operand.evaluate(&BaseContext::default()))
            .collect();
        assert_eq!(values, [5.0, 3.0]);
    }

    #[test]
    fn from_operands_checks_arity() {
        assert_eq!(
            Sum::<BaseContext, f64>::from_operands([lit(1.0)]).unwrap_err(),
            StatementError::InvalidOperand(OperandPosition::Right)
        );
        assert_eq!(
            And::<BaseContext>::from_operands([]).unwrap_err(),
            StatementError::InvalidOperand(OperandPosition::Left)
        );
        assert!(Product::from_operands([lit(1.0), lit(2.0), lit(3.0)]).is_err());
        assert_eq!(
            Quotient::from_operands([lit(1.0), lit(0.0)]).unwrap_err(),
            StatementError::DivisionByZero
        );
        let sum = Sum::from_operands([lit(1.0), lit(2.0)]).unwrap();
        assert_eq!(sum.evaluate(&BaseContext::default()), 3.0);
    }
}
