use crate::{
    And, BooleanLiteral, BooleanStatement, BooleanTernary, BooleanVariable, Difference, FloatExt,
    NumericStatement, NumericalLiteral, NumericalTernary, NumericalVariable, Operation, Or,
    Product, Quotient, Round, Statement, StatementKind, Sum, Ternary,
};

#[cfg(feature = "rayon")]
use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};

impl<C, R: FloatExt> NumericStatement<C, R> {
    /// Evaluates the statement once per context.
    ///
    /// Contexts are evaluated in parallel with the `rayon` feature.
    pub fn evaluate_all(&self, contexts: &[C]) -> Vec<R>
    where
        C: Sync,
    {
        #[cfg(feature = "rayon")]
        {
            contexts
                .par_iter()
                .map(|context| self.evaluate(context))
                .collect()
        }
        #[cfg(not(feature = "rayon"))]
        {
            contexts
                .iter()
                .map(|context| self.evaluate(context))
                .collect()
        }
    }
}

impl<C> BooleanStatement<C> {
    /// Evaluates the statement once per context.
    ///
    /// Contexts are evaluated in parallel with the `rayon` feature.
    pub fn evaluate_all(&self, contexts: &[C]) -> Vec<bool>
    where
        C: Sync,
    {
        #[cfg(feature = "rayon")]
        {
            contexts
                .par_iter()
                .map(|context| self.evaluate(context))
                .collect()
        }
        #[cfg(not(feature = "rayon"))]
        {
            contexts
                .iter()
                .map(|context| self.evaluate(context))
                .collect()
        }
    }
}

impl<C, R: FloatExt> Statement<C> for NumericStatement<C, R> {
    type Value = R;

    fn evaluate(&self, context: &C) -> R {
        match self {
            Self::Literal(s) => s.evaluate(context),
            Self::Variable(s) => s.evaluate(context),
            Self::Sum(s) => s.evaluate(context),
            Self::Difference(s) => s.evaluate(context),
            Self::Product(s) => s.evaluate(context),
            Self::Quotient(s) => s.evaluate(context),
            Self::Round(s) => s.evaluate(context),
            Self::Ternary(s) => s.evaluate(context),
        }
    }

    fn kind(&self) -> StatementKind {
        match self {
            Self::Literal(_) => StatementKind::NumericalLiteral,
            Self::Variable(_) => StatementKind::NumericalVariable,
            Self::Sum(_) => StatementKind::Sum,
            Self::Difference(_) => StatementKind::Difference,
            Self::Product(_) => StatementKind::Product,
            Self::Quotient(_) => StatementKind::Quotient,
            Self::Round(_) => StatementKind::Round,
            Self::Ternary(_) => StatementKind::NumericalTernary,
        }
    }
}

impl<C> Statement<C> for BooleanStatement<C> {
    type Value = bool;

    fn evaluate(&self, context: &C) -> bool {
        match self {
            Self::Literal(s) => Statement::<C>::evaluate(s, context),
            Self::Variable(s) => s.evaluate(context),
            Self::And(s) => s.evaluate(context),
            Self::Or(s) => s.evaluate(context),
            Self::Ternary(s) => s.evaluate(context),
        }
    }

    fn kind(&self) -> StatementKind {
        match self {
            Self::Literal(_) => StatementKind::BooleanLiteral,
            Self::Variable(_) => StatementKind::BooleanVariable,
            Self::And(_) => StatementKind::And,
            Self::Or(_) => StatementKind::Or,
            Self::Ternary(_) => StatementKind::BooleanTernary,
        }
    }
}

impl<C, R: FloatExt> Statement<C> for NumericalLiteral<R> {
    type Value = R;

    fn evaluate(&self, _context: &C) -> R {
        self.value()
    }

    fn kind(&self) -> StatementKind {
        StatementKind::NumericalLiteral
    }
}

impl<C> Statement<C> for BooleanLiteral {
    type Value = bool;

    fn evaluate(&self, _context: &C) -> bool {
        self.value()
    }

    fn kind(&self) -> StatementKind {
        StatementKind::BooleanLiteral
    }
}

impl<C, R: FloatExt> Statement<C> for NumericalVariable<C, R> {
    type Value = R;

    fn evaluate(&self, context: &C) -> R {
        self.read(context)
    }

    fn kind(&self) -> StatementKind {
        StatementKind::NumericalVariable
    }
}

impl<C> Statement<C> for BooleanVariable<C> {
    type Value = bool;

    fn evaluate(&self, context: &C) -> bool {
        self.read(context)
    }

    fn kind(&self) -> StatementKind {
        StatementKind::BooleanVariable
    }
}

macro_rules! arithmetic_statement {
    ($name:ident, $kind:ident, |$lhs:ident, $rhs:ident| $op:expr) => {
        impl<C, R: FloatExt> Statement<C> for $name<C, R> {
            type Value = R;

            fn evaluate(&self, context: &C) -> R {
                let $lhs = self.l_operand().evaluate(context);
                let $rhs = self.r_operand().evaluate(context);
                $op
            }

            fn kind(&self) -> StatementKind {
                StatementKind::$kind
            }
        }
    };
}

arithmetic_statement!(Sum, Sum, |lhs, rhs| lhs + rhs);
arithmetic_statement!(Difference, Difference, |lhs, rhs| lhs - rhs);
arithmetic_statement!(Product, Product, |lhs, rhs| lhs * rhs);
// A divisor evaluating to zero follows float semantics (infinity or NaN).
arithmetic_statement!(Quotient, Quotient, |lhs, rhs| lhs / rhs);

impl<C> Statement<C> for And<C> {
    type Value = bool;

    fn evaluate(&self, context: &C) -> bool {
        self.l_operand().evaluate(context) && self.r_operand().evaluate(context)
    }

    fn kind(&self) -> StatementKind {
        StatementKind::And
    }
}

impl<C> Statement<C> for Or<C> {
    type Value = bool;

    fn evaluate(&self, context: &C) -> bool {
        self.l_operand().evaluate(context) || self.r_operand().evaluate(context)
    }

    fn kind(&self) -> StatementKind {
        StatementKind::Or
    }
}

impl<C, R: FloatExt> Statement<C> for Round<C, R> {
    type Value = R;

    fn evaluate(&self, context: &C) -> R {
        self.rounding().apply(self.inner().evaluate(context))
    }

    fn kind(&self) -> StatementKind {
        StatementKind::Round
    }
}

impl<C, R: FloatExt> Statement<C> for NumericalTernary<C, R> {
    type Value = R;

    fn evaluate(&self, context: &C) -> R {
        if self.conditional().evaluate(context) {
            self.if_true_statement().evaluate(context)
        } else {
            self.otherwise_statement().evaluate(context)
        }
    }

    fn kind(&self) -> StatementKind {
        StatementKind::NumericalTernary
    }
}

impl<C> Statement<C> for BooleanTernary<C> {
    type Value = bool;

    fn evaluate(&self, context: &C) -> bool {
        if self.conditional().evaluate(context) {
            self.if_true_statement().evaluate(context)
        } else {
            self.otherwise_statement().evaluate(context)
        }
    }

    fn kind(&self) -> StatementKind {
        StatementKind::BooleanTernary
    }
}
