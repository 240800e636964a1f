//! Infix rendering of statement trees.
//!
//! The output is for display and debugging. The crate exposes no parser for it.

use std::fmt;

use crate::{
    And, BooleanLiteral, BooleanStatement, BooleanTernary, BooleanVariable, Difference, FloatExt,
    NumericStatement, NumericalLiteral, NumericalTernary, NumericalVariable, Operation, Operator,
    Or, Product, Quotient, Round, RoundingType, Sum, Ternary,
};

impl<R: FloatExt> fmt::Display for NumericalLiteral<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            // Never print negative zero.
            return f.write_str("0");
        }
        write!(f, "{}", self.value())
    }
}

impl fmt::Display for BooleanLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl<C, R> fmt::Display for NumericalVariable<C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl<C> fmt::Display for BooleanVariable<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl<C, R: FloatExt> fmt::Display for NumericStatement<C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(s) => fmt::Display::fmt(s, f),
            Self::Variable(s) => fmt::Display::fmt(s, f),
            Self::Sum(s) => fmt::Display::fmt(s, f),
            Self::Difference(s) => fmt::Display::fmt(s, f),
            Self::Product(s) => fmt::Display::fmt(s, f),
            Self::Quotient(s) => fmt::Display::fmt(s, f),
            Self::Round(s) => fmt::Display::fmt(s, f),
            Self::Ternary(s) => fmt::Display::fmt(s, f),
        }
    }
}

impl<C> fmt::Display for BooleanStatement<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(s) => fmt::Display::fmt(s, f),
            Self::Variable(s) => fmt::Display::fmt(s, f),
            Self::And(s) => fmt::Display::fmt(s, f),
            Self::Or(s) => fmt::Display::fmt(s, f),
            Self::Ternary(s) => fmt::Display::fmt(s, f),
        }
    }
}

/// `+` or `-` in front of a term of an additive chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Sign {
    Plus,
    Minus,
}

impl Sign {
    pub(crate) fn flipped(self) -> Self {
        match self {
            Self::Plus => Self::Minus,
            Self::Minus => Self::Plus,
        }
    }

    pub(crate) fn operator(self) -> Operator {
        match self {
            Self::Plus => Operator::Add,
            Self::Minus => Operator::Subtract,
        }
    }
}

fn write_wrapped(
    f: &mut fmt::Formatter<'_>,
    wrap: bool,
    operand: &impl fmt::Display,
) -> fmt::Result {
    if wrap {
        write!(f, "({operand})")
    } else {
        write!(f, "{operand}")
    }
}

/// Left operand of a sum or difference. Only a ternary binds looser.
fn write_additive_head<C, R: FloatExt>(
    f: &mut fmt::Formatter<'_>,
    head: &NumericStatement<C, R>,
) -> fmt::Result {
    write_wrapped(f, matches!(head, NumericStatement::Ternary(_)), head)
}

/// Writes `term` after `sign`, unrolling nested sums and differences into
/// one flat chain.
fn write_additive_terms<C, R: FloatExt>(
    f: &mut fmt::Formatter<'_>,
    sign: Sign,
    term: &NumericStatement<C, R>,
) -> fmt::Result {
    match term {
        NumericStatement::Sum(s) => {
            write_additive_terms(f, sign, s.l_operand())?;
            write_additive_terms(f, sign, s.r_operand())
        }
        NumericStatement::Difference(s) => {
            write_additive_terms(f, sign, s.l_operand())?;
            write_additive_terms(f, sign.flipped(), s.r_operand())
        }
        NumericStatement::Literal(literal) if literal.is_negative() => {
            write!(f, " {} {}", sign.flipped().operator(), literal.negated())
        }
        other => {
            write!(f, " {} ", sign.operator())?;
            write_wrapped(f, other.arity() > 1, other)
        }
    }
}

impl<C, R: FloatExt> fmt::Display for Sum<C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_additive_head(f, self.l_operand())?;
        write_additive_terms(f, Sign::Plus, self.r_operand())
    }
}

impl<C, R: FloatExt> fmt::Display for Difference<C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_additive_head(f, self.l_operand())?;
        write_additive_terms(f, Sign::Minus, self.r_operand())
    }
}

/// Writes `l op r`, wrapping each operand for which `wrap` holds.
fn write_operation<O, S>(
    f: &mut fmt::Formatter<'_>,
    operation: &O,
    wrap: impl Fn(&S) -> bool,
) -> fmt::Result
where
    O: Operation<Operand = S>,
    S: fmt::Display,
{
    write_wrapped(f, wrap(operation.l_operand()), operation.l_operand())?;
    write!(f, " {} ", operation.operator())?;
    write_wrapped(f, wrap(operation.r_operand()), operation.r_operand())
}

impl<C, R: FloatExt> fmt::Display for Product<C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_operation(f, self, |operand: &NumericStatement<C, R>| {
            operand.arity() > 1 && !matches!(operand, NumericStatement::Product(_))
        })
    }
}

// A quotient operand is never wrapped, so `a / (b / c)` prints as
// `a / b / c`, which reads back as `(a / b) / c`.
impl<C, R: FloatExt> fmt::Display for Quotient<C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_operation(f, self, |operand: &NumericStatement<C, R>| {
            operand.arity() > 1 && !matches!(operand, NumericStatement::Quotient(_))
        })
    }
}

impl<C> fmt::Display for And<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_operation(f, self, |operand: &BooleanStatement<C>| {
            operand.arity() > 1 && !matches!(operand, BooleanStatement::And(_))
        })
    }
}

impl<C> fmt::Display for Or<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_operation(f, self, |operand: &BooleanStatement<C>| {
            operand.arity() > 1 && !matches!(operand, BooleanStatement::Or(_))
        })
    }
}

impl<C, R: FloatExt> fmt::Display for Round<C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let function = match self.rounding() {
            RoundingType::Ceiling => "Math.ceil",
            RoundingType::Floor => "Math.floor",
            RoundingType::Nearest => "Math.round",
        };
        write!(f, "{function}({})", self.inner())
    }
}

impl<C, R: FloatExt> fmt::Display for NumericalTernary<C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_wrapped(f, self.conditional().is_compound(), self.conditional())?;
        f.write_str(" ? ")?;
        write_wrapped(
            f,
            self.if_true_statement().is_compound(),
            self.if_true_statement(),
        )?;
        write!(f, " : {}", self.otherwise_statement())
    }
}

impl<C> fmt::Display for BooleanTernary<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_wrapped(f, self.conditional().is_compound(), self.conditional())?;
        f.write_str(" ? ")?;
        write_wrapped(
            f,
            self.if_true_statement().is_compound(),
            self.if_true_statement(),
        )?;
        write!(f, " : {}", self.otherwise_statement())
    }
}
