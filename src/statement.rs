use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::{
    And, BooleanLiteral, BooleanTernary, BooleanVariable, Difference, NumericalLiteral,
    NumericalTernary, NumericalVariable, Operator, Or, Product, Quotient, Round, StatementError,
    Sum,
};

/// Anything that can be evaluated against a context of type `C`.
///
/// Evaluation is pure: the same context always yields the same value.
pub trait Statement<C> {
    type Value;

    fn evaluate(&self, context: &C) -> Self::Value;

    fn kind(&self) -> StatementKind;
}

/// A statement owning a fixed, ordered list of operand statements.
pub trait Compound {
    type Child<'a>
    where
        Self: 'a;

    /// Opaque identity token, unique per constructed node.
    fn id(&self) -> StatementId;

    fn length(&self) -> usize;

    /// The operand at `index`, or `None` when out of range.
    fn operand(&self, index: usize) -> Option<Self::Child<'_>>;

    fn get(&self, index: usize) -> Result<Self::Child<'_>, StatementError> {
        self.operand(index)
            .ok_or(StatementError::IndexOutOfRange {
                index,
                length: self.length(),
            })
    }

    fn operands(&self) -> Operands<'_, Self> {
        Operands {
            compound: self,
            index: 0,
        }
    }
}

/// A compound statement with exactly two operands of the same type.
pub trait Operation: Compound {
    type Operand;

    fn operator(&self) -> Operator;
    fn l_operand(&self) -> &Self::Operand;
    fn r_operand(&self) -> &Self::Operand;
}

/// A compound statement choosing between two branches by a boolean condition.
pub trait Ternary<C>: Compound {
    type Branch;

    fn conditional(&self) -> &BooleanStatement<C>;
    fn if_true_statement(&self) -> &Self::Branch;
    fn otherwise_statement(&self) -> &Self::Branch;
}

/// Iterator over the operands of a [`Compound`], in positional order.
pub struct Operands<'a, S: Compound + ?Sized> {
    compound: &'a S,
    index: usize,
}

impl<'a, S: Compound + ?Sized + 'a> Iterator for Operands<'a, S> {
    type Item = S::Child<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let operand = self.compound.operand(self.index)?;
        self.index += 1;
        Some(operand)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StatementId(u64);

impl StatementId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatementKind {
    NumericalLiteral,
    BooleanLiteral,
    NumericalVariable,
    BooleanVariable,
    Sum,
    Difference,
    Product,
    Quotient,
    Round,
    And,
    Or,
    NumericalTernary,
    BooleanTernary,
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A number-valued statement.
#[derive(Debug)]
pub enum NumericStatement<C, R = f64> {
    Literal(NumericalLiteral<R>),
    Variable(NumericalVariable<C, R>),

    // Binary arithmetic.
    Sum(Sum<C, R>),
    Difference(Difference<C, R>),
    Product(Product<C, R>),
    Quotient(Quotient<C, R>),

    // Unary.
    Round(Round<C, R>),

    Ternary(NumericalTernary<C, R>),
}

/// A `bool`-valued statement.
#[derive(Debug)]
pub enum BooleanStatement<C> {
    Literal(BooleanLiteral),
    Variable(BooleanVariable<C>),

    // Binary logic.
    And(And<C>),
    Or(Or<C>),

    Ternary(BooleanTernary<C>),
}

/// Borrowed view of a node of either value type.
#[derive(Debug)]
pub enum StatementRef<'a, C, R = f64> {
    Numeric(&'a NumericStatement<C, R>),
    Boolean(&'a BooleanStatement<C>),
}

impl<C, R> Clone for StatementRef<'_, C, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C, R> Copy for StatementRef<'_, C, R> {}

impl<C, R> NumericStatement<C, R> {
    /// Identity of this node, `None` for literals and variables.
    pub fn id(&self) -> Option<StatementId> {
        match self {
            Self::Literal(_) | Self::Variable(_) => None,
            Self::Sum(s) => Some(s.id()),
            Self::Difference(s) => Some(s.id()),
            Self::Product(s) => Some(s.id()),
            Self::Quotient(s) => Some(s.id()),
            Self::Round(s) => Some(s.id()),
            Self::Ternary(s) => Some(s.id()),
        }
    }

    /// Number of operands; zero for leaves.
    pub fn arity(&self) -> usize {
        match self {
            Self::Literal(_) | Self::Variable(_) => 0,
            Self::Sum(s) => s.length(),
            Self::Difference(s) => s.length(),
            Self::Product(s) => s.length(),
            Self::Quotient(s) => s.length(),
            Self::Round(s) => s.length(),
            Self::Ternary(s) => s.length(),
        }
    }

    pub fn is_compound(&self) -> bool {
        self.arity() > 0
    }

    /// Sum or difference.
    pub fn is_additive(&self) -> bool {
        matches!(self, Self::Sum(_) | Self::Difference(_))
    }

    /// Finds the nested node (possibly `self`) carrying `id`.
    pub fn find(&self, id: StatementId) -> Option<StatementRef<'_, C, R>> {
        StatementRef::Numeric(self).find(id)
    }
}

impl<C> BooleanStatement<C> {
    /// Identity of this node, `None` for literals and variables.
    pub fn id(&self) -> Option<StatementId> {
        match self {
            Self::Literal(_) | Self::Variable(_) => None,
            Self::And(s) => Some(s.id()),
            Self::Or(s) => Some(s.id()),
            Self::Ternary(s) => Some(s.id()),
        }
    }

    /// Number of operands; zero for leaves.
    pub fn arity(&self) -> usize {
        match self {
            Self::Literal(_) | Self::Variable(_) => 0,
            Self::And(s) => s.length(),
            Self::Or(s) => s.length(),
            Self::Ternary(s) => s.length(),
        }
    }

    pub fn is_compound(&self) -> bool {
        self.arity() > 0
    }

    /// Finds the nested node (possibly `self`) carrying `id`.
    pub fn find(&self, id: StatementId) -> Option<&BooleanStatement<C>> {
        if self.id() == Some(id) {
            return Some(self);
        }
        match self {
            Self::Literal(_) | Self::Variable(_) => None,
            Self::And(s) => s.operands().find_map(|operand| operand.find(id)),
            Self::Or(s) => s.operands().find_map(|operand| operand.find(id)),
            Self::Ternary(s) => s.operands().find_map(|operand| operand.find(id)),
        }
    }
}

impl<'a, C, R> StatementRef<'a, C, R> {
    pub fn id(self) -> Option<StatementId> {
        match self {
            Self::Numeric(s) => s.id(),
            Self::Boolean(s) => s.id(),
        }
    }

    pub fn arity(self) -> usize {
        match self {
            Self::Numeric(s) => s.arity(),
            Self::Boolean(s) => s.arity(),
        }
    }

    pub fn kind(self) -> StatementKind
    where
        R: crate::FloatExt,
    {
        match self {
            Self::Numeric(s) => s.kind(),
            Self::Boolean(s) => s.kind(),
        }
    }

    pub fn as_numeric(self) -> Option<&'a NumericStatement<C, R>> {
        match self {
            Self::Numeric(s) => Some(s),
            Self::Boolean(_) => None,
        }
    }

    pub fn as_boolean(self) -> Option<&'a BooleanStatement<C>> {
        match self {
            Self::Numeric(_) => None,
            Self::Boolean(s) => Some(s),
        }
    }

    /// Direct operands of this node, in positional order.
    pub fn children(self) -> Vec<StatementRef<'a, C, R>> {
        match self {
            Self::Numeric(statement) => match statement {
                NumericStatement::Literal(_) | NumericStatement::Variable(_) => vec![],
                NumericStatement::Sum(s) => s.operands().map(Self::Numeric).collect(),
                NumericStatement::Difference(s) => s.operands().map(Self::Numeric).collect(),
                NumericStatement::Product(s) => s.operands().map(Self::Numeric).collect(),
                NumericStatement::Quotient(s) => s.operands().map(Self::Numeric).collect(),
                NumericStatement::Round(s) => s.operands().map(Self::Numeric).collect(),
                NumericStatement::Ternary(s) => s.operands().collect(),
            },
            Self::Boolean(statement) => match statement {
                BooleanStatement::Literal(_) | BooleanStatement::Variable(_) => vec![],
                BooleanStatement::And(s) => s.operands().map(Self::Boolean).collect(),
                BooleanStatement::Or(s) => s.operands().map(Self::Boolean).collect(),
                BooleanStatement::Ternary(s) => s.operands().map(Self::Boolean).collect(),
            },
        }
    }

    pub fn find(self, id: StatementId) -> Option<Self> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.children()
            .into_iter()
            .find_map(|child| child.find(id))
    }
}

macro_rules! impl_from_node {
    (@one $statement:ident [$($gen:ident),+], $variant:ident($node:ty)) => {
        impl<$($gen),+> From<$node> for $statement<$($gen),+> {
            fn from(node: $node) -> Self {
                Self::$variant(node)
            }
        }
    };
    ($statement:ident $gens:tt, $($variant:ident($node:ty)),+ $(,)?) => {
        $(
            impl_from_node!(@one $statement $gens, $variant($node));
        )+
    };
}

impl_from_node!(
    NumericStatement[C, R],
    Literal(NumericalLiteral<R>),
    Variable(NumericalVariable<C, R>),
    Sum(Sum<C, R>),
    Difference(Difference<C, R>),
    Product(Product<C, R>),
    Quotient(Quotient<C, R>),
    Round(Round<C, R>),
    Ternary(NumericalTernary<C, R>),
);

impl_from_node!(
    BooleanStatement[C],
    Literal(BooleanLiteral),
    Variable(BooleanVariable<C>),
    And(And<C>),
    Or(Or<C>),
    Ternary(BooleanTernary<C>),
);

/// Splits an operand list into exactly two operands.
pub(crate) fn take_pair<T>(
    operands: impl IntoIterator<Item = T>,
) -> Result<(T, T), StatementError> {
    let mut operands = operands.into_iter();
    let l_operand = operands
        .next()
        .ok_or(StatementError::InvalidOperand(crate::OperandPosition::Left))?;
    let r_operand = operands
        .next()
        .ok_or(StatementError::InvalidOperand(crate::OperandPosition::Right))?;
    if operands.next().is_some() {
        return Err(StatementError::IndexOutOfRange {
            index: 2,
            length: 2,
        });
    }
    Ok((l_operand, r_operand))
}
