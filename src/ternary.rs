use crate::{BooleanStatement, Compound, NumericStatement, StatementId, StatementRef, Ternary};

/// `conditional ? if_true : otherwise` over numbers. Only the selected branch
/// is evaluated.
#[derive(Debug)]
pub struct NumericalTernary<C, R = f64> {
    id: StatementId,
    conditional: Box<BooleanStatement<C>>,
    if_true: Box<NumericStatement<C, R>>,
    otherwise: Box<NumericStatement<C, R>>,
}

impl<C, R> NumericalTernary<C, R> {
    pub fn new(
        conditional: BooleanStatement<C>,
        if_true: NumericStatement<C, R>,
        otherwise: NumericStatement<C, R>,
    ) -> Self {
        Self {
            id: StatementId::next(),
            conditional: Box::new(conditional),
            if_true: Box::new(if_true),
            otherwise: Box::new(otherwise),
        }
    }
}

impl<C, R> Compound for NumericalTernary<C, R> {
    type Child<'a> = StatementRef<'a, C, R> where Self: 'a;

    fn id(&self) -> StatementId {
        self.id
    }

    fn length(&self) -> usize {
        3
    }

    fn operand(&self, index: usize) -> Option<Self::Child<'_>> {
        match index {
            0 => Some(StatementRef::Boolean(&self.conditional)),
            1 => Some(StatementRef::Numeric(&self.if_true)),
            2 => Some(StatementRef::Numeric(&self.otherwise)),
            _ => None,
        }
    }
}

impl<C, R> Ternary<C> for NumericalTernary<C, R> {
    type Branch = NumericStatement<C, R>;

    fn conditional(&self) -> &BooleanStatement<C> {
        &self.conditional
    }

    fn if_true_statement(&self) -> &Self::Branch {
        &self.if_true
    }

    fn otherwise_statement(&self) -> &Self::Branch {
        &self.otherwise
    }
}

/// `conditional ? if_true : otherwise` over booleans. Only the selected branch
/// is evaluated.
#[derive(Debug)]
pub struct BooleanTernary<C> {
    id: StatementId,
    conditional: Box<BooleanStatement<C>>,
    if_true: Box<BooleanStatement<C>>,
    otherwise: Box<BooleanStatement<C>>,
}

impl<C> BooleanTernary<C> {
    pub fn new(
        conditional: BooleanStatement<C>,
        if_true: BooleanStatement<C>,
        otherwise: BooleanStatement<C>,
    ) -> Self {
        Self {
            id: StatementId::next(),
            conditional: Box::new(conditional),
            if_true: Box::new(if_true),
            otherwise: Box::new(otherwise),
        }
    }
}

impl<C> Compound for BooleanTernary<C> {
    type Child<'a> = &'a BooleanStatement<C> where Self: 'a;

    fn id(&self) -> StatementId {
        self.id
    }

    fn length(&self) -> usize {
        3
    }

    fn operand(&self, index: usize) -> Option<Self::Child<'_>> {
        match index {
            0 => Some(&*self.conditional),
            1 => Some(&*self.if_true),
            2 => Some(&*self.otherwise),
            _ => None,
        }
    }
}

impl<C> Ternary<C> for BooleanTernary<C> {
    type Branch = BooleanStatement<C>;

    fn conditional(&self) -> &BooleanStatement<C> {
        &self.conditional
    }

    fn if_true_statement(&self) -> &Self::Branch {
        &self.if_true
    }

    fn otherwise_statement(&self) -> &Self::Branch {
        &self.otherwise
    }
}
