//! Context shapes a statement tree can be evaluated against.
//!
//! A tree is generic over its context type, so a tree reading `vip` can only
//! be built for contexts implementing [`VipAware`].

/// Urgency and impact levels of a ticket.
pub trait PriorityContext {
    fn urgency(&self) -> u8;
    fn impact(&self) -> u8;
}

pub trait VipAware: PriorityContext {
    fn vip(&self) -> bool;
}

pub trait BusinessAware: PriorityContext {
    fn business_related(&self) -> bool;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BaseContext {
    pub urgency: u8,
    pub impact: u8,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VipContext {
    pub urgency: u8,
    pub impact: u8,
    pub vip: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BusinessContext {
    pub urgency: u8,
    pub impact: u8,
    pub business_related: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FullContext {
    pub urgency: u8,
    pub impact: u8,
    pub vip: bool,
    pub business_related: bool,
}

macro_rules! impl_priority_context {
    ($($context:ty),+) => {
        $(
            impl PriorityContext for $context {
                fn urgency(&self) -> u8 {
                    self.urgency
                }

                fn impact(&self) -> u8 {
                    self.impact
                }
            }
        )+
    };
}

impl_priority_context!(BaseContext, VipContext, BusinessContext, FullContext);

impl VipAware for VipContext {
    fn vip(&self) -> bool {
        self.vip
    }
}

impl VipAware for FullContext {
    fn vip(&self) -> bool {
        self.vip
    }
}

impl BusinessAware for BusinessContext {
    fn business_related(&self) -> bool {
        self.business_related
    }
}

impl BusinessAware for FullContext {
    fn business_related(&self) -> bool {
        self.business_related
    }
}
