use std::fmt;
use std::sync::Arc;

use crate::{BusinessAware, FloatExt, PriorityContext, StatementError, VipAware};

type Accessor<C, V> = Arc<dyn Fn(&C) -> V + Send + Sync>;

/// Whether `name` can name a variable: a letter or underscore followed by
/// letters, digits or underscores.
pub fn is_valid_variable_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

fn validated_name(name: impl Into<String>) -> Result<String, StatementError> {
    let name = name.into();
    if !is_valid_variable_name(&name) {
        return Err(StatementError::InvalidVariableName(name));
    }
    Ok(name)
}

/// A number read from the evaluation context.
pub struct NumericalVariable<C, R = f64> {
    name: String,
    accessor: Accessor<C, R>,
}

impl<C, R> NumericalVariable<C, R> {
    pub fn new(
        name: impl Into<String>,
        accessor: impl Fn(&C) -> R + Send + Sync + 'static,
    ) -> Result<Self, StatementError> {
        Ok(Self {
            name: validated_name(name)?,
            accessor: Arc::new(accessor),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn read(&self, context: &C) -> R {
        (self.accessor)(context)
    }
}

impl<C: PriorityContext, R: FloatExt> NumericalVariable<C, R> {
    pub fn urgency() -> Self {
        Self {
            name: "urgency".to_string(),
            accessor: Arc::new(|context: &C| context.urgency().into()),
        }
    }

    pub fn impact() -> Self {
        Self {
            name: "impact".to_string(),
            accessor: Arc::new(|context: &C| context.impact().into()),
        }
    }
}

impl<C, R> Clone for NumericalVariable<C, R> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            accessor: Arc::clone(&self.accessor),
        }
    }
}

impl<C, R> fmt::Debug for NumericalVariable<C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NumericalVariable").field(&self.name).finish()
    }
}

/// A `bool` read from the evaluation context.
pub struct BooleanVariable<C> {
    name: String,
    accessor: Accessor<C, bool>,
}

impl<C> BooleanVariable<C> {
    pub fn new(
        name: impl Into<String>,
        accessor: impl Fn(&C) -> bool + Send + Sync + 'static,
    ) -> Result<Self, StatementError> {
        Ok(Self {
            name: validated_name(name)?,
            accessor: Arc::new(accessor),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn read(&self, context: &C) -> bool {
        (self.accessor)(context)
    }
}

impl<C: VipAware> BooleanVariable<C> {
    pub fn vip() -> Self {
        Self {
            name: "vip".to_string(),
            accessor: Arc::new(|context: &C| context.vip()),
        }
    }
}

impl<C: BusinessAware> BooleanVariable<C> {
    pub fn business_related() -> Self {
        Self {
            name: "businessRelated".to_string(),
            accessor: Arc::new(|context: &C| context.business_related()),
        }
    }
}

impl<C> Clone for BooleanVariable<C> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            accessor: Arc::clone(&self.accessor),
        }
    }
}

impl<C> fmt::Debug for BooleanVariable<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("BooleanVariable").field(&self.name).finish()
    }
}
