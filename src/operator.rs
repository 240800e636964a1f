use std::fmt;
use std::str::FromStr;

use num_traits::Float;

use crate::StatementError;

/// Binary operators carried by operation statements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    And,
    Or,
}

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::And => "&&",
            Self::Or => "||",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Whether `operator` is one of the "math" operators.
///
/// Only add, multiply and divide qualify. Subtract is deliberately left out.
pub fn is_math_operator(operator: Operator) -> bool {
    matches!(
        operator,
        Operator::Add | Operator::Multiply | Operator::Divide
    )
}

/// Which whole-number rule a `Round` statement applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RoundingType {
    Ceiling,
    Floor,
    Nearest,
}

impl RoundingType {
    pub const ALL: [Self; 3] = [Self::Ceiling, Self::Floor, Self::Nearest];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ceiling => "ceiling",
            Self::Floor => "floor",
            Self::Nearest => "nearest",
        }
    }

    /// Rounds `value`. `Nearest` breaks ties away from zero.
    pub fn apply<R: Float>(self, value: R) -> R {
        match self {
            Self::Ceiling => value.ceil(),
            Self::Floor => value.floor(),
            Self::Nearest => value.round(),
        }
    }
}

impl fmt::Display for RoundingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoundingType {
    type Err = StatementError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rounding| rounding.as_str() == value)
            .ok_or_else(|| StatementError::InvalidTag {
                expected: "rounding type",
                value: value.to_string(),
            })
    }
}

/// Arithmetic combination strategy selected by a priority calculator.
///
/// The statement library only carries the tag, it never interprets it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BaseFormulaType {
    Multiply,
    Add,
    MultiplyAdd,
    AddMultiply,
}

impl BaseFormulaType {
    pub const ALL: [Self; 4] = [
        Self::Multiply,
        Self::Add,
        Self::MultiplyAdd,
        Self::AddMultiply,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Multiply => "multiply",
            Self::Add => "add",
            Self::MultiplyAdd => "multiplyAdd",
            Self::AddMultiply => "addMultiply",
        }
    }
}

impl fmt::Display for BaseFormulaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BaseFormulaType {
    type Err = StatementError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|formula| formula.as_str() == value)
            .ok_or_else(|| StatementError::InvalidTag {
                expected: "base formula type",
                value: value.to_string(),
            })
    }
}

/// Guards a UI-sourced string before it is turned into a [`RoundingType`].
pub fn is_rounding_type(value: &str) -> bool {
    value.parse::<RoundingType>().is_ok()
}

/// Guards a UI-sourced string before it is turned into a [`BaseFormulaType`].
pub fn is_base_formula_type(value: &str) -> bool {
    value.parse::<BaseFormulaType>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn math_operators_exclude_subtract() {
        assert!(is_math_operator(Operator::Add));
        assert!(is_math_operator(Operator::Multiply));
        assert!(is_math_operator(Operator::Divide));
        assert!(!is_math_operator(Operator::Subtract));
        assert!(!is_math_operator(Operator::And));
        assert!(!is_math_operator(Operator::Or));
    }

    #[test]
    fn rounding_type_guard_is_case_sensitive() {
        assert!(is_rounding_type("ceiling"));
        assert!(is_rounding_type("floor"));
        assert!(is_rounding_type("nearest"));
        assert!(!is_rounding_type("CEILING"));
        assert!(!is_rounding_type("5"));
        assert!(!is_rounding_type(""));
    }

    #[test]
    fn base_formula_type_guard() {
        for formula in BaseFormulaType::ALL {
            assert!(is_base_formula_type(formula.as_str()));
        }
        assert!(!is_base_formula_type("multiply_add"));
        assert_eq!(
            "addMultiply".parse::<BaseFormulaType>(),
            Ok(BaseFormulaType::AddMultiply)
        );
    }

    #[test]
    fn unknown_tag_reports_value() {
        assert_eq!(
            "round".parse::<RoundingType>(),
            Err(StatementError::InvalidTag {
                expected: "rounding type",
                value: "round".to_string(),
            })
        );
    }

    #[test]
    fn rounding_rules() {
        assert_eq!(RoundingType::Ceiling.apply(2.1), 3.0);
        assert_eq!(RoundingType::Floor.apply(2.9), 2.0);
        assert_eq!(RoundingType::Nearest.apply(2.5), 3.0);
        assert_eq!(RoundingType::Nearest.apply(-2.5), -3.0);
        assert_eq!(RoundingType::Nearest.apply(2.4f32), 2.0);
    }
}
