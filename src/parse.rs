//! Reads rendered formulas back so tests can check what the printer emits.
#![allow(deprecated)]

use std::collections::HashMap;

use once_cell::sync::Lazy;
use pest::iterators::{Pair, Pairs};
use pest::{prec_climber::*, Parser};
use pest_derive::Parser;

use crate::RoundingType;

#[derive(Parser)]
#[grammar = "grammar.pest"] // relative to project `src`
struct FormulaParser;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    Number(f64),
    Boolean(bool),
}

impl Value {
    fn number(self) -> f64 {
        match self {
            Self::Number(n) => n,
            _ => panic!("Expected Number"),
        }
    }

    fn boolean(self) -> bool {
        match self {
            Self::Boolean(b) => b,
            _ => panic!("Expected Boolean"),
        }
    }
}

/// Evaluates a rendered formula with the usual precedence rules:
/// `?:` < `||` < `&&` < `+ -` < `* /`, all binary operators left-associative.
pub fn evaluate_printed(input: &str, variables: &HashMap<&str, Value>) -> Value {
    let mut pairs = FormulaParser::parse(Rule::calculation, input)
        .unwrap_or_else(|e| panic!("Failed to parse {input:?}: {e}"));
    let expr = pairs.next().expect("calculation holds one expression");
    evaluate_expr(expr, variables)
}

static PRECEDENCE_CLIMBER: Lazy<PrecClimber<Rule>> = Lazy::new(|| {
    use Assoc::*;
    use Rule::*;

    PrecClimber::new(vec![
        Operator::new(or, Left),
        Operator::new(and, Left),
        Operator::new(add, Left) | Operator::new(subtract, Left),
        Operator::new(multiply, Left) | Operator::new(divide, Left),
    ])
});

fn evaluate_expr(pair: Pair<Rule>, variables: &HashMap<&str, Value>) -> Value {
    let mut inner = pair.into_inner();
    let chain = inner.next().expect("expression starts with a chain");
    let condition = climb_recursive(chain.into_inner(), variables);
    match (inner.next(), inner.next()) {
        (Some(if_true), Some(otherwise)) => {
            if condition.boolean() {
                evaluate_expr(if_true, variables)
            } else {
                evaluate_expr(otherwise, variables)
            }
        }
        _ => condition,
    }
}

fn climb_recursive(input: Pairs<Rule>, variables: &HashMap<&str, Value>) -> Value {
    PRECEDENCE_CLIMBER.climb(
        input,
        |pair: Pair<Rule>| match pair.as_rule() {
            Rule::expr => evaluate_expr(pair, variables),
            Rule::real_literal => {
                let literal_str = pair.as_str();
                if let Ok(value) = literal_str.parse::<f64>() {
                    return Value::Number(value);
                }
                panic!("Unexpected literal: {}", literal_str)
            }
            Rule::boolean_literal => Value::Boolean(pair.as_str() == "true"),
            Rule::variable => *variables
                .get(pair.as_str())
                .unwrap_or_else(|| panic!("Unbound variable {}", pair.as_str())),
            Rule::rounding => {
                let mut inner = pair.into_inner();
                let rounding = match inner.next().unwrap().as_str() {
                    "Math.ceil" => RoundingType::Ceiling,
                    "Math.floor" => RoundingType::Floor,
                    _ => RoundingType::Nearest,
                };
                let value = evaluate_expr(inner.next().unwrap(), variables).number();
                Value::Number(rounding.apply(value))
            }
            x => panic!("Unexpected primary rule {x:?}"),
        },
        |lhs: Value, op: Pair<Rule>, rhs: Value| match op.as_rule() {
            Rule::add => Value::Number(lhs.number() + rhs.number()),
            Rule::subtract => Value::Number(lhs.number() - rhs.number()),
            Rule::multiply => Value::Number(lhs.number() * rhs.number()),
            Rule::divide => Value::Number(lhs.number() / rhs.number()),
            Rule::and => Value::Boolean(lhs.boolean() && rhs.boolean()),
            Rule::or => Value::Boolean(lhs.boolean() || rhs.boolean()),
            x => panic!("Unexpected operator {x:?}"),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence() {
        let variables = HashMap::from([("x", Value::Number(2.0)), ("t", Value::Boolean(true))]);
        assert_eq!(
            evaluate_printed("1 * 2 + 3 * 4", &variables),
            Value::Number(14.0)
        );
        assert_eq!(evaluate_printed("8 / 4 / 2", &variables), Value::Number(1.0));
        assert_eq!(evaluate_printed("10 - x - 3", &variables), Value::Number(5.0));
        assert_eq!(evaluate_printed("2 * -3", &variables), Value::Number(-6.0));
        assert_eq!(
            evaluate_printed("false ? 1 : t ? Math.floor(2.5) : 3", &variables),
            Value::Number(2.0)
        );
        assert_eq!(
            evaluate_printed("false || t && false", &variables),
            Value::Boolean(false)
        );
    }
}
