//! Syntax tree for unit expressions

use pest::iterators::{Pair, Pairs};
use std::str::FromStr;

use super::Rule;
use crate::error::{QuantityError, QuantityResult};

/// A parsed, still unresolved, quantity literal
#[derive(Debug, Clone, PartialEq)]
pub struct UnitExpr {
    /// Leading number, if one was written
    pub magnitude: Option<f64>,
    pub factors: Vec<Factor>,
}

/// One written unit name and its signed exponent
#[derive(Debug, Clone, PartialEq)]
pub struct Factor {
    pub name: String,
    pub power: f64,
}

fn parse_number_str(s: &str) -> QuantityResult<f64> {
    f64::from_str(s).map_err(|e| QuantityError::Parse(format!("invalid number `{s}`: {e}")))
}

/// Build a [`UnitExpr`] from the pairs of a `quantity` match
pub fn build_unit_expr(pairs: Pairs<'_, Rule>) -> QuantityResult<UnitExpr> {
    let mut expr = UnitExpr {
        magnitude: None,
        factors: Vec::new(),
    };

    for pair in pairs.flat_map(|p| p.into_inner()) {
        match pair.as_rule() {
            Rule::number => expr.magnitude = Some(parse_number_str(pair.as_str())?),
            Rule::unit_expr => expr.factors = build_factors(pair)?,
            _ => {}
        }
    }
    Ok(expr)
}

fn build_factors(pair: Pair<'_, Rule>) -> QuantityResult<Vec<Factor>> {
    let mut factors = Vec::new();
    let mut invert_next = false;

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::divide => invert_next = true,
            Rule::multiply => invert_next = false,
            Rule::factor => {
                let mut factor = build_factor(inner)?;
                if invert_next {
                    factor.power = -factor.power;
                    invert_next = false;
                }
                factors.push(factor);
            }
            _ => {}
        }
    }
    Ok(factors)
}

fn build_factor(pair: Pair<'_, Rule>) -> QuantityResult<Factor> {
    let mut inner = pair.into_inner();
    let name = inner
        .next()
        .ok_or_else(|| QuantityError::Parse("expected unit name".to_string()))?
        .as_str()
        .to_string();
    let power = match inner.next() {
        Some(exponent) => parse_number_str(exponent.as_str())?,
        None => 1.0,
    };
    Ok(Factor { name, power })
}
