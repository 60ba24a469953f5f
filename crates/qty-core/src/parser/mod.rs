//! Unit-expression parser using pest
//!
//! Turns strings such as `"kilogram meter / second^2"` or `"2.5 km/h"` into
//! validated [`CompoundUnit`] and [`Quantity`] values. Arithmetic between
//! quantities is not part of this grammar.

mod ast;

pub use ast::{Factor, UnitExpr};

use std::sync::Arc;

use pest::Parser;
use pest_derive::Parser;

use crate::error::{QuantityError, QuantityResult};
use crate::types::{CompoundUnit, Definitions, Quantity, SimpleUnit};

#[derive(Parser)]
#[grammar = "parser/grammar.pest"]
pub struct UnitParser;

/// Parse a unit expression or quantity literal without resolving any names
pub fn parse_expr(input: &str) -> QuantityResult<UnitExpr> {
    let pairs = UnitParser::parse(Rule::quantity, input.trim())
        .map_err(|e| QuantityError::Parse(e.to_string()))?;
    ast::build_unit_expr(pairs)
}

/// Resolve written names (synonyms, prefixed forms) to canonical terms
pub fn resolve_factors(defs: &Definitions, factors: &[Factor]) -> QuantityResult<Vec<SimpleUnit>> {
    factors
        .iter()
        .map(|factor| {
            let (prefix, symbol) = defs.resolve(&factor.name)?;
            Ok(SimpleUnit::new(symbol, prefix, factor.power))
        })
        .collect()
}

/// Parse a quantity literal such as `"2 ft"` or `"9.81 m/s^2"`.
///
/// A missing number means 1; an empty string is the dimensionless 1.
pub fn parse_quantity(defs: &Arc<Definitions>, input: &str) -> QuantityResult<Quantity<f64>> {
    let expr = parse_expr(input)?;
    let terms = resolve_factors(defs, &expr.factors)?;
    Ok(Quantity::new(
        expr.magnitude.unwrap_or(1.0),
        CompoundUnit::from_terms(Arc::clone(defs), terms),
    ))
}

/// Parse a unit expression such as `"km / hour"`.
///
/// Fails with [`QuantityError::ScalingFactor`] if the expression carries a
/// magnitude other than 1 (e.g. `"3 ft"`).
pub fn parse_units(defs: &Arc<Definitions>, input: &str) -> QuantityResult<CompoundUnit> {
    let quantity = parse_quantity(defs, input)?;
    if quantity.magnitude() != 1.0 {
        return Err(QuantityError::ScalingFactor(quantity));
    }
    Ok(quantity.units().clone())
}
