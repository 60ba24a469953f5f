//! Dimensional analysis
//!
//! A dimension signature is a sorted list of `[label]` pseudo-units with net
//! powers. Two compound units are convertible iff their signatures match.

use log::warn;

use super::normalize::to_base;
use crate::types::{Definitions, SimpleUnit};

/// Powers closer than this are treated as equal (fractional exponents do not
/// always sum exactly)
const POWER_EPSILON: f64 = 1e-9;

/// Canonical dimension signature of a unit list.
///
/// Terms are reduced to base units, relabelled with their dimension, merged
/// per label (powers summed, zero powers dropped) and sorted by
/// (label, power). `[label]` terms pass through, so the signature of a
/// signature is itself.
pub fn dimensionality_of(defs: &Definitions, units: &[SimpleUnit]) -> Vec<SimpleUnit> {
    let mut merged: Vec<SimpleUnit> = Vec::new();

    for term in to_base(defs, units).units {
        let label = dimension_label(defs, &term);
        match merged.iter_mut().find(|d| d.symbol == label) {
            Some(existing) => existing.power += term.power,
            None => merged.push(SimpleUnit::plain(label, term.power)),
        }
    }

    merged.retain(|d| d.power.abs() > POWER_EPSILON);
    merged.sort_by(SimpleUnit::canonical_cmp);
    merged
}

/// Compare two signatures term by term
pub fn same_dimensions(a: &[SimpleUnit], b: &[SimpleUnit]) -> bool {
    a.len() == b.len()
        && a.iter()
            .zip(b)
            .all(|(x, y)| x.symbol == y.symbol && (x.power - y.power).abs() <= POWER_EPSILON)
}

fn dimension_label(defs: &Definitions, term: &SimpleUnit) -> String {
    if term.is_dimension() {
        return term.symbol.clone();
    }
    match defs.unit_type(&term.symbol) {
        Some(label) => format!("[{label}]"),
        None => {
            warn!("`{}` has no dimension label", term.symbol);
            format!("[{}]", term.symbol)
        }
    }
}
