//! Unit terms and compound units
//!
//! A [`CompoundUnit`] is a product of [`SimpleUnit`] powers tied to the
//! [`Definitions`] it was resolved against. Terms are kept in the order they
//! were written; nothing here merges or cancels like terms.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::Definitions;
use crate::engine;
use crate::error::QuantityResult;

/// One `prefix symbol ^ power` term, e.g. kilometer squared
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimpleUnit {
    /// Canonical unit symbol (key into [`Definitions`]), or a `[label]`
    /// dimension pseudo-unit
    pub symbol: String,
    /// Canonical prefix name, empty for none
    #[serde(default)]
    pub prefix: String,
    /// Exponent; may be negative or fractional
    pub power: f64,
}

impl SimpleUnit {
    pub fn new(symbol: impl Into<String>, prefix: impl Into<String>, power: f64) -> Self {
        Self {
            symbol: symbol.into(),
            prefix: prefix.into(),
            power,
        }
    }

    /// Unprefixed term
    pub fn plain(symbol: impl Into<String>, power: f64) -> Self {
        Self::new(symbol, "", power)
    }

    /// Whether this term is a `[label]` dimension pseudo-unit
    pub fn is_dimension(&self) -> bool {
        is_dimension_label(&self.symbol)
    }

    /// Same term with its exponent multiplied by `by`
    pub(crate) fn raised(&self, by: f64) -> Self {
        Self {
            symbol: self.symbol.clone(),
            prefix: self.prefix.clone(),
            power: self.power * by,
        }
    }

    /// Total order over (symbol, power) used to canonicalize dimensions
    pub(crate) fn canonical_cmp(&self, other: &Self) -> Ordering {
        self.symbol
            .cmp(&other.symbol)
            .then_with(|| self.power.total_cmp(&other.power))
    }
}

pub(crate) fn is_dimension_label(symbol: &str) -> bool {
    symbol.len() > 2 && symbol.starts_with('[') && symbol.ends_with(']')
}

impl fmt::Display for SimpleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.symbol)?;
        if self.power != 1.0 {
            write!(f, " ** {}", self.power)?;
        }
        Ok(())
    }
}

/// Ordered product of unit terms plus the definitions they belong to
#[derive(Debug, Clone)]
pub struct CompoundUnit {
    definitions: Arc<Definitions>,
    terms: Vec<SimpleUnit>,
}

impl CompoundUnit {
    /// Build a compound unit, checking every symbol and prefix against `definitions`
    pub fn new(definitions: Arc<Definitions>, terms: Vec<SimpleUnit>) -> QuantityResult<Self> {
        for term in &terms {
            definitions.validate(term)?;
        }
        Ok(Self { definitions, terms })
    }

    /// The empty (dimensionless) unit
    pub fn dimensionless(definitions: Arc<Definitions>) -> Self {
        Self {
            definitions,
            terms: Vec::new(),
        }
    }

    /// Build without validation; callers guarantee the terms came from `definitions`
    pub(crate) fn from_terms(definitions: Arc<Definitions>, terms: Vec<SimpleUnit>) -> Self {
        Self { definitions, terms }
    }

    pub fn definitions(&self) -> &Arc<Definitions> {
        &self.definitions
    }

    pub fn terms(&self) -> &[SimpleUnit] {
        &self.terms
    }

    pub fn is_dimensionless(&self) -> bool {
        self.terms.is_empty()
    }

    /// Whether both units were resolved against the same definitions table
    pub fn same_definitions(&self, other: &CompoundUnit) -> bool {
        Arc::ptr_eq(&self.definitions, &other.definitions)
            || self.definitions.fingerprint() == other.definitions.fingerprint()
    }

    /// Canonical dimension signature, as a unit of `[label]` pseudo-units
    pub fn dimensionality(&self) -> CompoundUnit {
        let terms = engine::dimensionality_of(&self.definitions, &self.terms);
        Self::from_terms(Arc::clone(&self.definitions), terms)
    }

    /// Whether a quantity in these units can be converted to `other`
    pub fn is_compatible(&self, other: &CompoundUnit) -> bool {
        self.same_definitions(other)
            && engine::same_dimensions(self.dimensionality().terms(), other.dimensionality().terms())
    }

    /// Concatenate terms, negating `other`'s powers when dividing
    pub(crate) fn combine(&self, other: &CompoundUnit, divide: bool) -> CompoundUnit {
        let sign = if divide { -1.0 } else { 1.0 };
        let terms = self
            .terms
            .iter()
            .cloned()
            .chain(other.terms.iter().map(|t| t.raised(sign)))
            .collect();
        Self::from_terms(Arc::clone(&self.definitions), terms)
    }

    pub(crate) fn raised(&self, by: f64) -> CompoundUnit {
        let terms = self.terms.iter().map(|t| t.raised(by)).collect();
        Self::from_terms(Arc::clone(&self.definitions), terms)
    }
}

impl PartialEq for CompoundUnit {
    fn eq(&self, other: &Self) -> bool {
        self.same_definitions(other) && self.terms == other.terms
    }
}

impl fmt::Display for CompoundUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.terms.is_empty() {
            return write!(f, "dimensionless");
        }

        let (numerator, denominator): (Vec<_>, Vec<_>) =
            self.terms.iter().partition(|t| t.power >= 0.0);

        let join = |terms: &[SimpleUnit]| {
            terms
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" * ")
        };

        if numerator.is_empty() {
            write!(f, "1")?;
        } else {
            let numerator: Vec<SimpleUnit> = numerator.into_iter().cloned().collect();
            write!(f, "{}", join(&numerator))?;
        }

        if !denominator.is_empty() {
            let denominator: Vec<SimpleUnit> = denominator.iter().map(|t| t.raised(-1.0)).collect();
            write!(f, " / {}", join(&denominator))?;
        }
        Ok(())
    }
}
