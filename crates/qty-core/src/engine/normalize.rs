//! Base-unit normalization

use log::{trace, warn};

use crate::types::{Definitions, SimpleUnit};

/// A scalar and a list of base-unit terms; the intermediate form every
/// conversion goes through
#[derive(Debug, Clone, PartialEq)]
pub struct BaseQuantity {
    pub magnitude: f64,
    pub units: Vec<SimpleUnit>,
}

impl BaseQuantity {
    /// Magnitude 1, no units
    pub fn one() -> Self {
        Self {
            magnitude: 1.0,
            units: Vec::new(),
        }
    }

    /// Multiply magnitudes and concatenate unit lists. Like terms are kept
    /// side by side.
    pub fn multiply(mut self, other: BaseQuantity) -> Self {
        self.magnitude *= other.magnitude;
        self.units.extend(other.units);
        self
    }
}

/// Reduce one term to base units.
///
/// The magnitude is `(multiplier * prefix) ^ power` and every base term's
/// exponent is multiplied by `power`. Symbols missing from `defs` are kept as
/// irreducible terms.
pub fn simple_to_base(defs: &Definitions, unit: &SimpleUnit) -> BaseQuantity {
    let prefix = defs.prefix_value(&unit.prefix).unwrap_or_else(|| {
        warn!("unknown prefix `{}`, treating it as 1", unit.prefix);
        1.0
    });

    let Some(expansion) = defs.base(&unit.symbol) else {
        if !unit.is_dimension() {
            warn!("unknown unit `{}`, keeping it irreducible", unit.symbol);
        }
        return BaseQuantity {
            magnitude: prefix.powf(unit.power),
            units: vec![SimpleUnit::plain(unit.symbol.clone(), unit.power)],
        };
    };

    let reduced = BaseQuantity {
        magnitude: (expansion.multiplier * prefix).powf(unit.power),
        units: expansion
            .units
            .iter()
            .map(|base| base.raised(unit.power))
            .collect(),
    };
    trace!("{unit} -> {} {:?}", reduced.magnitude, reduced.units);
    reduced
}

/// Reduce a whole compound unit to base units. An empty list reduces to 1.
pub fn to_base(defs: &Definitions, units: &[SimpleUnit]) -> BaseQuantity {
    units
        .iter()
        .map(|unit| simple_to_base(defs, unit))
        .fold(BaseQuantity::one(), BaseQuantity::multiply)
}
