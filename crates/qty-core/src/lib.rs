//! qty-core: unit-aware quantities and dimensional analysis
//!
//! This crate pairs numbers with compound units and provides the engine
//! that reduces units to base units, checks dimensional compatibility,
//! converts between units and adds or subtracts quantities whose units
//! differ. It performs no I/O and holds no mutable state.
//!
//! # Example
//!
//! ```
//! use qty_core::UnitSystem;
//!
//! let system = UnitSystem::default();
//!
//! // Conversion
//! let length = system.quantity("1 meter").unwrap();
//! let feet = length.convert(&system.units("foot").unwrap()).unwrap();
//! assert!((feet.magnitude() - 3.280839895013123).abs() < 1e-12);
//!
//! // Addition reconciles units; the left operand's units win
//! let sum = system
//!     .quantity("2 ft")
//!     .unwrap()
//!     .add(&system.quantity("6 in").unwrap())
//!     .unwrap();
//! assert!((sum.magnitude() - 2.5).abs() < 1e-9);
//!
//! // Incompatible dimensions are an error, not a number
//! assert!(length.convert(&system.units("second").unwrap()).is_err());
//! ```

pub mod engine;
pub mod error;
pub mod parser;
pub mod types;

use std::sync::Arc;

pub use engine::{add, convert, convert_base, dimensionality, subtract};
pub use error::{QuantityError, QuantityResult};
pub use parser::{parse_quantity, parse_units};
#[cfg(feature = "builtin")]
pub use types::default_definitions;
pub use types::{
    BaseExpansion, CompoundUnit, Definitions, DefinitionsBuilder, Magnitude, Quantity, SimpleUnit,
};

/// A definitions table plus the constructors that build values against it
#[derive(Debug, Clone)]
pub struct UnitSystem {
    definitions: Arc<Definitions>,
}

impl UnitSystem {
    pub fn new(definitions: Arc<Definitions>) -> Self {
        Self { definitions }
    }

    pub fn definitions(&self) -> &Arc<Definitions> {
        &self.definitions
    }

    /// Parse a quantity literal, e.g. `"9.81 m/s^2"`
    pub fn quantity(&self, input: &str) -> QuantityResult<Quantity> {
        parse_quantity(&self.definitions, input)
    }

    /// Parse a unit expression, e.g. `"km / hour"`
    pub fn units(&self, input: &str) -> QuantityResult<CompoundUnit> {
        parse_units(&self.definitions, input)
    }

    /// Attach `units` to a magnitude of any supported numeric type
    pub fn quantity_of<N: Magnitude>(&self, magnitude: N, units: &str) -> QuantityResult<Quantity<N>> {
        Ok(Quantity::new(magnitude, self.units(units)?))
    }

    /// Convert `quantity` to the units written in `target`
    pub fn convert_to<N: Magnitude>(
        &self,
        quantity: &Quantity<N>,
        target: &str,
    ) -> QuantityResult<Quantity<N>> {
        convert(quantity, &self.units(target)?)
    }
}

#[cfg(feature = "builtin")]
impl Default for UnitSystem {
    fn default() -> Self {
        Self::new(default_definitions())
    }
}
