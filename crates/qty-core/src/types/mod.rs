//! Value types for qty quantities

#[cfg(feature = "builtin")]
pub mod builtin;
pub mod definitions;
mod magnitude;
mod quantity;
pub mod unit;

#[cfg(feature = "builtin")]
pub use builtin::{default_definitions, BASE_UNITS, DERIVED_UNITS, PREFIXES};
pub use definitions::{BaseExpansion, Definitions, DefinitionsBuilder};
pub use magnitude::Magnitude;
pub use quantity::Quantity;
pub use unit::{CompoundUnit, SimpleUnit};
