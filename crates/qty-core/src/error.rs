//! Error taxonomy shared by the engine and the constructor layer

use thiserror::Error;

use crate::types::{CompoundUnit, Quantity};

/// Result alias used throughout qty-core
pub type QuantityResult<T> = Result<T, QuantityError>;

/// Everything that can go wrong when building or combining quantities.
///
/// Variants carry the offending units so callers can render a precise
/// message without re-deriving anything.
#[derive(Debug, Clone, Error)]
pub enum QuantityError {
    /// Operands were resolved against different definitions tables
    #[error("units `{0}` and `{1}` come from different definitions")]
    DifferentDefinitions(CompoundUnit, CompoundUnit),

    /// Same table, incompatible physical dimensions
    #[error("cannot convert `{0}` to `{1}`: dimensions differ")]
    Dimensionality(CompoundUnit, CompoundUnit),

    /// A unit or prefix symbol that the definitions table does not know
    #[error("undefined unit: {0}")]
    UndefinedUnit(String),

    /// A conversion target that carries its own magnitude, e.g. `3 ft`
    #[error("conversion target `{0}` has a scaling factor")]
    ScalingFactor(Quantity<f64>),

    /// Malformed unit expression
    #[error("parse error: {0}")]
    Parse(String),

    /// Division by a zero-magnitude quantity
    #[error("division by zero")]
    Division,

    /// A result that does not fit the magnitude type, e.g. `Decimal::MAX + 1`
    #[error("{0} overflowed the magnitude type")]
    Overflow(&'static str),
}

impl QuantityError {
    /// Whether this error is a compatibility failure between two operands
    /// (as opposed to a construction failure)
    pub fn is_incompatible(&self) -> bool {
        matches!(
            self,
            QuantityError::DifferentDefinitions(..) | QuantityError::Dimensionality(..)
        )
    }
}
