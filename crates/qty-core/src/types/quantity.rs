//! Core quantity representation

use std::fmt;
use std::sync::Arc;

use super::{CompoundUnit, Definitions, Magnitude};
use crate::engine;
use crate::error::{QuantityError, QuantityResult};

/// A magnitude paired with a compound unit.
///
/// Quantities are immutable; every operation returns a new value.
#[derive(Debug, Clone)]
pub struct Quantity<N = f64> {
    magnitude: N,
    units: CompoundUnit,
}

impl<N: Magnitude> Quantity<N> {
    pub fn new(magnitude: N, units: CompoundUnit) -> Self {
        Self { magnitude, units }
    }

    /// A plain number attached to `definitions`
    pub fn dimensionless(magnitude: N, definitions: Arc<Definitions>) -> Self {
        Self::new(magnitude, CompoundUnit::dimensionless(definitions))
    }

    pub fn magnitude(&self) -> N {
        self.magnitude
    }

    pub fn units(&self) -> &CompoundUnit {
        &self.units
    }

    pub fn definitions(&self) -> &Arc<Definitions> {
        self.units.definitions()
    }

    /// Same units, different magnitude
    pub fn with_magnitude(&self, magnitude: N) -> Self {
        Self::new(magnitude, self.units.clone())
    }

    /// Same value with an `f64` magnitude
    pub fn to_f64(&self) -> Quantity<f64> {
        Quantity::new(self.magnitude.to_real(), self.units.clone())
    }

    /// Product of two quantities. Unit terms are concatenated, not simplified.
    pub fn multiply(&self, other: &Quantity<N>) -> QuantityResult<Self> {
        self.require_same_definitions(other)?;
        let magnitude = self
            .magnitude
            .checked_mul(other.magnitude)
            .ok_or(QuantityError::Overflow("multiplication"))?;
        Ok(Self::new(magnitude, self.units.combine(&other.units, false)))
    }

    /// Quotient of two quantities. The divisor's terms are appended with
    /// negated powers.
    pub fn divide(&self, other: &Quantity<N>) -> QuantityResult<Self> {
        self.require_same_definitions(other)?;
        if other.magnitude.is_zero() {
            return Err(QuantityError::Division);
        }
        let magnitude = self
            .magnitude
            .checked_div(other.magnitude)
            .ok_or(QuantityError::Overflow("division"))?;
        Ok(Self::new(magnitude, self.units.combine(&other.units, true)))
    }

    /// Raise to a real power; every term's exponent is multiplied by `power`
    pub fn powf(&self, power: f64) -> QuantityResult<Self> {
        let magnitude = N::from_real(self.magnitude.to_real().powf(power))
            .ok_or(QuantityError::Overflow("exponentiation"))?;
        Ok(Self::new(magnitude, self.units.raised(power)))
    }

    /// Re-express in `target` units. See [`engine::convert`].
    pub fn convert(&self, target: &CompoundUnit) -> QuantityResult<Self> {
        engine::convert(self, target)
    }

    /// Re-express in base units. See [`engine::convert_base`].
    pub fn convert_base(&self) -> Self {
        engine::convert_base(self)
    }

    /// Canonical dimension signature. See [`engine::dimensionality`].
    pub fn dimensionality(&self) -> CompoundUnit {
        engine::dimensionality(self)
    }

    /// `self + other`, in `self`'s units. See [`engine::add`].
    pub fn add(&self, other: &Quantity<N>) -> QuantityResult<Self> {
        engine::add(self, other)
    }

    /// `self - other`, in `self`'s units. See [`engine::subtract`].
    pub fn subtract(&self, other: &Quantity<N>) -> QuantityResult<Self> {
        engine::subtract(self, other)
    }

    fn require_same_definitions(&self, other: &Quantity<N>) -> QuantityResult<()> {
        if self.units.same_definitions(&other.units) {
            Ok(())
        } else {
            Err(QuantityError::DifferentDefinitions(
                self.units.clone(),
                other.units.clone(),
            ))
        }
    }
}

impl<N: PartialEq> PartialEq for Quantity<N> {
    fn eq(&self, other: &Self) -> bool {
        self.magnitude == other.magnitude && self.units == other.units
    }
}

impl<N: fmt::Display> fmt::Display for Quantity<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.units.is_dimensionless() {
            write!(f, "{}", self.magnitude)
        } else {
            write!(f, "{} {}", self.magnitude, self.units)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DefinitionsBuilder, SimpleUnit};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn defs() -> Arc<Definitions> {
        Arc::new(
            DefinitionsBuilder::new()
                .base("meter", "length", &["m"])
                .base("second", "time", &["s"])
                .build()
                .unwrap(),
        )
    }

    fn meters<N: Magnitude>(defs: &Arc<Definitions>, n: N) -> Quantity<N> {
        let unit = CompoundUnit::new(Arc::clone(defs), vec![SimpleUnit::plain("meter", 1.0)]).unwrap();
        Quantity::new(n, unit)
    }

    #[test]
    fn test_multiply_concatenates_terms() {
        let defs = defs();
        let area = meters(&defs, 4.0_f64).multiply(&meters(&defs, 3.0)).unwrap();
        assert_eq!(area.magnitude(), 12.0);
        assert_eq!(area.units().terms().len(), 2);
        assert_eq!(area.to_string(), "12 meter * meter");
    }

    #[test]
    fn test_divide_by_zero() {
        let defs = defs();
        let result = meters(&defs, 4.0_f64).divide(&meters(&defs, 0.0));
        assert!(matches!(result, Err(QuantityError::Division)));
    }

    #[test]
    fn test_divide_decimal() {
        let defs = defs();
        let d = |s: &str| Decimal::from_str(s).unwrap();
        let ratio = meters(&defs, d("10")).divide(&meters(&defs, d("4"))).unwrap();
        assert_eq!(ratio.magnitude(), d("2.5"));
        assert_eq!(ratio.units().terms()[1].power, -1.0);
    }

    #[test]
    fn test_powf() {
        let defs = defs();
        let root = meters(&defs, 9.0_f64).powf(0.5).unwrap();
        assert_eq!(root.magnitude(), 3.0);
        assert_eq!(root.units().terms()[0].power, 0.5);
    }

    #[test]
    fn test_multiply_across_tables() {
        let a = defs();
        let b = Arc::new(
            DefinitionsBuilder::new()
                .base("meter", "length", &[])
                .build()
                .unwrap(),
        );
        let result = meters(&a, 1.0).multiply(&meters(&b, 1.0));
        assert!(matches!(result, Err(QuantityError::DifferentDefinitions(..))));
    }

    #[test]
    fn test_decimal_overflow_is_an_error() {
        let defs = defs();
        let max = meters(&defs, Decimal::MAX);
        assert!(matches!(
            max.multiply(&max),
            Err(QuantityError::Overflow("multiplication"))
        ));

        let tiny = meters(&defs, Decimal::from_str("0.0000000001").unwrap());
        assert!(matches!(
            max.divide(&tiny),
            Err(QuantityError::Overflow("division"))
        ));
        assert!(matches!(max.powf(2.0), Err(QuantityError::Overflow("exponentiation"))));
    }

    #[test]
    fn test_to_f64() {
        let defs = defs();
        let q = meters(&defs, Decimal::from_str("1.25").unwrap()).to_f64();
        assert_eq!(q.magnitude(), 1.25);
        assert_eq!(q.to_string(), "1.25 meter");
    }

    #[test]
    fn test_dimensionless_display() {
        let q = Quantity::dimensionless(2.5_f64, defs());
        assert_eq!(q.to_string(), "2.5");
    }
}
