//! Conversion and dimensional-analysis engine
//!
//! Every operation here is a pure function of its arguments and the shared,
//! read-only [`Definitions`](crate::Definitions) they reference.

mod dimension;
mod normalize;

pub use dimension::{dimensionality_of, same_dimensions};
pub use normalize::{simple_to_base, to_base, BaseQuantity};

use std::sync::Arc;

use log::{debug, warn};

use crate::error::{QuantityError, QuantityResult};
use crate::types::{CompoundUnit, Magnitude, Quantity};

/// Re-express `quantity` in base units. Never fails.
///
/// A magnitude that leaves the range of a bounded type such as `Decimal`
/// saturates; use [`convert`] to get an error instead.
pub fn convert_base<N: Magnitude>(quantity: &Quantity<N>) -> Quantity<N> {
    let defs = quantity.definitions();
    let base = to_base(defs, quantity.units().terms());
    let real = quantity.magnitude().to_real() * base.magnitude;
    let magnitude = N::from_real(real).unwrap_or_else(|| {
        warn!("base magnitude {real} out of range, saturating");
        N::saturating_from_real(real)
    });
    Quantity::new(
        magnitude,
        CompoundUnit::from_terms(Arc::clone(defs), base.units),
    )
}

/// Canonical dimension signature of `quantity`'s units
pub fn dimensionality<N: Magnitude>(quantity: &Quantity<N>) -> CompoundUnit {
    quantity.units().dimensionality()
}

/// Re-express `quantity` in `target` units.
///
/// Fails with [`QuantityError::DifferentDefinitions`] when the two sides come
/// from different tables and with [`QuantityError::Dimensionality`] when
/// their dimension signatures differ. A result outside the range of the
/// magnitude type is a [`QuantityError::Overflow`].
pub fn convert<N: Magnitude>(
    quantity: &Quantity<N>,
    target: &CompoundUnit,
) -> QuantityResult<Quantity<N>> {
    let from = quantity.units();
    if !from.same_definitions(target) {
        debug!("refusing to convert `{from}` to `{target}`: definitions differ");
        return Err(QuantityError::DifferentDefinitions(
            from.clone(),
            target.clone(),
        ));
    }

    if from.terms() == target.terms() {
        return Ok(Quantity::new(quantity.magnitude(), target.clone()));
    }

    let from_dims = from.dimensionality();
    let to_dims = target.dimensionality();
    if !same_dimensions(from_dims.terms(), to_dims.terms()) {
        debug!("refusing to convert `{from}` to `{target}`: `{from_dims}` vs `{to_dims}`");
        return Err(QuantityError::Dimensionality(from_dims, to_dims));
    }

    let defs = quantity.definitions();
    let source_base = to_base(defs, from.terms());
    let target_base = to_base(defs, target.terms());
    let factor = source_base.magnitude / target_base.magnitude;
    debug!("converting `{from}` to `{target}` with factor {factor}");

    let magnitude = N::from_real(quantity.magnitude().to_real() * factor)
        .ok_or(QuantityError::Overflow("conversion"))?;
    Ok(Quantity::new(magnitude, target.clone()))
}

/// `left + right`, expressed in `left`'s units
pub fn add<N: Magnitude>(left: &Quantity<N>, right: &Quantity<N>) -> QuantityResult<Quantity<N>> {
    combine(left, right, "addition", N::checked_add)
}

/// `left - right`, expressed in `left`'s units
pub fn subtract<N: Magnitude>(
    left: &Quantity<N>,
    right: &Quantity<N>,
) -> QuantityResult<Quantity<N>> {
    combine(left, right, "subtraction", N::checked_sub)
}

fn combine<N: Magnitude>(
    left: &Quantity<N>,
    right: &Quantity<N>,
    name: &'static str,
    op: fn(N, N) -> Option<N>,
) -> QuantityResult<Quantity<N>> {
    let right = convert(right, left.units())?;
    let magnitude = op(left.magnitude(), right.magnitude()).ok_or(QuantityError::Overflow(name))?;
    Ok(left.with_magnitude(magnitude))
}
