//! Numeric types usable as a quantity's magnitude

use std::fmt;

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;

/// A field-like number that can round-trip through `f64`.
///
/// Conversion factors and fractional powers are always computed in `f64`;
/// results are cast back with [`from_real`](Magnitude::from_real). All
/// arithmetic goes through the `checked_*` methods so that bounded types
/// report overflow instead of panicking.
pub trait Magnitude: Copy + fmt::Debug + fmt::Display + PartialEq {
    fn to_real(self) -> f64;

    /// `None` when `value` is not representable
    fn from_real(value: f64) -> Option<Self>;

    /// Like [`from_real`](Magnitude::from_real), clamping to the nearest
    /// representable value. NaN maps to zero.
    fn saturating_from_real(value: f64) -> Self;

    fn checked_add(self, other: Self) -> Option<Self>;

    fn checked_sub(self, other: Self) -> Option<Self>;

    fn checked_mul(self, other: Self) -> Option<Self>;

    fn checked_div(self, other: Self) -> Option<Self>;

    fn is_zero(self) -> bool {
        self.to_real() == 0.0
    }
}

impl Magnitude for f64 {
    fn to_real(self) -> f64 {
        self
    }

    fn from_real(value: f64) -> Option<Self> {
        Some(value)
    }

    fn saturating_from_real(value: f64) -> Self {
        value
    }

    fn checked_add(self, other: Self) -> Option<Self> {
        Some(self + other)
    }

    fn checked_sub(self, other: Self) -> Option<Self> {
        Some(self - other)
    }

    fn checked_mul(self, other: Self) -> Option<Self> {
        Some(self * other)
    }

    fn checked_div(self, other: Self) -> Option<Self> {
        Some(self / other)
    }
}

impl Magnitude for f32 {
    fn to_real(self) -> f64 {
        f64::from(self)
    }

    fn from_real(value: f64) -> Option<Self> {
        Some(value as f32)
    }

    fn saturating_from_real(value: f64) -> Self {
        value as f32
    }

    fn checked_add(self, other: Self) -> Option<Self> {
        Some(self + other)
    }

    fn checked_sub(self, other: Self) -> Option<Self> {
        Some(self - other)
    }

    fn checked_mul(self, other: Self) -> Option<Self> {
        Some(self * other)
    }

    fn checked_div(self, other: Self) -> Option<Self> {
        Some(self / other)
    }
}

impl Magnitude for Decimal {
    fn to_real(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }

    fn from_real(value: f64) -> Option<Self> {
        Decimal::from_f64(value)
    }

    fn saturating_from_real(value: f64) -> Self {
        Decimal::from_f64(value).unwrap_or(if value.is_nan() {
            Decimal::ZERO
        } else if value.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        })
    }

    fn checked_add(self, other: Self) -> Option<Self> {
        Decimal::checked_add(self, other)
    }

    fn checked_sub(self, other: Self) -> Option<Self> {
        Decimal::checked_sub(self, other)
    }

    fn checked_mul(self, other: Self) -> Option<Self> {
        Decimal::checked_mul(self, other)
    }

    fn checked_div(self, other: Self) -> Option<Self> {
        Decimal::checked_div(self, other)
    }

    fn is_zero(self) -> bool {
        Decimal::is_zero(&self)
    }
}
