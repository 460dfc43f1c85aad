//! NP3 Basic Value Types

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fraction with quarter-unit resolution.
///
/// Stored as a whole number of quarters so that encoding is exact integer
/// arithmetic. `QuarterStep::from_f64(0.5)` is two quarters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "f64", into = "f64")
)]
pub struct QuarterStep(i32);

impl QuarterStep {
    pub const ZERO: Self = Self(0);

    /// Create from a raw count of quarters
    pub const fn from_quarters(quarters: i32) -> Self {
        Self(quarters)
    }

    /// Create from whole logical units
    pub const fn from_units(units: i32) -> Self {
        Self(units.saturating_mul(4))
    }

    /// Create from f64, flooring to the quarter at or below `val`.
    ///
    /// Infinities saturate; NaN becomes zero.
    pub fn from_f64(val: f64) -> Self {
        Self((val * 4.0).floor() as i32)
    }

    /// Number of quarters
    pub const fn quarters(self) -> i32 {
        self.0
    }

    /// Convert to f64
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / 4.0
    }
}

impl From<f64> for QuarterStep {
    fn from(val: f64) -> Self {
        Self::from_f64(val)
    }
}

impl From<QuarterStep> for f64 {
    fn from(val: QuarterStep) -> Self {
        val.to_f64()
    }
}

/// Deserialize any JSON number into an integer field, flooring fractions.
///
/// Matches how the stored byte truncates a fractional biased value.
#[cfg(feature = "serde")]
pub(crate) fn floor_to_i32<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let val = f64::deserialize(deserializer)?;
    Ok(val.floor() as i32)
}

/// Tone curve anchor point, one byte per coordinate.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ToneCurvePoint {
    pub x: u8,
    pub y: u8,
}

impl ToneCurvePoint {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}
