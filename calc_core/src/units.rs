//! # Unit Types
//!
//! Type-safe wrappers for the units a block calculation touches. These are
//! plain f64 newtypes so JSON stays clean (just numbers).
//!
//! ## SI Units
//!
//! - Length: millimeters (mm), meters (m)
//! - Volume: cubic meters (m³), cubic centimeters (cm³)
//! - Mass: kilograms (kg)
//! - Liquid volume: liters (L), 1 kg of water = 1 L
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units::{Meters, Millimeters};
//!
//! let length = Millimeters(400.0);
//! let meters: Meters = length.into();
//! assert_eq!(meters.0, 0.4);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

// ============================================================================
// Volume Units
// ============================================================================

/// Volume in cubic meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicMeters(pub f64);

/// Volume in cubic centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubicCentimeters(pub f64);

impl From<CubicMeters> for CubicCentimeters {
    fn from(m3: CubicMeters) -> Self {
        CubicCentimeters(m3.0 * 1_000_000.0)
    }
}

impl CubicMeters {
    /// Volume of a box from three edge lengths
    pub fn of_box(length: Meters, width: Meters, height: Meters) -> Self {
        CubicMeters(length.0 * width.0 * height.0)
    }
}

// ============================================================================
// Mass Units
// ============================================================================

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

/// Liquid volume in liters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Liters(pub f64);

impl Liters {
    /// Liters of water for a given mass (density 1 kg/L)
    pub fn of_water(mass: Kilograms) -> Self {
        Liters(mass.0)
    }
}

// ============================================================================
// Rounding
// ============================================================================

/// Round to a fixed number of decimal places, half away from zero.
///
/// ```rust
/// use calc_core::units::round_to;
///
/// assert_eq!(round_to(1.396_36, 2), 1.4);
/// assert_eq!(round_to(2.792_72, 2), 2.79);
/// ```
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Round to the given number of decimal places
            pub fn rounded(self, places: i32) -> Self {
                Self(round_to(self.0, places))
            }
        }
    };
}

impl_arithmetic!(Millimeters);
impl_arithmetic!(Meters);
impl_arithmetic!(CubicMeters);
impl_arithmetic!(CubicCentimeters);
impl_arithmetic!(Kilograms);
impl_arithmetic!(Liters);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mm_to_meters() {
        let mm = Millimeters(250.0);
        let m: Meters = mm.into();
        assert_eq!(m.0, 0.25);
    }

    #[test]
    fn test_cubic_meters_to_cm3() {
        let cm3: CubicCentimeters = CubicMeters(0.0096).into();
        assert!((cm3.0 - 9600.0).abs() < 1e-6);
    }

    #[test]
    fn test_box_volume() {
        let v = CubicMeters::of_box(Meters(0.4), Meters(0.2), Meters(0.2));
        assert!((v.0 - 0.016).abs() < 1e-12);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.930_909, 2), 0.93);
        assert_eq!(round_to(-1.236, 2), -1.24);
        assert_eq!(round_to(16_000.000_000_000_004, 2), 16_000.0);
    }

    #[test]
    fn test_arithmetic() {
        let a = Millimeters(400.0);
        let b = Millimeters(10.0);
        assert_eq!((a + b).0, 410.0);
        assert_eq!((a * 2.0).0, 800.0);
    }

    #[test]
    fn test_serialization() {
        let kg = Kilograms(0.93);
        let json = serde_json::to_string(&kg).unwrap();
        assert_eq!(json, "0.93");

        let roundtrip: Kilograms = serde_json::from_str(&json).unwrap();
        assert_eq!(kg, roundtrip);
    }
}
