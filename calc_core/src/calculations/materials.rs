//! # Block Material Quantities
//!
//! Converts block geometry and a strength grade into cement, sand, aggregate
//! and water masses for a single block.
//!
//! ## Method
//!
//! 1. Gross volume V = L × W × H (dimensions converted mm → m)
//! 2. Net volume Vn = V × volume factor of the block type
//! 3. Each dry material = (parts / total parts) × cement dosage × Vn,
//!    rounded to 0.01 kg
//! 4. Water = 0.5 × rounded cement mass, rounded to 0.01 kg
//!
//! The dosage multiplies every fraction, so sand and aggregate masses are
//! proportional to the cement dosage, not to material densities.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::materials::calculate_materials;
//!
//! let q = calculate_materials("Solid Concrete Block", 400.0, 200.0, 200.0, 20, 10.0);
//! assert_eq!(q.cement_kg, 0.93);
//! assert_eq!(q.water_kg, 0.47);
//! ```

use serde::{Deserialize, Serialize};

use crate::materials::{mix_ratio_for, volume_factor_for};
use crate::units::{round_to, CubicCentimeters, CubicMeters, Kilograms, Liters, Meters, Millimeters};

/// Water mass as a fraction of the (rounded) cement mass
pub const WATER_CEMENT_RATIO: f64 = 0.5;

/// Decimal places kept on every reported mass
const MASS_DECIMALS: i32 = 2;

/// Material quantities for one block.
///
/// ## JSON Example
///
/// ```json
/// {
///   "net_volume_m3": 0.016,
///   "cement_kg": 0.93,
///   "sand_kg": 1.4,
///   "aggregate_kg": 2.79,
///   "water_kg": 0.47
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialQuantities {
    /// Concrete volume after the void deduction (m³), unrounded
    pub net_volume_m3: f64,
    pub cement_kg: f64,
    pub sand_kg: f64,
    pub aggregate_kg: f64,
    /// Water mass (kg); numerically equal to liters
    pub water_kg: f64,
}

impl MaterialQuantities {
    /// Net volume in cm³, rounded to 2 decimals
    pub fn net_volume_cm3(&self) -> f64 {
        let cm3: CubicCentimeters = CubicMeters(self.net_volume_m3).into();
        cm3.rounded(2).value()
    }

    /// Water volume in liters
    pub fn water_liters(&self) -> f64 {
        Liters::of_water(Kilograms(self.water_kg)).value()
    }

    /// Combined mass of all four materials (kg), rounded to 2 decimals
    pub fn total_mass_kg(&self) -> f64 {
        round_to(
            self.cement_kg + self.sand_kg + self.aggregate_kg + self.water_kg,
            MASS_DECIMALS,
        )
    }
}

/// Calculate material quantities for one block.
///
/// Inputs are not validated: zero or negative dimensions simply yield zero or
/// negative quantities. Use [`super::calculate`] for checked input.
/// `_formwork_thickness_mm` is accepted for call-site parity with
/// [`super::formwork::calculate_formwork`] and does not affect the result.
///
/// # Arguments
///
/// * `block_type` - Block identifier, e.g. "Hollow Concrete Block" (unknown → factor 1.0)
/// * `length_mm`, `width_mm`, `height_mm` - Block dimensions
/// * `strength_mpa` - Strength grade (unsupported → M25 mix)
pub fn calculate_materials(
    block_type: &str,
    length_mm: f64,
    width_mm: f64,
    height_mm: f64,
    strength_mpa: u32,
    _formwork_thickness_mm: f64,
) -> MaterialQuantities {
    let length: Meters = Millimeters(length_mm).into();
    let width: Meters = Millimeters(width_mm).into();
    let height: Meters = Millimeters(height_mm).into();
    let gross_volume = CubicMeters::of_box(length, width, height);

    let volume_factor = volume_factor_for(block_type);
    let net_volume = gross_volume * volume_factor;

    let mix = mix_ratio_for(strength_mpa);
    let mass_of = |parts: f64| {
        round_to(
            mix.fraction_of(parts) * mix.cement_dosage_kg_per_m3 * net_volume.value(),
            MASS_DECIMALS,
        )
    };

    let cement_kg = mass_of(mix.cement_parts);
    let sand_kg = mass_of(mix.sand_parts);
    let aggregate_kg = mass_of(mix.aggregate_parts);
    let water_kg = round_to(WATER_CEMENT_RATIO * cement_kg, MASS_DECIMALS);

    tracing::trace!(
        block_type,
        strength_mpa,
        volume_factor,
        net_volume_m3 = net_volume.value(),
        cement_kg,
        sand_kg,
        aggregate_kg,
        water_kg,
        "block materials calculated"
    );

    MaterialQuantities {
        net_volume_m3: net_volume.value(),
        cement_kg,
        sand_kg,
        aggregate_kg,
        water_kg,
    }
}
