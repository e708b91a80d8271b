//! # Block Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `BlockInput` - Input parameters (JSON-serializable)
//! - `BlockCalculation` - Results (JSON-serializable)
//! - `calculate(input) -> Result<BlockCalculation, CalcError>` - Validated entry point
//!
//! The unchecked building blocks are also exposed for callers that validate
//! their own input:
//!
//! - [`materials::calculate_materials`] - Cement, sand, aggregate and water for one block
//! - [`formwork::calculate_formwork`] - Mold dimensions
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::{calculate, BlockInput};
//! use calc_core::materials::BlockType;
//!
//! let input = BlockInput::for_block(BlockType::SolidConcrete, 20, 10.0);
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.materials.cement_kg, 0.93);
//! assert_eq!(result.formwork.as_tuple(), (410.0, 210.0, 210.0));
//! ```

pub mod formwork;
pub mod materials;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::materials::{get_block_dimensions, BlockDimensions, BlockType};

pub use formwork::{calculate_formwork, FormworkDimensions};
pub use materials::{calculate_materials, MaterialQuantities};

/// Input parameters for one block calculation.
///
/// `block_type` is kept as the raw identifier so unknown names flow through
/// the default-on-miss lookups instead of failing.
///
/// ## JSON Example
///
/// ```json
/// {
///   "block_type": "Hollow Concrete Block",
///   "length_mm": 400.0,
///   "width_mm": 200.0,
///   "height_mm": 200.0,
///   "strength_mpa": 35,
///   "formwork_thickness_mm": 10.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockInput {
    /// Block type identifier, e.g. "Splitface Block"
    pub block_type: String,

    /// Block length in millimeters
    pub length_mm: f64,

    /// Block width in millimeters
    pub width_mm: f64,

    /// Block height in millimeters
    pub height_mm: f64,

    /// Concrete strength grade in MPa
    pub strength_mpa: u32,

    /// Formwork buffer added to each dimension (mm)
    pub formwork_thickness_mm: f64,
}

impl BlockInput {
    /// Input for a known block type at its default dimensions
    pub fn for_block(block: BlockType, strength_mpa: u32, formwork_thickness_mm: f64) -> Self {
        Self::with_dimensions(block.name(), block.default_dimensions(), strength_mpa, formwork_thickness_mm)
    }

    /// Input for any identifier, dimensions resolved through the profile lookup
    pub fn from_name(block_type: impl Into<String>, strength_mpa: u32, formwork_thickness_mm: f64) -> Self {
        let block_type = block_type.into();
        let dims = get_block_dimensions(&block_type);
        Self::with_dimensions(block_type, dims, strength_mpa, formwork_thickness_mm)
    }

    /// Input with explicit dimensions
    pub fn with_dimensions(
        block_type: impl Into<String>,
        dims: BlockDimensions,
        strength_mpa: u32,
        formwork_thickness_mm: f64,
    ) -> Self {
        BlockInput {
            block_type: block_type.into(),
            length_mm: dims.length_mm,
            width_mm: dims.width_mm,
            height_mm: dims.height_mm,
            strength_mpa,
            formwork_thickness_mm,
        }
    }

    pub fn dimensions(&self) -> BlockDimensions {
        BlockDimensions::new(self.length_mm, self.width_mm, self.height_mm)
    }

    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        for (field, value) in [
            ("length_mm", self.length_mm),
            ("width_mm", self.width_mm),
            ("height_mm", self.height_mm),
        ] {
            if !value.is_finite() {
                return Err(CalcError::invalid_input(field, value.to_string(), "Dimension must be a finite number"));
            }
            if value <= 0.0 {
                return Err(CalcError::invalid_input(field, value.to_string(), "Dimension must be positive"));
            }
        }
        if !self.formwork_thickness_mm.is_finite() || self.formwork_thickness_mm < 0.0 {
            return Err(CalcError::invalid_input(
                "formwork_thickness_mm",
                self.formwork_thickness_mm.to_string(),
                "Formwork thickness must be zero or positive",
            ));
        }
        Ok(())
    }
}

/// Combined results of one block calculation.
///
/// Materials and formwork are derived independently from the same input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockCalculation {
    pub materials: MaterialQuantities,
    pub formwork: FormworkDimensions,
}

/// Validate the input, then compute materials and formwork once.
///
/// # Returns
///
/// * `Ok(BlockCalculation)` - Calculation results
/// * `Err(CalcError)` - If dimensions or thickness are invalid
pub fn calculate(input: &BlockInput) -> CalcResult<BlockCalculation> {
    input.validate()?;

    tracing::debug!(
        block_type = %input.block_type,
        strength_mpa = input.strength_mpa,
        "calculating block"
    );

    let materials = calculate_materials(
        &input.block_type,
        input.length_mm,
        input.width_mm,
        input.height_mm,
        input.strength_mpa,
        input.formwork_thickness_mm,
    );
    let formwork = calculate_formwork(
        input.length_mm,
        input.width_mm,
        input.height_mm,
        input.formwork_thickness_mm,
    );

    Ok(BlockCalculation { materials, formwork })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_input() -> BlockInput {
        BlockInput::for_block(BlockType::HollowConcrete, 35, 10.0)
    }

    #[test]
    fn test_for_block_uses_defaults() {
        let input = BlockInput::for_block(BlockType::AeratedAutoclaved, 20, 10.0);
        assert_eq!(input.block_type, "Aerated Autoclaved Block");
        assert_eq!(input.dimensions().as_tuple(), (600.0, 200.0, 250.0));
    }

    #[test]
    fn test_from_name_unknown_falls_back() {
        let input = BlockInput::from_name("Glass Block", 20, 10.0);
        assert_eq!(input.dimensions().as_tuple(), (400.0, 200.0, 200.0));
        assert!(calculate(&input).is_ok());
    }

    #[test]
    fn test_calculation_matches_unchecked_functions() {
        let input = test_input();
        let result = calculate(&input).unwrap();
        assert_eq!(
            result.materials,
            calculate_materials("Hollow Concrete Block", 400.0, 200.0, 200.0, 35, 10.0)
        );
        assert_eq!(result.formwork.as_tuple(), (410.0, 210.0, 210.0));
    }

    #[test]
    fn test_invalid_dimensions() {
        let mut input = test_input();
        input.width_mm = 0.0;
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let mut input = test_input();
        input.height_mm = -200.0;
        assert!(calculate(&input).is_err());

        let mut input = test_input();
        input.length_mm = f64::NAN;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_invalid_thickness() {
        let mut input = test_input();
        input.formwork_thickness_mm = -1.0;
        assert!(matches!(
            calculate(&input),
            Err(CalcError::InvalidInput { ref field, .. }) if field == "formwork_thickness_mm"
        ));

        input.formwork_thickness_mm = 0.0;
        assert!(calculate(&input).is_ok());
    }

    #[test]
    fn test_serialization() {
        let input = test_input();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: BlockInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input, roundtrip);

        let result = calculate(&input).unwrap();
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["materials"]["cement_kg"], 1.54);
        assert_eq!(json["formwork"]["length_mm"], 410.0);
    }
}
