//! # calc_core - Concrete Block Material Calculation Engine
//!
//! `calc_core` sizes the raw materials (cement, sand, aggregate, water) and
//! the formwork needed to cast one concrete masonry block, given its
//! dimensions, block-type profile and strength grade. All inputs and outputs
//! are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions over read-only lookup tables
//! - **Default on miss**: Unknown block types and grades fall back to documented defaults
//! - **JSON-First**: All types implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::{calculate_materials, calculate_formwork, get_block_dimensions};
//!
//! let dims = get_block_dimensions("Hollow Concrete Block");
//! let q = calculate_materials("Hollow Concrete Block", dims.length_mm, dims.width_mm, dims.height_mm, 35, 10.0);
//! assert_eq!(q.cement_kg, 1.54);
//!
//! let fw = calculate_formwork(dims.length_mm, dims.width_mm, dims.height_mm, 10.0);
//! assert_eq!(fw.as_tuple(), (410.0, 210.0, 210.0));
//! ```
//!
//! ## Modules
//!
//! - [`materials`] - Block type profiles, volume factors and mix ratios
//! - [`calculations`] - Material quantities and formwork sizing
//! - [`report`] - Human-readable summaries
//! - [`settings`] - Calculator defaults (TOML)
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod materials;
pub mod report;
pub mod settings;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    calculate, calculate_formwork, calculate_materials, BlockCalculation, BlockInput, FormworkDimensions,
    MaterialQuantities,
};
pub use errors::{CalcError, CalcResult};
pub use materials::{get_block_dimensions, BlockDimensions, BlockType, StrengthGrade};
pub use report::BlockReport;
pub use settings::Settings;
