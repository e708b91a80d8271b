//! # Materials Database
//!
//! Static lookup tables for concrete block production:
//!
//! - **Block types**: default nominal dimensions and volume factors
//! - **Mix design**: cement:sand:aggregate proportions per strength grade
//!
//! Tables are read-only. Every lookup by raw identifier has a default-on-miss
//! policy instead of an error path.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::materials::{BlockType, StrengthGrade};
//!
//! let block = BlockType::HollowConcrete;
//! assert_eq!(block.volume_factor(), 0.6);
//!
//! let mix = StrengthGrade::M20.mix_ratio();
//! println!("{} @ {} kg/m³", mix.proportion_label(), mix.cement_dosage_kg_per_m3);
//! ```

pub mod block_types;
pub mod mix_design;

pub use block_types::{
    get_block_dimensions, volume_factor_for, BlockDimensions, BlockType, FALLBACK_DIMENSIONS,
    FALLBACK_VOLUME_FACTOR,
};
pub use mix_design::{
    mix_ratio_for, MixRatio, StrengthGrade, DEFAULT_STRENGTH_MPA, MAX_STRENGTH_MPA,
    MIN_STRENGTH_MPA,
};
