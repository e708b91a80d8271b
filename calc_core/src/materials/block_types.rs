//! Concrete Block Types
//!
//! The 16 block profiles offered for production planning, with their default
//! nominal dimensions and net-to-gross volume factors.
//!
//! ## Volume Factor
//!
//! Hollow and cored blocks contain voids, so only a fraction of the gross
//! L×W×H volume is concrete. A solid block has factor 1.0.
//!
//! ## Lookup Policy
//!
//! String lookups never fail. An unknown name resolves to the 400×200×200 mm
//! default profile and a volume factor of 1.0.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Fallback dimensions for unknown block type names (mm)
pub const FALLBACK_DIMENSIONS: BlockDimensions = BlockDimensions {
    length_mm: 400.0,
    width_mm: 200.0,
    height_mm: 200.0,
};

/// Fallback volume factor for unknown block type names (fully solid)
pub const FALLBACK_VOLUME_FACTOR: f64 = 1.0;

/// Concrete masonry block profiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockType {
    #[serde(rename = "Splitface Block")]
    Splitface,
    #[serde(rename = "Bullnose Block")]
    Bullnose,
    #[serde(rename = "Partition Block")]
    Partition,
    #[serde(rename = "Fly Ash Block")]
    FlyAsh,
    #[serde(rename = "Aerated Autoclaved Block")]
    AeratedAutoclaved,
    #[serde(rename = "Paving Block")]
    Paving,
    #[serde(rename = "Cellular Lightweight Block")]
    CellularLightweight,
    #[serde(rename = "Expanded Block")]
    Expanded,
    #[serde(rename = "Solid Concrete Block")]
    SolidConcrete,
    #[serde(rename = "Hollow Concrete Block")]
    HollowConcrete,
    #[serde(rename = "Stretcher Block")]
    Stretcher,
    #[serde(rename = "Pillar Block")]
    Pillar,
    #[serde(rename = "Lintel Block")]
    Lintel,
    #[serde(rename = "Jamb Block")]
    Jamb,
    #[serde(rename = "Column Block")]
    Column,
    #[serde(rename = "Corner Block")]
    Corner,
}

/// Canonical name -> variant
static BY_NAME: Lazy<HashMap<&'static str, BlockType>> =
    Lazy::new(|| BlockType::ALL.iter().map(|b| (b.name(), *b)).collect());

/// Normalized short name ("fly ash") -> variant
static BY_SHORT_NAME: Lazy<HashMap<String, BlockType>> = Lazy::new(|| {
    BlockType::ALL
        .iter()
        .map(|b| (normalize(b.name()), *b))
        .collect()
});

/// Lowercase, treat `_`/`-` as spaces, collapse whitespace, drop a trailing "block".
fn normalize(s: &str) -> String {
    let lowered = s.to_lowercase().replace(['_', '-'], " ");
    let mut words: Vec<&str> = lowered.split_whitespace().collect();
    if words.len() > 1 && words.last() == Some(&"block") {
        words.pop();
    }
    words.join(" ")
}

impl BlockType {
    /// All block types in presentation order
    pub const ALL: [BlockType; 16] = [
        BlockType::Splitface,
        BlockType::Bullnose,
        BlockType::Partition,
        BlockType::FlyAsh,
        BlockType::AeratedAutoclaved,
        BlockType::Paving,
        BlockType::CellularLightweight,
        BlockType::Expanded,
        BlockType::SolidConcrete,
        BlockType::HollowConcrete,
        BlockType::Stretcher,
        BlockType::Pillar,
        BlockType::Lintel,
        BlockType::Jamb,
        BlockType::Column,
        BlockType::Corner,
    ];

    /// Canonical identifier, e.g. "Hollow Concrete Block"
    pub fn name(&self) -> &'static str {
        match self {
            BlockType::Splitface => "Splitface Block",
            BlockType::Bullnose => "Bullnose Block",
            BlockType::Partition => "Partition Block",
            BlockType::FlyAsh => "Fly Ash Block",
            BlockType::AeratedAutoclaved => "Aerated Autoclaved Block",
            BlockType::Paving => "Paving Block",
            BlockType::CellularLightweight => "Cellular Lightweight Block",
            BlockType::Expanded => "Expanded Block",
            BlockType::SolidConcrete => "Solid Concrete Block",
            BlockType::HollowConcrete => "Hollow Concrete Block",
            BlockType::Stretcher => "Stretcher Block",
            BlockType::Pillar => "Pillar Block",
            BlockType::Lintel => "Lintel Block",
            BlockType::Jamb => "Jamb Block",
            BlockType::Column => "Column Block",
            BlockType::Corner => "Corner Block",
        }
    }

    /// Exact lookup by canonical identifier
    pub fn from_name(name: &str) -> Option<Self> {
        BY_NAME.get(name).copied()
    }

    /// Parse from common string representations
    ///
    /// Accepts the canonical name plus case, underscore and hyphen variants,
    /// with or without the trailing "Block".
    ///
    /// ```rust
    /// use calc_core::materials::BlockType;
    ///
    /// assert_eq!(BlockType::from_str_flexible("fly-ash").unwrap(), BlockType::FlyAsh);
    /// assert_eq!(BlockType::from_str_flexible("HOLLOW_CONCRETE_BLOCK").unwrap(), BlockType::HollowConcrete);
    /// ```
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        if let Some(block) = Self::from_name(s) {
            return Ok(block);
        }
        BY_SHORT_NAME
            .get(&normalize(s))
            .copied()
            .ok_or_else(|| CalcError::block_type_not_found(s))
    }

    /// Default nominal dimensions
    pub fn default_dimensions(&self) -> BlockDimensions {
        let (length_mm, width_mm, height_mm) = match self {
            BlockType::Splitface => (400.0, 200.0, 200.0),
            BlockType::Bullnose => (390.0, 190.0, 190.0),
            BlockType::Partition => (400.0, 150.0, 200.0),
            BlockType::FlyAsh => (400.0, 200.0, 200.0),
            BlockType::AeratedAutoclaved => (600.0, 200.0, 250.0),
            BlockType::Paving => (200.0, 100.0, 80.0),
            BlockType::CellularLightweight => (600.0, 200.0, 200.0),
            BlockType::Expanded => (400.0, 200.0, 200.0),
            BlockType::SolidConcrete => (400.0, 200.0, 200.0),
            BlockType::HollowConcrete => (400.0, 200.0, 200.0),
            BlockType::Stretcher => (390.0, 190.0, 190.0),
            BlockType::Pillar => (390.0, 190.0, 190.0),
            BlockType::Lintel => (400.0, 200.0, 150.0),
            BlockType::Jamb => (400.0, 200.0, 200.0),
            BlockType::Column => (400.0, 200.0, 200.0),
            BlockType::Corner => (400.0, 200.0, 200.0),
        };
        BlockDimensions::new(length_mm, width_mm, height_mm)
    }

    /// Solid fraction of the gross block volume, in (0, 1]
    pub fn volume_factor(&self) -> f64 {
        match self {
            BlockType::Splitface => 0.85,
            BlockType::Bullnose => 0.85,
            BlockType::Partition => 0.75,
            BlockType::FlyAsh => 0.95,
            BlockType::AeratedAutoclaved => 0.7,
            BlockType::Paving => 0.9,
            BlockType::CellularLightweight => 0.65,
            BlockType::Expanded => 0.7,
            BlockType::SolidConcrete => 1.0,
            BlockType::HollowConcrete => 0.6,
            BlockType::Stretcher => 0.65,
            BlockType::Pillar => 0.9,
            BlockType::Lintel => 0.8,
            BlockType::Jamb => 0.75,
            BlockType::Column => 0.6,
            BlockType::Corner => 0.8,
        }
    }

    /// Illustration path shown next to the block selector,
    /// e.g. "assets/fly_ash_block.png"
    pub fn image_asset(&self) -> String {
        format!("assets/{}.png", self.name().replace(' ', "_").to_lowercase())
    }
}

impl std::fmt::Display for BlockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Nominal block dimensions in millimeters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockDimensions {
    pub length_mm: f64,
    pub width_mm: f64,
    pub height_mm: f64,
}

impl BlockDimensions {
    pub const fn new(length_mm: f64, width_mm: f64, height_mm: f64) -> Self {
        Self {
            length_mm,
            width_mm,
            height_mm,
        }
    }

    /// As an (L, W, H) tuple
    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.length_mm, self.width_mm, self.height_mm)
    }
}

impl std::fmt::Display for BlockDimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} × {} × {} mm", self.length_mm, self.width_mm, self.height_mm)
    }
}

/// Default dimensions for a block type identifier.
///
/// Unknown identifiers get [`FALLBACK_DIMENSIONS`] (400×200×200 mm).
///
/// ```rust
/// use calc_core::materials::get_block_dimensions;
///
/// assert_eq!(get_block_dimensions("Aerated Autoclaved Block").as_tuple(), (600.0, 200.0, 250.0));
/// assert_eq!(get_block_dimensions("Glass Block").as_tuple(), (400.0, 200.0, 200.0));
/// ```
pub fn get_block_dimensions(block_type: &str) -> BlockDimensions {
    match BlockType::from_name(block_type) {
        Some(block) => block.default_dimensions(),
        None => {
            tracing::debug!(block_type, "unknown block type, using fallback dimensions");
            FALLBACK_DIMENSIONS
        }
    }
}

/// Volume factor for a block type identifier, 1.0 when unknown.
pub fn volume_factor_for(block_type: &str) -> f64 {
    match BlockType::from_name(block_type) {
        Some(block) => block.volume_factor(),
        None => {
            tracing::debug!(block_type, "unknown block type, treating as fully solid");
            FALLBACK_VOLUME_FACTOR
        }
    }
}
