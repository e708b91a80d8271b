//! Concrete Mix Design
//!
//! Nominal cement:sand:aggregate proportions and cement dosage per cubic
//! meter for each supported strength grade. Unsupported grades use the M25
//! mix.

use serde::{Deserialize, Serialize};

/// Lowest strength offered to users (MPa)
pub const MIN_STRENGTH_MPA: u32 = 10;

/// Highest strength offered to users (MPa)
pub const MAX_STRENGTH_MPA: u32 = 35;

/// Strength preselected in the input form (MPa)
pub const DEFAULT_STRENGTH_MPA: u32 = 20;

/// Concrete strength grades (characteristic compressive strength, MPa)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StrengthGrade {
    M10,
    M15,
    M20,
    M25,
    M30,
    M35,
}

impl StrengthGrade {
    /// All grades, weakest first
    pub const ALL: [StrengthGrade; 6] = [
        StrengthGrade::M10,
        StrengthGrade::M15,
        StrengthGrade::M20,
        StrengthGrade::M25,
        StrengthGrade::M30,
        StrengthGrade::M35,
    ];

    /// Grade used for any unsupported strength value
    pub const FALLBACK: StrengthGrade = StrengthGrade::M25;

    pub fn mpa(&self) -> u32 {
        match self {
            StrengthGrade::M10 => 10,
            StrengthGrade::M15 => 15,
            StrengthGrade::M20 => 20,
            StrengthGrade::M25 => 25,
            StrengthGrade::M30 => 30,
            StrengthGrade::M35 => 35,
        }
    }

    pub fn from_mpa(mpa: u32) -> Option<Self> {
        Self::ALL.iter().copied().find(|g| g.mpa() == mpa)
    }

    /// Grade whose mix is used for a strength in MPa (M25 when unsupported)
    ///
    /// ```rust
    /// use calc_core::materials::StrengthGrade;
    ///
    /// assert_eq!(StrengthGrade::applied_for(30), StrengthGrade::M30);
    /// assert_eq!(StrengthGrade::applied_for(22), StrengthGrade::M25);
    /// ```
    pub fn applied_for(strength_mpa: u32) -> Self {
        Self::from_mpa(strength_mpa).unwrap_or_else(|| {
            tracing::debug!(strength_mpa, "unsupported strength grade, using M25 mix");
            Self::FALLBACK
        })
    }

    /// Mix proportions for this grade
    pub fn mix_ratio(&self) -> MixRatio {
        match self {
            StrengthGrade::M10 => MixRatio::new(1.0, 3.0, 6.0, 250.0),
            StrengthGrade::M15 => MixRatio::new(1.0, 2.0, 4.0, 280.0),
            StrengthGrade::M20 => MixRatio::new(1.0, 1.5, 3.0, 320.0),
            StrengthGrade::M25 => MixRatio::new(1.0, 1.0, 2.0, 360.0),
            StrengthGrade::M30 => MixRatio::new(1.0, 0.75, 1.5, 380.0),
            StrengthGrade::M35 => MixRatio::new(1.0, 0.5, 1.0, 400.0),
        }
    }
}

impl std::fmt::Display for StrengthGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "M{}", self.mpa())
    }
}

/// Mix proportion by parts plus cement dosage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MixRatio {
    pub cement_parts: f64,
    pub sand_parts: f64,
    pub aggregate_parts: f64,
    /// Cement dosage (kg per m³ of concrete)
    pub cement_dosage_kg_per_m3: f64,
}

impl MixRatio {
    pub const fn new(cement_parts: f64, sand_parts: f64, aggregate_parts: f64, cement_dosage_kg_per_m3: f64) -> Self {
        Self {
            cement_parts,
            sand_parts,
            aggregate_parts,
            cement_dosage_kg_per_m3,
        }
    }

    pub fn total_parts(&self) -> f64 {
        self.cement_parts + self.sand_parts + self.aggregate_parts
    }

    /// Share of the total parts taken by `parts`
    pub fn fraction_of(&self, parts: f64) -> f64 {
        parts / self.total_parts()
    }

    /// Proportion in the usual "1 : 1.5 : 3" notation
    pub fn proportion_label(&self) -> String {
        format!("{} : {} : {}", self.cement_parts, self.sand_parts, self.aggregate_parts)
    }
}

/// Mix ratio for a strength in MPa; unsupported grades get the M25 mix.
///
/// ```rust
/// use calc_core::materials::{mix_ratio_for, StrengthGrade};
///
/// assert_eq!(mix_ratio_for(20).cement_dosage_kg_per_m3, 320.0);
/// assert_eq!(mix_ratio_for(22), StrengthGrade::M25.mix_ratio());
/// ```
pub fn mix_ratio_for(strength_mpa: u32) -> MixRatio {
    StrengthGrade::applied_for(strength_mpa).mix_ratio()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mix_table() {
        assert_eq!(mix_ratio_for(10), MixRatio::new(1.0, 3.0, 6.0, 250.0));
        assert_eq!(mix_ratio_for(15), MixRatio::new(1.0, 2.0, 4.0, 280.0));
        assert_eq!(mix_ratio_for(20), MixRatio::new(1.0, 1.5, 3.0, 320.0));
        assert_eq!(mix_ratio_for(25), MixRatio::new(1.0, 1.0, 2.0, 360.0));
        assert_eq!(mix_ratio_for(30), MixRatio::new(1.0, 0.75, 1.5, 380.0));
        assert_eq!(mix_ratio_for(35), MixRatio::new(1.0, 0.5, 1.0, 400.0));
    }

    #[test]
    fn test_unknown_grade_uses_m25() {
        let m25 = StrengthGrade::M25.mix_ratio();
        for mpa in [0, 5, 22, 40, 100] {
            assert_eq!(mix_ratio_for(mpa), m25);
        }
    }

    #[test]
    fn test_applied_grade() {
        assert_eq!(StrengthGrade::applied_for(10), StrengthGrade::M10);
        assert_eq!(StrengthGrade::applied_for(35), StrengthGrade::M35);
        assert_eq!(StrengthGrade::applied_for(22), StrengthGrade::M25);
        assert_eq!(StrengthGrade::applied_for(0), StrengthGrade::M25);
    }

    #[test]
    fn test_total_parts() {
        assert_eq!(StrengthGrade::M20.mix_ratio().total_parts(), 5.5);
        assert_eq!(StrengthGrade::M35.mix_ratio().total_parts(), 2.5);
    }

    #[test]
    fn test_fractions_sum_to_one() {
        for grade in StrengthGrade::ALL {
            let mix = grade.mix_ratio();
            let sum = mix.fraction_of(mix.cement_parts)
                + mix.fraction_of(mix.sand_parts)
                + mix.fraction_of(mix.aggregate_parts);
            assert!((sum - 1.0).abs() < 1e-12, "{}", grade);
        }
    }

    #[test]
    fn test_grade_parsing_and_display() {
        assert_eq!(StrengthGrade::from_mpa(30), Some(StrengthGrade::M30));
        assert_eq!(StrengthGrade::from_mpa(31), None);
        assert_eq!(StrengthGrade::M15.to_string(), "M15");
        assert_eq!(StrengthGrade::M20.mix_ratio().proportion_label(), "1 : 1.5 : 3");
    }

    #[test]
    fn test_offered_range_covers_table() {
        assert_eq!(StrengthGrade::ALL[0].mpa(), MIN_STRENGTH_MPA);
        assert_eq!(StrengthGrade::ALL[5].mpa(), MAX_STRENGTH_MPA);
        assert!(StrengthGrade::from_mpa(DEFAULT_STRENGTH_MPA).is_some());
    }
}
