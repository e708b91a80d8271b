//! # Formwork Sizing
//!
//! Mold dimensions for casting a block. The formwork thickness is added once
//! to each axis as a uniform buffer (not doubled, not applied per side).

use serde::{Deserialize, Serialize};

use crate::units::Millimeters;

/// Recommended formwork (mold) dimensions in millimeters.
///
/// ## JSON Example
///
/// ```json
/// { "length_mm": 410.0, "width_mm": 210.0, "height_mm": 210.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FormworkDimensions {
    pub length_mm: f64,
    pub width_mm: f64,
    pub height_mm: f64,
}

impl FormworkDimensions {
    /// As an (L, W, H) tuple
    pub fn as_tuple(&self) -> (f64, f64, f64) {
        (self.length_mm, self.width_mm, self.height_mm)
    }
}

impl std::fmt::Display for FormworkDimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} × {} × {} mm", self.length_mm, self.width_mm, self.height_mm)
    }
}

/// Calculate formwork dimensions for a block.
///
/// ```rust
/// use calc_core::calculations::formwork::calculate_formwork;
///
/// let fw = calculate_formwork(400.0, 200.0, 200.0, 10.0);
/// assert_eq!(fw.as_tuple(), (410.0, 210.0, 210.0));
/// ```
pub fn calculate_formwork(length_mm: f64, width_mm: f64, height_mm: f64, formwork_thickness_mm: f64) -> FormworkDimensions {
    let buffer = Millimeters(formwork_thickness_mm);
    FormworkDimensions {
        length_mm: (Millimeters(length_mm) + buffer).value(),
        width_mm: (Millimeters(width_mm) + buffer).value(),
        height_mm: (Millimeters(height_mm) + buffer).value(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_additive_buffer() {
        let fw = calculate_formwork(400.0, 200.0, 200.0, 10.0);
        assert_eq!(fw.as_tuple(), (410.0, 210.0, 210.0));
    }

    #[test]
    fn test_zero_thickness() {
        let fw = calculate_formwork(200.0, 100.0, 80.0, 0.0);
        assert_eq!(fw.as_tuple(), (200.0, 100.0, 80.0));
    }

    #[test]
    fn test_thickness_is_monotonic() {
        let mut previous = calculate_formwork(390.0, 190.0, 190.0, 0.0);
        for thickness in [2.5, 5.0, 10.0, 25.0, 100.0] {
            let fw = calculate_formwork(390.0, 190.0, 190.0, thickness);
            assert!(fw.length_mm > previous.length_mm);
            assert!(fw.width_mm > previous.width_mm);
            assert!(fw.height_mm > previous.height_mm);
            previous = fw;
        }
    }

    #[test]
    fn test_display() {
        let fw = calculate_formwork(600.0, 200.0, 250.0, 15.0);
        assert_eq!(fw.to_string(), "615 × 215 × 265 mm");
    }
}
