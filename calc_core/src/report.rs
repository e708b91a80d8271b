//! # Calculation Report
//!
//! Packages a finished block calculation into a human-readable summary.
//! The report only formats values it is given; it never recomputes
//! quantities, so the text, HTML and JSON outputs always agree with the
//! numbers the caller already displayed.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::{calculate, BlockInput};
//! use calc_core::materials::BlockType;
//! use calc_core::report::BlockReport;
//!
//! let input = BlockInput::for_block(BlockType::SolidConcrete, 20, 10.0);
//! let result = calculate(&input).unwrap();
//! let report = BlockReport::new(&input, &result);
//!
//! assert!(report.render_text().contains("Cement:      0.93 kg"));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calculations::{BlockCalculation, BlockInput, FormworkDimensions, MaterialQuantities};
use crate::materials::{BlockDimensions, BlockType, StrengthGrade};

/// Human-readable summary of one block calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockReport {
    pub block_type: String,
    pub dimensions: BlockDimensions,
    /// Grade label, e.g. "M20"
    pub strength_label: String,
    pub strength_mpa: u32,
    /// Grade whose mix was applied; differs from `strength_label` for unsupported grades
    pub mix_grade: String,
    /// Applied cement : sand : aggregate proportion, e.g. "1 : 1.5 : 3"
    pub mix_proportion: String,
    pub cement_dosage_kg_per_m3: f64,
    pub formwork_thickness_mm: f64,
    pub net_volume_m3: f64,
    /// Net volume in cm³, rounded to 2 decimals
    pub net_volume_cm3: f64,
    pub cement_kg: f64,
    pub sand_kg: f64,
    pub aggregate_kg: f64,
    pub water_kg: f64,
    pub water_liters: f64,
    pub total_mass_kg: f64,
    pub formwork: FormworkDimensions,
    /// Illustration for known block types
    pub image_asset: Option<String>,
    pub generated_at: DateTime<Utc>,
}

impl BlockReport {
    /// Assemble a report from an input and its already computed results
    pub fn new(input: &BlockInput, calculation: &BlockCalculation) -> Self {
        let MaterialQuantities {
            net_volume_m3,
            cement_kg,
            sand_kg,
            aggregate_kg,
            water_kg,
        } = calculation.materials;
        let mix_grade = StrengthGrade::applied_for(input.strength_mpa);
        let mix = mix_grade.mix_ratio();

        BlockReport {
            block_type: input.block_type.clone(),
            dimensions: input.dimensions(),
            strength_label: format!("M{}", input.strength_mpa),
            strength_mpa: input.strength_mpa,
            mix_grade: mix_grade.to_string(),
            mix_proportion: mix.proportion_label(),
            cement_dosage_kg_per_m3: mix.cement_dosage_kg_per_m3,
            formwork_thickness_mm: input.formwork_thickness_mm,
            net_volume_m3,
            net_volume_cm3: calculation.materials.net_volume_cm3(),
            cement_kg,
            sand_kg,
            aggregate_kg,
            water_kg,
            water_liters: calculation.materials.water_liters(),
            total_mass_kg: calculation.materials.total_mass_kg(),
            formwork: calculation.formwork,
            image_asset: BlockType::from_name(&input.block_type).map(|b| b.image_asset()),
            generated_at: Utc::now(),
        }
    }

    /// Plain-text summary for terminals and logs
    pub fn render_text(&self) -> String {
        let d = &self.dimensions;
        let f = &self.formwork;
        let mut out = String::new();
        out.push_str("═══════════════════════════════════════\n");
        out.push_str("  CALCULATION REPORT\n");
        out.push_str("═══════════════════════════════════════\n");
        out.push_str(&format!("Block Type:        {}\n", self.block_type));
        out.push_str(&format!(
            "Block Dimensions:  {} mm x {} mm x {} mm\n",
            d.length_mm, d.width_mm, d.height_mm
        ));
        out.push_str(&format!("Strength Grade:    {} ({} MPa)\n", self.strength_label, self.strength_mpa));
        out.push_str(&format!(
            "Mix Applied:       {} ({}, cement {} kg/m³)\n",
            self.mix_grade, self.mix_proportion, self.cement_dosage_kg_per_m3
        ));
        out.push_str(&format!("Formwork Thickness: {} mm\n", self.formwork_thickness_mm));
        out.push('\n');
        out.push_str(&format!(
            "Net Concrete Volume: {:.6} m³ ({} cm³)\n",
            self.net_volume_m3, self.net_volume_cm3
        ));
        out.push('\n');
        out.push_str("Materials Required:\n");
        out.push_str(&format!("  Cement:      {} kg\n", self.cement_kg));
        out.push_str(&format!("  Sand:        {} kg\n", self.sand_kg));
        out.push_str(&format!("  Aggregate:   {} kg\n", self.aggregate_kg));
        out.push_str(&format!("  Water:       {} kg ({} liters)\n", self.water_kg, self.water_liters));
        out.push_str(&format!("  Total:       {} kg\n", self.total_mass_kg));
        out.push('\n');
        out.push_str("Recommended Formwork Dimensions:\n");
        out.push_str(&format!(
            "  {} mm x {} mm x {} mm\n",
            f.length_mm, f.width_mm, f.height_mm
        ));
        out.push_str("═══════════════════════════════════════\n");
        out
    }

    /// HTML fragment for embedding in a web form
    pub fn render_html(&self) -> String {
        let d = &self.dimensions;
        let f = &self.formwork;
        let image = match &self.image_asset {
            Some(path) => format!(
                "    <img src=\"{}\" alt=\"{}\" width=\"200\">\n",
                escape_html(path),
                escape_html(&self.block_type)
            ),
            None => String::new(),
        };

        format!(
            "<div class=\"block-report\">\n\
             \x20   <h3>Calculation Report</h3>\n\
             {image}\
             \x20   <p><b>Block Type:</b> {block}</p>\n\
             \x20   <p><b>Block Dimensions:</b> {l} mm x {w} mm x {h} mm</p>\n\
             \x20   <p><b>Strength Grade:</b> {grade}</p>\n\
             \x20   <p><b>Mix Applied:</b> {mix_grade} ({mix}, cement {dosage} kg/m³)</p>\n\
             \x20   <p><b>Formwork Thickness:</b> {t} mm</p>\n\
             \x20   <p><b>Net Concrete Volume:</b> {cm3} cm³</p>\n\
             \x20   <ul>\n\
             \x20       <li><b>Cement:</b> {cement} kg</li>\n\
             \x20       <li><b>Sand:</b> {sand} kg</li>\n\
             \x20       <li><b>Aggregate:</b> {aggregate} kg</li>\n\
             \x20       <li><b>Water:</b> {water} liters</li>\n\
             \x20       <li><b>Total:</b> {total} kg</li>\n\
             \x20   </ul>\n\
             \x20   <p><b>Recommended Formwork Dimensions:</b> {fl} mm x {fw} mm x {fh} mm</p>\n\
             </div>\n",
            image = image,
            block = escape_html(&self.block_type),
            l = d.length_mm,
            w = d.width_mm,
            h = d.height_mm,
            grade = self.strength_label,
            mix_grade = self.mix_grade,
            mix = self.mix_proportion,
            dosage = self.cement_dosage_kg_per_m3,
            t = self.formwork_thickness_mm,
            cm3 = self.net_volume_cm3,
            cement = self.cement_kg,
            sand = self.sand_kg,
            aggregate = self.aggregate_kg,
            water = self.water_liters,
            total = self.total_mass_kg,
            fl = f.length_mm,
            fw = f.width_mm,
            fh = f.height_mm,
        )
    }
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::calculate;

    fn solid_report() -> (BlockInput, BlockCalculation, BlockReport) {
        let input = BlockInput::for_block(BlockType::SolidConcrete, 20, 10.0);
        let result = calculate(&input).unwrap();
        let report = BlockReport::new(&input, &result);
        (input, result, report)
    }

    #[test]
    fn test_report_copies_values() {
        let (input, result, report) = solid_report();
        assert_eq!(report.block_type, input.block_type);
        assert_eq!(report.strength_label, "M20");
        assert_eq!(report.net_volume_m3, result.materials.net_volume_m3);
        assert_eq!(report.net_volume_cm3, 16000.0);
        assert_eq!(report.cement_kg, 0.93);
        assert_eq!(report.sand_kg, 1.4);
        assert_eq!(report.aggregate_kg, 2.79);
        assert_eq!(report.water_kg, 0.47);
        assert_eq!(report.water_liters, 0.47);
        assert_eq!(report.formwork, result.formwork);
        assert_eq!(report.image_asset.as_deref(), Some("assets/solid_concrete_block.png"));
    }

    #[test]
    fn test_report_states_fallback_mix() {
        let input = BlockInput::for_block(BlockType::SolidConcrete, 22, 10.0);
        let result = calculate(&input).unwrap();
        let report = BlockReport::new(&input, &result);
        assert_eq!(report.strength_label, "M22");
        assert_eq!(report.mix_grade, "M25");
        assert_eq!(report.mix_proportion, "1 : 1 : 2");
        assert_eq!(report.cement_dosage_kg_per_m3, 360.0);
        assert!(report.render_text().contains("Mix Applied:       M25 (1 : 1 : 2, cement 360 kg/m³)"));
    }

    #[test]
    fn test_report_does_not_recompute() {
        let (input, mut result, _) = solid_report();
        // A report must show exactly what it was handed
        result.materials.cement_kg = 99.0;
        let report = BlockReport::new(&input, &result);
        assert_eq!(report.cement_kg, 99.0);
    }

    #[test]
    fn test_render_text() {
        let (_, _, report) = solid_report();
        let text = report.render_text();
        assert!(text.contains("Block Type:        Solid Concrete Block"));
        assert!(text.contains("Block Dimensions:  400 mm x 200 mm x 200 mm"));
        assert!(text.contains("Strength Grade:    M20 (20 MPa)"));
        assert!(text.contains("(16000 cm³)"));
        assert!(text.contains("Sand:        1.4 kg"));
        assert!(text.contains("Water:       0.47 kg (0.47 liters)"));
        assert!(text.contains("  410 mm x 210 mm x 210 mm"));
        assert!(text.contains("Mix Applied:       M20 (1 : 1.5 : 3, cement 320 kg/m³)"));
        assert!(text.contains("Total:       5.59 kg"));
    }

    #[test]
    fn test_render_html() {
        let (_, _, report) = solid_report();
        let html = report.render_html();
        assert!(html.starts_with("<div class=\"block-report\">"));
        assert!(html.contains("<img src=\"assets/solid_concrete_block.png\""));
        assert!(html.contains("<li><b>Aggregate:</b> 2.79 kg</li>"));
        assert!(html.contains("<b>Strength Grade:</b> M20"));
        assert!(html.contains("410 mm x 210 mm x 210 mm"));
        assert!(html.contains("<b>Mix Applied:</b> M20 (1 : 1.5 : 3, cement 320 kg/m³)"));
        assert!(html.contains("<li><b>Total:</b> 5.59 kg</li>"));
    }

    #[test]
    fn test_html_escapes_block_name() {
        let input = BlockInput::from_name("<Custom & Co>", 25, 5.0);
        let result = calculate(&input).unwrap();
        let report = BlockReport::new(&input, &result);
        assert!(report.image_asset.is_none());
        let html = report.render_html();
        assert!(html.contains("&lt;Custom &amp; Co&gt;"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_report_json() {
        let (_, _, report) = solid_report();
        let json = serde_json::to_string(&report).unwrap();
        let parsed: BlockReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report, parsed);
    }
}
