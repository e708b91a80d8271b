//! Output formatting module

use serde::Serialize;

use calc_core::materials::BlockType;
use calc_core::report::BlockReport;
use calc_core::CalcResult;

use crate::cli::OutputFormat;

pub fn print_report(report: &BlockReport, format: OutputFormat) -> CalcResult<()> {
    match format {
        OutputFormat::Text => print!("{}", report.render_text()),
        OutputFormat::Html => print!("{}", report.render_html()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
    }
    Ok(())
}

/// One row of the block type listing
#[derive(Debug, Serialize)]
struct BlockRow {
    name: &'static str,
    length_mm: f64,
    width_mm: f64,
    height_mm: f64,
    volume_factor: f64,
    image_asset: String,
}

impl From<BlockType> for BlockRow {
    fn from(block: BlockType) -> Self {
        let dims = block.default_dimensions();
        BlockRow {
            name: block.name(),
            length_mm: dims.length_mm,
            width_mm: dims.width_mm,
            height_mm: dims.height_mm,
            volume_factor: block.volume_factor(),
            image_asset: block.image_asset(),
        }
    }
}

pub fn print_block_list(format: OutputFormat) -> CalcResult<()> {
    print!("{}", render_block_list(format)?);
    Ok(())
}

fn render_block_list(format: OutputFormat) -> CalcResult<String> {
    let rows: Vec<BlockRow> = BlockType::ALL.into_iter().map(BlockRow::from).collect();

    let out = match format {
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Text => {
            let mut out = format!("{:<28} {:>18} {:>7}\n", "Block Type", "L x W x H (mm)", "Factor");
            out.push_str(&format!("{}\n", "-".repeat(55)));
            for row in &rows {
                let dims = format!("{} x {} x {}", row.length_mm, row.width_mm, row.height_mm);
                out.push_str(&format!("{:<28} {:>18} {:>7.2}\n", row.name, dims, row.volume_factor));
            }
            out
        }
        OutputFormat::Html => {
            let mut out = String::from("<table class=\"block-types\">\n");
            out.push_str("    <tr><th>Block Type</th><th>L x W x H (mm)</th><th>Factor</th><th>Image</th></tr>\n");
            for row in &rows {
                out.push_str(&format!(
                    "    <tr><td>{}</td><td>{} x {} x {}</td><td>{:.2}</td><td><img src=\"{}\" alt=\"{}\" width=\"60\"></td></tr>\n",
                    row.name, row.length_mm, row.width_mm, row.height_mm, row.volume_factor, row.image_asset, row.name
                ));
            }
            out.push_str("</table>\n");
            out
        }
    };
    Ok(out)
}
