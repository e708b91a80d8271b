//! Command execution

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use calc_core::calculations::{calculate, BlockInput};
use calc_core::materials::{get_block_dimensions, BlockDimensions, BlockType, MAX_STRENGTH_MPA, MIN_STRENGTH_MPA};
use calc_core::report::BlockReport;
use calc_core::{CalcResult, Settings};

use crate::cli::{Cli, Commands, OutputFormat};
use crate::output;

/// Values collected for one calculation; `None` means "use the default"
#[derive(Debug, Default)]
pub struct CalcRequest {
    pub block_type: Option<String>,
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub strength: Option<u32>,
    pub formwork_thickness: Option<f64>,
}

pub fn execute(cli: Cli) -> CalcResult<()> {
    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    match cli.command {
        Commands::List { format } => output::print_block_list(format),
        Commands::Calc {
            block_type,
            length,
            width,
            height,
            strength,
            formwork_thickness,
            format,
        } => {
            let request = CalcRequest {
                block_type,
                length,
                width,
                height,
                strength,
                formwork_thickness,
            };
            run_calculation(&build_input(&settings, request), format)
        }
        Commands::Interactive => run_interactive(&settings),
        Commands::Config => {
            println!("{}", settings.to_toml_string()?);
            Ok(())
        }
    }
}

/// Resolve a user-typed block name to its canonical identifier.
///
/// Names that match no block type are passed through unchanged so the core
/// lookups apply their fallback profile.
pub fn resolve_block_name(raw: &str) -> String {
    match BlockType::from_str_flexible(raw) {
        Ok(block) => block.name().to_string(),
        Err(e) => {
            tracing::warn!(%e, "using fallback profile");
            raw.to_string()
        }
    }
}

/// Merge a request with settings and the block's default dimensions
pub fn build_input(settings: &Settings, request: CalcRequest) -> BlockInput {
    let block_type = request
        .block_type
        .as_deref()
        .map(resolve_block_name)
        .unwrap_or_else(|| settings.default_block_type.name().to_string());

    let defaults = get_block_dimensions(&block_type);
    let dims = BlockDimensions::new(
        request.length.unwrap_or(defaults.length_mm),
        request.width.unwrap_or(defaults.width_mm),
        request.height.unwrap_or(defaults.height_mm),
    );

    BlockInput::with_dimensions(
        block_type,
        dims,
        request.strength.unwrap_or(settings.default_strength_mpa),
        request
            .formwork_thickness
            .unwrap_or(settings.default_formwork_thickness_mm),
    )
}

fn run_calculation(input: &BlockInput, format: OutputFormat) -> CalcResult<()> {
    let result = calculate(input)?;
    let report = BlockReport::new(input, &result);
    output::print_report(&report, format)
}

// ============================================================================
// Interactive mode
// ============================================================================

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return None;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return None;
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Parse an answer, keeping the default for blank or unparseable input
fn parse_or_default<T>(field: &str, answer: Option<String>, default: T) -> T
where
    T: FromStr + Display + Copy,
{
    let Some(answer) = answer else {
        return default;
    };
    match answer.parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(field, %answer, %default, "could not parse answer, keeping default");
            eprintln!("  '{}' is not a valid {}, using {}", answer, field, default);
            default
        }
    }
}

fn prompt_f64(field: &str, prompt: &str, default: f64) -> f64 {
    parse_or_default(field, prompt_line(prompt), default)
}

fn prompt_u32(field: &str, prompt: &str, default: u32) -> u32 {
    parse_or_default(field, prompt_line(prompt), default)
}

/// Pick a block type by list number or name
fn prompt_block_type(default: BlockType) -> String {
    println!("Block types:");
    for (i, block) in BlockType::ALL.iter().enumerate() {
        println!("  {:>2}. {}", i + 1, block);
    }

    let Some(answer) = prompt_line(&format!("Select block type [{}]: ", default)) else {
        return default.name().to_string();
    };

    match answer.parse::<usize>() {
        Ok(n) if (1..=BlockType::ALL.len()).contains(&n) => BlockType::ALL[n - 1].name().to_string(),
        _ => resolve_block_name(&answer),
    }
}

fn run_interactive(settings: &Settings) -> CalcResult<()> {
    println!("Blockcalc - Concrete Block Material Calculator");
    println!("==============================================");
    println!();

    let block_type = prompt_block_type(settings.default_block_type);
    if let Some(block) = BlockType::from_name(&block_type) {
        println!("Image: {}", block.image_asset());
    }

    let defaults = get_block_dimensions(&block_type);
    println!();
    println!("Block Dimensions (in mm)");
    let length = prompt_f64("length", &format!("  Length [{}]: ", defaults.length_mm), defaults.length_mm);
    let width = prompt_f64("width", &format!("  Width [{}]: ", defaults.width_mm), defaults.width_mm);
    let height = prompt_f64("height", &format!("  Height [{}]: ", defaults.height_mm), defaults.height_mm);

    println!();
    let strength = prompt_u32(
        "strength",
        &format!(
            "Concrete strength, {}-{} MPa [{}]: ",
            MIN_STRENGTH_MPA, MAX_STRENGTH_MPA, settings.default_strength_mpa
        ),
        settings.default_strength_mpa,
    );
    let thickness = prompt_f64(
        "formwork thickness",
        &format!("Formwork thickness (mm) [{}]: ", settings.default_formwork_thickness_mm),
        settings.default_formwork_thickness_mm,
    );
    println!();

    let request = CalcRequest {
        block_type: Some(block_type),
        length: Some(length),
        width: Some(width),
        height: Some(height),
        strength: Some(strength),
        formwork_thickness: Some(thickness),
    };
    run_calculation(&build_input(settings, request), OutputFormat::Text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_block_name() {
        assert_eq!(resolve_block_name("hollow-concrete"), "Hollow Concrete Block");
        assert_eq!(resolve_block_name("Paving Block"), "Paving Block");
        assert_eq!(resolve_block_name("Glass Block"), "Glass Block");
    }

    #[test]
    fn test_parse_or_default() {
        assert_eq!(parse_or_default("length", None, 400.0), 400.0);
        assert_eq!(parse_or_default("length", Some("390".to_string()), 400.0), 390.0);
        assert_eq!(parse_or_default("length", Some("4OO".to_string()), 400.0), 400.0);
        assert_eq!(parse_or_default("strength", Some("30".to_string()), 20u32), 30);
        assert_eq!(parse_or_default("strength", Some("-5".to_string()), 20u32), 20);
    }

    #[test]
    fn test_build_input_defaults() {
        let input = build_input(&Settings::default(), CalcRequest::default());
        assert_eq!(input.block_type, "Splitface Block");
        assert_eq!(input.dimensions().as_tuple(), (400.0, 200.0, 200.0));
        assert_eq!(input.strength_mpa, 20);
        assert_eq!(input.formwork_thickness_mm, 10.0);
    }

    #[test]
    fn test_build_input_overrides() {
        let request = CalcRequest {
            block_type: Some("paving".to_string()),
            height: Some(60.0),
            strength: Some(30),
            formwork_thickness: Some(5.0),
            ..Default::default()
        };
        let input = build_input(&Settings::default(), request);
        assert_eq!(input.block_type, "Paving Block");
        assert_eq!(input.dimensions().as_tuple(), (200.0, 100.0, 60.0));
        assert_eq!(input.strength_mpa, 30);
        assert_eq!(input.formwork_thickness_mm, 5.0);
    }

    #[test]
    fn test_build_input_uses_settings() {
        let settings = Settings {
            default_block_type: BlockType::AeratedAutoclaved,
            default_strength_mpa: 25,
            default_formwork_thickness_mm: 15.0,
        };
        let input = build_input(&settings, CalcRequest::default());
        assert_eq!(input.block_type, "Aerated Autoclaved Block");
        assert_eq!(input.dimensions().as_tuple(), (600.0, 200.0, 250.0));
        assert_eq!(input.strength_mpa, 25);
        assert_eq!(input.formwork_thickness_mm, 15.0);
    }

    #[test]
    fn test_unknown_block_gets_fallback_dimensions() {
        let request = CalcRequest {
            block_type: Some("Glass Block".to_string()),
            ..Default::default()
        };
        let input = build_input(&Settings::default(), request);
        assert_eq!(input.block_type, "Glass Block");
        assert_eq!(input.dimensions().as_tuple(), (400.0, 200.0, 200.0));
    }
}
