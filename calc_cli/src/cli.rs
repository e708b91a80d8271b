//! CLI definition using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Output format for reports
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Html,
}

#[derive(Parser)]
#[command(name = "calc_cli")]
#[command(version)]
#[command(about = "Concrete block material and formwork calculator")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Settings file (TOML) with default block type, strength and thickness
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Verbose logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List block types with default dimensions and volume factors
    List {
        /// Output format
        #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Calculate materials and formwork for one block
    Calc {
        /// Block type name, e.g. "Hollow Concrete Block" or "hollow-concrete"
        #[arg(long, short = 'b')]
        block_type: Option<String>,

        /// Length override (mm)
        #[arg(long)]
        length: Option<f64>,

        /// Width override (mm)
        #[arg(long)]
        width: Option<f64>,

        /// Height override (mm)
        #[arg(long)]
        height: Option<f64>,

        /// Concrete strength grade (MPa)
        #[arg(long, short = 's')]
        strength: Option<u32>,

        /// Formwork thickness (mm)
        #[arg(long, short = 't')]
        formwork_thickness: Option<f64>,

        /// Output format
        #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Prompt for every value, starting from the defaults
    Interactive,

    /// Print the effective settings as TOML
    Config,
}
