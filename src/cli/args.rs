use crate::utils::constants::DEFAULT_AREA;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nathers-load-limits")]
#[command(about = "Thermal load limits from NatHERS climate files")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute climate indices and load limits for a climate file
    Analyze {
        #[arg(short, long, help = "NatHERS climate file")]
        file: PathBuf,

        #[arg(short, long, default_value_t = DEFAULT_AREA, help = "Habitable room area (m²)")]
        area: f64,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        #[arg(short, long, help = "Analysis configuration file (TOML, JSON or YAML)")]
        config: Option<PathBuf>,

        #[arg(long, help = "Evaluate the climate indices in parallel")]
        parallel: bool,

        #[arg(long, help = "Memory-map the climate file")]
        mmap: bool,
    },

    /// Display station details and data coverage of a climate file
    Inspect {
        #[arg(short, long)]
        file: PathBuf,

        #[arg(short, long, default_value = "10")]
        sample: usize,
    },

    /// Export parsed observations to CSV
    Export {
        #[arg(short, long)]
        file: PathBuf,

        #[arg(
            short,
            long,
            help = "Output CSV file path [default: output/{climate file name}.csv]"
        )]
        output: Option<PathBuf>,
    },
}
