use crate::cli::args::{Cli, Commands, OutputFormat};
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::processors::{CoverageChecker, LoadLimitProcessor};
use crate::readers::ClimateReader;
use crate::utils::filename::csv_filename_for;
use crate::utils::progress::ProgressReporter;
use crate::writers::CsvWriter;
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::info;

pub fn run(cli: Cli) -> Result<()> {
    setup_logging(cli.verbose, cli.log_file.as_deref())?;

    match cli.command {
        Commands::Analyze {
            file,
            area,
            format,
            config,
            parallel,
            mmap,
        } => {
            let mut analysis_config = AnalysisConfig::load(config.as_deref())?;
            // flags only switch these on; a config file may already have done so
            if parallel {
                analysis_config = analysis_config.with_parallel(true);
            }
            if mmap {
                analysis_config = analysis_config.with_mmap(true);
            }

            let silent = format == OutputFormat::Json;
            let progress = ProgressReporter::new_spinner("Analyzing climate file...", silent);

            let processor = LoadLimitProcessor::new(analysis_config);
            let report = processor.process(&file, area, Some(&progress))?;
            drop(progress);

            match format {
                OutputFormat::Text => println!("{}", report.detailed_summary()),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            }
        }

        Commands::Inspect { file, sample } => {
            println!("Inspecting climate file: {}", file.display());

            let climate_file = ClimateReader::new().read_climate_file(&file)?;
            println!("Station: {}", climate_file.station.display_name());
            if let Some(number) = climate_file.station.met_station_number {
                println!("Met station number: {}", number);
            }

            let checker = CoverageChecker::new();
            let coverage = checker.check_coverage(&climate_file.observations);
            println!("\n{}", checker.generate_summary(&coverage));

            if sample > 0 {
                println!("Sample Records (showing {} records):", sample);
                for (i, obs) in climate_file.observations.iter().take(sample).enumerate() {
                    println!(
                        "{}. {:02}-{:02} {:02}h: {:.1}°C, {:.1} g/kg, {} hPa, wind {:.1} m/s {}, cloud {}/8",
                        i + 1,
                        obs.month,
                        obs.day,
                        obs.hour,
                        obs.dry_bulb_temperature,
                        obs.absolute_moisture_content,
                        obs.atmospheric_pressure,
                        obs.wind_speed,
                        obs.wind_direction_label,
                        obs.total_cloud_cover_oktas
                    );
                }
            }
        }

        Commands::Export { file, output } => {
            let output = output.unwrap_or_else(|| csv_filename_for(&file));

            let progress = ProgressReporter::new_spinner("Reading climate file...", false);
            let observations = ClimateReader::new().read_observations(&file)?;

            progress.set_message(&format!("Writing {} observations...", observations.len()));
            CsvWriter::new().write_observations(&observations, &output)?;
            progress.finish_with_message("Export complete");

            info!(
                "Exported {} observations from {} to {}",
                observations.len(),
                file.display(),
                output.display()
            );
            println!(
                "Wrote {} observations to {}",
                observations.len(),
                output.display()
            );
        }
    }

    Ok(())
}

fn setup_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let log_level = if verbose { "debug" } else { "warn" };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("nathers_load_limits={}", log_level)));

    match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            let file = File::create(path)?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_target(false)
                        .with_level(true)
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .init();
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    fmt::layer()
                        .with_target(false)
                        .with_level(true)
                        .with_writer(std::io::stderr)
                        .compact(),
                )
                .init();
        }
    }

    Ok(())
}
