use crate::analyzers::load_limits::validate_area;
use crate::analyzers::{calculate_load_limits, ClimateAnalyzer};
use crate::config::AnalysisConfig;
use crate::error::Result;
use crate::models::Report;
use crate::readers::ClimateReader;
use crate::utils::progress::ProgressReporter;
use std::path::Path;
use tracing::info;

/// Reads a climate file and turns it into a load-limit report.
pub struct LoadLimitProcessor {
    config: AnalysisConfig,
}

impl LoadLimitProcessor {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Read, aggregate and apply the load-limit formulas for one file
    pub fn process(
        &self,
        path: &Path,
        area: f64,
        progress: Option<&ProgressReporter>,
    ) -> Result<Report> {
        validate_area(area)?;

        if let Some(p) = progress {
            p.set_message("Reading climate file...");
        }

        let reader = ClimateReader::with_mmap(self.config.use_mmap);
        let climate_file = reader.read_climate_file(path)?;

        if let Some(p) = progress {
            p.set_message(&format!(
                "Aggregating {} observations...",
                climate_file.observations.len()
            ));
        }

        let analyzer = ClimateAnalyzer::with_config(self.config.clone());
        let indices = analyzer.analyze(&climate_file.observations);
        let limits = calculate_load_limits(&indices, area)?;

        if let Some(p) = progress {
            p.finish_with_message("Analysis complete");
        }

        info!(
            "{}: heating {:.2}, cooling {:.2}, total {:.2} MJ/m² for {} m²",
            climate_file.station.display_name(),
            limits.heating,
            limits.cooling,
            limits.total,
            area
        );

        Ok(Report {
            source: path.to_path_buf(),
            station: climate_file.station,
            observation_count: climate_file.observations.len(),
            area,
            indices,
            limits,
        })
    }
}

impl Default for LoadLimitProcessor {
    fn default() -> Self {
        Self::new(AnalysisConfig::default())
    }
}

/// Compute the report for a climate file and habitable room area with default settings
pub fn run(path: &Path, area: f64) -> Result<Report> {
    LoadLimitProcessor::default().process(path, area, None)
}
