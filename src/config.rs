//! Analysis parameters.
//!
//! Values are layered: built-in defaults, then an optional TOML/JSON/YAML file,
//! then `NATHERS_*` environment variables.

use crate::error::Result;
use crate::utils::constants::{
    DEHUMIDIFICATION_THRESHOLD, ENV_PREFIX, HEATING_BASE_TEMP, SETPOINT_INTERCEPT, SETPOINT_MAX,
    SETPOINT_MIN, SETPOINT_REFERENCE_MONTH, SETPOINT_SLOPE,
};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_setpoint_bounds"))]
pub struct AnalysisConfig {
    #[validate(range(min = -50.0, max = 50.0))]
    pub heating_base_temperature: f64,

    #[validate(range(min = 0.0, max = 100.0))]
    pub dehumidification_threshold: f64,

    pub setpoint_intercept: f64,
    pub setpoint_slope: f64,

    #[validate(range(min = -50.0, max = 60.0))]
    pub setpoint_min: f64,

    #[validate(range(min = -50.0, max = 60.0))]
    pub setpoint_max: f64,

    #[validate(range(min = 1, max = 12))]
    pub reference_month: i32,

    /// Evaluate the four reductions on the rayon pool
    pub parallel: bool,

    /// Memory-map climate files instead of buffered reads
    pub use_mmap: bool,
}

fn validate_setpoint_bounds(config: &AnalysisConfig) -> std::result::Result<(), ValidationError> {
    if config.setpoint_min > config.setpoint_max {
        return Err(ValidationError::new("setpoint_min_exceeds_max"));
    }
    Ok(())
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            heating_base_temperature: HEATING_BASE_TEMP,
            dehumidification_threshold: DEHUMIDIFICATION_THRESHOLD,
            setpoint_intercept: SETPOINT_INTERCEPT,
            setpoint_slope: SETPOINT_SLOPE,
            setpoint_min: SETPOINT_MIN,
            setpoint_max: SETPOINT_MAX,
            reference_month: SETPOINT_REFERENCE_MONTH,
            parallel: false,
            use_mmap: false,
        }
    }
}

impl AnalysisConfig {
    /// Load configuration from defaults, an optional file and the environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder().add_source(Config::try_from(&Self::default())?);

        if let Some(path) = path {
            debug!("Loading configuration from {}", path.display());
            builder = builder.add_source(File::from(path).required(true));
        }

        let settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let config: AnalysisConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_mmap(mut self, use_mmap: bool) -> Self {
        self.use_mmap = use_mmap;
        self
    }
}
