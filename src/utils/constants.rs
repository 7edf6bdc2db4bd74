/// Heating degree-hour base temperature (°C)
pub const HEATING_BASE_TEMP: f64 = 15.0;

/// Dehumidification threshold for absolute humidity (g/kg)
pub const DEHUMIDIFICATION_THRESHOLD: f64 = 15.7;

/// Adaptive comfort set-point: 17.8 + 0.31 * mean reference-month temperature
pub const SETPOINT_INTERCEPT: f64 = 17.8;
pub const SETPOINT_SLOPE: f64 = 0.31;

/// Set-point limits from the HSTAR documentation
pub const SETPOINT_MIN: f64 = 22.5;
pub const SETPOINT_MAX: f64 = 28.5;

/// January
pub const SETPOINT_REFERENCE_MONTH: i32 = 1;

/// Default habitable room area used by the CLI (m²)
pub const DEFAULT_AREA: f64 = 150.0;

/// Hours in a non-leap year
pub const HOURS_PER_YEAR: usize = 8760;

/// Processing defaults
pub const DEFAULT_BUFFER_SIZE: usize = 8192 * 16; // 128KB

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "NATHERS";

/// Default export directory
pub const OUTPUT_DIR: &str = "output";
