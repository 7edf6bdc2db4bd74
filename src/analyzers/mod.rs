pub mod climate_analyzer;
pub mod load_limits;

pub use climate_analyzer::{round_to_tenth, ClimateAnalyzer};
pub use load_limits::calculate_load_limits;
