pub mod climate_reader;
pub mod field_layout;

pub use climate_reader::{ClimateFile, ClimateReader};
pub use field_layout::{parse_observation, read_col, FieldSpec, OBSERVATION_LAYOUT};
