pub mod climate;
pub mod observation;
pub mod station;

pub use climate::{ClimateIndices, LoadLimits, Report};
pub use observation::{HourlyObservation, QualityFlag, SolarQualityFlag, WindDirection};
pub use station::StationInfo;
