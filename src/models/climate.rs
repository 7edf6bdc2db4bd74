use crate::models::StationInfo;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Annual climate indices derived from one climate file.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ClimateIndices {
    /// Heating degree-hours (°C·h)
    pub hdh: f64,
    /// Cooling degree-hours (°C·h) above `setpoint`
    pub cdh: f64,
    /// Adaptive comfort set-point used for `cdh` (°C)
    pub setpoint: f64,
    /// Dehumidification gram-hours (g/kg·h)
    pub dgh: f64,
    /// Annual average daily temperature range (°C)
    pub avg_daily_range: f64,
}

/// Heating, cooling and total load limits (MJ/m²) for a habitable room area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadLimits {
    pub heating_area_factor: f64,
    pub cooling_area_factor: f64,
    pub heating: f64,
    pub cooling: f64,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub source: PathBuf,
    pub station: StationInfo,
    pub observation_count: usize,
    pub area: f64,
    pub indices: ClimateIndices,
    pub limits: LoadLimits,
}

impl Report {
    pub fn summary(&self) -> String {
        format!(
            "{}\n\
            Heating Degree Hours: {:.2}\n\
            Cooling Degree Hours: {:.2} (set-point {:.1}°C)\n\
            Dehumidification Gram Hours: {:.2} g/kg·h\n\
            Average Daily Temperature Range: {:.2}",
            self.station.display_name(),
            self.indices.hdh,
            self.indices.cdh,
            self.indices.setpoint,
            self.indices.dgh,
            self.indices.avg_daily_range,
        )
    }

    pub fn detailed_summary(&self) -> String {
        format!(
            "{}\n\n\
            Load Limits (habitable room area {} m²):\n\
            - Heating: {:.2} MJ/m² (Fh = {:.4})\n\
            - Cooling: {:.2} MJ/m² (Fc = {:.4})\n\
            - Total: {:.2} MJ/m²\n\n\
            Source: {} ({} observations)",
            self.summary(),
            self.area,
            self.limits.heating,
            self.limits.heating_area_factor,
            self.limits.cooling,
            self.limits.cooling_area_factor,
            self.limits.total,
            self.source.display(),
            self.observation_count,
        )
    }
}
