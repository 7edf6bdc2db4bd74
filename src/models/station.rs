use serde::{Deserialize, Serialize};

/// Station metadata carried by the first line of a climate file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StationInfo {
    pub location_id: Option<String>,
    pub station_name: Option<String>,
    pub met_station_number: Option<i32>,
}

impl StationInfo {
    pub fn new(
        location_id: Option<String>,
        station_name: Option<String>,
        met_station_number: Option<i32>,
    ) -> Self {
        Self {
            location_id,
            station_name,
            met_station_number,
        }
    }

    /// Name for reports: station name, then location id, then a placeholder.
    pub fn display_name(&self) -> String {
        match (&self.station_name, &self.location_id) {
            (Some(name), Some(id)) => format!("{} ({})", name, id),
            (Some(name), None) => name.clone(),
            (None, Some(id)) => id.clone(),
            (None, None) => "Unknown station".to_string(),
        }
    }
}
