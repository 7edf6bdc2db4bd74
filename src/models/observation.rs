use serde::{Deserialize, Serialize};
use std::fmt;

/// Compass label for the 0-16 wind direction code (0 = calm, 1 = NNE ... 16 = N).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WindDirection {
    #[default]
    Calm,
    #[serde(rename = "NNE")]
    Nne,
    #[serde(rename = "NE")]
    Ne,
    #[serde(rename = "ENE")]
    Ene,
    #[serde(rename = "E")]
    E,
    #[serde(rename = "ESE")]
    Ese,
    #[serde(rename = "SE")]
    Se,
    #[serde(rename = "SSE")]
    Sse,
    #[serde(rename = "S")]
    S,
    #[serde(rename = "SSW")]
    Ssw,
    #[serde(rename = "SW")]
    Sw,
    #[serde(rename = "WSW")]
    Wsw,
    #[serde(rename = "W")]
    W,
    #[serde(rename = "WNW")]
    Wnw,
    #[serde(rename = "NW")]
    Nw,
    #[serde(rename = "NNW")]
    Nnw,
    #[serde(rename = "N")]
    N,
    Unknown,
}

impl WindDirection {
    const COMPASS: [WindDirection; 17] = [
        WindDirection::Calm,
        WindDirection::Nne,
        WindDirection::Ne,
        WindDirection::Ene,
        WindDirection::E,
        WindDirection::Ese,
        WindDirection::Se,
        WindDirection::Sse,
        WindDirection::S,
        WindDirection::Ssw,
        WindDirection::Sw,
        WindDirection::Wsw,
        WindDirection::W,
        WindDirection::Wnw,
        WindDirection::Nw,
        WindDirection::Nnw,
        WindDirection::N,
    ];

    pub fn from_code(code: i32) -> Self {
        usize::try_from(code)
            .ok()
            .and_then(|index| Self::COMPASS.get(index).copied())
            .unwrap_or(WindDirection::Unknown)
    }

    pub fn label(&self) -> &'static str {
        match self {
            WindDirection::Calm => "Calm",
            WindDirection::Nne => "NNE",
            WindDirection::Ne => "NE",
            WindDirection::Ene => "ENE",
            WindDirection::E => "E",
            WindDirection::Ese => "ESE",
            WindDirection::Se => "SE",
            WindDirection::Sse => "SSE",
            WindDirection::S => "S",
            WindDirection::Ssw => "SSW",
            WindDirection::Sw => "SW",
            WindDirection::Wsw => "WSW",
            WindDirection::W => "W",
            WindDirection::Wnw => "WNW",
            WindDirection::Nw => "NW",
            WindDirection::Nnw => "NNW",
            WindDirection::N => "N",
            WindDirection::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for WindDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Flag values for the surface meteorology columns (28-32).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QualityFlag {
    Measured,     // 0
    Estimated,    // 1
    Interpolated, // 2, from three-hourly measurements
    Missing,      // 3
    Unknown,
}

impl QualityFlag {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => QualityFlag::Measured,
            1 => QualityFlag::Estimated,
            2 => QualityFlag::Interpolated,
            3 => QualityFlag::Missing,
            _ => QualityFlag::Unknown,
        }
    }

    pub fn is_measured(&self) -> bool {
        matches!(self, QualityFlag::Measured)
    }
}

/// Flag values for global and diffuse solar irradiance (column 50).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolarQualityFlag {
    Measured,              // 0, both values measured
    Estimated,             // 1, both values estimated
    DiffuseEstimated,      // 2, global measured, diffuse estimated
    MissingOrCloudDerived, // 3
    Interpolated,          // 4, from three-hourly data
    Unknown,
}

impl SolarQualityFlag {
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => SolarQualityFlag::Measured,
            1 => SolarQualityFlag::Estimated,
            2 => SolarQualityFlag::DiffuseEstimated,
            3 => SolarQualityFlag::MissingOrCloudDerived,
            4 => SolarQualityFlag::Interpolated,
            _ => SolarQualityFlag::Unknown,
        }
    }
}

/// One line of a NatHERS climate file.
///
/// Every numeric field falls back to zero when its columns are blank or do not
/// parse, so a record exists for every input line regardless of data quality.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HourlyObservation {
    pub location_id: Option<String>,
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,

    // °C
    pub dry_bulb_temperature: f64,
    // g/kg
    pub absolute_moisture_content: f64,
    // hPa
    pub atmospheric_pressure: i32,
    // m/s
    pub wind_speed: f64,
    pub wind_direction: i32,
    pub wind_direction_label: WindDirection,
    pub total_cloud_cover_oktas: i32,

    pub flag_dry_bulb_temperature: i32,
    pub flag_absolute_moisture_content: i32,
    pub flag_atmospheric_pressure: i32,
    pub flag_wind_speed_direction: i32,
    pub flag_total_cloud_cover: i32,

    // W/m²
    pub global_solar_irradiance: i32,
    pub diffuse_solar_irradiance: i32,
    pub direct_solar_irradiance: i32,
    // degrees
    pub solar_altitude: i32,
    pub solar_azimuth: i32,

    pub flag_global_diffuse_solar_irradiance: i32,
    pub flag_unknown: i32,

    // Some locations only
    pub met_station_number: i32,
    pub wet_bulb_temperature: f64,
}

impl HourlyObservation {
    pub fn temperature_quality(&self) -> QualityFlag {
        QualityFlag::from_code(self.flag_dry_bulb_temperature)
    }

    pub fn moisture_quality(&self) -> QualityFlag {
        QualityFlag::from_code(self.flag_absolute_moisture_content)
    }

    pub fn pressure_quality(&self) -> QualityFlag {
        QualityFlag::from_code(self.flag_atmospheric_pressure)
    }

    pub fn wind_quality(&self) -> QualityFlag {
        QualityFlag::from_code(self.flag_wind_speed_direction)
    }

    pub fn cloud_quality(&self) -> QualityFlag {
        QualityFlag::from_code(self.flag_total_cloud_cover)
    }

    pub fn solar_quality(&self) -> SolarQualityFlag {
        SolarQualityFlag::from_code(self.flag_global_diffuse_solar_irradiance)
    }

    /// Calendar key used for the daily temperature range. The year is not part of it.
    pub fn day_key(&self) -> (i32, i32) {
        (self.month, self.day)
    }

    pub fn is_calm(&self) -> bool {
        self.wind_direction_label == WindDirection::Calm
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wind_direction_lookup() {
        assert_eq!(WindDirection::from_code(0), WindDirection::Calm);
        assert_eq!(WindDirection::from_code(1).label(), "NNE");
        assert_eq!(WindDirection::from_code(8).label(), "S");
        assert_eq!(WindDirection::from_code(16).label(), "N");
        assert_eq!(WindDirection::from_code(17), WindDirection::Unknown);
        assert_eq!(WindDirection::from_code(-1), WindDirection::Unknown);
        assert_eq!(WindDirection::from_code(16).to_string(), "N");
    }

    #[test]
    fn test_quality_flag_conversion() {
        assert_eq!(QualityFlag::from_code(0), QualityFlag::Measured);
        assert_eq!(QualityFlag::from_code(1), QualityFlag::Estimated);
        assert_eq!(QualityFlag::from_code(2), QualityFlag::Interpolated);
        assert_eq!(QualityFlag::from_code(3), QualityFlag::Missing);
        assert_eq!(QualityFlag::from_code(7), QualityFlag::Unknown);
        assert!(QualityFlag::Measured.is_measured());

        assert_eq!(SolarQualityFlag::from_code(4), SolarQualityFlag::Interpolated);
        assert_eq!(SolarQualityFlag::from_code(5), SolarQualityFlag::Unknown);
    }

    #[test]
    fn test_default_observation_is_calm() {
        let observation = HourlyObservation::default();
        assert!(observation.is_calm());
        assert_eq!(observation.day_key(), (0, 0));
        assert_eq!(observation.temperature_quality(), QualityFlag::Measured);
    }
}
