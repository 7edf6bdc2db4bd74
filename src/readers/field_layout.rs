//! Column layout of a NatHERS climate file line.
//!
//! Columns are 1-indexed and inclusive. Values stored with one implied decimal
//! place are scaled by [`TENTHS`].

use crate::models::{HourlyObservation, WindDirection};

pub const TENTHS: f64 = 10.0;

/// Station name, present on the first line only.
pub const STATION_NAME_COLUMNS: (usize, usize) = (62, 81);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    LocationId,
    Year,
    Month,
    Day,
    Hour,
    DryBulbTemperature,
    AbsoluteMoistureContent,
    AtmosphericPressure,
    WindSpeed,
    WindDirection,
    TotalCloudCover,
    FlagDryBulbTemperature,
    FlagAbsoluteMoistureContent,
    FlagAtmosphericPressure,
    FlagWindSpeedDirection,
    FlagTotalCloudCover,
    GlobalSolarIrradiance,
    DiffuseSolarIrradiance,
    DirectSolarIrradiance,
    SolarAltitude,
    SolarAzimuth,
    FlagGlobalDiffuseSolarIrradiance,
    FlagUnknown,
    MetStationNumber,
    WetBulbTemperature,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub field: Field,
    pub start_col: usize,
    pub end_col: usize,
    pub scale: f64,
    pub kind: FieldKind,
}

const fn text(field: Field, start_col: usize, end_col: usize) -> FieldSpec {
    FieldSpec {
        field,
        start_col,
        end_col,
        scale: 1.0,
        kind: FieldKind::Text,
    }
}

const fn integer(field: Field, start_col: usize, end_col: usize) -> FieldSpec {
    FieldSpec {
        field,
        start_col,
        end_col,
        scale: 1.0,
        kind: FieldKind::Integer,
    }
}

const fn tenths(field: Field, start_col: usize, end_col: usize) -> FieldSpec {
    FieldSpec {
        field,
        start_col,
        end_col,
        scale: TENTHS,
        kind: FieldKind::Decimal,
    }
}

pub const OBSERVATION_LAYOUT: [FieldSpec; 25] = [
    text(Field::LocationId, 1, 2),
    integer(Field::Year, 3, 4),
    integer(Field::Month, 5, 6),
    integer(Field::Day, 7, 8),
    integer(Field::Hour, 9, 10),
    tenths(Field::DryBulbTemperature, 11, 14),
    tenths(Field::AbsoluteMoistureContent, 15, 17),
    integer(Field::AtmosphericPressure, 18, 21),
    tenths(Field::WindSpeed, 22, 24),
    integer(Field::WindDirection, 25, 26),
    integer(Field::TotalCloudCover, 27, 27),
    integer(Field::FlagDryBulbTemperature, 28, 28),
    integer(Field::FlagAbsoluteMoistureContent, 29, 29),
    integer(Field::FlagAtmosphericPressure, 30, 30),
    integer(Field::FlagWindSpeedDirection, 31, 31),
    integer(Field::FlagTotalCloudCover, 32, 32),
    // column 33 is blank
    integer(Field::GlobalSolarIrradiance, 34, 37),
    integer(Field::DiffuseSolarIrradiance, 38, 40),
    integer(Field::DirectSolarIrradiance, 41, 44),
    integer(Field::SolarAltitude, 45, 46),
    integer(Field::SolarAzimuth, 47, 49),
    integer(Field::FlagGlobalDiffuseSolarIrradiance, 50, 50),
    integer(Field::FlagUnknown, 51, 51),
    integer(Field::MetStationNumber, 52, 56),
    tenths(Field::WetBulbTemperature, 57, 61),
];

/// A converted field value with the absent/unparsable default already applied.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(Option<String>),
    Integer(i32),
    Decimal(f64),
}

impl FieldValue {
    fn integer(self) -> i32 {
        match self {
            FieldValue::Integer(value) => value,
            _ => 0,
        }
    }

    fn decimal(self) -> f64 {
        match self {
            FieldValue::Decimal(value) => value,
            _ => 0.0,
        }
    }

    fn text(self) -> Option<String> {
        match self {
            FieldValue::Text(value) => value,
            _ => None,
        }
    }
}

fn char_boundary(line: &str, chars: usize) -> usize {
    line.char_indices().nth(chars).map_or(line.len(), |(idx, _)| idx)
}

/// Extract the trimmed text in the 1-indexed inclusive column range.
///
/// Ranges running past the end of the line are cut short; nothing left after
/// trimming means the field is absent.
pub fn read_col(line: &str, start_col: usize, end_col: usize) -> Option<&str> {
    let begin = char_boundary(line, start_col.saturating_sub(1));
    let end = char_boundary(line, end_col).max(begin);
    let value = line[begin..end].trim();
    (!value.is_empty()).then_some(value)
}

pub fn parse_int(raw: Option<&str>) -> i32 {
    raw.and_then(|value| value.parse::<i32>().ok()).unwrap_or(0)
}

/// Integer columns carrying implied decimals; anything but a plain integer is 0.0.
pub fn parse_scaled(raw: Option<&str>, scale: f64) -> f64 {
    raw.and_then(|value| value.parse::<i32>().ok())
        .map(|value| f64::from(value) / scale)
        .unwrap_or(0.0)
}

impl FieldSpec {
    pub fn extract(&self, line: &str) -> FieldValue {
        let raw = read_col(line, self.start_col, self.end_col);
        match self.kind {
            FieldKind::Text => FieldValue::Text(raw.map(str::to_string)),
            FieldKind::Integer => FieldValue::Integer(parse_int(raw)),
            FieldKind::Decimal => FieldValue::Decimal(parse_scaled(raw, self.scale)),
        }
    }
}

impl HourlyObservation {
    fn assign(&mut self, field: Field, value: FieldValue) {
        match field {
            Field::LocationId => self.location_id = value.text(),
            Field::Year => self.year = value.integer(),
            Field::Month => self.month = value.integer(),
            Field::Day => self.day = value.integer(),
            Field::Hour => self.hour = value.integer(),
            Field::DryBulbTemperature => self.dry_bulb_temperature = value.decimal(),
            Field::AbsoluteMoistureContent => self.absolute_moisture_content = value.decimal(),
            Field::AtmosphericPressure => self.atmospheric_pressure = value.integer(),
            Field::WindSpeed => self.wind_speed = value.decimal(),
            Field::WindDirection => self.wind_direction = value.integer(),
            Field::TotalCloudCover => self.total_cloud_cover_oktas = value.integer(),
            Field::FlagDryBulbTemperature => self.flag_dry_bulb_temperature = value.integer(),
            Field::FlagAbsoluteMoistureContent => {
                self.flag_absolute_moisture_content = value.integer()
            }
            Field::FlagAtmosphericPressure => self.flag_atmospheric_pressure = value.integer(),
            Field::FlagWindSpeedDirection => self.flag_wind_speed_direction = value.integer(),
            Field::FlagTotalCloudCover => self.flag_total_cloud_cover = value.integer(),
            Field::GlobalSolarIrradiance => self.global_solar_irradiance = value.integer(),
            Field::DiffuseSolarIrradiance => self.diffuse_solar_irradiance = value.integer(),
            Field::DirectSolarIrradiance => self.direct_solar_irradiance = value.integer(),
            Field::SolarAltitude => self.solar_altitude = value.integer(),
            Field::SolarAzimuth => self.solar_azimuth = value.integer(),
            Field::FlagGlobalDiffuseSolarIrradiance => {
                self.flag_global_diffuse_solar_irradiance = value.integer()
            }
            Field::FlagUnknown => self.flag_unknown = value.integer(),
            Field::MetStationNumber => self.met_station_number = value.integer(),
            Field::WetBulbTemperature => self.wet_bulb_temperature = value.decimal(),
        }
    }
}

/// Decode one line. Never fails: unreadable columns take their defaults.
pub fn parse_observation(line: &str) -> HourlyObservation {
    let mut observation = HourlyObservation::default();
    for spec in OBSERVATION_LAYOUT.iter() {
        observation.assign(spec.field, spec.extract(line));
    }
    observation.wind_direction_label = WindDirection::from_code(observation.wind_direction);
    observation
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_col() {
        let line = "ME6701010 0125";
        assert_eq!(read_col(line, 1, 2), Some("ME"));
        assert_eq!(read_col(line, 9, 10), Some("0"));
        assert_eq!(read_col(line, 11, 14), Some("0125"));
        // partially past the end of the line
        assert_eq!(read_col(line, 13, 17), Some("25"));
        // entirely past the end of the line
        assert_eq!(read_col(line, 20, 24), None);
        assert_eq!(read_col("  ME", 1, 2), None);
        assert_eq!(read_col("", 1, 2), None);
    }

    #[test]
    fn test_read_col_counts_characters() {
        let line = "é1234";
        assert_eq!(read_col(line, 2, 3), Some("12"));
        assert_eq!(read_col(line, 1, 1), Some("é"));
    }

    #[test]
    fn test_parse_defaults() {
        assert_eq!(parse_int(None), 0);
        assert_eq!(parse_int(Some("x7")), 0);
        assert_eq!(parse_int(Some("12.5")), 0);
        assert_eq!(parse_int(Some("-3")), -3);
        assert_eq!(parse_int(Some("99999999999")), 0);

        assert_eq!(parse_scaled(None, TENTHS), 0.0);
        assert_eq!(parse_scaled(Some("abc"), TENTHS), 0.0);
        assert_eq!(parse_scaled(Some("0200"), TENTHS), 20.0);
        assert_eq!(parse_scaled(Some("-012"), TENTHS), -1.2);
        assert_eq!(parse_scaled(Some("12.5"), TENTHS), 0.0);
    }

    #[test]
    fn test_parse_scaled_rejects_float_syntax() {
        for raw in ["nan", "NaN", "inf", "-inf", "infinity", "1e3", "1E2"] {
            assert_eq!(parse_scaled(Some(raw), TENTHS), 0.0, "{}", raw);
        }

        let obs = parse_observation("ME670101 0 nan050");
        assert_eq!(obs.dry_bulb_temperature, 0.0);
        assert_eq!(obs.absolute_moisture_content, 5.0);
        let obs = parse_observation("ME670101021e3 050");
        assert_eq!(obs.dry_bulb_temperature, 0.0);
    }

    #[test]
    fn test_layout_is_ordered_and_non_overlapping() {
        for pair in OBSERVATION_LAYOUT.windows(2) {
            assert!(pair[0].start_col <= pair[0].end_col);
            assert!(pair[0].end_col < pair[1].start_col);
        }
        assert_eq!(OBSERVATION_LAYOUT[0].start_col, 1);
        assert_eq!(OBSERVATION_LAYOUT[24].end_col, 61);
        assert!(STATION_NAME_COLUMNS.0 > OBSERVATION_LAYOUT[24].end_col);
    }

    #[test]
    fn test_scaled_fields_use_tenths() {
        for spec in OBSERVATION_LAYOUT.iter() {
            match spec.kind {
                FieldKind::Decimal => assert_eq!(spec.scale, TENTHS),
                _ => assert_eq!(spec.scale, 1.0),
            }
        }
    }

    #[test]
    fn test_parse_full_line() {
        let line = "ME67011213-0120451012005 3160000  512123 456451802086710  125";
        let obs = parse_observation(line);

        assert_eq!(obs.location_id.as_deref(), Some("ME"));
        assert_eq!(obs.year, 67);
        assert_eq!(obs.month, 1);
        assert_eq!(obs.day, 12);
        assert_eq!(obs.hour, 13);
        assert_eq!(obs.dry_bulb_temperature, -1.2);
        assert_eq!(obs.absolute_moisture_content, 4.5);
        assert_eq!(obs.atmospheric_pressure, 1012);
        assert_eq!(obs.wind_speed, 0.5);
        assert_eq!(obs.wind_direction, 3);
        assert_eq!(obs.wind_direction_label, WindDirection::Ene);
        assert_eq!(obs.total_cloud_cover_oktas, 1);
        assert_eq!(obs.flag_dry_bulb_temperature, 6);
        assert_eq!(obs.flag_absolute_moisture_content, 0);
        assert_eq!(obs.flag_total_cloud_cover, 0);
        assert_eq!(obs.global_solar_irradiance, 512);
        assert_eq!(obs.diffuse_solar_irradiance, 123);
        assert_eq!(obs.direct_solar_irradiance, 456);
        assert_eq!(obs.solar_altitude, 45);
        assert_eq!(obs.solar_azimuth, 180);
        assert_eq!(obs.flag_global_diffuse_solar_irradiance, 2);
        assert_eq!(obs.flag_unknown, 0);
        assert_eq!(obs.met_station_number, 86710);
        assert_eq!(obs.wet_bulb_temperature, 12.5);
    }

    #[test]
    fn test_parse_short_line_defaults() {
        let obs = parse_observation("ME670101 0");
        assert_eq!(obs.hour, 0);
        assert_eq!(obs.dry_bulb_temperature, 0.0);
        assert_eq!(obs.met_station_number, 0);
        assert_eq!(obs.wind_direction_label, WindDirection::Calm);
    }

    #[test]
    fn test_parse_blank_line() {
        let obs = parse_observation("");
        assert_eq!(obs, HourlyObservation::default());
    }
}
