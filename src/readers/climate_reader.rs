use crate::error::Result;
use crate::models::{HourlyObservation, StationInfo};
use crate::readers::field_layout::{
    parse_int, parse_observation, read_col, Field, OBSERVATION_LAYOUT, STATION_NAME_COLUMNS,
};
use crate::utils::constants::{DEFAULT_BUFFER_SIZE, HOURS_PER_YEAR};
use memmap2::Mmap;
use std::borrow::Cow;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, warn};

/// Observations and station metadata read from one climate file.
#[derive(Debug, Clone, PartialEq)]
pub struct ClimateFile {
    pub station: StationInfo,
    pub observations: Vec<HourlyObservation>,
}

pub struct ClimateReader {
    use_mmap: bool,
}

impl ClimateReader {
    pub fn new() -> Self {
        Self { use_mmap: false }
    }

    pub fn with_mmap(use_mmap: bool) -> Self {
        Self { use_mmap }
    }

    /// Read every line of a climate file as an observation, in file order
    pub fn read_observations(&self, path: &Path) -> Result<Vec<HourlyObservation>> {
        Ok(self.read_climate_file(path)?.observations)
    }

    /// Read observations together with the station header
    pub fn read_climate_file(&self, path: &Path) -> Result<ClimateFile> {
        let climate_file = if self.use_mmap {
            self.read_mapped(path)?
        } else {
            let bytes = self.read_bytes_buffered(path)?;
            self.parse_bytes(&bytes)
        };

        debug!(
            "Read {} observations from {}",
            climate_file.observations.len(),
            path.display()
        );
        if climate_file.observations.len() != HOURS_PER_YEAR {
            debug!(
                "{} holds {} lines, not a full year of {} hours",
                path.display(),
                climate_file.observations.len(),
                HOURS_PER_YEAR
            );
        }

        Ok(climate_file)
    }

    /// Parse already-loaded text, one observation per line
    pub fn parse_str(&self, text: &str) -> Vec<HourlyObservation> {
        text.lines().map(parse_observation).collect()
    }

    /// Station metadata from the first line of the file
    pub fn read_station_info(&self, text: &str) -> StationInfo {
        let Some(first_line) = text.lines().next() else {
            return StationInfo::default();
        };

        let location_id = read_col(first_line, 1, 2).map(str::to_string);
        let station_name = read_col(first_line, STATION_NAME_COLUMNS.0, STATION_NAME_COLUMNS.1)
            .map(str::to_string);
        let met_station_number = OBSERVATION_LAYOUT
            .iter()
            .find(|spec| spec.field == Field::MetStationNumber)
            .and_then(|spec| read_col(first_line, spec.start_col, spec.end_col))
            .map(|raw| parse_int(Some(raw)))
            .filter(|number| *number != 0);

        StationInfo::new(location_id, station_name, met_station_number)
    }

    fn read_bytes_buffered(&self, path: &Path) -> Result<Vec<u8>> {
        let file = File::open(path)?;
        let mut reader = BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(bytes)
    }

    /// Parse straight from the mapping; only decoded text that is not UTF-8 is copied
    fn read_mapped(&self, path: &Path) -> Result<ClimateFile> {
        let file = File::open(path)?;
        // zero-length files cannot be mapped on every platform
        if file.metadata()?.len() == 0 {
            return Ok(self.parse_bytes(&[]));
        }
        let mmap = unsafe { Mmap::map(&file)? };
        Ok(self.parse_bytes(&mmap[..]))
    }

    fn parse_bytes(&self, bytes: &[u8]) -> ClimateFile {
        let text = decode_text(bytes);
        ClimateFile {
            station: self.read_station_info(&text),
            observations: self.parse_str(&text),
        }
    }
}

impl Default for ClimateReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode file contents, falling back to Windows-1252 for non UTF-8 bytes
fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(text) => Cow::Borrowed(text),
        Err(e) => {
            warn!(
                "Climate file is not valid UTF-8 ({}), decoding as Windows-1252",
                e
            );
            let (text, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
            text
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WindDirection;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const FIRST_LINE: &str =
        "ME67010100 1200451012005 3160000  512123 456451802086710  125MELBOURNE RO";

    fn observation_line(month: u32, day: u32, hour: u32, temp_tenths: i32) -> String {
        format!("ME67{:02}{:02}{:02}{:>4}050", month, day, hour, temp_tenths)
    }

    #[test]
    fn test_parse_str_one_record_per_line() {
        let reader = ClimateReader::new();
        let text = format!(
            "{}\n\n{}\n",
            observation_line(1, 1, 0, 200),
            observation_line(1, 1, 1, -15)
        );
        let observations = reader.parse_str(&text);

        assert_eq!(observations.len(), 3);
        assert_eq!(observations[0].dry_bulb_temperature, 20.0);
        assert_eq!(observations[0].absolute_moisture_content, 5.0);
        assert_eq!(observations[1], HourlyObservation::default());
        assert_eq!(observations[2].dry_bulb_temperature, -1.5);
        assert_eq!(observations[2].hour, 1);
    }

    #[test]
    fn test_read_station_info() {
        let reader = ClimateReader::new();
        let text = format!("{}\n{}\n", FIRST_LINE, observation_line(1, 1, 1, 100));
        let station = reader.read_station_info(&text);

        assert_eq!(station.location_id.as_deref(), Some("ME"));
        assert_eq!(station.station_name.as_deref(), Some("MELBOURNE RO"));
        assert_eq!(station.met_station_number, Some(86710));

        assert_eq!(reader.read_station_info(""), StationInfo::default());
    }

    #[test]
    fn test_station_name_only_from_first_line() {
        let reader = ClimateReader::new();
        let text = format!(
            "{}\n{}",
            observation_line(1, 1, 0, 100),
            FIRST_LINE
        );
        let station = reader.read_station_info(&text);
        assert_eq!(station.station_name, None);
        assert_eq!(station.met_station_number, None);
    }

    #[test]
    fn test_read_climate_file() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "{}", FIRST_LINE)?;
        writeln!(temp_file, "{}", observation_line(1, 1, 1, 135))?;
        writeln!(temp_file, "{}", observation_line(1, 1, 2, 140))?;

        let reader = ClimateReader::new();
        let climate_file = reader.read_climate_file(temp_file.path())?;

        assert_eq!(climate_file.observations.len(), 3);
        assert_eq!(climate_file.observations[0].dry_bulb_temperature, 12.0);
        assert_eq!(
            climate_file.observations[0].wind_direction_label,
            WindDirection::Ene
        );
        assert_eq!(climate_file.observations[1].dry_bulb_temperature, 13.5);
        assert_eq!(climate_file.observations[2].hour, 2);
        assert_eq!(
            climate_file.station.station_name.as_deref(),
            Some("MELBOURNE RO")
        );

        Ok(())
    }

    #[test]
    fn test_mmap_matches_buffered() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        for hour in 0..24 {
            writeln!(temp_file, "{}", observation_line(2, 3, hour, 100 + hour as i32))?;
        }

        let buffered = ClimateReader::new().read_climate_file(temp_file.path())?;
        let mapped = ClimateReader::with_mmap(true).read_climate_file(temp_file.path())?;
        assert_eq!(buffered, mapped);

        let empty = NamedTempFile::new()?;
        let observations = ClimateReader::with_mmap(true).read_observations(empty.path())?;
        assert!(observations.is_empty());

        Ok(())
    }

    #[test]
    fn test_mmap_decodes_legacy_text_in_place() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        let mut bytes = FIRST_LINE.replace("MELBOURNE RO", "").into_bytes();
        bytes.extend_from_slice(b"ALBANY \xc9\n");
        bytes.extend_from_slice(observation_line(1, 1, 1, -35).as_bytes());
        temp_file.write_all(&bytes)?;

        let mapped = ClimateReader::with_mmap(true).read_climate_file(temp_file.path())?;
        let buffered = ClimateReader::new().read_climate_file(temp_file.path())?;
        assert_eq!(mapped, buffered);
        assert_eq!(mapped.station.station_name.as_deref(), Some("ALBANY É"));
        assert_eq!(mapped.observations.len(), 2);
        assert_eq!(mapped.observations[1].dry_bulb_temperature, -3.5);

        Ok(())
    }

    #[test]
    fn test_windows_1252_station_name() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        let mut line = FIRST_LINE.replace("MELBOURNE RO", "").into_bytes();
        line.extend_from_slice(b"G\xe9RALDTON\n");
        temp_file.write_all(&line)?;

        let climate_file = ClimateReader::new().read_climate_file(temp_file.path())?;
        assert_eq!(
            climate_file.station.station_name.as_deref(),
            Some("GéRALDTON")
        );
        assert_eq!(climate_file.observations.len(), 1);

        Ok(())
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let reader = ClimateReader::new();
        let result = reader.read_observations(Path::new("does/not/exist.txt"));
        assert!(result.is_err());
    }
}
