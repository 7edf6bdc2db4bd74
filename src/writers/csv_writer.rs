use crate::error::Result;
use crate::models::HourlyObservation;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Writes parsed observations as CSV, one row per observation in file order.
pub struct CsvWriter {
    delimiter: u8,
}

impl CsvWriter {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Write observations to a CSV file, creating parent directories as needed
    pub fn write_observations(&self, observations: &[HourlyObservation], path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = File::create(path)?;
        self.write_to(observations, file)?;

        debug!("Wrote {} observations to {}", observations.len(), path.display());
        Ok(())
    }

    /// Write observations to any writer
    pub fn write_to<W: Write>(&self, observations: &[HourlyObservation], writer: W) -> Result<()> {
        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_writer(writer);

        for observation in observations {
            csv_writer.serialize(observation)?;
        }
        csv_writer.flush()?;

        Ok(())
    }
}

impl Default for CsvWriter {
    fn default() -> Self {
        Self::new()
    }
}
