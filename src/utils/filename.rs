use crate::utils::constants::OUTPUT_DIR;
use chrono::{Datelike, Local};
use std::path::{Path, PathBuf};

/// Generate default export filename with format: nathers-observations-{YYMMDD}.csv
pub fn generate_default_csv_filename() -> PathBuf {
    let now = Local::now();
    let year = now.year() % 100; // Get last 2 digits of year
    let month = now.month();
    let day = now.day();

    let filename = format!(
        "nathers-observations-{:02}{:02}{:02}.csv",
        year, month, day
    );
    PathBuf::from(OUTPUT_DIR).join(filename)
}

/// Export filename derived from the climate file name, e.g. climat21.txt -> climat21.csv
pub fn csv_filename_for(input: &Path) -> PathBuf {
    match input.file_stem() {
        Some(stem) => PathBuf::from(OUTPUT_DIR).join(format!("{}.csv", stem.to_string_lossy())),
        None => generate_default_csv_filename(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_default_csv_filename() {
        let filename = generate_default_csv_filename();
        let filename_str = filename.to_string_lossy();

        assert!(filename_str.starts_with("output/"));
        assert!(filename_str.ends_with(".csv"));

        let file_part = filename.file_name().unwrap().to_string_lossy();
        assert!(file_part.starts_with("nathers-observations-"));
        // nathers-observations-YYMMDD.csv
        assert_eq!(file_part.len(), "nathers-observations-".len() + 6 + 4);
    }

    #[test]
    fn test_csv_filename_for() {
        assert_eq!(
            csv_filename_for(Path::new("data/climat21.TXT")),
            PathBuf::from("output/climat21.csv")
        );
        assert_eq!(
            csv_filename_for(Path::new("climat.21.txt")),
            PathBuf::from("output/climat.21.csv")
        );
        assert_eq!(
            csv_filename_for(Path::new("climat21")),
            PathBuf::from("output/climat21.csv")
        );
        assert!(csv_filename_for(Path::new(""))
            .to_string_lossy()
            .starts_with("output/nathers-observations-"));
    }
}
