use crate::models::{HourlyObservation, QualityFlag, SolarQualityFlag};
use crate::utils::constants::HOURS_PER_YEAR;
use std::collections::{BTreeMap, BTreeSet};

/// Counts of each flag value for one measurement category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagCounts {
    pub measured: usize,
    pub estimated: usize,
    pub interpolated: usize,
    pub missing: usize,
    pub unknown: usize,
}

impl FlagCounts {
    fn record(&mut self, flag: QualityFlag) {
        match flag {
            QualityFlag::Measured => self.measured += 1,
            QualityFlag::Estimated => self.estimated += 1,
            QualityFlag::Interpolated => self.interpolated += 1,
            QualityFlag::Missing => self.missing += 1,
            QualityFlag::Unknown => self.unknown += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.measured + self.estimated + self.interpolated + self.missing + self.unknown
    }

    pub fn measured_percentage(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        100.0 * self.measured as f64 / total as f64
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoverageReport {
    pub total_records: usize,
    pub distinct_days: usize,
    pub records_per_month: BTreeMap<i32, usize>,
    pub temperature_flags: FlagCounts,
    pub moisture_flags: FlagCounts,
    pub pressure_flags: FlagCounts,
    pub wind_flags: FlagCounts,
    pub cloud_flags: FlagCounts,
    pub solar_flags: BTreeMap<String, usize>,
    pub min_temperature: Option<f64>,
    pub max_temperature: Option<f64>,
}

/// Summarises what a climate file contains, without altering any observation.
pub struct CoverageChecker;

impl CoverageChecker {
    pub fn new() -> Self {
        Self
    }

    pub fn check_coverage(&self, observations: &[HourlyObservation]) -> CoverageReport {
        let mut report = CoverageReport {
            total_records: observations.len(),
            ..CoverageReport::default()
        };
        let mut days = BTreeSet::new();

        for observation in observations {
            days.insert(observation.day_key());
            *report
                .records_per_month
                .entry(observation.month)
                .or_default() += 1;

            report
                .temperature_flags
                .record(observation.temperature_quality());
            report.moisture_flags.record(observation.moisture_quality());
            report.pressure_flags.record(observation.pressure_quality());
            report.wind_flags.record(observation.wind_quality());
            report.cloud_flags.record(observation.cloud_quality());
            *report
                .solar_flags
                .entry(solar_label(observation.solar_quality()).to_string())
                .or_default() += 1;

            let temperature = observation.dry_bulb_temperature;
            report.min_temperature = Some(
                report
                    .min_temperature
                    .map_or(temperature, |t| t.min(temperature)),
            );
            report.max_temperature = Some(
                report
                    .max_temperature
                    .map_or(temperature, |t| t.max(temperature)),
            );
        }

        report.distinct_days = days.len();
        report
    }

    pub fn generate_summary(&self, report: &CoverageReport) -> String {
        let mut summary = String::new();

        summary.push_str("=== Coverage Report ===\n");
        summary.push_str(&format!(
            "Total Records: {} ({:.1}% of a {}-hour year)\n",
            report.total_records,
            100.0 * report.total_records as f64 / HOURS_PER_YEAR as f64,
            HOURS_PER_YEAR
        ));
        summary.push_str(&format!("Distinct Days: {}\n", report.distinct_days));

        if let (Some(min), Some(max)) = (report.min_temperature, report.max_temperature) {
            summary.push_str(&format!("Temperature Range: {:.1}°C to {:.1}°C\n", min, max));
        }

        summary.push_str("\nRecords per Month:\n");
        for (month, count) in &report.records_per_month {
            summary.push_str(&format!("  {:>2}: {}\n", month, count));
        }

        summary.push_str("\nMeasured Values:\n");
        for (name, counts) in [
            ("Dry bulb", &report.temperature_flags),
            ("Moisture", &report.moisture_flags),
            ("Pressure", &report.pressure_flags),
            ("Wind", &report.wind_flags),
            ("Cloud", &report.cloud_flags),
        ] {
            summary.push_str(&format!(
                "  {:<9} {:.1}% measured, {} estimated, {} interpolated, {} missing\n",
                name,
                counts.measured_percentage(),
                counts.estimated,
                counts.interpolated,
                counts.missing
            ));
        }

        summary.push_str("\nSolar Irradiance Flags:\n");
        for (label, count) in &report.solar_flags {
            summary.push_str(&format!("  {}: {}\n", label, count));
        }

        summary
    }
}

impl Default for CoverageChecker {
    fn default() -> Self {
        Self::new()
    }
}

fn solar_label(flag: SolarQualityFlag) -> &'static str {
    match flag {
        SolarQualityFlag::Measured => "measured",
        SolarQualityFlag::Estimated => "estimated",
        SolarQualityFlag::DiffuseEstimated => "diffuse estimated",
        SolarQualityFlag::MissingOrCloudDerived => "missing or from cloud cover",
        SolarQualityFlag::Interpolated => "interpolated",
        SolarQualityFlag::Unknown => "unknown",
    }
}
