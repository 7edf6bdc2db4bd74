use crate::config::AnalysisConfig;
use crate::models::{ClimateIndices, HourlyObservation};
use std::collections::HashMap;
use tracing::debug;

/// Round to one decimal place as the value reads in decimal, ties away from zero.
///
/// `22.25` becomes `22.3`, where a round-half-to-even rule would give `22.2`.
/// The value is scaled by ten before rounding, so a double stored just below a
/// `.x5` mark still rounds up when the product lands on the tie: `22.95` gives
/// `23.0` even though the nearest double to `22.95` is slightly smaller.
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[derive(Debug, Clone, Copy)]
struct DailyExtremes {
    min: f64,
    max: f64,
}

impl DailyExtremes {
    fn new(temperature: f64) -> Self {
        Self {
            min: temperature,
            max: temperature,
        }
    }

    fn update(&mut self, temperature: f64) {
        self.min = self.min.min(temperature);
        self.max = self.max.max(temperature);
    }

    fn range(&self) -> f64 {
        self.max - self.min
    }
}

/// Derives the annual climate indices from an hourly observation sequence.
///
/// Each reduction is a pure function of the observations, so `analyze` gives the
/// same result whether or not the reductions run in parallel.
pub struct ClimateAnalyzer {
    config: AnalysisConfig,
}

impl ClimateAnalyzer {
    pub fn new() -> Self {
        Self::with_config(AnalysisConfig::default())
    }

    pub fn with_config(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn analyze(&self, observations: &[HourlyObservation]) -> ClimateIndices {
        let (hdh, (cdh, setpoint), dgh, avg_daily_range) = if self.config.parallel {
            let ((hdh, cooling), (dgh, range)) = rayon::join(
                || {
                    rayon::join(
                        || self.heating_degree_hours(observations),
                        || self.cooling_degree_hours(observations),
                    )
                },
                || {
                    rayon::join(
                        || self.dehumidification_gram_hours(observations),
                        || self.average_daily_range(observations),
                    )
                },
            );
            (hdh, cooling, dgh, range)
        } else {
            (
                self.heating_degree_hours(observations),
                self.cooling_degree_hours(observations),
                self.dehumidification_gram_hours(observations),
                self.average_daily_range(observations),
            )
        };

        debug!(
            "Indices over {} observations: HDH={:.2}, CDH={:.2} (set-point {:.1}), DGH={:.2}, Tr={:.2}",
            observations.len(),
            hdh,
            cdh,
            setpoint,
            dgh,
            avg_daily_range
        );

        ClimateIndices {
            hdh,
            cdh,
            setpoint,
            dgh,
            avg_daily_range,
        }
    }

    /// Sum of (base - T) over every hour colder than the base temperature
    pub fn heating_degree_hours(&self, observations: &[HourlyObservation]) -> f64 {
        let base = self.config.heating_base_temperature;
        observations
            .iter()
            .map(|o| o.dry_bulb_temperature)
            .filter(|&t| t < base)
            .map(|t| base - t)
            .fold(0.0, |total, hours| total + hours)
    }

    /// Mean dry-bulb temperature of the reference month, 0 when it has no observations
    pub fn reference_month_mean(&self, observations: &[HourlyObservation]) -> f64 {
        let (sum, count) = observations
            .iter()
            .filter(|o| o.month == self.config.reference_month)
            .fold((0.0, 0usize), |(sum, count), o| {
                (sum + o.dry_bulb_temperature, count + 1)
            });

        if count > 0 {
            sum / count as f64
        } else {
            0.0
        }
    }

    /// Adaptive comfort set-point for a prevailing mean temperature.
    ///
    /// Neutral temperature after de Dear & Brager (ASHRAE-55 adaptive model),
    /// clamped to the set-point limits and then rounded to 0.1°C.
    pub fn adaptive_setpoint(&self, mean_temperature: f64) -> f64 {
        let neutral =
            self.config.setpoint_intercept + self.config.setpoint_slope * mean_temperature;
        let clamped = if neutral > self.config.setpoint_max {
            self.config.setpoint_max
        } else if neutral < self.config.setpoint_min {
            self.config.setpoint_min
        } else {
            neutral
        };
        round_to_tenth(clamped)
    }

    /// Cooling degree-hours above the adaptive set-point, returned with the set-point
    pub fn cooling_degree_hours(&self, observations: &[HourlyObservation]) -> (f64, f64) {
        let setpoint = self.adaptive_setpoint(self.reference_month_mean(observations));
        let cdh = observations
            .iter()
            .map(|o| o.dry_bulb_temperature)
            .filter(|&t| t > setpoint)
            .map(|t| t - setpoint)
            .fold(0.0, |total, hours| total + hours);
        (cdh, setpoint)
    }

    /// Sum of humidity excess over the dehumidification threshold
    pub fn dehumidification_gram_hours(&self, observations: &[HourlyObservation]) -> f64 {
        let threshold = self.config.dehumidification_threshold;
        observations
            .iter()
            .map(|o| o.absolute_moisture_content)
            .filter(|&w| w > threshold)
            .map(|w| w - threshold)
            .fold(0.0, |total, hours| total + hours)
    }

    /// Mean of the per-day (max - min) temperature ranges.
    ///
    /// Days are keyed on (month, day) only, so a file spanning several years
    /// folds the same calendar day of each year into one group.
    pub fn average_daily_range(&self, observations: &[HourlyObservation]) -> f64 {
        let mut index: HashMap<(i32, i32), usize> = HashMap::new();
        let mut days: Vec<DailyExtremes> = Vec::new();

        for observation in observations {
            let temperature = observation.dry_bulb_temperature;
            match index.get(&observation.day_key()) {
                Some(&slot) => days[slot].update(temperature),
                None => {
                    index.insert(observation.day_key(), days.len());
                    days.push(DailyExtremes::new(temperature));
                }
            }
        }

        if days.is_empty() {
            return 0.0;
        }

        let total = days
            .iter()
            .map(DailyExtremes::range)
            .fold(0.0, |sum, range| sum + range);
        total / days.len() as f64
    }
}

impl Default for ClimateAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
