//! Heating, cooling and total thermal energy load limits.
//!
//! All limits are in MJ/m² of habitable room area.

use crate::error::{ProcessingError, Result};
use crate::models::{ClimateIndices, LoadLimits};

/// Lower bound of the heating load limit
pub const MIN_HEATING_LOAD_LIMIT: f64 = 4.0;

/// Area adjustment factor Fh for the heating load limit
pub fn heating_area_factor(area: f64) -> f64 {
    if area <= 50.0 {
        1.37
    } else if area <= 350.0 {
        5.11e-6 * area.powi(2) - 3.82e-3 * area + 1.55
    } else {
        0.84
    }
}

/// Area adjustment factor Fc for the cooling load limit
pub fn cooling_area_factor(area: f64) -> f64 {
    if area <= 50.0 {
        1.34
    } else if area <= 200.0 {
        1.29e-5 * area.powi(2) - 5.55e-3 * area + 1.58
    } else if area <= 1000.0 {
        3.76e-7 * area.powi(2) - 7.82e-4 * area + 1.12
    } else {
        0.71
    }
}

pub fn heating_load_limit(area: f64, hdh: f64) -> f64 {
    MIN_HEATING_LOAD_LIMIT.max((0.0044 * hdh - 5.9) * heating_area_factor(area))
}

pub fn cooling_load_limit(area: f64, cdh: f64, dgh: f64) -> f64 {
    (5.4 + 0.00617 * (cdh + 1.85 * dgh)) * cooling_area_factor(area)
}

/// Total thermal energy load limit from the heating and cooling limits and the
/// annual average daily temperature range `tr`
pub fn total_load_limit(hll: f64, cll: f64, tr: f64) -> f64 {
    (19.3 * hll + 22.6 * cll - 8.4) / (tr + 10.74) - 15.0
}

pub fn validate_area(area: f64) -> Result<()> {
    if !area.is_finite() || area <= 0.0 {
        return Err(ProcessingError::InvalidArea(area));
    }
    Ok(())
}

/// Apply the load-limit formulas to a file's climate indices
pub fn calculate_load_limits(indices: &ClimateIndices, area: f64) -> Result<LoadLimits> {
    validate_area(area)?;

    let heating = heating_load_limit(area, indices.hdh);
    let cooling = cooling_load_limit(area, indices.cdh, indices.dgh);

    Ok(LoadLimits {
        heating_area_factor: heating_area_factor(area),
        cooling_area_factor: cooling_area_factor(area),
        heating,
        cooling,
        total: total_load_limit(heating, cooling, indices.avg_daily_range),
    })
}
