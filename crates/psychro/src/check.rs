//! Input validation shared by the property functions.

use tracing::debug;

use crate::{MIN_HUM_RATIO, PsychroError};

/// Requires `value >= 0`.
pub(crate) fn non_negative(quantity: &'static str, value: f64) -> Result<f64, PsychroError> {
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(PsychroError::Negative { quantity, value })
    }
}

/// Requires `value > 0`.
pub(crate) fn positive(quantity: &'static str, value: f64) -> Result<f64, PsychroError> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(PsychroError::NonPositive { quantity, value })
    }
}

/// Requires `min <= value <= max`.
pub(crate) fn in_range(
    quantity: &'static str,
    value: f64,
    [min, max]: [f64; 2],
) -> Result<f64, PsychroError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(PsychroError::OutOfRange {
            quantity,
            value,
            min,
            max,
        })
    }
}

/// Requires a relative humidity in `[0, 1]`.
pub(crate) fn rel_hum(value: f64) -> Result<f64, PsychroError> {
    in_range("relative humidity", value, [0.0, 1.0])
}

/// Requires a wet-bulb or dew-point temperature at or below the dry bulb.
pub(crate) fn not_above_dry_bulb(
    quantity: &'static str,
    value: f64,
    dry_bulb: f64,
) -> Result<f64, PsychroError> {
    if value <= dry_bulb {
        Ok(value)
    } else {
        Err(PsychroError::AboveDryBulb {
            quantity,
            value,
            dry_bulb,
        })
    }
}

/// Validates a humidity ratio input and raises it to [`MIN_HUM_RATIO`].
pub(crate) fn hum_ratio(value: f64) -> Result<f64, PsychroError> {
    non_negative("humidity ratio", value).map(floor_hum_ratio)
}

/// Raises a computed humidity ratio to [`MIN_HUM_RATIO`].
pub(crate) fn floor_hum_ratio(value: f64) -> f64 {
    if value < MIN_HUM_RATIO {
        debug!(hum_ratio = value, floor = MIN_HUM_RATIO, "humidity ratio floored");
        MIN_HUM_RATIO
    } else {
        value
    }
}
