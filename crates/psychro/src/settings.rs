#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::MAX_ITERS;

/// Solver settings for a [`Psychrometrics`](crate::Psychrometrics) handle.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Settings {
    /// Temperature tolerance for the dew point and wet bulb solvers.
    ///
    /// `None` uses [`UnitSystem::tolerance`](crate::UnitSystem::tolerance).
    pub tolerance: Option<f64>,

    /// Iteration cap for each solver call.
    pub max_iters: usize,
}

/// Errors that can occur when validating [`Settings`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SettingsError {
    #[error("tolerance must be finite and positive, got {0}")]
    Tolerance(f64),

    #[error("max_iters must be at least 1")]
    ZeroIters,
}

impl Settings {
    /// Settings that match the ASHRAE reference implementation.
    pub const DEFAULT: Self = Self {
        tolerance: None,
        max_iters: MAX_ITERS,
    };

    /// Validates the tolerance override and iteration cap.
    ///
    /// # Errors
    ///
    /// Returns a [`SettingsError`] describing the first invalid field.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(tolerance) = self.tolerance.filter(|t| !t.is_finite() || *t <= 0.0) {
            return Err(SettingsError::Tolerance(tolerance));
        }
        if self.max_iters == 0 {
            return Err(SettingsError::ZeroIters);
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(Settings::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_tolerance() {
        for tolerance in [0.0, -1e-3, f64::NAN, f64::INFINITY] {
            let settings = Settings {
                tolerance: Some(tolerance),
                ..Settings::default()
            };
            assert!(matches!(
                settings.validate(),
                Err(SettingsError::Tolerance(_))
            ));
        }
    }

    #[test]
    fn rejects_zero_iters() {
        let settings = Settings {
            max_iters: 0,
            ..Settings::default()
        };
        assert_eq!(settings.validate(), Err(SettingsError::ZeroIters));
    }
}
