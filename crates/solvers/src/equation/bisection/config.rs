use thiserror::Error;

/// Configuration for the bisection solver.
///
/// The solver stops once the bracket width is at most `x_abs_tol`, or
/// reports [`Status::MaxIters`](super::Status::MaxIters) after `max_iters`
/// midpoint evaluations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub max_iters: usize,
    pub x_abs_tol: f64,
}

/// Errors that can occur when validating a bisection config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("x_abs_tol must be finite and non-negative, got {0}")]
    XAbsTol(f64),

    #[error("max_iters must be at least 1")]
    ZeroIters,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            x_abs_tol: 1e-12,
        }
    }
}

impl Config {
    /// Validates the tolerance and iteration cap.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::XAbsTol`] if the tolerance is negative or
    /// non-finite, or [`ConfigError::ZeroIters`] if `max_iters` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.x_abs_tol.is_finite() || self.x_abs_tol < 0.0 {
            return Err(ConfigError::XAbsTol(self.x_abs_tol));
        }
        if self.max_iters == 0 {
            return Err(ConfigError::ZeroIters);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn rejects_bad_tolerances() {
        for x_abs_tol in [-1e-3, f64::NAN, f64::INFINITY] {
            let config = Config {
                x_abs_tol,
                ..Config::default()
            };
            assert!(matches!(config.validate(), Err(ConfigError::XAbsTol(_))));
        }
    }

    #[test]
    fn rejects_zero_iters() {
        let config = Config {
            max_iters: 0,
            ..Config::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroIters));
    }
}
