use thiserror::Error;

/// Configuration for the Newton-Raphson solver.
///
/// Every iterate is clamped into `domain`. The solver converges once a step
/// changes `x` by at most `x_abs_tol`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub max_iters: usize,
    pub x_abs_tol: f64,
    pub domain: [f64; 2],
}

/// Errors that can occur when validating a Newton-Raphson config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("x_abs_tol must be finite and non-negative, got {0}")]
    XAbsTol(f64),

    #[error("max_iters must be at least 1")]
    ZeroIters,

    #[error("domain [{0}, {1}] must be ordered and not NaN")]
    Domain(f64, f64),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 100,
            x_abs_tol: 1e-12,
            domain: [f64::NEG_INFINITY, f64::INFINITY],
        }
    }
}

impl Config {
    /// Validates the tolerance, iteration cap, and domain.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] describing the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.x_abs_tol.is_finite() || self.x_abs_tol < 0.0 {
            return Err(ConfigError::XAbsTol(self.x_abs_tol));
        }
        if self.max_iters == 0 {
            return Err(ConfigError::ZeroIters);
        }
        let [lower, upper] = self.domain;
        if lower.is_nan() || upper.is_nan() || lower > upper {
            return Err(ConfigError::Domain(lower, upper));
        }
        Ok(())
    }

    /// Clamps `x` into the configured domain.
    pub(super) fn clamp(&self, x: f64) -> f64 {
        let [lower, upper] = self.domain;
        x.clamp(lower, upper)
    }
}
