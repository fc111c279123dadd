use std::error::Error as StdError;

use thiserror::Error;

use psychro_solvers::equation::{bisection, newton_raphson};

use crate::SettingsError;

/// Errors that may occur when evaluating psychrometric properties.
#[derive(Debug, Error)]
pub enum PsychroError {
    /// An input lies outside the range where the correlations hold.
    #[error("{quantity} {value} is outside the valid range [{min}, {max}]")]
    OutOfRange {
        quantity: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// An input that must be non-negative is negative.
    #[error("{quantity} {value} is negative")]
    Negative { quantity: &'static str, value: f64 },

    /// An input that must be strictly positive is not.
    #[error("{quantity} {value} must be positive")]
    NonPositive { quantity: &'static str, value: f64 },

    /// A wet-bulb or dew-point temperature exceeds the dry-bulb temperature.
    #[error("{quantity} {value} is above the dry-bulb temperature {dry_bulb}")]
    AboveDryBulb {
        quantity: &'static str,
        value: f64,
        dry_bulb: f64,
    },

    /// A solver used up its iteration budget.
    ///
    /// Inputs inside the valid ranges always converge with the default
    /// settings, so this points at a defect or overly strict settings.
    #[error("{solver} did not converge within {iters} iterations")]
    NotConverged { solver: &'static str, iters: usize },

    /// The bisection solver failed for a reason other than a property error.
    #[error("bisection failed")]
    Bisection(#[source] bisection::Error),

    /// The Newton-Raphson solver failed for a reason other than a property error.
    #[error("Newton-Raphson iteration failed")]
    NewtonRaphson(#[source] newton_raphson::Error),

    #[error("invalid settings: {0}")]
    InvalidSettings(#[from] SettingsError),

    #[error("unknown unit system `{0}`, expected SI, IP, metric, or imperial")]
    UnknownUnitSystem(String),
}

impl PsychroError {
    /// Returns true if the error comes from an invalid input value.
    #[must_use]
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            Self::OutOfRange { .. }
                | Self::Negative { .. }
                | Self::NonPositive { .. }
                | Self::AboveDryBulb { .. }
        )
    }

    /// Returns true if a solver ran out of iterations.
    #[must_use]
    pub fn is_convergence_failure(&self) -> bool {
        matches!(self, Self::NotConverged { .. })
    }
}

/// Recovers a property error that a model raised inside a solver.
fn recover(
    source: Box<dyn StdError + Send + Sync>,
) -> Result<PsychroError, Box<dyn StdError + Send + Sync>> {
    source.downcast::<PsychroError>().map(|err| *err)
}

impl From<bisection::Error> for PsychroError {
    fn from(err: bisection::Error) -> Self {
        match err {
            bisection::Error::Model(source) => {
                recover(source).unwrap_or_else(|s| Self::Bisection(bisection::Error::Model(s)))
            }
            bisection::Error::Problem(source) => {
                recover(source).unwrap_or_else(|s| Self::Bisection(bisection::Error::Problem(s)))
            }
            other => Self::Bisection(other),
        }
    }
}

impl From<newton_raphson::Error> for PsychroError {
    fn from(err: newton_raphson::Error) -> Self {
        use newton_raphson::Error as Nr;

        match err {
            Nr::Model(source) => recover(source).unwrap_or_else(|s| Self::NewtonRaphson(Nr::Model(s))),
            Nr::Problem(source) => {
                recover(source).unwrap_or_else(|s| Self::NewtonRaphson(Nr::Problem(s)))
            }
            other => Self::NewtonRaphson(other),
        }
    }
}
