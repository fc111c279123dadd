use thiserror::Error;

/// Errors that can occur when creating a [`Bracket`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s)")]
    NonFinite,
}

/// The sign of a residual for bracket logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Residual is positive (or zero).
    Positive,
    /// Residual is negative.
    Negative,
}

impl Sign {
    /// Returns the sign of a residual value.
    #[must_use]
    pub fn of(value: f64) -> Self {
        if value >= 0.0 {
            Sign::Positive
        } else {
            Sign::Negative
        }
    }
}

/// A search interval with the residual sign known at its lower end.
///
/// The endpoints themselves are never evaluated. Callers that know the
/// residual's orientation over the interval (for example, a residual that
/// increases with `x`) state it up front, and each midpoint evaluation
/// replaces whichever endpoint shares its sign.
///
/// A zero-width bracket is valid and is already converged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    lower: f64,
    upper: f64,
    lower_sign: Sign,
}

impl Bracket {
    /// Creates a bracket whose residual has `lower_sign` at the lower bound.
    ///
    /// The bounds may be given in either order.
    ///
    /// # Errors
    ///
    /// Returns [`BracketError::NonFinite`] if either bound is NaN or infinite.
    pub fn new(bounds: [f64; 2], lower_sign: Sign) -> Result<Self, BracketError> {
        let [a, b] = bounds;
        if !a.is_finite() || !b.is_finite() {
            return Err(BracketError::NonFinite);
        }

        Ok(Self {
            lower: a.min(b),
            upper: a.max(b),
            lower_sign,
        })
    }

    /// Creates a bracket for a residual that increases with `x`.
    ///
    /// # Errors
    ///
    /// Returns [`BracketError::NonFinite`] if either bound is NaN or infinite.
    pub fn increasing(bounds: [f64; 2]) -> Result<Self, BracketError> {
        Self::new(bounds, Sign::Negative)
    }

    /// Creates a bracket for a residual that decreases with `x`.
    ///
    /// # Errors
    ///
    /// Returns [`BracketError::NonFinite`] if either bound is NaN or infinite.
    pub fn decreasing(bounds: [f64; 2]) -> Result<Self, BracketError> {
        Self::new(bounds, Sign::Positive)
    }

    /// Returns the bracket bounds as `[lower, upper]`.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.lower, self.upper]
    }

    /// Returns the midpoint of the bracket.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.lower + self.upper)
    }

    /// Returns the bracket width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Returns true if the bracket width is within `x_abs_tol`.
    #[must_use]
    pub fn is_x_converged(&self, x_abs_tol: f64) -> bool {
        self.width() <= x_abs_tol
    }

    /// Replaces the endpoint that shares `sign` with `x`.
    pub(super) fn shrink(&mut self, x: f64, sign: Sign) {
        if sign == self.lower_sign {
            self.lower = x;
        } else {
            self.upper = x;
        }
    }
}
