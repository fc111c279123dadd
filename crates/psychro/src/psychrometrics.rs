use psychro_solvers::equation::{bisection, newton_raphson};

use crate::{PsychroError, SaturationCurve, Settings, UnitSystem, check};

/// A psychrometric calculator bound to one unit system.
///
/// All property functions are methods on this handle. It is `Copy` and holds
/// no mutable state, so handles in different unit systems can be used side
/// by side, including across threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Psychrometrics {
    units: UnitSystem,
    settings: Settings,
}

impl Psychrometrics {
    /// Creates a handle with the default solver settings.
    #[must_use]
    pub const fn new(units: UnitSystem) -> Self {
        Self {
            units,
            settings: Settings::DEFAULT,
        }
    }

    /// Creates a handle with custom solver settings.
    ///
    /// # Errors
    ///
    /// Returns [`PsychroError::InvalidSettings`] if the settings fail validation.
    pub fn with_settings(units: UnitSystem, settings: Settings) -> Result<Self, PsychroError> {
        settings.validate()?;
        Ok(Self { units, settings })
    }

    /// Returns the unit system.
    #[must_use]
    pub const fn unit_system(&self) -> UnitSystem {
        self.units
    }

    /// Returns the solver settings.
    #[must_use]
    pub const fn settings(&self) -> Settings {
        self.settings
    }

    /// Returns the effective solver tolerance on temperature.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.settings
            .tolerance
            .unwrap_or_else(|| self.units.tolerance())
    }

    /// Converts a temperature to the absolute scale of the unit system.
    #[must_use]
    pub fn t_absolute(&self, t: f64) -> f64 {
        self.units.absolute(t)
    }

    /// Returns the saturation curve model for this unit system.
    #[must_use]
    pub const fn saturation_curve(&self) -> SaturationCurve {
        SaturationCurve::new(self.units)
    }

    pub(crate) fn check_temperature(
        &self,
        quantity: &'static str,
        t: f64,
    ) -> Result<f64, PsychroError> {
        check::in_range(quantity, t, self.units.temperature_range())
    }

    pub(crate) fn newton_config(&self) -> newton_raphson::Config {
        newton_raphson::Config {
            max_iters: self.settings.max_iters,
            x_abs_tol: self.tolerance(),
            domain: self.units.temperature_range(),
        }
    }

    pub(crate) fn bisection_config(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.settings.max_iters,
            x_abs_tol: self.tolerance(),
        }
    }
}
