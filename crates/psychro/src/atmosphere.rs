//! Standard atmosphere and altitude pressure corrections.

use crate::{PsychroError, Psychrometrics, UnitSystem, check};

impl Psychrometrics {
    /// Standard atmosphere barometric pressure at an altitude (m or ft).
    #[must_use]
    pub fn standard_atm_pressure(&self, altitude: f64) -> f64 {
        match self.unit_system() {
            UnitSystem::Metric => 101_325.0 * (1.0 - 2.255_77e-5 * altitude).powf(5.2559),
            UnitSystem::Imperial => 14.696 * (1.0 - 6.8754e-6 * altitude).powf(5.2559),
        }
    }

    /// Standard atmosphere temperature at an altitude (m or ft).
    #[must_use]
    pub fn standard_atm_temperature(&self, altitude: f64) -> f64 {
        match self.unit_system() {
            UnitSystem::Metric => 15.0 - 0.0065 * altitude,
            UnitSystem::Imperial => 59.0 - 0.003_566_2 * altitude,
        }
    }

    /// Sea level pressure from station pressure.
    ///
    /// Uses the hypsometric equation with the mean temperature of the air
    /// column below the station, assuming a standard lapse rate.
    ///
    /// # Errors
    ///
    /// Returns [`PsychroError::NonPositive`] if the station pressure is not positive.
    pub fn sea_level_pressure(
        &self,
        station_pressure: f64,
        altitude: f64,
        t_dry_bulb: f64,
    ) -> Result<f64, PsychroError> {
        let station_pressure = check::positive("station pressure", station_pressure)?;
        Ok(station_pressure * self.sea_level_factor(altitude, t_dry_bulb))
    }

    /// Station pressure from sea level pressure, inverting [`Self::sea_level_pressure`].
    ///
    /// # Errors
    ///
    /// Returns [`PsychroError::NonPositive`] if the sea level pressure is not positive.
    pub fn station_pressure(
        &self,
        sea_level_pressure: f64,
        altitude: f64,
        t_dry_bulb: f64,
    ) -> Result<f64, PsychroError> {
        let sea_level_pressure = check::positive("sea level pressure", sea_level_pressure)?;
        Ok(sea_level_pressure / self.sea_level_factor(altitude, t_dry_bulb))
    }

    /// Ratio of sea level to station pressure, `exp(z / H)`.
    fn sea_level_factor(&self, altitude: f64, t_dry_bulb: f64) -> f64 {
        let scale_height = match self.unit_system() {
            UnitSystem::Metric => {
                let t_column = t_dry_bulb + 0.0065 * altitude / 2.0;
                287.055 * self.t_absolute(t_column) / 9.807
            }
            UnitSystem::Imperial => {
                let t_column = t_dry_bulb + 0.0036 * altitude / 2.0;
                53.351 * self.t_absolute(t_column)
            }
        };
        (altitude / scale_height).exp()
    }
}
