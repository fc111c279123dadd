//! Dry, saturated, and moist air properties.

use crate::{PsychroError, Psychrometrics, UnitSystem, check, humidity::MOLAR_MASS_RATIO};

/// `1 / 0.621945`, the ratio of dry-air to water-vapor molar masses.
const VOLUME_FACTOR: f64 = 1.607_858;

/// Converts psi to lbf/ft² in IP volume and density calculations.
const SQ_IN_PER_SQ_FT: f64 = 144.0;

impl Psychrometrics {
    /// Pressure in the units the gas constant expects (Pa or lbf/ft²).
    fn gas_law_pressure(&self, pressure: f64) -> f64 {
        match self.unit_system() {
            UnitSystem::Metric => pressure,
            UnitSystem::Imperial => SQ_IN_PER_SQ_FT * pressure,
        }
    }

    /// Enthalpy of dry air, relative to dry air at 0 °C or 0 °F.
    #[must_use]
    pub fn dry_air_enthalpy(&self, t_dry_bulb: f64) -> f64 {
        match self.unit_system() {
            UnitSystem::Metric => 1006.0 * t_dry_bulb,
            UnitSystem::Imperial => 0.240 * t_dry_bulb,
        }
    }

    /// Density of dry air from the ideal gas law.
    ///
    /// # Errors
    ///
    /// Returns [`PsychroError::NonPositive`] if the pressure is not positive.
    pub fn dry_air_density(&self, t_dry_bulb: f64, pressure: f64) -> Result<f64, PsychroError> {
        let pressure = check::positive("pressure", pressure)?;
        Ok(self.gas_law_pressure(pressure)
            / self.unit_system().dry_air_gas_constant()
            / self.t_absolute(t_dry_bulb))
    }

    /// Specific volume of dry air from the ideal gas law.
    ///
    /// # Errors
    ///
    /// Returns [`PsychroError::NonPositive`] if the pressure is not positive.
    pub fn dry_air_volume(&self, t_dry_bulb: f64, pressure: f64) -> Result<f64, PsychroError> {
        let pressure = check::positive("pressure", pressure)?;
        Ok(self.unit_system().dry_air_gas_constant() * self.t_absolute(t_dry_bulb)
            / self.gas_law_pressure(pressure))
    }

    /// Dry-bulb temperature from moist air enthalpy and humidity ratio.
    ///
    /// # Errors
    ///
    /// Returns [`PsychroError::Negative`] if the humidity ratio is negative.
    pub fn t_dry_bulb_from_enthalpy_and_hum_ratio(
        &self,
        moist_air_enthalpy: f64,
        hum_ratio: f64,
    ) -> Result<f64, PsychroError> {
        let w = check::hum_ratio(hum_ratio)?;
        Ok(match self.unit_system() {
            UnitSystem::Metric => (moist_air_enthalpy / 1000.0 - 2501.0 * w) / (1.006 + 1.86 * w),
            UnitSystem::Imperial => (moist_air_enthalpy - 1061.0 * w) / (0.240 + 0.444 * w),
        })
    }

    /// Humidity ratio from moist air enthalpy and dry-bulb temperature.
    ///
    /// The result is floored to [`MIN_HUM_RATIO`](crate::MIN_HUM_RATIO).
    #[must_use]
    pub fn hum_ratio_from_enthalpy_and_t_dry_bulb(
        &self,
        moist_air_enthalpy: f64,
        t_dry_bulb: f64,
    ) -> f64 {
        let t = t_dry_bulb;
        check::floor_hum_ratio(match self.unit_system() {
            UnitSystem::Metric => (moist_air_enthalpy / 1000.0 - 1.006 * t) / (2501.0 + 1.86 * t),
            UnitSystem::Imperial => (moist_air_enthalpy - 0.240 * t) / (1061.0 + 0.444 * t),
        })
    }

    /// Humidity ratio of saturated air.
    ///
    /// The result is floored to [`MIN_HUM_RATIO`](crate::MIN_HUM_RATIO).
    ///
    /// # Errors
    ///
    /// Returns a domain error if the temperature is out of range or the
    /// pressure is not positive.
    pub fn sat_hum_ratio(&self, t_dry_bulb: f64, pressure: f64) -> Result<f64, PsychroError> {
        let pressure = check::positive("pressure", pressure)?;
        let pws = self.sat_vap_pres(t_dry_bulb)?;
        Ok(check::floor_hum_ratio(MOLAR_MASS_RATIO * pws / (pressure - pws)))
    }

    /// Enthalpy of saturated air.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the temperature is out of range or the
    /// pressure is not positive.
    pub fn sat_air_enthalpy(&self, t_dry_bulb: f64, pressure: f64) -> Result<f64, PsychroError> {
        let hum_ratio = self.sat_hum_ratio(t_dry_bulb, pressure)?;
        self.moist_air_enthalpy(t_dry_bulb, hum_ratio)
    }

    /// Vapor pressure deficit: saturation pressure minus actual vapor pressure.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the humidity ratio is negative or any other
    /// input is out of range.
    pub fn vapor_pressure_deficit(
        &self,
        t_dry_bulb: f64,
        hum_ratio: f64,
        pressure: f64,
    ) -> Result<f64, PsychroError> {
        let rel_hum = self.rel_hum_from_hum_ratio(t_dry_bulb, hum_ratio, pressure)?;
        Ok(self.sat_vap_pres(t_dry_bulb)? * (1.0 - rel_hum))
    }

    /// Degree of saturation: humidity ratio over saturation humidity ratio.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the humidity ratio is negative or any other
    /// input is out of range.
    pub fn degree_of_saturation(
        &self,
        t_dry_bulb: f64,
        hum_ratio: f64,
        pressure: f64,
    ) -> Result<f64, PsychroError> {
        let hum_ratio = check::hum_ratio(hum_ratio)?;
        Ok(hum_ratio / self.sat_hum_ratio(t_dry_bulb, pressure)?)
    }

    /// Enthalpy of moist air per unit mass of dry air.
    ///
    /// # Errors
    ///
    /// Returns [`PsychroError::Negative`] if the humidity ratio is negative.
    pub fn moist_air_enthalpy(&self, t_dry_bulb: f64, hum_ratio: f64) -> Result<f64, PsychroError> {
        let w = check::hum_ratio(hum_ratio)?;
        let t = t_dry_bulb;
        Ok(match self.unit_system() {
            UnitSystem::Metric => (1.006 * t + w * (2501.0 + 1.86 * t)) * 1000.0,
            UnitSystem::Imperial => 0.240 * t + w * (1061.0 + 0.444 * t),
        })
    }

    /// Specific volume of moist air per unit mass of dry air.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the humidity ratio is negative or the
    /// pressure is not positive.
    pub fn moist_air_volume(
        &self,
        t_dry_bulb: f64,
        hum_ratio: f64,
        pressure: f64,
    ) -> Result<f64, PsychroError> {
        let w = check::hum_ratio(hum_ratio)?;
        let pressure = check::positive("pressure", pressure)?;
        let r_da = self.unit_system().dry_air_gas_constant();
        Ok(r_da * self.t_absolute(t_dry_bulb) * (1.0 + VOLUME_FACTOR * w)
            / self.gas_law_pressure(pressure))
    }

    /// Dry-bulb temperature from moist air specific volume and humidity ratio.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the humidity ratio is negative or the
    /// pressure is not positive.
    pub fn t_dry_bulb_from_moist_air_volume_and_hum_ratio(
        &self,
        moist_air_volume: f64,
        hum_ratio: f64,
        pressure: f64,
    ) -> Result<f64, PsychroError> {
        let w = check::hum_ratio(hum_ratio)?;
        let pressure = check::positive("pressure", pressure)?;
        let t_absolute = moist_air_volume * self.gas_law_pressure(pressure)
            / (self.unit_system().dry_air_gas_constant() * (1.0 + VOLUME_FACTOR * w));
        Ok(self.unit_system().relative(t_absolute))
    }

    /// Density of moist air: total mass per unit volume.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the humidity ratio is negative or the
    /// pressure is not positive.
    pub fn moist_air_density(
        &self,
        t_dry_bulb: f64,
        hum_ratio: f64,
        pressure: f64,
    ) -> Result<f64, PsychroError> {
        let w = check::hum_ratio(hum_ratio)?;
        Ok((1.0 + w) / self.moist_air_volume(t_dry_bulb, w, pressure)?)
    }
}
