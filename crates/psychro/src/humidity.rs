//! Conversions among the humidity representations.
//!
//! Relative humidity, vapor pressure, humidity ratio, specific humidity, dew
//! point, and wet bulb all describe the moisture content of the air. The
//! direct conversions here are closed form. Conversions that end in a dew
//! point or wet bulb delegate to the solvers in `dew_point` and `wet_bulb`.

use crate::{PsychroError, Psychrometrics, check};

/// Ratio of the molecular mass of water vapor to that of dry air.
pub(crate) const MOLAR_MASS_RATIO: f64 = 0.621_945;

impl Psychrometrics {
    /// Wet-bulb temperature from dry-bulb and dew-point temperatures.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the dew point is above the dry bulb or any
    /// input is out of range.
    pub fn t_wet_bulb_from_t_dew_point(
        &self,
        t_dry_bulb: f64,
        t_dew_point: f64,
        pressure: f64,
    ) -> Result<f64, PsychroError> {
        check::not_above_dry_bulb("dew-point temperature", t_dew_point, t_dry_bulb)?;
        let hum_ratio = self.hum_ratio_from_t_dew_point(t_dew_point, pressure)?;
        self.t_wet_bulb_from_hum_ratio(t_dry_bulb, hum_ratio, pressure)
    }

    /// Wet-bulb temperature from dry-bulb temperature and relative humidity.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the relative humidity is outside `[0, 1]` or
    /// any other input is out of range.
    pub fn t_wet_bulb_from_rel_hum(
        &self,
        t_dry_bulb: f64,
        rel_hum: f64,
        pressure: f64,
    ) -> Result<f64, PsychroError> {
        let hum_ratio = self.hum_ratio_from_rel_hum(t_dry_bulb, rel_hum, pressure)?;
        self.t_wet_bulb_from_hum_ratio(t_dry_bulb, hum_ratio, pressure)
    }

    /// Relative humidity from dry-bulb and dew-point temperatures.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the dew point is above the dry bulb or either
    /// temperature is out of range.
    pub fn rel_hum_from_t_dew_point(
        &self,
        t_dry_bulb: f64,
        t_dew_point: f64,
    ) -> Result<f64, PsychroError> {
        check::not_above_dry_bulb("dew-point temperature", t_dew_point, t_dry_bulb)?;
        Ok(self.sat_vap_pres(t_dew_point)? / self.sat_vap_pres(t_dry_bulb)?)
    }

    /// Relative humidity from dry-bulb and wet-bulb temperatures.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the wet bulb is above the dry bulb or any
    /// input is out of range.
    pub fn rel_hum_from_t_wet_bulb(
        &self,
        t_dry_bulb: f64,
        t_wet_bulb: f64,
        pressure: f64,
    ) -> Result<f64, PsychroError> {
        let hum_ratio = self.hum_ratio_from_t_wet_bulb(t_dry_bulb, t_wet_bulb, pressure)?;
        self.rel_hum_from_hum_ratio(t_dry_bulb, hum_ratio, pressure)
    }

    /// Dew-point temperature from dry-bulb temperature and relative humidity.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the relative humidity is outside `[0, 1]` or
    /// the resulting vapor pressure has no dew point in the valid range, as
    /// happens for completely dry air.
    pub fn t_dew_point_from_rel_hum(
        &self,
        t_dry_bulb: f64,
        rel_hum: f64,
    ) -> Result<f64, PsychroError> {
        let vap_pres = self.vap_pres_from_rel_hum(t_dry_bulb, rel_hum)?;
        self.t_dew_point_from_vap_pres(t_dry_bulb, vap_pres)
    }

    /// Dew-point temperature from dry-bulb and wet-bulb temperatures.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the wet bulb is above the dry bulb or any
    /// input is out of range.
    pub fn t_dew_point_from_t_wet_bulb(
        &self,
        t_dry_bulb: f64,
        t_wet_bulb: f64,
        pressure: f64,
    ) -> Result<f64, PsychroError> {
        let hum_ratio = self.hum_ratio_from_t_wet_bulb(t_dry_bulb, t_wet_bulb, pressure)?;
        self.t_dew_point_from_hum_ratio(t_dry_bulb, hum_ratio, pressure)
    }

    /// Partial pressure of water vapor from relative humidity.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the relative humidity is outside `[0, 1]` or
    /// the temperature is out of range.
    pub fn vap_pres_from_rel_hum(&self, t_dry_bulb: f64, rel_hum: f64) -> Result<f64, PsychroError> {
        let rel_hum = check::rel_hum(rel_hum)?;
        Ok(rel_hum * self.sat_vap_pres(t_dry_bulb)?)
    }

    /// Relative humidity from the partial pressure of water vapor.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the vapor pressure is negative or the
    /// temperature is out of range.
    pub fn rel_hum_from_vap_pres(&self, t_dry_bulb: f64, vap_pres: f64) -> Result<f64, PsychroError> {
        let vap_pres = check::non_negative("vapor pressure", vap_pres)?;
        Ok(vap_pres / self.sat_vap_pres(t_dry_bulb)?)
    }

    /// Partial pressure of water vapor at a dew-point temperature.
    ///
    /// # Errors
    ///
    /// Returns [`PsychroError::OutOfRange`] outside the valid temperature range.
    pub fn vap_pres_from_t_dew_point(&self, t_dew_point: f64) -> Result<f64, PsychroError> {
        self.sat_vap_pres(t_dew_point)
    }

    /// Humidity ratio from dry-bulb temperature and relative humidity.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the relative humidity is outside `[0, 1]` or
    /// any other input is out of range.
    pub fn hum_ratio_from_rel_hum(
        &self,
        t_dry_bulb: f64,
        rel_hum: f64,
        pressure: f64,
    ) -> Result<f64, PsychroError> {
        let vap_pres = self.vap_pres_from_rel_hum(t_dry_bulb, rel_hum)?;
        self.hum_ratio_from_vap_pres(vap_pres, pressure)
    }

    /// Relative humidity from humidity ratio.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the humidity ratio is negative or any other
    /// input is out of range.
    pub fn rel_hum_from_hum_ratio(
        &self,
        t_dry_bulb: f64,
        hum_ratio: f64,
        pressure: f64,
    ) -> Result<f64, PsychroError> {
        let vap_pres = self.vap_pres_from_hum_ratio(hum_ratio, pressure)?;
        self.rel_hum_from_vap_pres(t_dry_bulb, vap_pres)
    }

    /// Humidity ratio of air with the given dew-point temperature.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the dew point is out of range or the pressure
    /// is not positive.
    pub fn hum_ratio_from_t_dew_point(
        &self,
        t_dew_point: f64,
        pressure: f64,
    ) -> Result<f64, PsychroError> {
        let vap_pres = self.sat_vap_pres(t_dew_point)?;
        self.hum_ratio_from_vap_pres(vap_pres, pressure)
    }

    /// Dew-point temperature from humidity ratio.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the humidity ratio is negative or any other
    /// input is out of range, or a solver error if the dew point cannot be found.
    pub fn t_dew_point_from_hum_ratio(
        &self,
        t_dry_bulb: f64,
        hum_ratio: f64,
        pressure: f64,
    ) -> Result<f64, PsychroError> {
        let vap_pres = self.vap_pres_from_hum_ratio(hum_ratio, pressure)?;
        self.t_dew_point_from_vap_pres(t_dry_bulb, vap_pres)
    }

    /// Humidity ratio from the partial pressure of water vapor.
    ///
    /// The result is floored to [`MIN_HUM_RATIO`](crate::MIN_HUM_RATIO).
    ///
    /// # Errors
    ///
    /// Returns a domain error if the vapor pressure is negative or the
    /// pressure is not positive.
    pub fn hum_ratio_from_vap_pres(&self, vap_pres: f64, pressure: f64) -> Result<f64, PsychroError> {
        let vap_pres = check::non_negative("vapor pressure", vap_pres)?;
        let pressure = check::positive("pressure", pressure)?;
        Ok(check::floor_hum_ratio(
            MOLAR_MASS_RATIO * vap_pres / (pressure - vap_pres),
        ))
    }

    /// Partial pressure of water vapor from humidity ratio.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the humidity ratio is negative or the
    /// pressure is not positive.
    pub fn vap_pres_from_hum_ratio(&self, hum_ratio: f64, pressure: f64) -> Result<f64, PsychroError> {
        let hum_ratio = check::hum_ratio(hum_ratio)?;
        let pressure = check::positive("pressure", pressure)?;
        Ok(pressure * hum_ratio / (MOLAR_MASS_RATIO + hum_ratio))
    }

    /// Specific humidity (mass of vapor per mass of moist air) from humidity ratio.
    ///
    /// # Errors
    ///
    /// Returns [`PsychroError::Negative`] if the humidity ratio is negative.
    pub fn specific_hum_from_hum_ratio(&self, hum_ratio: f64) -> Result<f64, PsychroError> {
        let hum_ratio = check::hum_ratio(hum_ratio)?;
        Ok(hum_ratio / (1.0 + hum_ratio))
    }

    /// Humidity ratio from specific humidity.
    ///
    /// # Errors
    ///
    /// Returns [`PsychroError::OutOfRange`] unless `0 <= specific_hum < 1`.
    pub fn hum_ratio_from_specific_hum(&self, specific_hum: f64) -> Result<f64, PsychroError> {
        if !(0.0..1.0).contains(&specific_hum) {
            return Err(PsychroError::OutOfRange {
                quantity: "specific humidity",
                value: specific_hum,
                min: 0.0,
                max: 1.0,
            });
        }
        Ok(check::floor_hum_ratio(specific_hum / (1.0 - specific_hum)))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::{MIN_HUM_RATIO, PsychroError, Psychrometrics, UnitSystem};

    const SI: Psychrometrics = Psychrometrics::new(UnitSystem::Metric);

    #[test]
    fn hum_ratio_and_vap_pres() {
        let hum_ratio = SI.hum_ratio_from_vap_pres(3169.7, 95_461.0).expect("valid");
        assert_relative_eq!(hum_ratio, 0.021_360_399_804_748_7, max_relative = 1e-6);

        let vap_pres = SI.vap_pres_from_hum_ratio(hum_ratio, 95_461.0).expect("valid");
        assert_relative_eq!(vap_pres, 3169.7, epsilon = 1e-4);
    }

    #[test]
    fn vap_pres_and_rel_hum() {
        let vap_pres = SI.vap_pres_from_rel_hum(25.0, 0.8).expect("valid");
        assert_relative_eq!(vap_pres, 3169.7 * 0.8, max_relative = 3e-4);

        let rel_hum = SI.rel_hum_from_vap_pres(25.0, vap_pres).expect("valid");
        assert_relative_eq!(rel_hum, 0.8, max_relative = 3e-4);
    }

    #[test]
    fn specific_humidity() {
        let specific = SI.specific_hum_from_hum_ratio(0.006).expect("valid");
        assert_relative_eq!(specific, 0.005_964_214_71, max_relative = 1e-6);

        let hum_ratio = SI.hum_ratio_from_specific_hum(specific).expect("valid");
        assert_relative_eq!(hum_ratio, 0.006, max_relative = 1e-9);

        assert!(SI.hum_ratio_from_specific_hum(1.0).is_err());
        assert!(SI.hum_ratio_from_specific_hum(-0.1).is_err());
    }

    #[test]
    fn dry_air_is_floored() {
        let hum_ratio = SI.hum_ratio_from_rel_hum(20.0, 0.0, 101_325.0).expect("valid");
        assert_relative_eq!(hum_ratio, MIN_HUM_RATIO);
    }

    #[test]
    fn rel_hum_from_dew_point_is_one_at_saturation() {
        assert_relative_eq!(SI.rel_hum_from_t_dew_point(25.0, 25.0).expect("valid"), 1.0);

        let err = SI.rel_hum_from_t_dew_point(20.0, 21.0).expect_err("dew point above dry bulb");
        assert!(matches!(err, PsychroError::AboveDryBulb { .. }));
    }

    #[test]
    fn rejects_invalid_inputs() {
        assert!(matches!(
            SI.vap_pres_from_rel_hum(20.0, 1.5),
            Err(PsychroError::OutOfRange { .. })
        ));
        assert!(matches!(
            SI.rel_hum_from_vap_pres(20.0, -1.0),
            Err(PsychroError::Negative { .. })
        ));
        assert!(matches!(
            SI.vap_pres_from_hum_ratio(0.01, 0.0),
            Err(PsychroError::NonPositive { .. })
        ));
        assert!(matches!(
            SI.rel_hum_from_hum_ratio(20.0, -0.01, 101_325.0),
            Err(PsychroError::Negative { .. })
        ));
    }
}
