//! Full psychrometric state from one humidity measurement.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{PsychroError, Psychrometrics, check};

/// Every psychrometric property of one moist air state.
///
/// Values are in the unit system of the [`Psychrometrics`] handle that
/// produced them. The humidity measurement the state was built from is
/// echoed back unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Properties {
    pub hum_ratio: f64,
    pub t_wet_bulb: f64,
    pub t_dew_point: f64,
    pub rel_hum: f64,
    pub vap_pres: f64,
    pub moist_air_enthalpy: f64,
    pub moist_air_volume: f64,
    pub degree_of_saturation: f64,
}

impl Psychrometrics {
    /// Computes all properties from dry-bulb and wet-bulb temperatures.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the wet bulb is above the dry bulb or any
    /// input is out of range, or a solver error from the dew point.
    pub fn calc_psychrometrics_from_t_wet_bulb(
        &self,
        t_dry_bulb: f64,
        t_wet_bulb: f64,
        pressure: f64,
    ) -> Result<Properties, PsychroError> {
        check::not_above_dry_bulb("wet-bulb temperature", t_wet_bulb, t_dry_bulb)?;
        let hum_ratio = self.hum_ratio_from_t_wet_bulb(t_dry_bulb, t_wet_bulb, pressure)?;
        let t_dew_point = self.t_dew_point_from_hum_ratio(t_dry_bulb, hum_ratio, pressure)?;
        let rel_hum = self.rel_hum_from_hum_ratio(t_dry_bulb, hum_ratio, pressure)?;
        self.complete(t_dry_bulb, pressure, hum_ratio, t_wet_bulb, t_dew_point, rel_hum)
    }

    /// Computes all properties from dry-bulb and dew-point temperatures.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the dew point is above the dry bulb or any
    /// input is out of range, or a solver error from the wet bulb.
    pub fn calc_psychrometrics_from_t_dew_point(
        &self,
        t_dry_bulb: f64,
        t_dew_point: f64,
        pressure: f64,
    ) -> Result<Properties, PsychroError> {
        check::not_above_dry_bulb("dew-point temperature", t_dew_point, t_dry_bulb)?;
        let hum_ratio = self.hum_ratio_from_t_dew_point(t_dew_point, pressure)?;
        let t_wet_bulb = self.t_wet_bulb_from_hum_ratio(t_dry_bulb, hum_ratio, pressure)?;
        let rel_hum = self.rel_hum_from_hum_ratio(t_dry_bulb, hum_ratio, pressure)?;
        self.complete(t_dry_bulb, pressure, hum_ratio, t_wet_bulb, t_dew_point, rel_hum)
    }

    /// Computes all properties from dry-bulb temperature and relative humidity.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the relative humidity is outside `[0, 1]` or
    /// any other input is out of range, or a solver error.
    pub fn calc_psychrometrics_from_rel_hum(
        &self,
        t_dry_bulb: f64,
        rel_hum: f64,
        pressure: f64,
    ) -> Result<Properties, PsychroError> {
        check::rel_hum(rel_hum)?;
        let hum_ratio = self.hum_ratio_from_rel_hum(t_dry_bulb, rel_hum, pressure)?;
        let t_wet_bulb = self.t_wet_bulb_from_hum_ratio(t_dry_bulb, hum_ratio, pressure)?;
        let t_dew_point = self.t_dew_point_from_hum_ratio(t_dry_bulb, hum_ratio, pressure)?;
        self.complete(t_dry_bulb, pressure, hum_ratio, t_wet_bulb, t_dew_point, rel_hum)
    }

    /// Fills in the properties that follow directly from the humidity ratio.
    fn complete(
        &self,
        t_dry_bulb: f64,
        pressure: f64,
        hum_ratio: f64,
        t_wet_bulb: f64,
        t_dew_point: f64,
        rel_hum: f64,
    ) -> Result<Properties, PsychroError> {
        Ok(Properties {
            hum_ratio,
            t_wet_bulb,
            t_dew_point,
            rel_hum,
            vap_pres: self.vap_pres_from_hum_ratio(hum_ratio, pressure)?,
            moist_air_enthalpy: self.moist_air_enthalpy(t_dry_bulb, hum_ratio)?,
            moist_air_volume: self.moist_air_volume(t_dry_bulb, hum_ratio, pressure)?,
            degree_of_saturation: self.degree_of_saturation(t_dry_bulb, hum_ratio, pressure)?,
        })
    }
}
