//! Unit-tagged moist air states.

use uom::si::{
    available_energy::joule_per_kilogram,
    f64::{AvailableEnergy, Mass, MassDensity, Pressure, Ratio, ThermodynamicTemperature, Volume},
    mass::kilogram,
    mass_density::kilogram_per_cubic_meter,
    pressure::pascal,
    ratio::ratio,
    thermodynamic_temperature::degree_celsius,
    volume::cubic_meter,
};

use crate::{PsychroError, Psychrometrics, UnitSystem, check, units::SpecificVolume};

const METRIC: Psychrometrics = Psychrometrics::new(UnitSystem::Metric);

/// A state of moist air.
///
/// The state is fixed by dry-bulb temperature, total pressure, and humidity
/// ratio. Every other property is derived on request, so each getter may
/// fail if a solver does not converge.
///
/// ```
/// use psychro::MoistAir;
/// use uom::si::{
///     f64::{Pressure, ThermodynamicTemperature},
///     pressure::pascal,
///     ratio::ratio,
///     thermodynamic_temperature::degree_celsius,
/// };
///
/// let air = MoistAir::from_wet_bulb(
///     ThermodynamicTemperature::new::<degree_celsius>(40.0),
///     ThermodynamicTemperature::new::<degree_celsius>(20.0),
///     Pressure::new::<pascal>(101_325.0),
/// )
/// .unwrap();
///
/// assert!((air.humidity_ratio().get::<ratio>() - 0.0065).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoistAir {
    dry_bulb: ThermodynamicTemperature,
    pressure: Pressure,
    humidity_ratio: Ratio,
}

impl MoistAir {
    /// Creates a state from its humidity ratio.
    ///
    /// Humidity ratios below [`MIN_HUM_RATIO`](crate::MIN_HUM_RATIO) are raised
    /// to it.
    ///
    /// # Errors
    ///
    /// Fails if the dry bulb is out of range, the pressure is not positive, or
    /// the humidity ratio is negative.
    pub fn from_humidity_ratio(
        dry_bulb: ThermodynamicTemperature,
        pressure: Pressure,
        humidity_ratio: Ratio,
    ) -> Result<Self, PsychroError> {
        METRIC.check_temperature("dry-bulb temperature", dry_bulb.get::<degree_celsius>())?;
        check::positive("pressure", pressure.get::<pascal>())?;
        let w = check::hum_ratio(humidity_ratio.get::<ratio>())?;
        Ok(Self {
            dry_bulb,
            pressure,
            humidity_ratio: Ratio::new::<ratio>(w),
        })
    }

    /// Creates a state from dry-bulb and wet-bulb temperatures.
    ///
    /// # Errors
    ///
    /// Fails if the wet bulb is above the dry bulb or any input is out of range.
    pub fn from_wet_bulb(
        dry_bulb: ThermodynamicTemperature,
        wet_bulb: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> Result<Self, PsychroError> {
        let w = METRIC.hum_ratio_from_t_wet_bulb(
            dry_bulb.get::<degree_celsius>(),
            wet_bulb.get::<degree_celsius>(),
            pressure.get::<pascal>(),
        )?;
        Self::from_humidity_ratio(dry_bulb, pressure, Ratio::new::<ratio>(w))
    }

    /// Creates a state from dry-bulb and dew-point temperatures.
    ///
    /// # Errors
    ///
    /// Fails if the dew point is above the dry bulb or any input is out of range.
    pub fn from_dew_point(
        dry_bulb: ThermodynamicTemperature,
        dew_point: ThermodynamicTemperature,
        pressure: Pressure,
    ) -> Result<Self, PsychroError> {
        let t_dew_point = dew_point.get::<degree_celsius>();
        check::not_above_dry_bulb(
            "dew-point temperature",
            t_dew_point,
            dry_bulb.get::<degree_celsius>(),
        )?;
        let w = METRIC.hum_ratio_from_t_dew_point(t_dew_point, pressure.get::<pascal>())?;
        Self::from_humidity_ratio(dry_bulb, pressure, Ratio::new::<ratio>(w))
    }

    /// Creates a state from dry-bulb temperature and relative humidity.
    ///
    /// # Errors
    ///
    /// Fails if the relative humidity is outside `[0, 1]` or any other input is
    /// out of range.
    pub fn from_relative_humidity(
        dry_bulb: ThermodynamicTemperature,
        relative_humidity: Ratio,
        pressure: Pressure,
    ) -> Result<Self, PsychroError> {
        let w = METRIC.hum_ratio_from_rel_hum(
            dry_bulb.get::<degree_celsius>(),
            relative_humidity.get::<ratio>(),
            pressure.get::<pascal>(),
        )?;
        Self::from_humidity_ratio(dry_bulb, pressure, Ratio::new::<ratio>(w))
    }

    #[must_use]
    pub fn dry_bulb(&self) -> ThermodynamicTemperature {
        self.dry_bulb
    }

    #[must_use]
    pub fn pressure(&self) -> Pressure {
        self.pressure
    }

    #[must_use]
    pub fn humidity_ratio(&self) -> Ratio {
        self.humidity_ratio
    }

    /// Returns the thermodynamic wet-bulb temperature.
    ///
    /// # Errors
    ///
    /// Fails if the wet-bulb solver does not converge.
    pub fn wet_bulb(&self) -> Result<ThermodynamicTemperature, PsychroError> {
        let [t, w, p] = self.raw();
        METRIC
            .t_wet_bulb_from_hum_ratio(t, w, p)
            .map(ThermodynamicTemperature::new::<degree_celsius>)
    }

    /// Returns the dew-point temperature.
    ///
    /// # Errors
    ///
    /// Fails if the dew-point solver does not converge.
    pub fn dew_point(&self) -> Result<ThermodynamicTemperature, PsychroError> {
        let [t, w, p] = self.raw();
        METRIC
            .t_dew_point_from_hum_ratio(t, w, p)
            .map(ThermodynamicTemperature::new::<degree_celsius>)
    }

    /// Returns the relative humidity.
    ///
    /// # Errors
    ///
    /// Propagates range errors from the saturation curve.
    pub fn relative_humidity(&self) -> Result<Ratio, PsychroError> {
        let [t, w, p] = self.raw();
        METRIC.rel_hum_from_hum_ratio(t, w, p).map(Ratio::new::<ratio>)
    }

    /// Returns the partial pressure of water vapor.
    ///
    /// # Errors
    ///
    /// Propagates validation errors from the underlying conversion.
    pub fn vapor_pressure(&self) -> Result<Pressure, PsychroError> {
        let [_, w, p] = self.raw();
        METRIC.vap_pres_from_hum_ratio(w, p).map(Pressure::new::<pascal>)
    }

    /// Returns the moist air enthalpy per unit mass of dry air.
    ///
    /// # Errors
    ///
    /// Propagates validation errors from the underlying conversion.
    pub fn enthalpy(&self) -> Result<AvailableEnergy, PsychroError> {
        let [t, w, _] = self.raw();
        METRIC
            .moist_air_enthalpy(t, w)
            .map(AvailableEnergy::new::<joule_per_kilogram>)
    }

    /// Returns the moist air volume per unit mass of dry air.
    ///
    /// # Errors
    ///
    /// Propagates validation errors from the underlying conversion.
    pub fn specific_volume(&self) -> Result<SpecificVolume, PsychroError> {
        let [t, w, p] = self.raw();
        let v = METRIC.moist_air_volume(t, w, p)?;
        Ok(Volume::new::<cubic_meter>(v) / Mass::new::<kilogram>(1.0))
    }

    /// Returns the moist air density.
    ///
    /// # Errors
    ///
    /// Propagates validation errors from the underlying conversion.
    pub fn density(&self) -> Result<MassDensity, PsychroError> {
        let [t, w, p] = self.raw();
        METRIC
            .moist_air_density(t, w, p)
            .map(MassDensity::new::<kilogram_per_cubic_meter>)
    }

    /// Returns the degree of saturation.
    ///
    /// # Errors
    ///
    /// Propagates range errors from the saturation curve.
    pub fn degree_of_saturation(&self) -> Result<Ratio, PsychroError> {
        let [t, w, p] = self.raw();
        METRIC.degree_of_saturation(t, w, p).map(Ratio::new::<ratio>)
    }

    /// Dry bulb (°C), humidity ratio, and pressure (Pa).
    fn raw(&self) -> [f64; 3] {
        [
            self.dry_bulb.get::<degree_celsius>(),
            self.humidity_ratio.get::<ratio>(),
            self.pressure.get::<pascal>(),
        ]
    }
}
