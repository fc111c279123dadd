//! Unit systems and temperature scale helpers.

use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, P3, Z0},
};

use crate::PsychroError;

/// Specific volume, m³/kg in SI.
pub type SpecificVolume = Quantity<ISQ<P3, N1, Z0, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

const KELVIN_OFFSET: f64 = 273.15;
const RANKINE_OFFSET: f64 = 459.67;

/// The unit system a [`Psychrometrics`](crate::Psychrometrics) handle works in.
///
/// | quantity | `Metric` (SI) | `Imperial` (IP) |
/// |---|---|---|
/// | temperature | °C | °F |
/// | pressure | Pa | psi |
/// | humidity ratio | kg/kg | lb/lb |
/// | enthalpy | J/kg | Btu/lb |
/// | specific volume | m³/kg | ft³/lb |
/// | density | kg/m³ | lb/ft³ |
/// | altitude | m | ft |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnitSystem {
    Metric,
    Imperial,
}

impl UnitSystem {
    /// Alias for [`UnitSystem::Metric`].
    pub const SI: Self = Self::Metric;

    /// Alias for [`UnitSystem::Imperial`].
    pub const IP: Self = Self::Imperial;

    /// Returns true for the imperial (IP) system.
    #[must_use]
    pub const fn is_imperial(self) -> bool {
        matches!(self, Self::Imperial)
    }

    /// Default solver tolerance on temperature.
    ///
    /// 0.001 °C, or the same interval expressed in °F.
    #[must_use]
    pub const fn tolerance(self) -> f64 {
        match self {
            Self::Metric => 0.001,
            Self::Imperial => 0.001 * 9.0 / 5.0,
        }
    }

    /// Temperatures over which the saturation pressure correlation is valid.
    #[must_use]
    pub const fn temperature_range(self) -> [f64; 2] {
        match self {
            Self::Metric => [-100.0, 200.0],
            Self::Imperial => [-148.0, 392.0],
        }
    }

    /// Triple point of water, where the saturation curve switches from ice to liquid.
    #[must_use]
    pub const fn triple_point(self) -> f64 {
        match self {
            Self::Metric => 0.01,
            Self::Imperial => 32.018,
        }
    }

    /// Freezing point of water, where the wet-bulb relation switches from ice to liquid.
    #[must_use]
    pub const fn freezing_point(self) -> f64 {
        match self {
            Self::Metric => 0.0,
            Self::Imperial => 32.0,
        }
    }

    /// Gas constant of dry air, J/(kg·K) or ft·lbf/(lb·°R).
    #[must_use]
    pub const fn dry_air_gas_constant(self) -> f64 {
        match self {
            Self::Metric => 287.042,
            Self::Imperial => 53.350,
        }
    }

    /// Converts a temperature to the absolute scale (K or °R).
    #[must_use]
    pub fn absolute(self, t: f64) -> f64 {
        match self {
            Self::Metric => t_kelvin_from_t_celsius(t),
            Self::Imperial => t_rankine_from_t_fahrenheit(t),
        }
    }

    /// Converts an absolute temperature (K or °R) back to °C or °F.
    #[must_use]
    pub fn relative(self, t: f64) -> f64 {
        match self {
            Self::Metric => t_celsius_from_t_kelvin(t),
            Self::Imperial => t_fahrenheit_from_t_rankine(t),
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => f.write_str("SI"),
            Self::Imperial => f.write_str("IP"),
        }
    }
}

impl FromStr for UnitSystem {
    type Err = PsychroError;

    /// Parses `SI`, `metric`, `IP`, or `imperial`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "si" | "metric" => Ok(Self::Metric),
            "ip" | "imperial" => Ok(Self::Imperial),
            _ => Err(PsychroError::UnknownUnitSystem(s.to_owned())),
        }
    }
}

/// Converts °C to K.
#[must_use]
pub fn t_kelvin_from_t_celsius(t: f64) -> f64 {
    t + KELVIN_OFFSET
}

/// Converts K to °C.
#[must_use]
pub fn t_celsius_from_t_kelvin(t: f64) -> f64 {
    t - KELVIN_OFFSET
}

/// Converts °F to °R.
#[must_use]
pub fn t_rankine_from_t_fahrenheit(t: f64) -> f64 {
    t + RANKINE_OFFSET
}

/// Converts °R to °F.
#[must_use]
pub fn t_fahrenheit_from_t_rankine(t: f64) -> f64 {
    t - RANKINE_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn temperature_scales() {
        assert_relative_eq!(t_kelvin_from_t_celsius(20.0), 293.15);
        assert_relative_eq!(t_celsius_from_t_kelvin(293.15), 20.0);
        assert_relative_eq!(t_rankine_from_t_fahrenheit(70.0), 529.67);
        assert_relative_eq!(t_fahrenheit_from_t_rankine(529.67), 70.0);

        assert_relative_eq!(UnitSystem::Metric.absolute(25.0), 298.15);
        assert_relative_eq!(UnitSystem::Imperial.relative(529.67), 70.0);
    }

    #[test]
    fn imperial_tolerance_is_the_same_interval() {
        assert_relative_eq!(UnitSystem::Imperial.tolerance(), 0.0018, epsilon = 1e-15);
        assert!(UnitSystem::IP.is_imperial());
        assert!(!UnitSystem::SI.is_imperial());
    }

    #[test]
    fn parses_names() {
        assert_eq!("SI".parse::<UnitSystem>().ok(), Some(UnitSystem::Metric));
        assert_eq!(" metric ".parse::<UnitSystem>().ok(), Some(UnitSystem::Metric));
        assert_eq!("ip".parse::<UnitSystem>().ok(), Some(UnitSystem::Imperial));
        assert_eq!("Imperial".parse::<UnitSystem>().ok(), Some(UnitSystem::Imperial));

        let err = "furlongs".parse::<UnitSystem>().expect_err("unknown name");
        assert!(matches!(err, PsychroError::UnknownUnitSystem(name) if name == "furlongs"));
    }

    #[test]
    fn display_round_trips() {
        for units in [UnitSystem::Metric, UnitSystem::Imperial] {
            assert_eq!(units.to_string().parse::<UnitSystem>().ok(), Some(units));
        }
    }
}
