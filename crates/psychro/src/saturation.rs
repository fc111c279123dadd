//! Saturation vapor pressure of water over ice and liquid water.

use psychro_core::Model;

use crate::{PsychroError, Psychrometrics, UnitSystem, check};

/// `ln(Pws) = c/T + a0 + a1·T + a2·T² + a3·T³ + a4·T⁴ + g·ln(T)` with `T` absolute.
struct Correlation {
    c: f64,
    a: [f64; 5],
    g: f64,
}

impl Correlation {
    fn ln_pws(&self, t: f64) -> f64 {
        let poly = self.a.iter().rev().fold(0.0, |acc, a| acc * t + a);
        self.c / t + poly + self.g * t.ln()
    }

    fn d_ln_pws(&self, t: f64) -> f64 {
        let slope = self
            .a
            .iter()
            .enumerate()
            .skip(1)
            .rev()
            .fold(0.0, |acc, (n, a)| acc * t + n as f64 * a);
        -self.c / (t * t) + slope + self.g / t
    }
}

// ASHRAE Fundamentals (2017) ch. 1 eqn. 5 and 6, and their IP forms.
const ICE_SI: Correlation = Correlation {
    c: -5.674_535_9e3,
    a: [6.392_524_7, -9.677_843e-3, 6.221_570_1e-7, 2.074_782_5e-9, -9.484_024e-13],
    g: 4.163_501_9,
};
const LIQUID_SI: Correlation = Correlation {
    c: -5.800_220_6e3,
    a: [1.391_499_3, -4.864_023_9e-2, 4.176_476_8e-5, -1.445_209_3e-8, 0.0],
    g: 6.545_967_3,
};
const ICE_IP: Correlation = Correlation {
    c: -1.021_416_5e4,
    a: [-4.893_242_8, -5.376_579_4e-3, 1.920_237_7e-7, 3.557_583_2e-10, -9.034_468_8e-14],
    g: 4.163_501_9,
};
const LIQUID_IP: Correlation = Correlation {
    c: -1.044_039_7e4,
    a: [-1.129_465_0e1, -2.702_235_5e-2, 1.289_036_0e-5, -2.478_068_1e-9, 0.0],
    g: 6.545_967_3,
};

/// `ln(Pws)` and its temperature derivative at one temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaturationPoint {
    /// Natural log of the saturation vapor pressure (Pa or psi).
    pub ln_pws: f64,
    /// `d ln(Pws) / dT`, per °C or °F.
    pub d_ln_pws: f64,
}

/// The saturation vapor pressure curve as a [`Model`] of temperature.
///
/// At and below the triple point of water the curve is the sublimation
/// pressure over ice, above it the vapor pressure over liquid water.
/// Temperatures outside [`UnitSystem::temperature_range`] are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaturationCurve {
    units: UnitSystem,
}

impl SaturationCurve {
    #[must_use]
    pub const fn new(units: UnitSystem) -> Self {
        Self { units }
    }

    fn correlation(&self, t: f64) -> &'static Correlation {
        let over_ice = t <= self.units.triple_point();
        match (self.units, over_ice) {
            (UnitSystem::Metric, true) => &ICE_SI,
            (UnitSystem::Metric, false) => &LIQUID_SI,
            (UnitSystem::Imperial, true) => &ICE_IP,
            (UnitSystem::Imperial, false) => &LIQUID_IP,
        }
    }

    fn check(&self, t: f64) -> Result<f64, PsychroError> {
        check::in_range("dry-bulb temperature", t, self.units.temperature_range())
    }

    /// Returns `ln(Pws)` at temperature `t`.
    ///
    /// # Errors
    ///
    /// Returns [`PsychroError::OutOfRange`] outside the valid temperature range.
    pub fn ln_sat_vap_pres(&self, t: f64) -> Result<f64, PsychroError> {
        let t = self.check(t)?;
        Ok(self.correlation(t).ln_pws(self.units.absolute(t)))
    }

    /// Returns `d ln(Pws) / dT` at temperature `t`.
    ///
    /// # Errors
    ///
    /// Returns [`PsychroError::OutOfRange`] outside the valid temperature range.
    pub fn d_ln_sat_vap_pres(&self, t: f64) -> Result<f64, PsychroError> {
        let t = self.check(t)?;
        Ok(self.correlation(t).d_ln_pws(self.units.absolute(t)))
    }
}

impl Model for SaturationCurve {
    type Input = f64;
    type Output = SaturationPoint;
    type Error = PsychroError;

    fn call(&self, t: &f64) -> Result<SaturationPoint, PsychroError> {
        let t = self.check(*t)?;
        let correlation = self.correlation(t);
        let t_abs = self.units.absolute(t);
        Ok(SaturationPoint {
            ln_pws: correlation.ln_pws(t_abs),
            d_ln_pws: correlation.d_ln_pws(t_abs),
        })
    }
}

impl Psychrometrics {
    /// Saturation vapor pressure at dry-bulb temperature `t_dry_bulb`.
    ///
    /// # Errors
    ///
    /// Returns [`PsychroError::OutOfRange`] outside the valid temperature range.
    pub fn sat_vap_pres(&self, t_dry_bulb: f64) -> Result<f64, PsychroError> {
        self.saturation_curve()
            .ln_sat_vap_pres(t_dry_bulb)
            .map(f64::exp)
    }

    /// Derivative of `ln(Pws)` with respect to temperature.
    ///
    /// # Errors
    ///
    /// Returns [`PsychroError::OutOfRange`] outside the valid temperature range.
    pub fn d_ln_sat_vap_pres(&self, t_dry_bulb: f64) -> Result<f64, PsychroError> {
        self.saturation_curve().d_ln_sat_vap_pres(t_dry_bulb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    const SI: Psychrometrics = Psychrometrics::new(UnitSystem::Metric);
    const IP: Psychrometrics = Psychrometrics::new(UnitSystem::Imperial);

    #[test]
    fn metric_reference_values() {
        let cases = [
            (-20.0, 103.24),
            (-5.0, 401.74),
            (5.0, 872.6),
            (25.0, 3169.7),
            (50.0, 12351.3),
            (100.0, 101_418.0),
            (150.0, 476_101.4),
        ];
        for (t, expected) in cases {
            let pws = SI.sat_vap_pres(t).expect("in range");
            assert_relative_eq!(pws, expected, max_relative = 3e-4);
        }
        assert_abs_diff_eq!(SI.sat_vap_pres(-60.0).expect("in range"), 1.08, epsilon = 0.01);
    }

    #[test]
    fn imperial_reference_values() {
        let cases = [
            (-4.0, 0.014_974),
            (23.0, 0.058_268),
            (41.0, 0.12656),
            (77.0, 0.45973),
            (122.0, 1.79140),
            (212.0, 14.7094),
            (300.0, 67.0206),
        ];
        for (t, expected) in cases {
            let pws = IP.sat_vap_pres(t).expect("in range");
            assert_relative_eq!(pws, expected, max_relative = 3e-4);
        }
    }

    #[test]
    fn rejects_out_of_range_temperatures() {
        for t in [-100.1, 200.1, f64::NAN] {
            let err = SI.sat_vap_pres(t).expect_err("out of range");
            assert!(err.is_domain_error());
        }
        assert!(IP.sat_vap_pres(392.5).is_err());
        assert!(SI.sat_vap_pres(-100.0).is_ok());
        assert!(SI.sat_vap_pres(200.0).is_ok());
    }

    #[test]
    fn monotonic_and_continuous_across_triple_point() {
        for psy in [SI, IP] {
            let units = psy.unit_system();
            let [t_min, t_max] = units.temperature_range();
            let steps = ((t_max - t_min) / 0.1).round() as u32;

            let mut previous = 0.0;
            for step in 0..=steps {
                let t = (t_min + 0.1 * f64::from(step)).min(t_max);
                let pws = psy.sat_vap_pres(t).expect("in range");
                assert!(pws > previous, "{units} not increasing at {t}");
                previous = pws;
            }

            let t_triple = units.triple_point();
            let below = psy.sat_vap_pres(t_triple).expect("in range");
            let above = psy.sat_vap_pres(t_triple + 1e-6).expect("in range");
            assert_relative_eq!(below, above, max_relative = 1e-3);
        }
    }

    #[test]
    fn derivative_matches_finite_difference() {
        for units in [UnitSystem::Metric, UnitSystem::Imperial] {
            let curve = SaturationCurve::new(units);
            let [lo, hi] = units.temperature_range();
            for t in [lo + 1.0, -10.0, 30.0, 60.0, hi - 1.0] {
                let h = 1e-5;
                let ln = |t| curve.ln_sat_vap_pres(t).expect("in range");
                let numeric = (ln(t + h) - ln(t - h)) / (2.0 * h);
                let analytic = curve.d_ln_sat_vap_pres(t).expect("in range");
                assert_relative_eq!(analytic, numeric, max_relative = 1e-6);
            }
        }
    }

    #[test]
    fn model_output_agrees_with_accessors() {
        let curve = SI.saturation_curve();
        let point = curve.call(&25.0).expect("in range");
        assert_relative_eq!(point.ln_pws, curve.ln_sat_vap_pres(25.0).expect("in range"));
        assert_relative_eq!(point.d_ln_pws, SI.d_ln_sat_vap_pres(25.0).expect("in range"));
    }
}
