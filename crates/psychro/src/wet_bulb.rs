//! Wet bulb by bisection between the dew point and the dry bulb.

use std::convert::Infallible;

use psychro_core::{EquationProblem, Model};
use psychro_observers::TraceObserver;
use psychro_solvers::equation::bisection::{self, Bracket, Status};
use tracing::debug;

use crate::{PsychroError, Psychrometrics, UnitSystem, check};

/// Humidity ratio implied by a wet-bulb temperature, as a [`Model`].
///
/// Dry-bulb temperature and pressure are fixed. The input is a candidate
/// wet-bulb temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WetBulbHumRatio {
    psy: Psychrometrics,
    t_dry_bulb: f64,
    pressure: f64,
}

impl WetBulbHumRatio {
    #[must_use]
    pub fn new(psy: Psychrometrics, t_dry_bulb: f64, pressure: f64) -> Self {
        Self {
            psy,
            t_dry_bulb,
            pressure,
        }
    }
}

impl Model for WetBulbHumRatio {
    type Input = f64;
    type Output = f64;
    type Error = PsychroError;

    fn call(&self, t_wet_bulb: &f64) -> Result<f64, PsychroError> {
        self.psy
            .hum_ratio_from_t_wet_bulb(self.t_dry_bulb, *t_wet_bulb, self.pressure)
    }
}

/// Drives the wet-bulb humidity ratio toward a target humidity ratio.
///
/// The residual is `target - w*`. It falls as the wet bulb rises, and an
/// exact match moves the lower end of the bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WetBulbProblem {
    hum_ratio: f64,
}

impl WetBulbProblem {
    #[must_use]
    pub fn new(hum_ratio: f64) -> Self {
        Self { hum_ratio }
    }
}

impl EquationProblem<1> for WetBulbProblem {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok(x[0])
    }

    fn residuals(&self, _t_wet_bulb: &f64, hum_ratio: &f64) -> Result<[f64; 1], Self::Error> {
        Ok([self.hum_ratio - hum_ratio])
    }
}

impl Psychrometrics {
    /// Humidity ratio from dry-bulb and wet-bulb temperatures.
    ///
    /// Uses ASHRAE Fundamentals (2017) ch. 1 eqn. 33 at or above freezing and
    /// eqn. 35 below. The result is floored to
    /// [`MIN_HUM_RATIO`](crate::MIN_HUM_RATIO).
    ///
    /// The two equations do not meet at the freezing point: the ice branch
    /// gives a higher humidity ratio just below it. A wet bulb exactly at
    /// freezing therefore does not round-trip through
    /// [`Self::t_wet_bulb_from_hum_ratio`], which lands on the ice branch
    /// instead (about -0.353 °C for a 5 °C dry bulb at 101325 Pa).
    ///
    /// # Errors
    ///
    /// Returns a domain error if the wet bulb is above the dry bulb, either
    /// temperature is out of range, or the pressure is not positive.
    pub fn hum_ratio_from_t_wet_bulb(
        &self,
        t_dry_bulb: f64,
        t_wet_bulb: f64,
        pressure: f64,
    ) -> Result<f64, PsychroError> {
        let t_dry_bulb = self.check_temperature("dry-bulb temperature", t_dry_bulb)?;
        let t_wet_bulb = check::not_above_dry_bulb("wet-bulb temperature", t_wet_bulb, t_dry_bulb)?;
        let ws = self.sat_hum_ratio(t_wet_bulb, pressure)?;

        let (tdb, twb) = (t_dry_bulb, t_wet_bulb);
        let frozen = twb < self.unit_system().freezing_point();
        let hum_ratio = match (self.unit_system(), frozen) {
            (UnitSystem::Metric, false) => {
                ((2501.0 - 2.326 * twb) * ws - 1.006 * (tdb - twb))
                    / (2501.0 + 1.86 * tdb - 4.186 * twb)
            }
            (UnitSystem::Metric, true) => {
                ((2830.0 - 0.24 * twb) * ws - 1.006 * (tdb - twb))
                    / (2830.0 + 1.86 * tdb - 2.1 * twb)
            }
            (UnitSystem::Imperial, false) => {
                ((1093.0 - 0.556 * twb) * ws - 0.240 * (tdb - twb)) / (1093.0 + 0.444 * tdb - twb)
            }
            (UnitSystem::Imperial, true) => {
                ((1220.0 - 0.04 * twb) * ws - 0.240 * (tdb - twb))
                    / (1220.0 + 0.444 * tdb - 0.48 * twb)
            }
        };

        Ok(check::floor_hum_ratio(hum_ratio))
    }

    /// Wet-bulb temperature from dry-bulb temperature and humidity ratio.
    ///
    /// Bisects between the dew point and the dry bulb until the bracket is
    /// narrower than the tolerance. Humidity ratios below
    /// [`MIN_HUM_RATIO`](crate::MIN_HUM_RATIO) are raised to it first.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the humidity ratio is negative or any other
    /// input is out of range. Returns [`PsychroError::NotConverged`] if the
    /// iteration cap is reached.
    pub fn t_wet_bulb_from_hum_ratio(
        &self,
        t_dry_bulb: f64,
        hum_ratio: f64,
        pressure: f64,
    ) -> Result<f64, PsychroError> {
        let hum_ratio = check::hum_ratio(hum_ratio)?;
        let t_dew_point = self.t_dew_point_from_hum_ratio(t_dry_bulb, hum_ratio, pressure)?;

        let bracket =
            Bracket::decreasing([t_dew_point, t_dry_bulb]).map_err(bisection::Error::from)?;

        let solution = bisection::solve(
            &WetBulbHumRatio::new(*self, t_dry_bulb, pressure),
            &WetBulbProblem::new(hum_ratio),
            bracket,
            &self.bisection_config(),
            TraceObserver::new("wet bulb"),
        )?;

        if solution.status != Status::Converged {
            return Err(PsychroError::NotConverged {
                solver: "wet bulb",
                iters: solution.iters,
            });
        }

        debug!(
            t_dry_bulb,
            hum_ratio,
            t_wet_bulb = solution.x,
            iters = solution.iters,
            "wet bulb converged"
        );
        Ok(solution.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    const SI: Psychrometrics = Psychrometrics::new(UnitSystem::Metric);
    const IP: Psychrometrics = Psychrometrics::new(UnitSystem::Imperial);

    #[test]
    fn metric_round_trip_above_and_below_freezing() {
        let cases = [
            (30.0, 25.0, 0.019_228_127_424_109_6),
            (-1.0, -5.0, 0.001_203_998_199_338_44),
        ];
        for (t_dry_bulb, t_wet_bulb, expected) in cases {
            let hum_ratio = SI
                .hum_ratio_from_t_wet_bulb(t_dry_bulb, t_wet_bulb, 95_461.0)
                .expect("valid");
            assert_relative_eq!(hum_ratio, expected, max_relative = 3e-4);

            let solved = SI
                .t_wet_bulb_from_hum_ratio(t_dry_bulb, hum_ratio, 95_461.0)
                .expect("converges");
            assert_abs_diff_eq!(solved, t_wet_bulb, epsilon = 0.001);
        }
    }

    #[test]
    fn imperial_round_trip_above_and_below_freezing() {
        let cases = [
            (86.0, 77.0, 0.018_719_328_841_889_2),
            (30.2, 23.0, 0.001_146_574_810_901_84),
        ];
        for (t_dry_bulb, t_wet_bulb, expected) in cases {
            let hum_ratio = IP
                .hum_ratio_from_t_wet_bulb(t_dry_bulb, t_wet_bulb, 14.175)
                .expect("valid");
            assert_relative_eq!(hum_ratio, expected, max_relative = 3e-4);

            let solved = IP
                .t_wet_bulb_from_hum_ratio(t_dry_bulb, hum_ratio, 14.175)
                .expect("converges");
            assert_abs_diff_eq!(solved, t_wet_bulb, epsilon = 0.001);
        }
    }

    #[test]
    fn freezing_point_is_a_jump_between_branches() {
        let liquid = SI
            .hum_ratio_from_t_wet_bulb(5.0, 0.0, 101_325.0)
            .expect("valid");
        let ice = SI
            .hum_ratio_from_t_wet_bulb(5.0, -1e-9, 101_325.0)
            .expect("valid");
        assert!(ice > liquid, "ice {ice} should exceed liquid {liquid}");

        let solved = SI
            .t_wet_bulb_from_hum_ratio(5.0, liquid, 101_325.0)
            .expect("converges");
        assert_abs_diff_eq!(solved, -0.352_893_18, epsilon = 2e-3);
    }

    #[test]
    fn tiny_hum_ratios_share_the_floor() {
        let floored = SI
            .t_wet_bulb_from_hum_ratio(-5.0, 1e-7, 95_461.0)
            .expect("converges");
        let tiny = SI
            .t_wet_bulb_from_hum_ratio(-5.0, 1e-9, 95_461.0)
            .expect("converges");
        assert_eq!(floored.to_bits(), tiny.to_bits());
    }

    #[test]
    fn lies_between_dew_point_and_dry_bulb() {
        for rel_hum in [0.05, 0.3, 0.6, 0.95] {
            let hum_ratio = SI
                .hum_ratio_from_rel_hum(35.0, rel_hum, 101_325.0)
                .expect("valid");
            let t_dew_point = SI
                .t_dew_point_from_hum_ratio(35.0, hum_ratio, 101_325.0)
                .expect("converges");
            let t_wet_bulb = SI
                .t_wet_bulb_from_hum_ratio(35.0, hum_ratio, 101_325.0)
                .expect("converges");
            assert!(t_dew_point <= t_wet_bulb && t_wet_bulb <= 35.0);
        }
    }

    #[test]
    fn saturated_air_has_wet_bulb_at_dry_bulb() {
        let hum_ratio = SI.sat_hum_ratio(20.0, 101_325.0).expect("valid");
        let t_wet_bulb = SI
            .t_wet_bulb_from_hum_ratio(20.0, hum_ratio, 101_325.0)
            .expect("converges");
        assert_abs_diff_eq!(t_wet_bulb, 20.0, epsilon = 0.001);
    }

    #[test]
    fn rejects_wet_bulb_above_dry_bulb() {
        let err = SI
            .hum_ratio_from_t_wet_bulb(20.0, 21.0, 101_325.0)
            .expect_err("wet bulb above dry bulb");
        assert!(matches!(err, PsychroError::AboveDryBulb { .. }));
    }

    #[test]
    fn rejects_negative_hum_ratio() {
        let err = SI
            .t_wet_bulb_from_hum_ratio(20.0, -0.001, 101_325.0)
            .expect_err("negative");
        assert!(err.is_domain_error());
    }

    #[test]
    fn residual_ties_move_the_lower_bound() {
        let problem = WetBulbProblem::new(1e-7);
        let [residual] = problem.residuals(&0.0, &1e-7).expect("infallible");
        assert_eq!(bisection::Sign::of(residual), bisection::Sign::Positive);
    }
}
