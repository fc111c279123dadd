//! Dew point by Newton-Raphson inversion of the saturation curve.

use std::convert::Infallible;

use psychro_core::{DifferentiableProblem, EquationProblem};
use psychro_observers::TraceObserver;
use psychro_solvers::equation::newton_raphson::{self, Status};
use tracing::debug;

use crate::{PsychroError, Psychrometrics, SaturationPoint, check};

/// Finds the temperature where `ln(Pws)` equals `ln(vap_pres)`.
///
/// Working on the logarithm keeps the residual nearly linear in temperature,
/// so Newton steps typically converge in three to five iterations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DewPointProblem {
    ln_vap_pres: f64,
}

impl DewPointProblem {
    /// Creates a problem targeting a positive vapor pressure.
    #[must_use]
    pub fn new(vap_pres: f64) -> Self {
        Self {
            ln_vap_pres: vap_pres.ln(),
        }
    }
}

impl EquationProblem<1> for DewPointProblem {
    type Input = f64;
    type Output = SaturationPoint;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
        Ok(x[0])
    }

    fn residuals(&self, _t: &f64, point: &SaturationPoint) -> Result<[f64; 1], Self::Error> {
        Ok([point.ln_pws - self.ln_vap_pres])
    }
}

impl DifferentiableProblem for DewPointProblem {
    fn derivative(&self, _t: &f64, point: &SaturationPoint) -> Result<f64, Self::Error> {
        Ok(point.d_ln_pws)
    }
}

impl Psychrometrics {
    /// Dew-point temperature from dry-bulb temperature and vapor pressure.
    ///
    /// Newton-Raphson starts at the dry bulb and keeps every iterate inside
    /// the valid temperature range. The result never exceeds the dry bulb.
    ///
    /// # Errors
    ///
    /// Returns a domain error if the dry bulb is out of range or the vapor
    /// pressure is negative or outside the saturation pressures of the range
    /// endpoints. Returns [`PsychroError::NotConverged`] if the iteration cap
    /// is reached.
    pub fn t_dew_point_from_vap_pres(
        &self,
        t_dry_bulb: f64,
        vap_pres: f64,
    ) -> Result<f64, PsychroError> {
        let t_dry_bulb = self.check_temperature("dry-bulb temperature", t_dry_bulb)?;
        let vap_pres = check::non_negative("vapor pressure", vap_pres)?;

        let [t_min, t_max] = self.unit_system().temperature_range();
        let bounds = [self.sat_vap_pres(t_min)?, self.sat_vap_pres(t_max)?];
        check::in_range("vapor pressure", vap_pres, bounds)?;

        let solution = newton_raphson::solve(
            &self.saturation_curve(),
            &DewPointProblem::new(vap_pres),
            t_dry_bulb,
            &self.newton_config(),
            TraceObserver::new("dew point"),
        )?;

        if solution.status != Status::Converged {
            return Err(PsychroError::NotConverged {
                solver: "dew point",
                iters: solution.iters,
            });
        }

        let t_dew_point = solution.x.min(t_dry_bulb);
        debug!(
            t_dry_bulb,
            vap_pres,
            t_dew_point,
            iters = solution.iters,
            "dew point converged"
        );
        Ok(t_dew_point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;

    use crate::{Settings, UnitSystem};

    const SI: Psychrometrics = Psychrometrics::new(UnitSystem::Metric);
    const IP: Psychrometrics = Psychrometrics::new(UnitSystem::Imperial);

    #[test]
    fn inverts_saturation_pressure() {
        for (t_dry_bulb, t_dew_point) in [(15.0, -20.0), (15.0, 5.0), (60.0, 50.0)] {
            let vap_pres = SI.vap_pres_from_t_dew_point(t_dew_point).expect("in range");
            let solved = SI
                .t_dew_point_from_vap_pres(t_dry_bulb, vap_pres)
                .expect("converges");
            assert_abs_diff_eq!(solved, t_dew_point, epsilon = 0.001);
        }

        for (t_dry_bulb, t_dew_point) in [(59.0, -4.0), (59.0, 41.0), (140.0, 122.0)] {
            let vap_pres = IP.vap_pres_from_t_dew_point(t_dew_point).expect("in range");
            let solved = IP
                .t_dew_point_from_vap_pres(t_dry_bulb, vap_pres)
                .expect("converges");
            assert_abs_diff_eq!(solved, t_dew_point, epsilon = 0.001 * 9.0 / 5.0);
        }
    }

    #[test]
    fn never_exceeds_dry_bulb() {
        // Saturated air: the converged root can land a hair above the dry bulb.
        for t in [-30.0, 0.0, 0.01, 25.0, 150.0] {
            let vap_pres = SI.sat_vap_pres(t).expect("in range");
            let t_dew_point = SI.t_dew_point_from_vap_pres(t, vap_pres).expect("converges");
            assert!(t_dew_point <= t);
            assert_abs_diff_eq!(t_dew_point, t, epsilon = 0.001);
        }
    }

    #[test]
    fn rejects_vapor_pressure_outside_curve() {
        let err = SI.t_dew_point_from_vap_pres(20.0, 0.0).expect_err("no dew point");
        assert!(matches!(
            err,
            PsychroError::OutOfRange {
                quantity: "vapor pressure",
                ..
            }
        ));

        let too_high = SI.sat_vap_pres(200.0).expect("in range") * 1.01;
        assert!(SI.t_dew_point_from_vap_pres(20.0, too_high).is_err());

        let err = SI.t_dew_point_from_vap_pres(20.0, -5.0).expect_err("negative");
        assert!(matches!(err, PsychroError::Negative { .. }));
    }

    #[test]
    fn rejects_dry_bulb_out_of_range() {
        let err = SI.t_dew_point_from_vap_pres(250.0, 1000.0).expect_err("too hot");
        assert!(err.is_domain_error());
    }

    #[test]
    fn reports_convergence_failure() {
        let settings = Settings {
            tolerance: Some(1e-300),
            max_iters: 2,
        };
        let psy = Psychrometrics::with_settings(UnitSystem::Metric, settings).expect("valid");
        let err = psy
            .t_dew_point_from_vap_pres(150.0, 100.0)
            .expect_err("two steps are not enough");
        assert!(err.is_convergence_failure());
    }
}
