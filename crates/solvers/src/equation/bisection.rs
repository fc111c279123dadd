//! Bisection on an oriented bracket.
//!
//! # Algorithm
//!
//! The caller supplies a [`Bracket`] together with the residual sign at its
//! lower bound. Each iteration evaluates the midpoint, reports it to the
//! observer, and replaces whichever endpoint shares the midpoint's residual
//! sign. The solver stops once the bracket width is within
//! [`Config::x_abs_tol`] and reports the midpoint of the final bracket.
//!
//! The bracket endpoints are never evaluated. This suits problems where the
//! residual's orientation is known analytically and an endpoint may sit
//! exactly on the root, as when the lower bound is a dew point and the
//! residual vanishes there for saturated air.
//!
//! # Observer Events
//!
//! One [`Event`] is emitted per midpoint evaluation, before the bracket
//! shrinks. Observers can return [`Action::StopEarly`] to halt with the
//! bracket narrowed by that evaluation.

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod solution;


pub use action::Action;
pub use bracket::{Bracket, BracketError, Sign};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use psychro_core::{EquationProblem, Model, Observer};

use crate::equation::evaluate;

/// Finds a root of the equation by bisecting `bracket`.
///
/// See the [module docs](self) for details on event timing and observer actions.
///
/// # Errors
///
/// Returns an error if the config is invalid, a residual is non-finite,
/// or the model or problem returns an error during evaluation.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: Bracket,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    config.validate()?;

    let mut bracket = bracket;
    let mut snapshot = None;
    let mut iters = 0;

    let status = loop {
        if bracket.is_x_converged(config.x_abs_tol) {
            break Status::Converged;
        }
        if iters == config.max_iters {
            break Status::MaxIters;
        }
        iters += 1;

        let x = bracket.midpoint();
        let eval = evaluate(model, problem, [x])?;
        let residual = eval.residuals[0];
        if !residual.is_finite() {
            return Err(Error::NonFiniteResidual { x, residual });
        }

        let action = observer.observe(&Event {
            iter: iters,
            bracket: bracket.as_array(),
            eval: &eval,
        });

        bracket.shrink(x, Sign::of(residual));
        snapshot = Some(eval.snapshot);

        if matches!(action, Some(Action::StopEarly)) {
            break Status::StoppedByObserver;
        }
    };

    Ok(Solution {
        status,
        x: bracket.midpoint(),
        bracket: bracket.as_array(),
        snapshot,
        iters,
    })
}

/// Finds a root of the equation without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the config is invalid, a residual is non-finite,
/// or the model or problem returns an error during evaluation.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    bracket: Bracket,
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    solve(model, problem, bracket, config, ())
}
