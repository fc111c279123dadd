//! Newton-Raphson iteration with a bounded domain.
//!
//! # Algorithm
//!
//! Starting from an initial guess, each iteration evaluates the residual and
//! its derivative (supplied by a [`DifferentiableProblem`]) and takes the step
//!
//! ```text
//! x_next = clamp(x - residual / derivative, domain)
//! ```
//!
//! The solver converges once `|x_next - x| <= x_abs_tol` and reports
//! `x_next`. The initial guess is not clamped, so the model sees it as given.
//!
//! # Observer Events
//!
//! One [`Event`] is emitted per step, after the next iterate is known.
//! Observers can return [`Action::StopEarly`] to halt with that iterate.

mod config;
mod error;
mod event;
mod solution;


pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use psychro_core::{DifferentiableProblem, Model, Observer};

use crate::equation::evaluate;

/// Control actions supported by the Newton-Raphson solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the latest iterate.
    StopEarly,
}

/// Finds a root of the equation using Newton-Raphson steps.
///
/// # Errors
///
/// Returns an error if the config or initial guess is invalid, a residual is
/// non-finite, a derivative is zero or non-finite, or the model or problem
/// returns an error during evaluation.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    initial_guess: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: DifferentiableProblem<Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    config.validate()?;
    if !initial_guess.is_finite() {
        return Err(Error::NonFiniteGuess(initial_guess));
    }

    let mut x = initial_guess;
    let mut iter = 0;

    loop {
        iter += 1;

        let eval = evaluate(model, problem, [x])?;
        let residual = eval.residuals[0];
        if !residual.is_finite() {
            return Err(Error::NonFiniteResidual { x, residual });
        }

        let derivative = problem
            .derivative(&eval.snapshot.input, &eval.snapshot.output)
            .map_err(|e| Error::Problem(Box::new(e)))?;

        if !derivative.is_finite() || derivative == 0.0 {
            return Err(Error::BadDerivative { x, derivative });
        }

        let next = config.clamp(x - residual / derivative);

        let action = observer.observe(&Event {
            iter,
            eval: &eval,
            derivative,
            next,
        });

        let status = if (next - x).abs() <= config.x_abs_tol {
            Some(Status::Converged)
        } else if matches!(action, Some(Action::StopEarly)) {
            Some(Status::StoppedByObserver)
        } else if iter == config.max_iters {
            Some(Status::MaxIters)
        } else {
            None
        };

        if let Some(status) = status {
            return Ok(Solution {
                status,
                x: next,
                residual,
                snapshot: eval.snapshot,
                iters: iter,
            });
        }

        x = next;
    }
}

/// Finds a root of the equation without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    initial_guess: f64,
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    P: DifferentiableProblem<Input = M::Input, Output = M::Output>,
{
    solve(model, problem, initial_guess, config, ())
}
