//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Example
//!
//! ```rust
//! use psychro_core::Observer;
//! use psychro_observers::traits::{CanStopEarly, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.residual().abs() < self.tolerance).then(A::stop_early)
//!     }
//! }
//! ```

use psychro_solvers::equation::{bisection, newton_raphson};

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual for this event.
    fn residual(&self) -> f64;
}

/// An event that reports the iterate a solver just evaluated.
pub trait HasIterate {
    /// Returns the 1-based iteration counter.
    fn iter(&self) -> usize;

    /// Returns the evaluated value of the solver variable.
    fn x(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl<I, O> HasResidual for bisection::Event<'_, I, O> {
    fn residual(&self) -> f64 {
        bisection::Event::residual(self)
    }
}

impl<I, O> HasIterate for bisection::Event<'_, I, O> {
    fn iter(&self) -> usize {
        self.iter
    }

    fn x(&self) -> f64 {
        bisection::Event::x(self)
    }
}

impl<I, O> HasResidual for newton_raphson::Event<'_, I, O> {
    fn residual(&self) -> f64 {
        newton_raphson::Event::residual(self)
    }
}

impl<I, O> HasIterate for newton_raphson::Event<'_, I, O> {
    fn iter(&self) -> usize {
        self.iter
    }

    fn x(&self) -> f64 {
        newton_raphson::Event::x(self)
    }
}

impl CanStopEarly for bisection::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for newton_raphson::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
