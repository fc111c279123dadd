//! Core traits and types shared across the psychro workspace.
//!
//! This crate defines the abstractions that solvers, observers, and property
//! models build on:
//!
//! - [`Model`]: a callable that maps a typed input to a typed output
//! - [`Snapshot`]: a captured input/output pair from a model call
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`EquationProblem`], [`DifferentiableProblem`]: problem traits that adapt
//!   solver variables to model inputs and compute residuals (and their slopes)
//!   from outputs

mod model;
mod observer;
mod problems;

pub use observer::Observer;
pub use problems::{DifferentiableProblem, EquationProblem};
pub use {model::Model, model::Snapshot};
