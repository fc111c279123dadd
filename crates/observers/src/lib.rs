//! Reusable observers for the psychro solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the bisection and Newton-Raphson solvers.
//!
//! # Modules
//!
//! - [`traits`]: capability traits for cross-solver observers
//!   ([`HasResidual`], [`HasIterate`], [`CanStopEarly`])
//!
//! [`TraceObserver`] reports every solver iteration as a `tracing` event.
//!
//! [`Observer`]: psychro_core::Observer
//! [`HasResidual`]: traits::HasResidual
//! [`HasIterate`]: traits::HasIterate
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod trace;

pub use trace::TraceObserver;
