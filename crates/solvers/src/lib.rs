//! Numerical solvers for the psychro workspace.
//!
//! Solvers are generic over a [`psychro_core::Model`] and a problem type that
//! maps solver variables to model inputs. Each solver reports its progress to
//! an [`psychro_core::Observer`] and returns a `Solution` carrying a status.

pub mod equation;
