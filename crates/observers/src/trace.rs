use psychro_core::Observer;
use tracing::trace;

use crate::traits::{HasIterate, HasResidual};

/// An observer that records each solver iteration as a `tracing` event.
///
/// Events are emitted at `TRACE` level with the solver name, iteration,
/// iterate, and residual as fields. The observer never steers the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceObserver {
    solver: &'static str,
}

impl TraceObserver {
    /// Creates an observer that labels its events with `solver`.
    #[must_use]
    pub const fn new(solver: &'static str) -> Self {
        Self { solver }
    }

    /// Returns the solver label.
    #[must_use]
    pub const fn solver(&self) -> &'static str {
        self.solver
    }
}

impl<E, A> Observer<E, A> for TraceObserver
where
    E: HasIterate + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        trace!(
            solver = self.solver,
            iter = event.iter(),
            x = event.x(),
            residual = event.residual(),
            "solver iteration"
        );
        None
    }
}
