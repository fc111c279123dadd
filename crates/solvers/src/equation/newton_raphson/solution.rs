use psychro_core::Snapshot;

/// Indicates whether the solver converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The last step was within the configured tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a Newton-Raphson solve.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// Final solver status.
    pub status: Status,

    /// Final iterate: the clamped result of the last step.
    pub x: f64,

    /// Residual at the last evaluated iterate.
    pub residual: f64,

    /// Snapshot of the last evaluated iterate.
    pub snapshot: Snapshot<I, O>,

    /// Number of steps taken.
    pub iters: usize,
}
