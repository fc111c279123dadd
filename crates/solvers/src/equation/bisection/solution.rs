use psychro_core::Snapshot;

/// Indicates whether the solver converged or hit the iteration limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The bracket narrowed to within the configured tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a bisection solve.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// Final solver status.
    pub status: Status,

    /// Midpoint of the final bracket.
    pub x: f64,

    /// Final bracket as `[lower, upper]`.
    pub bracket: [f64; 2],

    /// Snapshot of the last midpoint evaluation, if any was needed.
    pub snapshot: Option<Snapshot<I, O>>,

    /// Number of midpoint evaluations.
    pub iters: usize,
}
