use crate::equation::Evaluation;

/// Iteration event emitted by the Newton-Raphson solver.
#[derive(Debug)]
pub struct Event<'a, I, O> {
    /// Iteration counter, starting at 1.
    pub iter: usize,
    /// Evaluation at the current iterate.
    pub eval: &'a Evaluation<I, O, 1>,
    /// Residual derivative at the current iterate.
    pub derivative: f64,
    /// Next iterate, after clamping into the domain.
    pub next: f64,
}

impl<I, O> Event<'_, I, O> {
    /// Returns the current iterate.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.eval.x[0]
    }

    /// Returns the residual at the current iterate.
    #[must_use]
    pub fn residual(&self) -> f64 {
        self.eval.residuals[0]
    }

    /// Returns the step taken from this iterate.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.next - self.x()
    }
}
