/// Defines an equation problem to be solved.
///
/// An equation problem maps solver variables to a model input, then computes
/// residuals from the model input and output.
/// Solvers drive the residuals toward zero.
///
/// The const generic `N` is the number of solver variables (and residuals).
/// For example, `N = 1` represents a scalar root-finding problem.
pub trait EquationProblem<const N: usize> {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Maps solver variables (`x`) into a model input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input cannot be constructed from `x`.
    fn input(&self, x: &[f64; N]) -> Result<Self::Input, Self::Error>;

    /// Computes residuals from model input/output.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the residuals cannot be computed.
    fn residuals(&self, input: &Self::Input, output: &Self::Output)
    -> Result<[f64; N], Self::Error>;
}

/// A scalar equation problem that can also report the slope of its residual.
///
/// Gradient-based solvers such as Newton-Raphson need `d(residual)/dx` at each
/// iterate. Problems usually read it from the model output, which lets a model
/// compute a value and its analytic derivative in a single call.
pub trait DifferentiableProblem: EquationProblem<1> {
    /// Computes the derivative of the residual with respect to `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the derivative cannot be computed.
    fn derivative(&self, input: &Self::Input, output: &Self::Output) -> Result<f64, Self::Error>;
}
