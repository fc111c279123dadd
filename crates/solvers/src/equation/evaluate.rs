use thiserror::Error;

use psychro_core::{EquationProblem, Model, Snapshot};

/// The result of evaluating an equation problem at a given `x`.
#[derive(Debug, Clone)]
pub struct Evaluation<I, O, const N: usize> {
    pub x: [f64; N],
    pub residuals: [f64; N],
    pub snapshot: Snapshot<I, O>,
}

/// Errors that can occur when evaluating an equation problem.
#[derive(Debug, Error)]
pub enum EvalError<ME, PE> {
    /// The model call failed.
    #[error("model call failed")]
    Model(#[source] ME),
    /// Failed to construct input or compute residuals.
    #[error("problem error")]
    Problem(#[source] PE),
}

/// Type alias for the result of [`evaluate`].
pub type EvaluateResult<M, P, const N: usize> = Result<
    Evaluation<<M as Model>::Input, <M as Model>::Output, N>,
    EvalError<<M as Model>::Error, <P as EquationProblem<N>>::Error>,
>;

/// Evaluates the model in the context of an equation problem.
///
/// Maps `x` to a model input, calls the model, then computes residuals from
/// the input and output.
///
/// # Errors
///
/// Returns an error if input mapping, model call, or residual computation fails.
pub fn evaluate<M, P, const N: usize>(
    model: &M,
    problem: &P,
    x: [f64; N],
) -> EvaluateResult<M, P, N>
where
    M: Model,
    P: EquationProblem<N, Input = M::Input, Output = M::Output>,
{
    let input = problem.input(&x).map_err(EvalError::Problem)?;
    let output = model.call(&input).map_err(EvalError::Model)?;
    let residuals = problem
        .residuals(&input, &output)
        .map_err(EvalError::Problem)?;

    Ok(Evaluation {
        x,
        residuals,
        snapshot: Snapshot::new(input, output),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;

    struct Cube;

    impl Model for Cube {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, x: &f64) -> Result<f64, Self::Error> {
            Ok(x * x * x)
        }
    }

    #[derive(Debug, Error)]
    #[error("x must be non-negative")]
    struct NegativeX;

    /// Finds the cube root of `target`, rejecting negative iterates.
    struct CubeRoot {
        target: f64,
    }

    impl EquationProblem<1> for CubeRoot {
        type Input = f64;
        type Output = f64;
        type Error = NegativeX;

        fn input(&self, x: &[f64; 1]) -> Result<f64, Self::Error> {
            if x[0] < 0.0 { Err(NegativeX) } else { Ok(x[0]) }
        }

        fn residuals(&self, _input: &f64, output: &f64) -> Result<[f64; 1], Self::Error> {
            Ok([output - self.target])
        }
    }

    #[test]
    fn computes_residual_and_snapshot() {
        let eval = evaluate(&Cube, &CubeRoot { target: 27.0 }, [2.0]).expect("evaluates");

        assert_relative_eq!(eval.x[0], 2.0);
        assert_relative_eq!(eval.residuals[0], -19.0);
        assert_relative_eq!(eval.snapshot.input, 2.0);
        assert_relative_eq!(eval.snapshot.output, 8.0);
    }

    #[test]
    fn problem_errors_are_reported() {
        let result = evaluate(&Cube, &CubeRoot { target: 27.0 }, [-1.0]);
        assert!(matches!(result, Err(EvalError::Problem(NegativeX))));
    }
}
