//! Gradient-based optimizers for variational circuits.
//!
//! Objectives are closures `FnMut(&[f64]) -> Result<f64, E>`, so simulation
//! errors propagate out of the optimizer unchanged. Gradients are central
//! finite differences.

pub mod descent;
pub mod gradient;

pub use descent::{Adagrad, Adam, GradientDescent, NesterovMomentum};
pub use gradient::{DEFAULT_STEP, central_difference};

use tracing::debug;

/// Result of an optimization run.
#[derive(Debug, Clone)]
pub struct OptimizationResult {
    /// Final parameter values.
    pub optimal_params: Vec<f64>,
    /// Objective at the final parameters.
    pub optimal_value: f64,
    /// Number of steps taken.
    pub num_iterations: usize,
    /// Objective after each step, starting with the initial value.
    pub history: Vec<f64>,
    /// Whether the energy change dropped below the tolerance.
    pub converged: bool,
}

/// A stateful first-order optimizer.
pub trait Optimizer {
    /// Short identifier for logs.
    fn name(&self) -> &'static str;

    /// Update `params` from a gradient.
    fn apply_gradient(&mut self, params: &[f64], grad: &[f64]) -> Vec<f64>;

    /// Where the gradient is evaluated; momentum methods look ahead.
    fn gradient_point(&self, params: &[f64]) -> Vec<f64> {
        params.to_vec()
    }

    /// Forget accumulated state.
    fn reset(&mut self) {}

    /// One update step.
    fn step<F, E>(&mut self, mut objective: F, params: &[f64]) -> Result<Vec<f64>, E>
    where
        F: FnMut(&[f64]) -> Result<f64, E>,
        Self: Sized,
    {
        let point = self.gradient_point(params);
        let grad = central_difference(&mut objective, &point, DEFAULT_STEP)?;
        Ok(self.apply_gradient(params, &grad))
    }

    /// One update step, also returning the objective at the old parameters.
    fn step_and_cost<F, E>(&mut self, mut objective: F, params: &[f64]) -> Result<(Vec<f64>, f64), E>
    where
        F: FnMut(&[f64]) -> Result<f64, E>,
        Self: Sized,
    {
        let cost = objective(params)?;
        let next = self.step(&mut objective, params)?;
        Ok((next, cost))
    }
}

/// Step until `|E_k − E_{k−1}| <= tol` or `max_iterations` steps are spent.
pub fn minimize<O, F, E>(
    optimizer: &mut O,
    mut objective: F,
    initial: Vec<f64>,
    max_iterations: usize,
    tol: f64,
) -> Result<OptimizationResult, E>
where
    O: Optimizer,
    F: FnMut(&[f64]) -> Result<f64, E>,
{
    let mut params = initial;
    let mut energy = objective(&params)?;
    let mut history = vec![energy];
    let mut converged = false;
    let mut iterations = 0;

    for iteration in 0..max_iterations {
        let (next, previous) = optimizer.step_and_cost(&mut objective, &params)?;
        params = next;
        energy = objective(&params)?;
        history.push(energy);
        iterations = iteration + 1;

        let change = (energy - previous).abs();
        debug!(optimizer = optimizer.name(), iteration, energy, change, "optimizer step");
        if change <= tol {
            converged = true;
            break;
        }
    }

    Ok(OptimizationResult {
        optimal_params: params,
        optimal_value: energy,
        num_iterations: iterations,
        history,
        converged,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::convert::Infallible;

    fn bowl(x: &[f64]) -> Result<f64, Infallible> {
        Ok((x[0] - 1.0).powi(2) + 2.0 * (x[1] + 0.5).powi(2))
    }

    #[test]
    fn test_gradient_descent_converges() {
        let mut opt = GradientDescent::new(0.1);
        let result = minimize(&mut opt, bowl, vec![0.0, 0.0], 500, 1e-12).unwrap();
        assert!(result.converged);
        assert_relative_eq!(result.optimal_params[0], 1.0, epsilon = 1e-4);
        assert_relative_eq!(result.optimal_params[1], -0.5, epsilon = 1e-4);
        assert_eq!(result.history.len(), result.num_iterations + 1);
    }

    #[test]
    fn test_every_optimizer_descends() {
        fn run<O: Optimizer>(mut opt: O) -> f64 {
            minimize(&mut opt, bowl, vec![0.0, 0.0], 300, 0.0)
                .unwrap()
                .optimal_value
        }
        assert!(run(Adam::new(0.05)) < 5e-2);
        assert!(run(Adagrad::new(0.5)) < 1e-3);
        assert!(run(NesterovMomentum::new(0.05)) < 1e-3);
    }

    #[test]
    fn test_step_and_cost_reports_old_cost() {
        let mut opt = GradientDescent::new(0.1);
        let (next, cost) = opt.step_and_cost(bowl, &[0.0, 0.0]).unwrap();
        assert_relative_eq!(cost, 1.5);
        assert!(bowl(&next).unwrap() < cost);
    }

    #[test]
    fn test_iteration_budget_respected() {
        let mut opt = GradientDescent::new(1e-4);
        let result = minimize(&mut opt, bowl, vec![0.0, 0.0], 3, 0.0).unwrap();
        assert_eq!(result.num_iterations, 3);
        assert!(!result.converged);
    }
}
