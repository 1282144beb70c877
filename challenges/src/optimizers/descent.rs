//! First-order update rules.

use super::Optimizer;

/// Plain gradient descent, `x ← x − η·g`.
#[derive(Debug, Clone)]
pub struct GradientDescent {
    /// Step size η.
    pub stepsize: f64,
}

impl GradientDescent {
    /// Create a gradient-descent optimizer.
    pub fn new(stepsize: f64) -> Self {
        Self { stepsize }
    }
}

impl Optimizer for GradientDescent {
    fn name(&self) -> &'static str {
        "gradient-descent"
    }

    fn apply_gradient(&mut self, params: &[f64], grad: &[f64]) -> Vec<f64> {
        params
            .iter()
            .zip(grad)
            .map(|(x, g)| x - self.stepsize * g)
            .collect()
    }
}

/// Adam with bias-corrected step size.
#[derive(Debug, Clone)]
pub struct Adam {
    /// Step size η.
    pub stepsize: f64,
    /// First-moment decay.
    pub beta1: f64,
    /// Second-moment decay.
    pub beta2: f64,
    /// Numerical floor in the denominator.
    pub eps: f64,
    t: i32,
    m: Vec<f64>,
    v: Vec<f64>,
}

impl Adam {
    /// Create an Adam optimizer with `β1 = 0.9`, `β2 = 0.99`, `ε = 1e-8`.
    pub fn new(stepsize: f64) -> Self {
        Self {
            stepsize,
            beta1: 0.9,
            beta2: 0.99,
            eps: 1e-8,
            t: 0,
            m: Vec::new(),
            v: Vec::new(),
        }
    }

    /// Set the moment decay rates.
    pub fn with_betas(mut self, beta1: f64, beta2: f64) -> Self {
        self.beta1 = beta1;
        self.beta2 = beta2;
        self
    }
}

impl Optimizer for Adam {
    fn name(&self) -> &'static str {
        "adam"
    }

    fn apply_gradient(&mut self, params: &[f64], grad: &[f64]) -> Vec<f64> {
        if self.m.len() != params.len() {
            self.m = vec![0.0; params.len()];
            self.v = vec![0.0; params.len()];
        }
        self.t += 1;
        let lr = self.stepsize * (1.0 - self.beta2.powi(self.t)).sqrt()
            / (1.0 - self.beta1.powi(self.t));

        params
            .iter()
            .zip(grad)
            .enumerate()
            .map(|(i, (x, g))| {
                self.m[i] = self.beta1 * self.m[i] + (1.0 - self.beta1) * g;
                self.v[i] = self.beta2 * self.v[i] + (1.0 - self.beta2) * g * g;
                x - lr * self.m[i] / (self.v[i].sqrt() + self.eps)
            })
            .collect()
    }

    fn reset(&mut self) {
        self.t = 0;
        self.m.clear();
        self.v.clear();
    }
}

/// Adagrad: per-parameter step sizes from accumulated squared gradients.
#[derive(Debug, Clone)]
pub struct Adagrad {
    /// Step size η.
    pub stepsize: f64,
    /// Numerical floor under the square root.
    pub eps: f64,
    accumulation: Vec<f64>,
}

impl Adagrad {
    /// Create an Adagrad optimizer with `ε = 1e-8`.
    pub fn new(stepsize: f64) -> Self {
        Self {
            stepsize,
            eps: 1e-8,
            accumulation: Vec::new(),
        }
    }
}

impl Optimizer for Adagrad {
    fn name(&self) -> &'static str {
        "adagrad"
    }

    fn apply_gradient(&mut self, params: &[f64], grad: &[f64]) -> Vec<f64> {
        if self.accumulation.len() != params.len() {
            self.accumulation = vec![0.0; params.len()];
        }
        params
            .iter()
            .zip(grad)
            .enumerate()
            .map(|(i, (x, g))| {
                self.accumulation[i] += g * g;
                x - self.stepsize * g / (self.accumulation[i] + self.eps).sqrt()
            })
            .collect()
    }

    fn reset(&mut self) {
        self.accumulation.clear();
    }
}

/// Momentum with the gradient taken at the look-ahead point `x − μ·a`.
#[derive(Debug, Clone)]
pub struct NesterovMomentum {
    /// Step size η.
    pub stepsize: f64,
    /// Momentum μ.
    pub momentum: f64,
    accumulation: Vec<f64>,
}

impl NesterovMomentum {
    /// Create a Nesterov optimizer with `μ = 0.9`.
    pub fn new(stepsize: f64) -> Self {
        Self {
            stepsize,
            momentum: 0.9,
            accumulation: Vec::new(),
        }
    }

    /// Set the momentum.
    pub fn with_momentum(mut self, momentum: f64) -> Self {
        self.momentum = momentum;
        self
    }
}

impl Optimizer for NesterovMomentum {
    fn name(&self) -> &'static str {
        "nesterov"
    }

    fn gradient_point(&self, params: &[f64]) -> Vec<f64> {
        if self.accumulation.len() != params.len() {
            return params.to_vec();
        }
        params
            .iter()
            .zip(&self.accumulation)
            .map(|(x, a)| x - self.momentum * a)
            .collect()
    }

    fn apply_gradient(&mut self, params: &[f64], grad: &[f64]) -> Vec<f64> {
        if self.accumulation.len() != params.len() {
            self.accumulation = vec![0.0; params.len()];
        }
        params
            .iter()
            .zip(grad)
            .enumerate()
            .map(|(i, (x, g))| {
                self.accumulation[i] = self.momentum * self.accumulation[i] + self.stepsize * g;
                x - self.accumulation[i]
            })
            .collect()
    }

    fn reset(&mut self) {
        self.accumulation.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_gradient_descent_update() {
        let mut opt = GradientDescent::new(0.1);
        let x = opt.apply_gradient(&[1.0, 2.0], &[10.0, -10.0]);
        assert_eq!(x, vec![0.0, 3.0]);
    }

    #[test]
    fn test_adam_first_step_moves_by_stepsize() {
        // With bias correction the first step is η·g/|g| up to ε.
        let mut opt = Adam::new(0.8);
        let x = opt.apply_gradient(&[0.0], &[0.3]);
        let expected = -0.8 * (1.0 - 0.99f64).sqrt() / (1.0 - 0.9) * 0.1 * 0.3
            / ((0.01f64 * 0.09).sqrt() + 1e-8);
        assert_relative_eq!(x[0], expected, epsilon = 1e-12);
        assert_relative_eq!(x[0], -0.8, epsilon = 1e-6);
    }

    #[test]
    fn test_adagrad_first_step() {
        let mut opt = Adagrad::new(0.8);
        let x = opt.apply_gradient(&[1.0], &[2.0]);
        assert_relative_eq!(x[0], 1.0 - 0.8 * 2.0 / (4.0f64 + 1e-8).sqrt(), epsilon = 1e-12);
        let y = opt.apply_gradient(&x, &[2.0]);
        assert_relative_eq!(y[0], x[0] - 0.8 * 2.0 / (8.0f64 + 1e-8).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_nesterov_look_ahead() {
        let mut opt = NesterovMomentum::new(0.5);
        assert_eq!(opt.gradient_point(&[1.0]), vec![1.0]);
        let x = opt.apply_gradient(&[1.0], &[1.0]);
        assert_relative_eq!(x[0], 0.5);
        assert_relative_eq!(opt.gradient_point(&x)[0], 0.5 - 0.9 * 0.5);
    }

    #[test]
    fn test_adam_without_averaging_is_sign_descent() {
        let mut opt = Adam::new(0.1).with_betas(0.0, 0.0);
        let x = opt.apply_gradient(&[1.0, 1.0], &[4.0, -0.5]);
        let y = opt.apply_gradient(&x, &[2.0, -2.0]);
        assert_relative_eq!(x[0], 0.9, epsilon = 1e-8);
        assert_relative_eq!(x[1], 1.1, epsilon = 1e-8);
        assert_relative_eq!(y[0], 0.8, epsilon = 1e-8);
        assert_relative_eq!(y[1], 1.2, epsilon = 1e-8);
    }

    #[test]
    fn test_zero_momentum_matches_gradient_descent() {
        let mut nesterov = NesterovMomentum::new(0.2).with_momentum(0.0);
        let mut plain = GradientDescent::new(0.2);
        let mut a = vec![1.0, -3.0];
        let mut b = a.clone();
        for g in [[1.0, 2.0], [-0.5, 4.0]] {
            assert_eq!(nesterov.gradient_point(&a), a);
            a = nesterov.apply_gradient(&a, &g);
            b = plain.apply_gradient(&b, &g);
        }
        assert_relative_eq!(a[0], b[0], epsilon = 1e-12);
        assert_relative_eq!(a[1], b[1], epsilon = 1e-12);
    }

    #[test]
    fn test_reset_clears_state() {
        let mut opt = Adagrad::new(1.0);
        opt.apply_gradient(&[0.0], &[1.0]);
        opt.reset();
        let x = opt.apply_gradient(&[0.0], &[1.0]);
        assert_relative_eq!(x[0], -1.0 / (1.0f64 + 1e-8).sqrt(), epsilon = 1e-12);
    }
}
