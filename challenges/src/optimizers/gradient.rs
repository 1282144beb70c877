//! Finite-difference gradients.

/// Step used by [`central_difference`].
pub const DEFAULT_STEP: f64 = 1e-6;

/// Central finite-difference gradient of `objective` at `params`.
///
/// Costs two objective evaluations per parameter.
pub fn central_difference<F, E>(objective: &mut F, params: &[f64], step: f64) -> Result<Vec<f64>, E>
where
    F: FnMut(&[f64]) -> Result<f64, E>,
{
    let mut shifted = params.to_vec();
    let mut grad = Vec::with_capacity(params.len());
    for i in 0..params.len() {
        shifted[i] = params[i] + step;
        let plus = objective(&shifted)?;
        shifted[i] = params[i] - step;
        let minus = objective(&shifted)?;
        shifted[i] = params[i];
        grad.push((plus - minus) / (2.0 * step));
    }
    Ok(grad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::convert::Infallible;

    #[test]
    fn test_quadratic_gradient() {
        let mut f = |x: &[f64]| -> Result<f64, Infallible> { Ok(x[0] * x[0] + 3.0 * x[1]) };
        let g = central_difference(&mut f, &[2.0, -1.0], DEFAULT_STEP).unwrap();
        assert_relative_eq!(g[0], 4.0, epsilon = 1e-6);
        assert_relative_eq!(g[1], 3.0, epsilon = 1e-6);
    }

    #[test]
    fn test_trig_gradient() {
        let mut f = |x: &[f64]| -> Result<f64, Infallible> { Ok(x[0].cos()) };
        let g = central_difference(&mut f, &[0.7], DEFAULT_STEP).unwrap();
        assert_relative_eq!(g[0], -(0.7f64).sin(), epsilon = 1e-8);
    }

    #[test]
    fn test_error_propagates() {
        let mut f = |_: &[f64]| -> Result<f64, &'static str> { Err("boom") };
        assert_eq!(central_difference(&mut f, &[0.0], DEFAULT_STEP), Err("boom"));
    }
}
