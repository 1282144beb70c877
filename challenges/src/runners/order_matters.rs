//! Order matters: `RX` and `RY` do not commute.

use std::fmt;

use qforge_sim::{Device, Observable};
use serde::Serialize;

use super::Exercise;
use crate::circuits::basics::{rx_then_ry, ry_then_rx};
use crate::error::ChallengeResult;
use crate::input;

/// `|⟨X⟩₁ − ⟨X⟩₂|`, printed with six decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Difference(pub f64);

impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}", self.0)
    }
}

/// Exact expectation values on one wire.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrderMattersRunner;

impl Exercise for OrderMattersRunner {
    const NAME: &'static str = "order-matters";
    type Input = [f64; 2];
    type Output = Difference;

    fn parse(&self, line: &str) -> ChallengeResult<[f64; 2]> {
        Ok(input::float_array::<2>(line)?)
    }

    fn run(&self, &[theta1, theta2]: &[f64; 2]) -> ChallengeResult<Difference> {
        let device = Device::new("default.qubit", 1)?;
        let x = Observable::x(0);
        let first = device.expval(&rx_then_ry(theta1, theta2)?, &x)?;
        let second = device.expval(&ry_then_rx(theta1, theta2)?, &x)?;
        Ok(Difference((first - second).abs()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_closed_form() {
        // ⟨X⟩₁ = cos θ1 sin θ2, ⟨X⟩₂ = sin θ2.
        let (t1, t2) = (0.5, 0.8);
        let out = OrderMattersRunner.run(&[t1, t2]).unwrap();
        assert_relative_eq!(out.0, (t2.sin() * (1.0 - t1.cos())).abs(), epsilon = 1e-12);
    }

    #[test]
    fn test_zero_rx_commutes() {
        let out = OrderMattersRunner.solve("0,1.3").unwrap();
        assert_eq!(out.to_string(), "0.000000");
    }
}
