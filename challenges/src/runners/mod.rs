//! One runner per exercise.
//!
//! A runner holds the exercise's tunable constants (with the published
//! values as `Default`), parses the input line and runs the circuits.

pub mod bomb;
pub mod car;
pub mod chsh;
pub mod deutsch_jozsa;
pub mod ising;
pub mod measurements;
pub mod mind_the_gap;
pub mod order_matters;
pub mod qram;
pub mod tardigrade;
pub mod triple_givens;

pub use bomb::BombTesterRunner;
pub use car::FindTheCarRunner;
pub use chsh::ChshRunner;
pub use deutsch_jozsa::DeutschJozsaRunner;
pub use ising::IsingRunner;
pub use measurements::MeasurementGroupingRunner;
pub use mind_the_gap::MindTheGapRunner;
pub use order_matters::OrderMattersRunner;
pub use qram::QramRunner;
pub use tardigrade::TardigradeRunner;
pub use triple_givens::TripleGivensRunner;

use std::fmt;

use serde::Serialize;
use tracing::info;

use crate::error::ChallengeResult;
use crate::format::join_floats;

/// An exercise: parse one input line, compute one answer.
pub trait Exercise {
    /// Command name, e.g. `deutsch-jozsa`.
    const NAME: &'static str;

    /// Parsed input.
    type Input;

    /// Answer; `Display` renders the output line.
    type Output: fmt::Display + Serialize;

    /// Parse the comma-separated input line.
    fn parse(&self, input: &str) -> ChallengeResult<Self::Input>;

    /// Compute the answer.
    fn run(&self, input: &Self::Input) -> ChallengeResult<Self::Output>;

    /// Parse and run.
    fn solve(&self, input: &str) -> ChallengeResult<Self::Output> {
        let parsed = self.parse(input)?;
        info!(exercise = Self::NAME, "running exercise");
        let output = self.run(&parsed)?;
        info!(exercise = Self::NAME, result = %output, "exercise finished");
        Ok(output)
    }
}

/// A comma-separated list of floats.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FloatList(pub Vec<f64>);

impl fmt::Display for FloatList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_floats(&self.0))
    }
}

/// Catalogue entry for listing exercises.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ExerciseInfo {
    /// Command name.
    pub name: &'static str,
    /// Exercise category.
    pub category: &'static str,
    /// Input line format.
    pub input: &'static str,
}

/// Every exercise, in catalogue order.
pub const CATALOG: [ExerciseInfo; 11] = [
    ExerciseInfo { name: DeutschJozsaRunner::NAME, category: "algorithms", input: "8 wire indices in {0,1}" },
    ExerciseInfo { name: TardigradeRunner::NAME, category: "games", input: "theta" },
    ExerciseInfo { name: ChshRunner::NAME, category: "games", input: "alpha,beta" },
    ExerciseInfo { name: BombTesterRunner::NAME, category: "games", input: "angle,n" },
    ExerciseInfo { name: FindTheCarRunner::NAME, category: "games", input: "2 bits" },
    ExerciseInfo { name: OrderMattersRunner::NAME, category: "basics", input: "theta1,theta2" },
    ExerciseInfo { name: MeasurementGroupingRunner::NAME, category: "qchem", input: "n followed by Pauli symbols" },
    ExerciseInfo { name: TripleGivensRunner::NAME, category: "qchem", input: "alpha,beta,gamma" },
    ExerciseInfo { name: MindTheGapRunner::NAME, category: "qchem", input: "coord (bohr)" },
    ExerciseInfo { name: IsingRunner::NAME, category: "qml", input: "250 rows of spins plus a label" },
    ExerciseInfo { name: QramRunner::NAME, category: "qml", input: "8 angles" },
];
