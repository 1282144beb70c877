//! Optimizing measurements: group jointly measurable Pauli words.

use std::fmt;

use qforge_sim::{PauliWord, compression_ratio, group_words};
use serde::Serialize;
use tracing::debug;

use super::Exercise;
use crate::error::ChallengeResult;
use crate::format::float_repr;
use crate::input;

/// The grouped words and how much they save.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grouping {
    /// Merged words, in the order their groups were opened.
    pub groups: Vec<String>,
    /// `1 − |groups| / |words|`.
    pub compression_ratio: f64,
}

impl fmt::Display for Grouping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", float_repr(self.compression_ratio))
    }
}

/// Greedy first-fit grouping.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeasurementGroupingRunner;

impl Exercise for MeasurementGroupingRunner {
    const NAME: &'static str = "optimize-measurements";
    type Input = Vec<PauliWord>;
    type Output = Grouping;

    fn parse(&self, line: &str) -> ChallengeResult<Vec<PauliWord>> {
        Ok(input::pauli_words(line)?)
    }

    fn run(&self, words: &Vec<PauliWord>) -> ChallengeResult<Grouping> {
        let groups = group_words(words);
        debug!(words = words.len(), groups = groups.len(), "grouped Pauli words");
        let ratio = compression_ratio(words, &groups)?;
        Ok(Grouping {
            groups: groups.iter().map(ToString::to_string).collect(),
            compression_ratio: ratio,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worked_example() {
        let line = "4,Y,I,Z,I,Y,I,X,I,I,X,Z,I,I,I,I,Z,Z,Z,I,I";
        let out = MeasurementGroupingRunner.solve(line).unwrap();
        assert_eq!(out.groups, vec!["YXZZ", "YIXI", "ZZII"]);
        assert_eq!(out.to_string(), "0.4");
    }

    #[test]
    fn test_no_words_is_an_error() {
        assert!(MeasurementGroupingRunner.solve("3,X,Y").is_err());
    }
}
