//! Grouping of Pauli words into jointly measurable sets.
//!
//! Two words can be estimated from one circuit when, position by position,
//! their symbols agree or one of them is the identity. Grouping merges
//! such words so fewer circuits need to run.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{SimError, SimResult};
use crate::hamiltonian::PauliOp;

/// A fixed-length Pauli word, e.g. `YIZI`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PauliWord(Vec<PauliOp>);

impl PauliWord {
    /// Create a word from its symbols.
    pub fn new(ops: Vec<PauliOp>) -> Self {
        Self(ops)
    }

    /// The symbols of the word.
    pub fn ops(&self) -> &[PauliOp] {
        &self.0
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the word has no positions.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True iff, at every position, the symbols are equal or one is `I`.
    ///
    /// Words of different length are never compatible.
    pub fn is_compatible(&self, other: &PauliWord) -> bool {
        self.len() == other.len()
            && self
                .0
                .iter()
                .zip(&other.0)
                .all(|(a, b)| a == b || *a == PauliOp::I || *b == PauliOp::I)
    }

    /// Elementwise union of two compatible words.
    pub fn merge(&self, other: &PauliWord) -> SimResult<PauliWord> {
        if !self.is_compatible(other) {
            return Err(SimError::IncompatibleWords {
                left: self.to_string(),
                right: other.to_string(),
            });
        }
        Ok(PauliWord(
            self.0
                .iter()
                .zip(&other.0)
                .map(|(&a, &b)| if a == PauliOp::I { b } else { a })
                .collect(),
        ))
    }

}

impl fmt::Display for PauliWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for op in &self.0 {
            write!(f, "{op}")?;
        }
        Ok(())
    }
}

impl FromStr for PauliWord {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .filter(|c| !c.is_whitespace())
            .map(PauliOp::from_char)
            .collect::<SimResult<Vec<_>>>()
            .map(PauliWord)
    }
}

/// Greedy first-fit grouping.
///
/// Each word, in input order, is merged into the first group it is
/// compatible with; otherwise it opens a new group.
pub fn group_words(words: &[PauliWord]) -> Vec<PauliWord> {
    let mut groups: Vec<PauliWord> = Vec::new();
    for word in words {
        match groups.iter_mut().find(|g| word.is_compatible(g)) {
            Some(group) => {
                if let Ok(merged) = word.merge(group) {
                    *group = merged;
                }
            }
            None => groups.push(word.clone()),
        }
    }
    groups
}

/// `1 - (|grouped| · len) / (|original| · len)`.
///
/// Every word in both lists must have the length of `original[0]`.
pub fn compression_ratio(original: &[PauliWord], grouped: &[PauliWord]) -> SimResult<f64> {
    let len = original.first().ok_or(SimError::NoWords)?.len();
    if let Some(bad) = original.iter().chain(grouped).find(|w| w.len() != len) {
        return Err(SimError::WordLength {
            expected: len,
            got: bad.len(),
        });
    }
    if len == 0 {
        return Ok(0.0);
    }
    let grouped_size = (grouped.len() * len) as f64;
    let original_size = (original.len() * len) as f64;
    Ok(1.0 - grouped_size / original_size)
}

/// Build words from a flat symbol stream: every run of `word_len`
/// consecutive symbols forms one word. A trailing partial run is dropped.
pub fn words_from_symbols(word_len: usize, symbols: &[PauliOp]) -> Vec<PauliWord> {
    if word_len == 0 {
        return Vec::new();
    }
    symbols
        .chunks_exact(word_len)
        .map(|chunk| PauliWord(chunk.to_vec()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn w(s: &str) -> PauliWord {
        s.parse().unwrap()
    }

    #[test]
    fn test_compatibility_rules() {
        assert!(w("YIZI").is_compatible(&w("IXZI")));
        assert!(!w("YIZI").is_compatible(&w("YIXI")));
        assert!(!w("XI").is_compatible(&w("XII")));
        assert!(w("IIII").is_compatible(&w("XYZX")));
    }

    #[test]
    fn test_merge() {
        assert_eq!(w("YIZI").merge(&w("IXZI")).unwrap(), w("YXZI"));
        assert!(matches!(
            w("X").merge(&w("Z")),
            Err(SimError::IncompatibleWords { .. })
        ));
    }

    #[test]
    fn test_group_words_first_fit() {
        let words = vec![w("XI"), w("ZI"), w("IX"), w("IZ")];
        let groups = group_words(&words);
        assert_eq!(groups, vec![w("XX"), w("ZZ")]);
        assert_relative_eq!(compression_ratio(&words, &groups).unwrap(), 0.5);
    }

    #[test]
    fn test_compression_ratio_errors() {
        assert!(matches!(compression_ratio(&[], &[]), Err(SimError::NoWords)));
        assert!(matches!(
            compression_ratio(&[w("XI"), w("X")], &[w("XI")]),
            Err(SimError::WordLength {
                expected: 2,
                got: 1
            })
        ));
    }

    #[test]
    fn test_words_from_symbols() {
        let symbols: Vec<PauliOp> = "XYZIXY".chars().map(|c| PauliOp::from_char(c).unwrap()).collect();
        let words = words_from_symbols(4, &symbols);
        assert_eq!(words, vec![w("XYZI")]);
    }

    #[test]
    fn test_parse_rejects_unknown_symbol() {
        assert!(matches!("XQ".parse::<PauliWord>(), Err(SimError::InvalidPauli('Q'))));
    }

    fn arb_word(len: usize) -> impl Strategy<Value = PauliWord> {
        prop::collection::vec(
            prop_oneof![
                Just(PauliOp::I),
                Just(PauliOp::X),
                Just(PauliOp::Y),
                Just(PauliOp::Z)
            ],
            len,
        )
        .prop_map(PauliWord::new)
    }

    proptest! {
        #[test]
        fn compatibility_is_symmetric(a in arb_word(5), b in arb_word(5)) {
            prop_assert_eq!(a.is_compatible(&b), b.is_compatible(&a));
        }

        #[test]
        fn merge_is_idempotent(a in arb_word(6)) {
            prop_assert_eq!(a.merge(&a).unwrap(), a);
        }

        #[test]
        fn grouped_words_cover_originals(words in prop::collection::vec(arb_word(4), 1..20)) {
            let groups = group_words(&words);
            prop_assert!(groups.len() <= words.len());
            for word in &words {
                prop_assert!(groups.iter().any(|g| g.is_compatible(word)));
            }
            let ratio = compression_ratio(&words, &groups).unwrap();
            prop_assert!((0.0..1.0).contains(&ratio));
            if groups.len() == words.len() {
                prop_assert_eq!(ratio, 0.0);
            }
        }
    }
}
