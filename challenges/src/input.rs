//! Parsing of the one-line, comma-separated exercise inputs.

use std::str::FromStr;

use qforge_sim::{PauliOp, PauliWord, grouping::words_from_symbols};

use crate::error::InputError;

/// Split a line on commas, trimming whitespace around each token.
///
/// A trailing newline or a trailing comma does not produce an empty token.
pub fn tokens(input: &str) -> Result<Vec<&str>, InputError> {
    let trimmed = input.trim().trim_end_matches(',');
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(trimmed.split(',').map(str::trim).collect())
}

fn parse_all<T: FromStr>(input: &str, expected: &'static str) -> Result<Vec<T>, InputError> {
    tokens(input)?
        .into_iter()
        .enumerate()
        .map(|(position, token)| {
            token.parse().map_err(|_| InputError::InvalidToken {
                position,
                token: token.to_string(),
                expected,
            })
        })
        .collect()
}

/// Every token as a float.
pub fn floats(input: &str) -> Result<Vec<f64>, InputError> {
    parse_all(input, "number")
}

/// Every token as an integer.
pub fn ints(input: &str) -> Result<Vec<i64>, InputError> {
    parse_all(input, "integer")
}

fn exactly<T, const N: usize>(values: Vec<T>) -> Result<[T; N], InputError> {
    let got = values.len();
    values
        .try_into()
        .map_err(|_| InputError::WrongCount { expected: N, got })
}

/// Exactly `N` floats.
pub fn float_array<const N: usize>(input: &str) -> Result<[f64; N], InputError> {
    exactly(floats(input)?)
}

/// Exactly `N` bits (`0` or `1`).
pub fn bit_array<const N: usize>(input: &str) -> Result<[u8; N], InputError> {
    let values = ints(input)?;
    let bits = values
        .iter()
        .enumerate()
        .map(|(position, &v)| match v {
            0 => Ok(0),
            1 => Ok(1),
            _ => Err(InputError::OutOfRange {
                position,
                value: v.to_string(),
                reason: "expected 0 or 1",
            }),
        })
        .collect::<Result<Vec<u8>, _>>()?;
    exactly(bits)
}

/// A float followed by an integer count, e.g. `0.3,5`.
///
/// A negative count means nothing is repeated and reads as `0`.
pub fn float_and_count(input: &str) -> Result<(f64, usize), InputError> {
    let [first, second] = exactly::<_, 2>(tokens(input)?)?;
    let value = first.parse().map_err(|_| InputError::InvalidToken {
        position: 0,
        token: first.to_string(),
        expected: "number",
    })?;
    let count: i64 = second.parse().map_err(|_| InputError::InvalidToken {
        position: 1,
        token: second.to_string(),
        expected: "integer",
    })?;
    Ok((value, usize::try_from(count).unwrap_or(0)))
}

/// Pauli words given as a word length followed by one symbol per token.
///
/// Only the first character of each symbol token counts. Symbols that do
/// not fill a whole word at the end are ignored.
pub fn pauli_words(input: &str) -> Result<Vec<PauliWord>, InputError> {
    let tokens = tokens(input)?;
    let len_token = tokens[0];
    let word_len: usize = match len_token.parse() {
        Ok(n) if n > 0 => n,
        _ => {
            return Err(InputError::InvalidToken {
                position: 0,
                token: len_token.to_string(),
                expected: "positive word length",
            });
        }
    };
    let symbols = tokens[1..]
        .iter()
        .enumerate()
        .map(|(i, token)| {
            token
                .chars()
                .next()
                .and_then(|c| PauliOp::from_char(c).ok())
                .ok_or_else(|| InputError::InvalidToken {
                    position: i + 1,
                    token: token.to_string(),
                    expected: "Pauli symbol",
                })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(words_from_symbols(word_len, &symbols))
}

/// Integers reshaped into `rows` equal rows.
pub fn int_rows(input: &str, rows: usize) -> Result<Vec<Vec<i64>>, InputError> {
    let values = ints(input)?;
    if rows == 0 || values.len() % rows != 0 {
        return Err(InputError::RaggedRows {
            rows,
            got: values.len(),
        });
    }
    let width = values.len() / rows;
    Ok(values.chunks(width).map(<[i64]>::to_vec).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_trim() {
        assert_eq!(tokens(" 0.5 , 1.0\n").unwrap(), vec!["0.5", "1.0"]);
        assert_eq!(tokens("1,2,").unwrap(), vec!["1", "2"]);
        assert_eq!(tokens("  \n"), Err(InputError::Empty));
    }

    #[test]
    fn test_float_array_count() {
        assert_eq!(float_array::<2>("1.5,-2").unwrap(), [1.5, -2.0]);
        assert_eq!(
            float_array::<3>("1,2"),
            Err(InputError::WrongCount {
                expected: 3,
                got: 2
            })
        );
    }

    #[test]
    fn test_invalid_token_position() {
        let err = floats("1.0,abc").unwrap_err();
        assert!(matches!(err, InputError::InvalidToken { position: 1, .. }));
    }

    #[test]
    fn test_bits_reject_other_values() {
        assert_eq!(bit_array::<2>("1,0").unwrap(), [1, 0]);
        assert!(matches!(
            bit_array::<2>("1,2"),
            Err(InputError::OutOfRange { position: 1, .. })
        ));
    }

    #[test]
    fn test_float_and_count() {
        assert_eq!(float_and_count("0.3,4").unwrap(), (0.3, 4));
        assert_eq!(float_and_count("0.3,-2").unwrap(), (0.3, 0));
        assert!(float_and_count("0.3,1.5").is_err());
    }

    #[test]
    fn test_pauli_words_drop_partial_word() {
        let words = pauli_words("2,X,Ideal,Z,Y,X").unwrap();
        let text: Vec<String> = words.iter().map(ToString::to_string).collect();
        assert_eq!(text, vec!["XI", "ZY"]);
    }

    #[test]
    fn test_pauli_words_bad_length() {
        assert!(pauli_words("0,X").is_err());
        assert!(pauli_words("x,X").is_err());
    }

    #[test]
    fn test_int_rows() {
        let rows = int_rows("1,0,1,0,0,-1", 2).unwrap();
        assert_eq!(rows, vec![vec![1, 0, 1], vec![0, 0, -1]]);
        assert!(int_rows("1,2,3", 2).is_err());
    }
}
