//! Number formatting for the one-line outputs.
//!
//! Floats are written in shortest round-trip form: positional notation with
//! a trailing `.0` for whole numbers when the decimal exponent lies in
//! `-4..16`, scientific notation with a signed two-digit exponent otherwise
//! (`1e-05`, `1.5e+16`).

/// Shortest round-trip representation of `x`.
pub fn float_repr(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if x == 0.0 {
        return if x.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. `-1.2345e-3`.
    let sci = format!("{:e}", x.abs());
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((&sci, "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();
    let sign = if x < 0.0 { "-" } else { "" };

    let body = if (-4..16).contains(&exponent) {
        positional(&digits, exponent)
    } else {
        let (head, tail) = digits.split_at(1);
        let mantissa = if tail.is_empty() {
            head.to_string()
        } else {
            format!("{head}.{tail}")
        };
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{exp_sign}{:02}", exponent.abs())
    };
    format!("{sign}{body}")
}

fn positional(digits: &str, exponent: i32) -> String {
    if exponent < 0 {
        let zeros = "0".repeat((-exponent - 1) as usize);
        return format!("0.{zeros}{digits}");
    }
    let int_len = exponent as usize + 1;
    if digits.len() <= int_len {
        format!("{digits}{}.0", "0".repeat(int_len - digits.len()))
    } else {
        let (int_part, frac) = digits.split_at(int_len);
        format!("{int_part}.{frac}")
    }
}

/// Round to `decimals` places, ties to even on the scaled value.
pub fn round_half_even(x: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (x * scale).round_ties_even() / scale
}

/// Join values with `,` using [`float_repr`].
pub fn join_floats(values: &[f64]) -> String {
    values
        .iter()
        .map(|&v| float_repr(v))
        .collect::<Vec<_>>()
        .join(",")
}
