//! Fixed-decimal formatting for display strings.
//!
//! Values are scaled and rounded into an `i64` and only integers go through
//! the formatter, so the output is identical on every target. Non-finite
//! inputs render as `NaN`, `Inf` or `-Inf`.

/// Largest supported number of decimals; more would overflow the scale.
const MAX_DECIMALS: usize = 9;

pub fn fmt_f64_fixed(v: f64, decimals: usize) -> String {
    if let Some(s) = non_finite(v) {
        return s.to_string();
    }

    let decimals = decimals.min(MAX_DECIMALS);
    let scale = 10_i64.pow(decimals as u32);

    let scaled = (v * scale as f64).round();
    if !scaled.is_finite() || scaled.abs() > i64::MAX as f64 {
        return if v.is_sign_negative() { "-Inf" } else { "Inf" }.to_string();
    }
    let scaled = scaled as i64;

    let mut out = String::new();
    if scaled < 0 {
        out.push('-');
    }
    let abs = scaled.unsigned_abs();
    let scale = scale as u64;
    out.push_str(&(abs / scale).to_string());

    if decimals > 0 {
        let frac = (abs % scale).to_string();
        out.push('.');
        out.extend(std::iter::repeat('0').take(decimals - frac.len()));
        out.push_str(&frac);
    }
    out
}

/// `probability` as a percentage with one decimal, without the `%` sign.
pub fn fmt_percent(probability: f64) -> String {
    fmt_f64_fixed(probability * 100.0, 1)
}

fn non_finite(v: f64) -> Option<&'static str> {
    if v.is_nan() {
        Some("NaN")
    } else if v.is_infinite() {
        Some(if v.is_sign_positive() { "Inf" } else { "-Inf" })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_fraction_with_zeros() {
        assert_eq!(fmt_f64_fixed(1.0, 1), "1.0");
        assert_eq!(fmt_f64_fixed(0.05, 3), "0.050");
        assert_eq!(fmt_f64_fixed(2.0, 0), "2");
    }

    #[test]
    fn rounds_to_requested_decimals() {
        assert_eq!(fmt_f64_fixed(53.934, 1), "53.9");
        assert_eq!(fmt_f64_fixed(1.63, 1), "1.6");
        assert_eq!(fmt_f64_fixed(0.96, 1), "1.0");
    }

    #[test]
    fn negative_values_keep_sign() {
        assert_eq!(fmt_f64_fixed(-1.25, 1), "-1.3");
        // Rounds to zero, so no sign.
        assert_eq!(fmt_f64_fixed(-0.01, 1), "0.0");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(fmt_f64_fixed(f64::NAN, 2), "NaN");
        assert_eq!(fmt_f64_fixed(f64::INFINITY, 2), "Inf");
        assert_eq!(fmt_f64_fixed(f64::NEG_INFINITY, 2), "-Inf");
        assert_eq!(fmt_f64_fixed(1e300, 3), "Inf");
    }

    #[test]
    fn percent_of_probability() {
        assert_eq!(fmt_percent(0.5393), "53.9");
        assert_eq!(fmt_percent(1.0), "100.0");
        assert_eq!(fmt_percent(0.0), "0.0");
    }
}
