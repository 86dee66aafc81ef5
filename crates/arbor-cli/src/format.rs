//! Scientific-notation rendering for log-space values.

/// Renders a natural log value as `A x 10^B` with `A` in `[1, 10)` and
/// three fractional digits. The value itself may be far beyond f64 range;
/// only its logarithm is ever held.
pub fn format_huge_number(log_val: f64) -> String {
    if log_val == 0.0 {
        return "1".to_string();
    }
    let log10 = log_val / std::f64::consts::LN_10;
    let mut exponent = log10.floor() as i64;
    let mut coefficient = 10f64.powf(log10 - exponent as f64);
    // The division can land a hair below an integer power, leaving a
    // coefficient that rounds to 10.000; carry it into the exponent.
    if (coefficient * 1000.0).round() >= 10_000.0 {
        coefficient /= 10.0;
        exponent += 1;
    }
    format!("{coefficient:.3} x 10^{exponent}")
}
