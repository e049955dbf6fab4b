//! Display formatting for impact metrics.
//!
//! Every consumer that shows a metric (report table, assessment prompt)
//! goes through these helpers so the same number always renders the same way.

/// Fixed-point rendering with `digits` decimal places.
pub fn fixed(value: f64, digits: usize) -> String {
    format!("{value:.digits$}")
}

/// Scientific notation with `digits` fractional mantissa digits and a signed
/// exponent, e.g. `5.97e+10` or `1.20e-3`.
pub fn scientific(value: f64, digits: usize) -> String {
    let raw = format!("{value:.digits$e}");
    match raw.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        // Negative exponents and inf/NaN already render fine
        _ => raw,
    }
}
