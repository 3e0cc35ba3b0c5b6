/// Default relative tolerance used for approximate comparisons.
pub const REL_TOLERANCE: f64 = 1e-10;
/// Default absolute tolerance used for approximate comparisons.
pub const ABS_TOLERANCE: f64 = 0.0;

/// Checks whether two values are approximately equal using the default
/// tolerances.
///
/// ## Example
/// ```
/// use calcexpr::util::num::approx_eq;
///
/// assert!(approx_eq(0.1 + 0.2, 0.3));
/// assert!(!approx_eq(1.0, 1.001));
/// ```
#[must_use]
pub fn approx_eq(left: f64, right: f64) -> bool {
    approx_eq_with(left, right, REL_TOLERANCE, ABS_TOLERANCE)
}

/// Checks whether two values are approximately equal.
///
/// Two values are considered equal when
/// `|a − b| ≤ max(abs_tol, rel_tol * max(|a|, |b|))`.
/// Identical values, including equal infinities, always compare equal; `NaN`
/// never does.
///
/// ## Parameters
/// - `left`, `right`: The values to compare.
/// - `rel_tol`: Tolerance relative to the larger magnitude.
/// - `abs_tol`: Tolerance floor, useful when comparing against zero.
///
/// ## Example
/// ```
/// use calcexpr::util::num::approx_eq_with;
///
/// assert!(approx_eq_with(1e-12, 0.0, 0.0, 1e-9));
/// assert!(!approx_eq_with(1e-12, 0.0, 1e-10, 0.0));
/// ```
#[must_use]
#[allow(clippy::float_cmp)]
pub fn approx_eq_with(left: f64, right: f64, rel_tol: f64, abs_tol: f64) -> bool {
    if left == right {
        return true;
    }
    let difference = (left - right).abs();
    let max_norm = left.abs().max(right.abs());
    difference <= abs_tol.max(rel_tol * max_norm)
}
