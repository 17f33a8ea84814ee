/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Safely converts a `usize` to `f64` if and only if it is exactly
/// representable.
///
/// ## Returns
/// - `Some(f64)`: The converted value if it is safe.
/// - `None`: If the value exceeds `MAX_SAFE_U64_INT`.
///
/// ## Example
/// ```
/// use funcplot::util::num::usize_to_f64_checked;
///
/// assert_eq!(usize_to_f64_checked(10_000), Some(10_000.0));
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn usize_to_f64_checked(value: usize) -> Option<f64> {
    let wide = u64::try_from(value).ok()?;
    if wide > MAX_SAFE_U64_INT {
        return None;
    }
    Some(wide as f64)
}
