//! Price reducer - collapses a ticker price list to its median

/// Return the statistical median of a price list.
///
/// Sorts numerically ascending; for an even-length list the result is the
/// mean of the two middle elements. An empty list has no median and the
/// caller decides how to report it.
pub fn median(prices: &[f64]) -> Option<f64> {
    if prices.is_empty() {
        return None;
    }

    let mut sorted = prices.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}
