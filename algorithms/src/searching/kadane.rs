/// Largest sum of any contiguous run of `numbers`.
///
/// The empty run counts, so the result is never negative and an empty or
/// all-negative input yields 0. Sums past `i64::MAX` saturate, so the result
/// is the true maximum clamped to `i64::MAX`.
pub fn kadane_search(numbers: &[i64]) -> i64 {
    let mut best = 0;
    let mut running = 0i64;
    for &n in numbers {
        running = running.saturating_add(n).max(0);
        best = best.max(running);
    }
    best
}
