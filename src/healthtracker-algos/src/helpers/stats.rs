/// Arithmetic mean, `0.0` for an empty window.
pub fn mean(values: &[f64]) -> f64 {
    match values.len() {
        0 => 0.0,
        count => values.iter().sum::<f64>() / count as f64,
    }
}

/// Mean that does not depend on the order of `values`.
///
/// Floating point addition is not associative, so the values are summed
/// in ascending order. Two permutations of the same multiset therefore
/// produce bit-identical results.
pub fn order_independent_mean(values: &mut [f64]) -> f64 {
    values.sort_by(f64::total_cmp);
    mean(values)
}
