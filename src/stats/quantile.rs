//! Order statistics over sorted samples.

/// Linear-interpolation quantile of an ascending sample.
///
/// The position is `p * (n - 1)`; fractional positions interpolate between
/// the two neighbouring order statistics. Returns `None` for an empty sample.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;
    let p = p.clamp(0.0, 1.0);
    let position = p * last as f64;
    let lower = position.floor() as usize;

    if lower >= last {
        return Some(sorted[last]);
    }

    let lower_value = sorted[lower];
    let upper_value = sorted[lower + 1];
    Some(lerp(lower_value, upper_value, position - lower as f64))
}

/// Point at fraction `t` between `a` and `b`, finite for any finite endpoints.
#[must_use]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    if t <= 0.0 {
        return a;
    }
    if t >= 1.0 {
        return b;
    }
    a.mul_add(1.0 - t, b * t)
}

/// Sorts a copy of the values ascending, leaving the input untouched.
#[must_use]
pub fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// Number of distinct values in an ascending sample.
#[must_use]
pub fn count_distinct(sorted: &[f64]) -> usize {
    if sorted.is_empty() {
        return 0;
    }
    1 + sorted.windows(2).filter(|pair| pair[0] != pair[1]).count()
}

#[cfg(test)]
#[path = "quantile_tests.rs"]
mod tests;
