//! Box statistics: quartiles, interquartile range and outlier fences.

use serde::Serialize;

use super::quantile::quantile_sorted;

/// Multiplier applied to the IQR when placing the fences.
pub const FENCE_FACTOR: f64 = 1.5;

/// Quartiles and fences of one ascending sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoxStats {
    pub q1: f64,
    pub q2: f64,
    pub q3: f64,
    pub iqr: f64,
    pub upper_fence: f64,
    pub lower_fence: f64,
    /// True when the lower fence fell back to the sample minimum.
    pub lower_fence_clamped: bool,
}

impl BoxStats {
    /// Computes the box statistics of an ascending, non-empty sample.
    ///
    /// The lower fence follows the fallback rule: when `q1 - 1.5 * iqr` lies
    /// above the minimum, the fence becomes `q3 - 1.5 * iqr`; otherwise it is
    /// the minimum itself.
    #[must_use]
    pub fn from_sorted(sorted: &[f64]) -> Option<Self> {
        let min = *sorted.first()?;
        let q1 = quantile_sorted(sorted, 0.25)?;
        let q2 = quantile_sorted(sorted, 0.5)?;
        let q3 = quantile_sorted(sorted, 0.75)?;

        let iqr = q3 - q1;
        let reach = iqr * FENCE_FACTOR;
        let upper_fence = q3 + reach;
        let lower_fence_clamped = q1 - reach <= min;
        let lower_fence = if lower_fence_clamped { min } else { q3 - reach };

        Some(Self {
            q1,
            q2,
            q3,
            iqr,
            upper_fence,
            lower_fence,
            lower_fence_clamped,
        })
    }

    /// Whether a value lies inside the fences.
    ///
    /// The interval is open, except that a clamped lower fence keeps the
    /// minimum and a zero IQR keeps values sitting on either fence.
    #[must_use]
    pub fn within_fences(&self, value: f64) -> bool {
        let degenerate = self.iqr == 0.0;
        let above_lower = if self.lower_fence_clamped || degenerate {
            value >= self.lower_fence
        } else {
            value > self.lower_fence
        };
        let below_upper = if degenerate {
            value <= self.upper_fence
        } else {
            value < self.upper_fence
        };
        above_lower && below_upper
    }

    /// Values of an ascending sample that lie inside the fences, order preserved.
    #[must_use]
    pub fn filter(&self, sorted: &[f64]) -> Vec<f64> {
        sorted
            .iter()
            .copied()
            .filter(|&value| self.within_fences(value))
            .collect()
    }

    /// Whether the chart should draw a bracket for the lower fence.
    #[must_use]
    pub fn draws_lower_fence(&self) -> bool {
        self.lower_fence < self.q1
    }

    /// `[label, value]` rows of the summary table.
    #[must_use]
    pub fn table_rows(&self) -> [(&'static str, f64); 5] {
        [
            ("Lower Fence", self.lower_fence),
            ("Q1", self.q1),
            ("Median", self.q2),
            ("Q3", self.q3),
            ("Upper Fence", self.upper_fence),
        ]
    }
}

/// Statistical summary driving one chart render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Box statistics (refined on the filtered subset in constrain mode).
    #[serde(flatten)]
    pub stats: BoxStats,
    /// Number of values in the input dataset.
    pub count: usize,
    pub min: f64,
    pub max: f64,
    /// Values inside the final fences.
    pub filtered: Vec<f64>,
    /// Values drawn on the chart: `filtered` from the first pass in constrain
    /// mode, the full sorted dataset otherwise.
    pub plotted: Vec<f64>,
    pub constrained: bool,
}

impl Summary {
    /// Number of input values that fall outside the final fences.
    #[must_use]
    pub const fn outlier_count(&self) -> usize {
        self.count.saturating_sub(self.filtered.len())
    }

    /// Smallest and largest value inside the fences (whisker ends).
    #[must_use]
    pub fn filtered_extent(&self) -> Option<(f64, f64)> {
        Some((*self.filtered.first()?, *self.filtered.last()?))
    }

    /// Smallest and largest plotted value.
    #[must_use]
    pub fn plotted_extent(&self) -> Option<(f64, f64)> {
        Some((*self.plotted.first()?, *self.plotted.last()?))
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
