//! Equal-width histogram binning.

use serde::Serialize;

use super::quantile::{count_distinct, lerp};

/// Upper bound on the number of bins.
pub const MAX_BINS: usize = 20;

/// One histogram bin: `[lower, upper)`, the last bin closed on the right.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

impl HistogramBin {
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        self.lower / 2.0 + self.upper / 2.0
    }
}

/// Binned counts over the plotted values.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Histogram {
    pub bins: Vec<HistogramBin>,
}

impl Histogram {
    /// Bins an ascending sample over `[min, max]`.
    ///
    /// The bin count is `min(MAX_BINS, distinct values)`. A sample with a
    /// single distinct value yields one zero-width bin holding every value.
    /// Values are placed by comparing against the reported bin edges, so each
    /// count matches the values inside its interval.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_sorted(sorted: &[f64]) -> Self {
        let (Some(&min), Some(&max)) = (sorted.first(), sorted.last()) else {
            return Self::default();
        };

        let bin_count = count_distinct(sorted).min(MAX_BINS);
        if bin_count <= 1 || max <= min {
            return Self {
                bins: vec![HistogramBin {
                    lower: min,
                    upper: max,
                    count: sorted.len(),
                }],
            };
        }

        let mut edges: Vec<f64> = (0..=bin_count)
            .map(|i| lerp(min, max, i as f64 / bin_count as f64))
            .collect();
        // Rounding on near-degenerate spans must not reorder the edges.
        for i in 1..edges.len() {
            edges[i] = edges[i].max(edges[i - 1]);
        }
        let interior = &edges[1..bin_count];
        let mut counts = vec![0usize; bin_count];
        for &value in sorted {
            counts[interior.partition_point(|&edge| edge <= value)] += 1;
        }

        let bins = edges
            .windows(2)
            .zip(counts)
            .map(|(edge, count)| HistogramBin {
                lower: edge[0],
                upper: edge[1],
                count,
            })
            .collect();

        Self { bins }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Sum of all bin counts.
    #[must_use]
    pub fn total(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).sum()
    }

    /// Largest bin count, 0 for an empty histogram.
    #[must_use]
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }

    /// `(midpoint, count)` pairs in bin order.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn midpoints(&self) -> Vec<(f64, f64)> {
        self.bins
            .iter()
            .map(|bin| (bin.midpoint(), bin.count as f64))
            .collect()
    }
}

#[cfg(test)]
#[path = "histogram_tests.rs"]
mod tests;
