//! Statistical summarization feeding the box chart.
//!
//! [`analyze`] sorts an owned copy of the dataset, computes quartiles and
//! fences, filters outliers and bins the plotted values into a histogram.

mod histogram;
mod quantile;
mod summary;

pub use histogram::{Histogram, HistogramBin, MAX_BINS};
pub use quantile::{count_distinct, lerp, quantile_sorted, sorted_copy};
pub use summary::{BoxStats, FENCE_FACTOR, Summary};

use serde::Serialize;

use crate::error::{BoxChartError, Result};

/// Summary and histogram produced for one render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub summary: Summary,
    pub histogram: Histogram,
}

/// Computes the statistical summary and histogram of a dataset.
///
/// With `constrain` set, the box statistics are recomputed on the values
/// inside the first-pass fences and the filtered subset is derived once more
/// from the refined fences. The caller's slice is never reordered.
///
/// # Errors
/// Returns `InvalidInput` if `data` is empty or contains a non-finite value.
pub fn analyze(data: &[f64], constrain: bool) -> Result<Analysis> {
    if let Some(bad) = data.iter().find(|value| !value.is_finite()) {
        return Err(BoxChartError::InvalidInput(format!(
            "dataset contains a non-finite value ({bad})"
        )));
    }

    let sorted = sorted_copy(data);
    let (Some(&min), Some(&max)) = (sorted.first(), sorted.last()) else {
        return Err(BoxChartError::InvalidInput("dataset is empty".to_string()));
    };
    let first_pass = BoxStats::from_sorted(&sorted)
        .ok_or_else(|| BoxChartError::InvalidInput("dataset is empty".to_string()))?;
    let filtered = first_pass.filter(&sorted);

    let (stats, filtered, plotted) = if constrain {
        match BoxStats::from_sorted(&filtered) {
            Some(refined) => {
                let refiltered = refined.filter(&filtered);
                (refined, refiltered, filtered)
            }
            None => (first_pass, filtered.clone(), filtered),
        }
    } else {
        (first_pass, filtered, sorted.clone())
    };

    let histogram = Histogram::from_sorted(&plotted);

    tracing::debug!(
        count = sorted.len(),
        constrain,
        plotted = plotted.len(),
        bins = histogram.len(),
        "computed box statistics"
    );

    Ok(Analysis {
        summary: Summary {
            stats,
            count: sorted.len(),
            min,
            max,
            filtered,
            plotted,
            constrained: constrain,
        },
        histogram,
    })
}

#[cfg(test)]
#[path = "analysis_tests.rs"]
mod tests;
