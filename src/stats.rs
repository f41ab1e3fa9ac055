//! Statistics over the nonzero voxels of a volume.
//!
//! Zero voxels are treated as background (e.g. outside a brain mask) and excluded.
//! NaN is not equal to zero, so NaN voxels are included and make the mean NaN.

use ndarray::{Array1, ArrayBase, Data, Dimension};
use ndarray_stats::SummaryStatisticsExt;
use tracing::debug;

use crate::error::Result;

/// Count and mean of the nonzero voxels of a volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NonzeroSummary {
    pub count: usize,
    pub mean: f64,
}

/// Summarize the nonzero elements of the array.
///
/// Fails with `VolstatsError::EmptyReduction` if all elements are zero, or the array is empty.
pub fn nonzero_summary<S, D>(data: &ArrayBase<S, D>) -> Result<NonzeroSummary>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let nonzero: Array1<f64> = data.iter().copied().filter(|&v| v != 0.0).collect();
    let mean = SummaryStatisticsExt::mean(&nonzero)?;
    let summary = NonzeroSummary { count: nonzero.len(), mean };
    debug!(count = summary.count, mean = summary.mean, "reduced nonzero voxels");
    Ok(summary)
}

/// Arithmetic mean of the nonzero elements of the array.
pub fn nonzero_mean<S, D>(data: &ArrayBase<S, D>) -> Result<f64>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    nonzero_summary(data).map(|s| s.mean)
}
