//! Statistics module
//!
//! NaN-skipping reducers used by the scalers and the column transforms. Every
//! reducer ignores NaN entries; a slice with no valid entry yields NaN.

pub mod descriptive;

use crate::error::Result;

pub use descriptive::{
    nanmax, nanmean, nanmedian, nanmin, nanpercentile, nanstd, nanvar, valid_values,
};

/// Calculate basic descriptive statistics over the non-NaN values
///
/// # Example
/// ```rust
/// use tabprep::stats;
///
/// let data = vec![1.0, 2.0, f64::NAN, 3.0, 4.0];
/// let stats = stats::describe(&data).unwrap();
/// assert_eq!(stats.count, 4);
/// assert_eq!(stats.median, 2.5);
/// ```
pub fn describe<T: AsRef<[f64]>>(data: T) -> Result<DescriptiveStats> {
    descriptive::describe_impl(data.as_ref())
}

/// Result of [`describe`]
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptiveStats {
    /// Number of non-NaN values
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (ddof = 1)
    pub std: f64,
    pub min: f64,
    /// 25th percentile
    pub q1: f64,
    pub median: f64,
    /// 75th percentile
    pub q3: f64,
    pub max: f64,
}
