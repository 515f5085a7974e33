// Descriptive statistics module

use crate::error::{Error, Result};
use crate::stats::DescriptiveStats;

/// Copy of the non-NaN entries
pub fn valid_values(data: &[f64]) -> Vec<f64> {
    data.iter().copied().filter(|v| !v.is_nan()).collect()
}

/// Minimum ignoring NaN
pub fn nanmin(data: &[f64]) -> f64 {
    data.iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(f64::NAN, f64::min)
}

/// Maximum ignoring NaN
pub fn nanmax(data: &[f64]) -> f64 {
    data.iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(f64::NAN, f64::max)
}

/// Arithmetic mean ignoring NaN
pub fn nanmean(data: &[f64]) -> f64 {
    let (sum, count) = data
        .iter()
        .filter(|v| !v.is_nan())
        .fold((0.0, 0usize), |(sum, count), &v| (sum + v, count + 1));

    if count == 0 {
        f64::NAN
    } else {
        sum / count as f64
    }
}

/// Variance ignoring NaN, with `ddof` delta degrees of freedom
pub fn nanvar(data: &[f64], ddof: usize) -> f64 {
    let valid = valid_values(data);
    let n = valid.len();
    if n <= ddof {
        return f64::NAN;
    }

    let mean = valid.iter().sum::<f64>() / n as f64;
    let sum_squared_diff = valid.iter().map(|&x| (x - mean).powi(2)).sum::<f64>();
    sum_squared_diff / (n - ddof) as f64
}

/// Standard deviation ignoring NaN, with `ddof` delta degrees of freedom
pub fn nanstd(data: &[f64], ddof: usize) -> f64 {
    nanvar(data, ddof).sqrt()
}

/// Median ignoring NaN
pub fn nanmedian(data: &[f64]) -> f64 {
    nanpercentile(data, 50.0)
}

/// Percentile `q` (0..=100) ignoring NaN, linear interpolation between closest ranks
pub fn nanpercentile(data: &[f64], q: f64) -> f64 {
    let mut sorted = valid_values(data);
    sorted.sort_by(f64::total_cmp);
    percentile(&sorted, q / 100.0)
}

/// Percentile of already sorted, NaN-free data; `p` in 0..=1
fn percentile(sorted_data: &[f64], p: f64) -> f64 {
    if sorted_data.is_empty() {
        return f64::NAN;
    }

    let n = sorted_data.len();
    let idx = p * (n - 1) as f64;
    let idx_floor = idx.floor() as usize;
    let idx_ceil = idx.ceil() as usize;

    if idx_floor == idx_ceil {
        return sorted_data[idx_floor];
    }

    let weight_ceil = idx - idx_floor as f64;
    let weight_floor = 1.0 - weight_ceil;

    sorted_data[idx_floor] * weight_floor + sorted_data[idx_ceil] * weight_ceil
}

/// Internal implementation of descriptive statistics
pub(crate) fn describe_impl(data: &[f64]) -> Result<DescriptiveStats> {
    let mut sorted = valid_values(data);
    if sorted.is_empty() {
        return Err(Error::EmptyInput(
            "descriptive statistics need at least one non-missing value".into(),
        ));
    }
    sorted.sort_by(f64::total_cmp);

    let count = sorted.len();
    let mean = sorted.iter().sum::<f64>() / count as f64;
    let std = if count > 1 {
        nanstd(&sorted, 1)
    } else {
        0.0
    };

    Ok(DescriptiveStats {
        count,
        mean,
        std,
        min: sorted[0],
        q1: percentile(&sorted, 0.25),
        median: percentile(&sorted, 0.5),
        q3: percentile(&sorted, 0.75),
        max: sorted[count - 1],
    })
}
