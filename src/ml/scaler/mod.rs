//! Fit/transform scalers
//!
//! All four scalers share one policy: statistics skip NaN, validation goes
//! through [`validate_data`](crate::ml::input::validate_data), and a zero
//! spread statistic is fatal for MinMax, Standard and MaxAbs while
//! RobustScaler clamps it to 1.

mod maxabs;
mod minmax;
mod robust;
mod standard;

pub use maxabs::{MaxAbsParams, MaxAbsScaler};
pub use minmax::{MinMaxParams, MinMaxScaler};
pub use robust::{RobustParams, RobustScaler};
pub use standard::{StandardParams, StandardScaler};

use ndarray::{Array1, Array2, Axis};

use crate::error::{Error, Result};

/// Apply a reducer to every column of `matrix`
pub(crate) fn per_column<F>(matrix: &Array2<f64>, reducer: F) -> Array1<f64>
where
    F: Fn(&[f64]) -> f64,
{
    matrix
        .axis_iter(Axis(1))
        .map(|col| reducer(&col.to_vec()))
        .collect()
}

/// Fail on the first column whose statistic is exactly zero
pub(crate) fn ensure_nonzero(values: &Array1<f64>, statistic: &'static str) -> Result<()> {
    match values.iter().position(|&v| v == 0.0) {
        Some(column) => Err(Error::DegenerateColumn { column, statistic }),
        None => Ok(()),
    }
}

/// Fail when `matrix` does not have the column count seen during fit
pub(crate) fn ensure_width(name: &str, fitted: usize, matrix: &Array2<f64>) -> Result<()> {
    if matrix.ncols() == fitted {
        Ok(())
    } else {
        Err(Error::InvalidInput(format!(
            "{} was fitted on {} columns, got {}",
            name,
            fitted,
            matrix.ncols()
        )))
    }
}
