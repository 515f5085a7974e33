//! Outlier removal by z-score or interquartile range

use crate::error::{Error, Result};
use crate::stats::describe;
use crate::DataFrame;

/// Keep the rows whose z-score in `column` lies within `[lower, upper]`.
///
/// The z-score uses the sample standard deviation. Rows with a missing value
/// in `column` are dropped.
pub fn remove_zscore(df: &DataFrame, column: &str, thresholds: (f64, f64)) -> Result<DataFrame> {
    let (lower, upper) = thresholds;
    if !(lower <= upper) {
        return Err(Error::Config(format!(
            "z-score thresholds must satisfy lower <= upper, got ({}, {})",
            lower, upper
        )));
    }

    let values = df.numeric_values(column)?;
    let stats = describe(&values)?;
    let keep: Vec<usize> = values
        .iter()
        .enumerate()
        .filter(|&(_, &v)| {
            let z = (v - stats.mean) / stats.std;
            z >= lower && z <= upper
        })
        .map(|(i, _)| i)
        .collect();

    log::debug!(
        "z-score filter on {} removed {} rows",
        column,
        values.len() - keep.len()
    );
    df.take_rows(&keep)
}

/// Keep the rows of `column` within `[Q1 - 1.5 IQR, Q3 + 1.5 IQR]`
pub fn remove_iqr(df: &DataFrame, column: &str) -> Result<DataFrame> {
    let values = df.numeric_values(column)?;
    let stats = describe(&values)?;
    let iqr = stats.q3 - stats.q1;
    let (lower, upper) = (stats.q1 - 1.5 * iqr, stats.q3 + 1.5 * iqr);

    let keep: Vec<usize> = values
        .iter()
        .enumerate()
        .filter(|&(_, &v)| v >= lower && v <= upper)
        .map(|(i, _)| i)
        .collect();

    log::debug!(
        "IQR filter on {} kept values in [{}, {}], removed {} rows",
        column,
        lower,
        upper,
        values.len() - keep.len()
    );
    df.take_rows(&keep)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::{Float64Column, StringColumn};

    fn frame() -> DataFrame {
        let mut df = DataFrame::new();
        df.add_column(
            "x",
            Float64Column::new(vec![10.0, 11.0, 12.0, 11.0, 10.0, 12.0, 11.0, 95.0]),
        )
        .unwrap();
        df.add_column(
            "tag",
            StringColumn::new((0..8).map(|i| format!("r{}", i)).collect()),
        )
        .unwrap();
        df
    }

    #[test]
    fn test_iqr_drops_extreme_row() {
        let df = remove_iqr(&frame(), "x").unwrap();
        assert_eq!(df.row_count(), 7);
        assert!(!df.numeric_values("x").unwrap().contains(&95.0));
        assert_eq!(df.column_count(), 2);
    }

    #[test]
    fn test_zscore_window() {
        let df = remove_zscore(&frame(), "x", (-2.0, 2.0)).unwrap();
        assert_eq!(df.row_count(), 7);

        assert!(matches!(
            remove_zscore(&frame(), "x", (2.0, -2.0)),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_missing_column() {
        assert!(matches!(
            remove_iqr(&frame(), "nope"),
            Err(Error::ColumnNotFound(_))
        ));
    }
}
