//! Missing-value cleaning

use ndarray::{Array2, ArrayView1};

use crate::column::{Column, Float64Column};
use crate::error::{Error, Result};
use crate::stats::nanmean;
use crate::DataFrame;

/// Axis along which [`drop_sparse`] removes entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Rows,
    Columns,
}

/// Drop rows or columns holding fewer than `thresh` non-missing values.
///
/// Without a threshold, half the length of the other axis is used
/// (rounded down).
pub fn drop_sparse(df: &DataFrame, axis: Axis, thresh: Option<usize>) -> Result<DataFrame> {
    match axis {
        Axis::Rows => {
            let thresh = thresh.unwrap_or(df.column_count() / 2);
            let keep: Vec<usize> = (0..df.row_count())
                .filter(|&row| {
                    let present = df
                        .iter_columns()
                        .filter(|(_, col)| !col.is_missing(row))
                        .count();
                    present >= thresh
                })
                .collect();
            log::debug!(
                "dropping {} of {} rows below {} values",
                df.row_count() - keep.len(),
                df.row_count(),
                thresh
            );
            df.take_rows(&keep)
        }
        Axis::Columns => {
            let thresh = thresh.unwrap_or(df.row_count() / 2);
            let mut result = DataFrame::new();
            for (name, col) in df.iter_columns() {
                if col.count_valid() >= thresh {
                    result.add_column(name, col.clone())?;
                }
            }
            Ok(result)
        }
    }
}

/// Replace missing numeric values by zero
pub fn fill_zeros(df: &DataFrame) -> Result<DataFrame> {
    fill_float_columns(df, |_| 0.0)
}

/// Replace missing numeric values by the column mean of the present values
pub fn fill_mean(df: &DataFrame) -> Result<DataFrame> {
    fill_float_columns(df, |col| nanmean(col.values()))
}

/// Replace missing numeric values by the mean of the `n_neighbors` closest rows
/// holding a value in that column.
///
/// Distances are NaN-aware Euclidean over every numeric column: only
/// coordinates present in both rows count, and the sum is scaled up by the
/// share of coordinates skipped. A value with no reachable donor gets the
/// column mean; a column with no values at all stays missing.
pub fn fill_knn(df: &DataFrame, n_neighbors: usize) -> Result<DataFrame> {
    if n_neighbors == 0 {
        return Err(Error::Config("n_neighbors must be at least 1".into()));
    }

    let names = df.numeric_column_names();
    let columns = names
        .iter()
        .map(|name| df.numeric_values(name))
        .collect::<Result<Vec<_>>>()?;
    let x = Array2::from_shape_fn((df.row_count(), columns.len()), |(r, c)| columns[c][r]);
    let mut filled = x.clone();
    let mut imputed = 0usize;

    for (r, row) in x.outer_iter().enumerate() {
        let missing: Vec<usize> = (0..x.ncols()).filter(|&c| row[c].is_nan()).collect();
        if missing.is_empty() {
            continue;
        }

        let mut neighbours: Vec<(f64, usize)> = x
            .outer_iter()
            .enumerate()
            .filter(|&(other, _)| other != r)
            .filter_map(|(other, donor)| nan_euclidean(row, donor).map(|d| (d, other)))
            .collect();
        neighbours.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

        for c in missing {
            let donors: Vec<f64> = neighbours
                .iter()
                .map(|&(_, other)| x[[other, c]])
                .filter(|v| !v.is_nan())
                .take(n_neighbors)
                .collect();
            filled[[r, c]] = if donors.is_empty() {
                nanmean(&columns[c])
            } else {
                donors.iter().sum::<f64>() / donors.len() as f64
            };
            imputed += 1;
        }
    }

    let mut result = df.clone();
    for (c, name) in names.iter().enumerate() {
        if let Column::Float64(_) = df.column(name)? {
            result.replace_column(name, Float64Column::new(filled.column(c).to_vec()))?;
        }
    }
    log::debug!("imputed {} values from {} nearest rows", imputed, n_neighbors);
    Ok(result)
}

fn nan_euclidean(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> Option<f64> {
    let (sum, present) = a
        .iter()
        .zip(b.iter())
        .filter(|(x, y)| !x.is_nan() && !y.is_nan())
        .fold((0.0, 0usize), |(sum, n), (x, y)| (sum + (x - y).powi(2), n + 1));

    if present == 0 {
        None
    } else {
        Some((sum * a.len() as f64 / present as f64).sqrt())
    }
}

fn fill_float_columns<F>(df: &DataFrame, fill_value: F) -> Result<DataFrame>
where
    F: Fn(&Float64Column) -> f64,
{
    let mut result = df.clone();
    for (name, col) in df.iter_columns() {
        if let Column::Float64(values) = col {
            let fill = fill_value(values);
            let filled = values.map(|v| if v.is_nan() { fill } else { v });
            result.replace_column(name, filled)?;
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::{Int64Column, StringColumn};

    fn sample() -> DataFrame {
        let mut df = DataFrame::new();
        df.add_column("a", Float64Column::new(vec![1.0, f64::NAN, 3.0, f64::NAN]))
            .unwrap();
        df.add_column("b", Float64Column::new(vec![f64::NAN; 4])).unwrap();
        df.add_column("c", Int64Column::new(vec![1, 2, 3, 4])).unwrap();
        df.add_column(
            "d",
            StringColumn::new(vec!["x".into(), "".into(), "z".into(), "".into()]),
        )
        .unwrap();
        df
    }

    #[test]
    fn test_drop_sparse_rows_default_threshold() {
        // default threshold is 4 / 2 = 2 values per row
        let df = drop_sparse(&sample(), Axis::Rows, None).unwrap();
        assert_eq!(df.row_count(), 2);
        assert_eq!(df.numeric_values("c").unwrap(), vec![1.0, 3.0]);
    }

    #[test]
    fn test_drop_sparse_columns() {
        let df = drop_sparse(&sample(), Axis::Columns, Some(3)).unwrap();
        assert_eq!(df.column_names(), &["c".to_string()]);
    }

    #[test]
    fn test_fill_zeros_and_mean() {
        let zeros = fill_zeros(&sample()).unwrap();
        assert_eq!(zeros.numeric_values("a").unwrap(), vec![1.0, 0.0, 3.0, 0.0]);

        let means = fill_mean(&sample()).unwrap();
        assert_eq!(means.numeric_values("a").unwrap(), vec![1.0, 2.0, 3.0, 2.0]);
        // an all-missing column has no mean to fill with
        assert!(means.numeric_values("b").unwrap().iter().all(|v| v.is_nan()));
        // text columns are left alone
        assert!(means.column("d").unwrap().is_missing(1));
    }

    #[test]
    fn test_fill_knn_uses_nearest_donors() {
        let mut df = DataFrame::new();
        df.add_column("a", Float64Column::new(vec![1.0, 2.0, f64::NAN, 10.0]))
            .unwrap();
        df.add_column("b", Float64Column::new(vec![1.0, 2.0, 2.1, 10.0]))
            .unwrap();

        let two = fill_knn(&df, 2).unwrap();
        assert_eq!(two.numeric_values("a").unwrap()[2], 1.5);
        assert_eq!(two.numeric_values("b").unwrap(), df.numeric_values("b").unwrap());

        let all = fill_knn(&df, 10).unwrap();
        assert!((all.numeric_values("a").unwrap()[2] - 13.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_fill_knn_skips_shared_gaps() {
        let df = fill_knn(&sample(), 2).unwrap();
        assert_eq!(df.numeric_values("a").unwrap(), vec![1.0, 2.0, 3.0, 2.0]);
        assert!(df.numeric_values("b").unwrap().iter().all(|v| v.is_nan()));
        assert!(df.column("d").unwrap().is_missing(3));
    }

    #[test]
    fn test_fill_knn_needs_a_neighbour() {
        assert!(matches!(fill_knn(&sample(), 0), Err(Error::Config(_))));
    }
}
