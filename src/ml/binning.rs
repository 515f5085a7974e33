//! Discretization of a numeric column into right-closed intervals

use crate::column::{Float64Column, StringColumn};
use crate::error::{Error, Result};
use crate::stats::{nanmax, nanmin};
use crate::DataFrame;

/// Bin specification for [`cut`]
#[derive(Debug, Clone, PartialEq)]
pub enum Bins {
    /// Number of equal-width bins spanning the column range
    Count(usize),
    /// Explicit, strictly increasing bin edges
    Edges(Vec<f64>),
}

/// Append `<column>_binned` holding the bin of every value of `column`.
///
/// Intervals are closed on the right, `(e[i], e[i + 1]]`. Values outside the
/// edges, and missing values, stay missing. With `labels` the new column holds
/// the label of each bin, otherwise the bin index as a float.
pub fn cut(
    df: &DataFrame,
    column: &str,
    bins: &Bins,
    labels: Option<&[String]>,
) -> Result<DataFrame> {
    let values = df.numeric_values(column)?;
    let edges = match bins {
        Bins::Count(n) => equal_width_edges(&values, *n)?,
        Bins::Edges(edges) => {
            if edges.len() < 2 || edges.windows(2).any(|w| !(w[0] < w[1])) {
                return Err(Error::Config(
                    "bin edges must hold at least two strictly increasing values".into(),
                ));
            }
            edges.clone()
        }
    };

    let bin_count = edges.len() - 1;
    if let Some(labels) = labels {
        if labels.len() != bin_count {
            return Err(Error::Config(format!(
                "bin labels must be one fewer than the number of bin edges, got {} labels for {} edges",
                labels.len(),
                edges.len()
            )));
        }
    }

    let assigned: Vec<Option<usize>> = values.iter().map(|&v| bin_of(&edges, v)).collect();

    let mut result = df.clone();
    let name = format!("{}_binned", column);
    match labels {
        Some(labels) => {
            let binned = assigned
                .iter()
                .map(|bin| bin.map_or_else(String::new, |b| labels[b].clone()))
                .collect();
            result.set_column(name, StringColumn::new(binned))?;
        }
        None => {
            let binned = assigned.iter().map(|bin| bin.map(|b| b as f64)).collect();
            result.set_column(name, Float64Column::from_options(binned))?;
        }
    }
    Ok(result)
}

fn equal_width_edges(values: &[f64], n: usize) -> Result<Vec<f64>> {
    if n == 0 {
        return Err(Error::Config("number of bins must be at least 1".into()));
    }
    let (mut min, mut max) = (nanmin(values), nanmax(values));
    if min.is_nan() {
        return Err(Error::EmptyInput(
            "cannot bin a column without valid values".into(),
        ));
    }

    if min == max {
        let pad = if min == 0.0 { 0.001 } else { 0.001 * min.abs() };
        min -= pad;
        max += pad;
        return Ok(linspace(min, max, n + 1));
    }

    let mut edges = linspace(min, max, n + 1);
    edges[0] -= (max - min) * 0.001;
    Ok(edges)
}

fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    let step = (end - start) / (count - 1) as f64;
    let mut points: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
    points[count - 1] = end;
    points
}

fn bin_of(edges: &[f64], value: f64) -> Option<usize> {
    if value.is_nan() {
        return None;
    }
    edges
        .windows(2)
        .position(|w| value > w[0] && value <= w[1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::Column;

    fn frame() -> DataFrame {
        let mut df = DataFrame::new();
        df.add_column("age", Float64Column::new(vec![1.0, 5.0, 10.0, f64::NAN]))
            .unwrap();
        df
    }

    #[test]
    fn test_count_includes_minimum() {
        let df = cut(&frame(), "age", &Bins::Count(3), None).unwrap();
        let binned = df.numeric_values("age_binned").unwrap();
        assert_eq!(&binned[..3], &[0.0, 1.0, 2.0]);
        assert!(binned[3].is_nan());
    }

    #[test]
    fn test_edges_are_right_closed_with_labels() {
        let labels = vec!["low".to_string(), "high".to_string()];
        let df = cut(
            &frame(),
            "age",
            &Bins::Edges(vec![1.0, 5.0, 10.0]),
            Some(&labels),
        )
        .unwrap();
        match df.column("age_binned").unwrap() {
            Column::String(col) => assert_eq!(col.values(), &["", "low", "high", ""]),
            other => panic!("unexpected column {:?}", other),
        }
    }

    #[test]
    fn test_rebinning_overwrites_column() {
        let once = cut(&frame(), "age", &Bins::Count(3), None).unwrap();
        let twice = cut(&once, "age", &Bins::Edges(vec![0.0, 5.0, 10.0]), None).unwrap();
        assert_eq!(twice.column_count(), 2);
        assert_eq!(&twice.numeric_values("age_binned").unwrap()[..3], &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_label_count_mismatch() {
        let labels = vec!["only".to_string()];
        let err = cut(&frame(), "age", &Bins::Count(3), Some(&labels)).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_non_increasing_edges() {
        assert!(cut(&frame(), "age", &Bins::Edges(vec![5.0, 1.0]), None).is_err());
    }
}
