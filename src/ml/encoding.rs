//! Categorical encoders

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::column::{Column, Float64Column, Int64Column, StringColumn};
use crate::error::{Error, Result};
use crate::DataFrame;

fn string_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a StringColumn> {
    df.column(name)?.as_string().ok_or_else(|| {
        Error::InvalidInput(format!("column '{}' is not a text column", name))
    })
}

/// Code of every value in the sorted list of distinct present values, -1 for missing
fn dense_codes<T: PartialOrd>(values: &[Option<T>]) -> Vec<i64> {
    let cmp = |a: &&T, b: &&T| a.partial_cmp(b).unwrap_or(Ordering::Equal);

    let mut categories: Vec<&T> = values.iter().flatten().collect();
    categories.sort_by(cmp);
    categories.dedup_by(|a, b| cmp(&&**a, &&**b) == Ordering::Equal);

    values
        .iter()
        .map(|v| match v {
            Some(v) => categories
                .binary_search_by(|c| cmp(c, &v))
                .map_or(-1, |i| i as i64),
            None => -1,
        })
        .collect()
}

/// Replace each column by the code of its value in the sorted category list.
///
/// Text, integer, float and boolean columns are accepted. Missing values get
/// the code -1.
pub fn label_encode(df: &DataFrame, columns: &[&str]) -> Result<DataFrame> {
    let mut result = df.clone();
    for &name in columns {
        let codes = match df.column(name)? {
            Column::String(col) => {
                let values: Vec<Option<&str>> = col
                    .values()
                    .iter()
                    .map(|v| (!v.is_empty()).then_some(v.as_str()))
                    .collect();
                dense_codes(&values)
            }
            Column::Int64(col) => {
                let values: Vec<Option<i64>> = col.values().iter().copied().map(Some).collect();
                dense_codes(&values)
            }
            Column::Float64(col) => {
                let values: Vec<Option<f64>> = col
                    .values()
                    .iter()
                    .map(|&v| (!v.is_nan()).then_some(v))
                    .collect();
                dense_codes(&values)
            }
            Column::Boolean(col) => {
                let values: Vec<Option<bool>> = col.values().iter().copied().map(Some).collect();
                dense_codes(&values)
            }
        };

        result.replace_column(name, Int64Column::new(codes))?;
    }
    Ok(result)
}

/// Replace each column by one 0/1 indicator column per category.
///
/// The remaining columns keep their order and the indicators follow them,
/// named `<column>_<category>` in sorted category order. A missing value sets
/// no indicator.
pub fn one_hot_encode(df: &DataFrame, columns: &[&str]) -> Result<DataFrame> {
    let encoded = columns
        .iter()
        .map(|&name| string_column(df, name).map(|col| (name, col)))
        .collect::<Result<Vec<_>>>()?;

    let mut result = DataFrame::new();
    for (name, col) in df.iter_columns() {
        if !columns.contains(&name) {
            result.add_column(name, col.clone())?;
        }
    }

    for (name, col) in encoded {
        for category in col.categories() {
            let indicator = col
                .values()
                .iter()
                .map(|v| i64::from(*v == category))
                .collect();
            result.add_column(
                format!("{}_{}", name, category),
                Int64Column::new(indicator),
            )?;
        }
    }
    Ok(result)
}

/// Replace each column by the position of its value in a caller-given order.
///
/// Values absent from the order, and missing values, become NaN.
pub fn ordinal_encode(
    df: &DataFrame,
    columns: &[&str],
    categories: &HashMap<String, Vec<String>>,
) -> Result<DataFrame> {
    let mut result = df.clone();
    for &name in columns {
        let order = categories.get(name).ok_or_else(|| {
            Error::Config(format!("no category order given for column '{}'", name))
        })?;
        let col = string_column(df, name)?;

        let positions: HashMap<&str, usize> = order
            .iter()
            .enumerate()
            .map(|(i, c)| (c.as_str(), i))
            .collect();
        let codes = col
            .values()
            .iter()
            .map(|v| positions.get(v.as_str()).map(|&i| i as f64))
            .collect();

        result.replace_column(name, Float64Column::from_options(codes))?;
    }
    Ok(result)
}
