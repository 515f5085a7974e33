//! Derived numeric features

use crate::column::Float64Column;
use crate::error::{Error, Result};
use crate::DataFrame;

fn numeric(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    df.column(name)?.to_f64_vec().ok_or_else(|| {
        Error::InvalidInput(format!(
            "feature generation requires numeric columns, '{}' is not numeric",
            name
        ))
    })
}

/// Append `<a>_x_<b>` for every pair of `columns`, in list order
pub fn interaction_features(df: &DataFrame, columns: &[&str]) -> Result<DataFrame> {
    let values = columns
        .iter()
        .map(|&name| numeric(df, name))
        .collect::<Result<Vec<_>>>()?;

    let mut result = df.clone();
    for i in 0..columns.len() {
        for j in (i + 1)..columns.len() {
            let product = values[i]
                .iter()
                .zip(&values[j])
                .map(|(a, b)| a * b)
                .collect();
            result.set_column(
                format!("{}_x_{}", columns[i], columns[j]),
                Float64Column::new(product),
            )?;
        }
    }
    Ok(result)
}

/// Append `<c>^<d>` for every column `c` and every power `d` in `2..=degree`
pub fn polynomial_features(df: &DataFrame, columns: &[&str], degree: u32) -> Result<DataFrame> {
    let degree = i32::try_from(degree).map_err(|_| {
        Error::Config(format!("polynomial degree {} is too large", degree))
    })?;

    let mut result = df.clone();
    for &name in columns {
        let values = numeric(df, name)?;
        for d in 2..=degree {
            let powered = values.iter().map(|v| v.powi(d)).collect();
            result.set_column(format!("{}^{}", name, d), Float64Column::new(powered))?;
        }
    }
    Ok(result)
}
