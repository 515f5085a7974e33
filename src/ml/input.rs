//! Tabular input adapter
//!
//! Every scaler funnels its input through [`validate_data`], which turns a
//! table, a numeric array or a grid of text values into a dense `f64` matrix.

use ndarray::{Array2, ArrayView2};

use crate::error::{Error, Result};
use crate::DataFrame;

/// Input accepted by the scalers
#[derive(Debug, Clone, Copy)]
pub enum TabularInput<'a> {
    /// Structured table; only its Int64/Float64 columns are used
    Table(&'a DataFrame),
    /// Numeric matrix
    Matrix(ArrayView2<'a, f64>),
    /// Integer matrix, widened to `f64`
    Integers(ArrayView2<'a, i64>),
    /// Single precision matrix, widened to `f64`
    Singles(ArrayView2<'a, f32>),
    /// Row-major grid of text values, parsed element by element
    Rows(&'a [Vec<String>]),
}

impl<'a> From<&'a DataFrame> for TabularInput<'a> {
    fn from(df: &'a DataFrame) -> Self {
        TabularInput::Table(df)
    }
}

impl<'a> From<&'a Array2<f64>> for TabularInput<'a> {
    fn from(matrix: &'a Array2<f64>) -> Self {
        TabularInput::Matrix(matrix.view())
    }
}

impl<'a> From<ArrayView2<'a, f64>> for TabularInput<'a> {
    fn from(view: ArrayView2<'a, f64>) -> Self {
        TabularInput::Matrix(view)
    }
}

impl<'a> From<&'a Array2<i64>> for TabularInput<'a> {
    fn from(matrix: &'a Array2<i64>) -> Self {
        TabularInput::Integers(matrix.view())
    }
}

impl<'a> From<&'a Array2<f32>> for TabularInput<'a> {
    fn from(matrix: &'a Array2<f32>) -> Self {
        TabularInput::Singles(matrix.view())
    }
}

impl<'a> From<&'a [Vec<String>]> for TabularInput<'a> {
    fn from(rows: &'a [Vec<String>]) -> Self {
        TabularInput::Rows(rows)
    }
}

impl<'a> From<&'a Vec<Vec<String>>> for TabularInput<'a> {
    fn from(rows: &'a Vec<Vec<String>>) -> Self {
        TabularInput::Rows(rows.as_slice())
    }
}

/// Output of [`validate_data`]
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedData {
    /// Dense matrix, one column per selected input column
    pub matrix: Array2<f64>,
    /// Names of the non-numeric table columns that were left out
    pub skipped_columns: Vec<String>,
}

/// Convert any supported input into a fresh `f64` matrix.
///
/// NaN values pass through untouched. The caller's data is never modified.
pub fn validate_data(input: TabularInput<'_>) -> Result<ValidatedData> {
    let (matrix, skipped_columns) = match input {
        TabularInput::Table(df) => table_to_matrix(df)?,
        TabularInput::Matrix(view) => (view.to_owned(), Vec::new()),
        TabularInput::Integers(view) => (view.mapv(|v| v as f64), Vec::new()),
        TabularInput::Singles(view) => (view.mapv(f64::from), Vec::new()),
        TabularInput::Rows(rows) => (rows_to_matrix(rows)?, Vec::new()),
    };

    if matrix.is_empty() {
        return Err(Error::InvalidInput("input cannot be empty".into()));
    }

    Ok(ValidatedData {
        matrix,
        skipped_columns,
    })
}

fn table_to_matrix(df: &DataFrame) -> Result<(Array2<f64>, Vec<String>)> {
    let mut numeric = Vec::new();
    let mut skipped = Vec::new();
    for (name, col) in df.iter_columns() {
        match col.to_f64_vec() {
            Some(values) => numeric.push(values),
            None => skipped.push(name.to_string()),
        }
    }

    if numeric.is_empty() {
        return Err(Error::InvalidInput(
            "no numeric columns found in the DataFrame".into(),
        ));
    }
    if !skipped.is_empty() {
        log::warn!(
            "not all columns in the DataFrame are numeric, skipping non-numeric columns: {:?}",
            skipped
        );
    }

    let matrix = Array2::from_shape_fn((df.row_count(), numeric.len()), |(r, c)| numeric[c][r]);
    Ok((matrix, skipped))
}

fn rows_to_matrix(rows: &[Vec<String>]) -> Result<Array2<f64>> {
    let width = rows.first().map_or(0, |r| r.len());
    let mut flat = Vec::with_capacity(rows.len() * width);

    for (i, row) in rows.iter().enumerate() {
        if row.len() != width {
            return Err(Error::InvalidInput(format!(
                "row {} has {} values, expected {}",
                i,
                row.len(),
                width
            )));
        }
        for cell in row {
            flat.push(parse_cell(cell)?);
        }
    }

    Array2::from_shape_vec((rows.len(), width), flat)
        .map_err(|e| Error::InvalidInput(e.to_string()))
}

fn parse_cell(cell: &str) -> Result<f64> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return Ok(f64::NAN);
    }
    trimmed.parse::<f64>().map_err(|_| {
        Error::InvalidInput(format!(
            "input data must be convertible to numeric, got {:?}",
            cell
        ))
    })
}
