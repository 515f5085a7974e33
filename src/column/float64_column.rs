use std::sync::Arc;

use crate::column::common::{Column, ColumnTrait, ColumnType};
use crate::error::{Error, Result};

/// Column of `f64` values. Missing values are stored as NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct Float64Column {
    pub(crate) data: Arc<[f64]>,
}

impl Float64Column {
    /// Create a new Float64Column
    pub fn new(data: Vec<f64>) -> Self {
        Self { data: data.into() }
    }

    /// Create a column from optional values, mapping `None` to NaN
    pub fn from_options(data: Vec<Option<f64>>) -> Self {
        Self::new(data.into_iter().map(|v| v.unwrap_or(f64::NAN)).collect())
    }

    /// Get the value at `index`, `None` when it is missing
    pub fn get(&self, index: usize) -> Result<Option<f64>> {
        let value = *self.data.get(index).ok_or_else(|| Error::InvalidInput(format!(
            "row index {} out of bounds for column of length {}",
            index,
            self.data.len()
        )))?;
        Ok(if value.is_nan() { None } else { Some(value) })
    }

    /// Raw values, NaN included
    pub fn values(&self) -> &[f64] {
        &self.data
    }

    /// Apply `f` to every value, NaN included
    pub fn map<F>(&self, f: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        Self::new(self.data.iter().map(|&x| f(x)).collect())
    }
}

impl ColumnTrait for Float64Column {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn column_type(&self) -> ColumnType {
        ColumnType::Float64
    }

    fn is_missing(&self, index: usize) -> bool {
        self.data.get(index).map_or(true, |v| v.is_nan())
    }

    fn take(&self, indices: &[usize]) -> Column {
        Column::Float64(Self::new(indices.iter().map(|&i| self.data[i]).collect()))
    }
}
