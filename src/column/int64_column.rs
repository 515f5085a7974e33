use std::sync::Arc;

use crate::column::common::{Column, ColumnTrait, ColumnType};
use crate::error::{Error, Result};

/// Column of `i64` values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Int64Column {
    pub(crate) data: Arc<[i64]>,
}

impl Int64Column {
    /// Create a new Int64Column
    pub fn new(data: Vec<i64>) -> Self {
        Self { data: data.into() }
    }

    pub fn get(&self, index: usize) -> Result<i64> {
        self.data.get(index).copied().ok_or_else(|| Error::InvalidInput(format!(
            "row index {} out of bounds for column of length {}",
            index,
            self.data.len()
        )))
    }

    pub fn values(&self) -> &[i64] {
        &self.data
    }
}

impl ColumnTrait for Int64Column {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn column_type(&self) -> ColumnType {
        ColumnType::Int64
    }

    // Integer columns cannot represent missing values
    fn is_missing(&self, _index: usize) -> bool {
        false
    }

    fn take(&self, indices: &[usize]) -> Column {
        Column::Int64(Self::new(indices.iter().map(|&i| self.data[i]).collect()))
    }
}
