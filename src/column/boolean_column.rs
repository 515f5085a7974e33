use std::sync::Arc;

use crate::column::common::{Column, ColumnTrait, ColumnType};
use crate::error::{Error, Result};

/// Column of boolean values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanColumn {
    pub(crate) data: Arc<[bool]>,
}

impl BooleanColumn {
    /// Create a new BooleanColumn
    pub fn new(data: Vec<bool>) -> Self {
        Self { data: data.into() }
    }

    pub fn get(&self, index: usize) -> Result<bool> {
        self.data.get(index).copied().ok_or_else(|| Error::InvalidInput(format!(
            "row index {} out of bounds for column of length {}",
            index,
            self.data.len()
        )))
    }

    pub fn values(&self) -> &[bool] {
        &self.data
    }
}

impl ColumnTrait for BooleanColumn {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn column_type(&self) -> ColumnType {
        ColumnType::Boolean
    }

    fn is_missing(&self, _index: usize) -> bool {
        false
    }

    fn take(&self, indices: &[usize]) -> Column {
        Column::Boolean(Self::new(indices.iter().map(|&i| self.data[i]).collect()))
    }
}
