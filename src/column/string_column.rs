use std::collections::BTreeSet;
use std::sync::Arc;

use crate::column::common::{Column, ColumnTrait, ColumnType};
use crate::error::{Error, Result};

/// Column of text values. An empty string marks a missing value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringColumn {
    pub(crate) data: Arc<[String]>,
}

impl StringColumn {
    /// Create a new StringColumn
    pub fn new(data: Vec<String>) -> Self {
        Self { data: data.into() }
    }

    pub fn get(&self, index: usize) -> Result<&str> {
        self.data
            .get(index)
            .map(|s| s.as_str())
            .ok_or_else(|| Error::InvalidInput(format!(
                "row index {} out of bounds for column of length {}",
                index,
                self.data.len()
            )))
    }

    pub fn values(&self) -> &[String] {
        &self.data
    }

    /// Distinct non-missing values in lexical order
    pub fn categories(&self) -> Vec<String> {
        self.data
            .iter()
            .filter(|s| !s.is_empty())
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

impl ColumnTrait for StringColumn {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn column_type(&self) -> ColumnType {
        ColumnType::String
    }

    fn is_missing(&self, index: usize) -> bool {
        self.data.get(index).map_or(true, |s| s.is_empty())
    }

    fn take(&self, indices: &[usize]) -> Column {
        Column::String(Self::new(
            indices.iter().map(|&i| self.data[i].clone()).collect(),
        ))
    }
}
