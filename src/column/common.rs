use std::fmt::Debug;

use crate::column::{BooleanColumn, Float64Column, Int64Column, StringColumn};

/// Enumeration identifying the declared type of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Int64,
    Float64,
    String,
    Boolean,
}

impl ColumnType {
    /// Whether the type counts as numeric for scaling purposes.
    ///
    /// Booleans are deliberately excluded.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Int64 | ColumnType::Float64)
    }
}

/// Operations common to every column implementation
pub trait ColumnTrait: Debug {
    /// Number of values in the column
    fn len(&self) -> usize;

    /// Whether the column holds no values
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Declared type of the column
    fn column_type(&self) -> ColumnType;

    /// Whether the value at `index` is missing
    fn is_missing(&self, index: usize) -> bool;

    /// Copy of the column restricted to the given row positions
    fn take(&self, indices: &[usize]) -> Column;
}

/// A typed column of a [`crate::DataFrame`]
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Int64(Int64Column),
    Float64(Float64Column),
    String(StringColumn),
    Boolean(BooleanColumn),
}

impl Column {
    fn inner(&self) -> &dyn ColumnTrait {
        match self {
            Column::Int64(col) => col,
            Column::Float64(col) => col,
            Column::String(col) => col,
            Column::Boolean(col) => col,
        }
    }

    pub fn len(&self) -> usize {
        self.inner().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn column_type(&self) -> ColumnType {
        self.inner().column_type()
    }

    pub fn is_numeric(&self) -> bool {
        self.column_type().is_numeric()
    }

    pub fn is_missing(&self, index: usize) -> bool {
        self.inner().is_missing(index)
    }

    pub fn take(&self, indices: &[usize]) -> Column {
        self.inner().take(indices)
    }

    /// Number of non-missing values
    pub fn count_valid(&self) -> usize {
        (0..self.len()).filter(|&i| !self.is_missing(i)).count()
    }

    /// Numeric values widened to `f64`, or `None` for non-numeric columns
    pub fn to_f64_vec(&self) -> Option<Vec<f64>> {
        match self {
            Column::Int64(col) => Some(col.values().iter().map(|&v| v as f64).collect()),
            Column::Float64(col) => Some(col.values().to_vec()),
            _ => None,
        }
    }

    /// Rendering of the value at `index` used by the CSV writer
    pub fn format_value(&self, index: usize) -> String {
        match self {
            Column::Int64(col) => col.values()[index].to_string(),
            Column::Float64(col) => {
                let v = col.values()[index];
                if v.is_nan() {
                    String::new()
                } else {
                    v.to_string()
                }
            }
            Column::String(col) => col.values()[index].clone(),
            Column::Boolean(col) => col.values()[index].to_string(),
        }
    }

    pub fn as_float64(&self) -> Option<&Float64Column> {
        match self {
            Column::Float64(col) => Some(col),
            _ => None,
        }
    }

    pub fn as_int64(&self) -> Option<&Int64Column> {
        match self {
            Column::Int64(col) => Some(col),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&StringColumn> {
        match self {
            Column::String(col) => Some(col),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<&BooleanColumn> {
        match self {
            Column::Boolean(col) => Some(col),
            _ => None,
        }
    }
}

impl From<Int64Column> for Column {
    fn from(col: Int64Column) -> Self {
        Column::Int64(col)
    }
}

impl From<Float64Column> for Column {
    fn from(col: Float64Column) -> Self {
        Column::Float64(col)
    }
}

impl From<StringColumn> for Column {
    fn from(col: StringColumn) -> Self {
        Column::String(col)
    }
}

impl From<BooleanColumn> for Column {
    fn from(col: BooleanColumn) -> Self {
        Column::Boolean(col)
    }
}
