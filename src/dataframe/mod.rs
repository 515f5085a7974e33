//! Column-oriented table used as the structured input of the preprocessing tools

use std::collections::HashMap;
use std::fmt::{self, Debug};

use crate::column::{Column, ColumnType};
use crate::error::{Error, Result};

/// Table of named, typed columns of equal length
#[derive(Clone, Default, PartialEq)]
pub struct DataFrame {
    // column data
    pub(crate) columns: Vec<Column>,
    // column name -> position
    pub(crate) column_indices: HashMap<String, usize>,
    // column order
    pub(crate) column_names: Vec<String>,
    pub(crate) row_count: usize,
}

impl Debug for DataFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const MAX_ROWS: usize = 10;

        if self.columns.is_empty() {
            return write!(f, "DataFrame (0 rows x 0 columns)");
        }

        writeln!(
            f,
            "DataFrame ({} rows x {} columns):",
            self.row_count,
            self.columns.len()
        )?;

        write!(f, "{:<5} |", "idx")?;
        for name in &self.column_names {
            write!(f, " {:<15} |", name)?;
        }
        writeln!(f)?;

        write!(f, "{:-<5}-+", "")?;
        for _ in &self.column_names {
            write!(f, "-{:-<15}-+", "")?;
        }
        writeln!(f)?;

        let display_rows = std::cmp::min(self.row_count, MAX_ROWS);
        for i in 0..display_rows {
            write!(f, "{:<5} |", i)?;
            for col in &self.columns {
                let value = if col.is_missing(i) {
                    "NULL".to_string()
                } else {
                    match col {
                        Column::Float64(c) => format!("{:.3}", c.values()[i]),
                        Column::String(c) => format!("\"{}\"", c.values()[i]),
                        other => other.format_value(i),
                    }
                };
                write!(f, " {:<15} |", value)?;
            }
            writeln!(f)?;
        }

        if self.row_count > MAX_ROWS {
            writeln!(f, "... ({} more rows)", self.row_count - MAX_ROWS)?;
        }

        Ok(())
    }
}

impl DataFrame {
    /// Create an empty DataFrame
    pub fn new() -> Self {
        Self::default()
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    pub fn contains_column(&self, name: &str) -> bool {
        self.column_indices.contains_key(name)
    }

    /// A frame with no columns or no rows
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() || self.row_count == 0
    }

    /// Append a column. Names must be unique and lengths must agree.
    pub fn add_column<C: Into<Column>>(&mut self, name: impl Into<String>, column: C) -> Result<()> {
        let name = name.into();
        let column = column.into();

        if self.column_indices.contains_key(&name) {
            return Err(Error::DuplicateColumnName(name));
        }

        let column_len = column.len();
        if !self.columns.is_empty() && column_len != self.row_count {
            return Err(Error::InconsistentRowCount {
                expected: self.row_count,
                found: column_len,
            });
        }

        let column_idx = self.columns.len();
        self.columns.push(column);
        self.column_indices.insert(name.clone(), column_idx);
        self.column_names.push(name);

        if column_idx == 0 {
            self.row_count = column_len;
        }

        Ok(())
    }

    /// Replace an existing column in place, keeping its position
    pub fn replace_column<C: Into<Column>>(&mut self, name: &str, column: C) -> Result<()> {
        let column = column.into();
        let idx = *self
            .column_indices
            .get(name)
            .ok_or_else(|| Error::ColumnNotFound(name.to_string()))?;

        if column.len() != self.row_count {
            return Err(Error::InconsistentRowCount {
                expected: self.row_count,
                found: column.len(),
            });
        }

        self.columns[idx] = column;
        Ok(())
    }

    /// Replace the named column if it exists, append it otherwise
    pub fn set_column<C: Into<Column>>(&mut self, name: impl Into<String>, column: C) -> Result<()> {
        let name = name.into();
        if self.contains_column(&name) {
            self.replace_column(&name, column)
        } else {
            self.add_column(name, column)
        }
    }

    /// Remove a column and return it
    pub fn drop_column(&mut self, name: &str) -> Result<Column> {
        let idx = self
            .column_indices
            .remove(name)
            .ok_or_else(|| Error::ColumnNotFound(name.to_string()))?;

        let column = self.columns.remove(idx);
        self.column_names.remove(idx);
        for position in self.column_indices.values_mut() {
            if *position > idx {
                *position -= 1;
            }
        }
        if self.columns.is_empty() {
            self.row_count = 0;
        }

        Ok(column)
    }

    pub fn column(&self, name: &str) -> Result<&Column> {
        let idx = self
            .column_indices
            .get(name)
            .ok_or_else(|| Error::ColumnNotFound(name.to_string()))?;
        Ok(&self.columns[*idx])
    }

    pub fn column_type(&self, name: &str) -> Result<ColumnType> {
        self.column(name).map(|c| c.column_type())
    }

    /// Iterate over `(name, column)` pairs in column order
    pub fn iter_columns(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.column_names
            .iter()
            .map(|n| n.as_str())
            .zip(self.columns.iter())
    }

    /// Names of Int64/Float64 columns, in column order
    pub fn numeric_column_names(&self) -> Vec<String> {
        self.iter_columns()
            .filter(|(_, col)| col.is_numeric())
            .map(|(name, _)| name.to_string())
            .collect()
    }

    /// Values of a numeric column widened to `f64`
    pub fn numeric_values(&self, name: &str) -> Result<Vec<f64>> {
        self.column(name)?.to_f64_vec().ok_or_else(|| {
            Error::InvalidInput(format!("column '{}' is not numeric", name))
        })
    }

    /// New frame restricted to the given row positions, in the given order
    pub fn take_rows(&self, indices: &[usize]) -> Result<Self> {
        if let Some(&bad) = indices.iter().find(|&&i| i >= self.row_count) {
            return Err(Error::InvalidInput(format!(
                "row index {} out of bounds for {} rows",
                bad, self.row_count
            )));
        }

        let mut result = Self::new();
        for (name, col) in self.iter_columns() {
            result.add_column(name, col.take(indices))?;
        }
        Ok(result)
    }

    /// New frame holding only the named columns, in the given order
    pub fn select(&self, names: &[&str]) -> Result<Self> {
        let mut result = Self::new();
        for &name in names {
            result.add_column(name, self.column(name)?.clone())?;
        }
        Ok(result)
    }
}
