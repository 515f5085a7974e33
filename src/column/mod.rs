mod boolean_column;
mod common;
mod float64_column;
mod int64_column;
mod string_column;

// Core column types
pub use common::{Column, ColumnTrait, ColumnType};

// Specific column implementations
pub use boolean_column::BooleanColumn;
pub use float64_column::Float64Column;
pub use int64_column::Int64Column;
pub use string_column::StringColumn;
