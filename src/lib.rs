#![allow(clippy::needless_range_loop)]

//! Tabular feature scaling and preprocessing
//!
//! Tables are read from CSV into a [`DataFrame`], their numeric columns are
//! scaled by one of four fit/transform scalers, and a handful of
//! frame-level transforms cover cleaning, encoding and feature generation.

pub mod column;
pub mod config;
pub mod dataframe;
pub mod error;
pub mod io;
pub mod ml;
pub mod stats;

// Re-export commonly used types
pub use column::{Column, ColumnType};
pub use config::{PreprocessConfig, ScalerConfig};
pub use dataframe::DataFrame;
pub use error::{Error, Result};
pub use io::{read_table, read_table_with, write_csv, CsvOptions};
pub use ml::{
    validate_data, MaxAbsScaler, MinMaxScaler, Pipeline, RobustScaler, Scaler, StandardScaler,
    TabularInput, ValidatedData,
};

// Export version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
