pub mod csv;

// Re-export commonly used functions
pub use self::csv::{read_table, read_table_with, write_csv, CsvOptions};
