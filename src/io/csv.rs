//! CSV ingestion
//!
//! Reads a delimited file into a [`DataFrame`], inferring a type per column,
//! and writes a frame back out.

use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use csv::{ReaderBuilder, Writer};
use serde::{Deserialize, Serialize};

use crate::column::{BooleanColumn, Column, Float64Column, Int64Column, StringColumn};
use crate::error::{Error, Result};
use crate::DataFrame;

/// Cell values read as missing
const NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Options controlling how a delimited file is parsed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvOptions {
    /// Whether the first record holds column names
    pub has_header: bool,
    /// Field delimiter, must be a single ASCII character
    pub delimiter: char,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            has_header: true,
            delimiter: ',',
        }
    }
}

impl CsvOptions {
    fn delimiter_byte(&self) -> Result<u8> {
        if self.delimiter.is_ascii() {
            Ok(self.delimiter as u8)
        } else {
            Err(Error::Config(format!(
                "CSV delimiter must be an ASCII character, got {:?}",
                self.delimiter
            )))
        }
    }
}

/// Read a comma-separated file with a header row into a DataFrame
///
/// Fails with [`Error::FileNotFound`] when `path` does not resolve,
/// [`Error::EmptyInput`] when the file holds no data rows, and
/// [`Error::Ingestion`] for any other read or parse failure.
pub fn read_table<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
    read_table_with(path, &CsvOptions::default())
}

/// Read a delimited file into a DataFrame using the given options
pub fn read_table_with<P: AsRef<Path>>(path: P, options: &CsvOptions) -> Result<DataFrame> {
    let path = path.as_ref();
    let delimiter = options.delimiter_byte()?;

    let mut file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
        _ => Error::Ingestion(e.to_string()),
    })?;

    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|e| Error::Ingestion(e.to_string()))?;

    if content.trim().is_empty() {
        return Err(Error::EmptyInput("the CSV file is empty".into()));
    }

    let df = parse_table(content.as_bytes(), options.has_header, delimiter)?;
    if df.row_count() == 0 {
        return Err(Error::EmptyInput("the CSV file is empty".into()));
    }

    log::debug!(
        "read {} rows x {} columns from {}",
        df.row_count(),
        df.column_count(),
        path.display()
    );
    Ok(df)
}

fn parse_table(bytes: &[u8], has_header: bool, delimiter: u8) -> Result<DataFrame> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let mut records = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|e| Error::Ingestion(e.to_string()))?;
        records.push(record);
    }

    let headers: Vec<String> = if has_header {
        if records.is_empty() {
            return Ok(DataFrame::new());
        }
        dedup_headers(records.remove(0).iter())
    } else {
        match records.first() {
            Some(first) => (0..first.len()).map(|i| format!("column_{}", i)).collect(),
            None => return Ok(DataFrame::new()),
        }
    };

    let mut buffers: Vec<Vec<String>> = vec![Vec::with_capacity(records.len()); headers.len()];
    for (line, record) in records.iter().enumerate() {
        if record.len() > headers.len() {
            return Err(Error::Ingestion(format!(
                "expected {} fields in data row {}, saw {}",
                headers.len(),
                line + 1,
                record.len()
            )));
        }
        for (i, buffer) in buffers.iter_mut().enumerate() {
            // short rows are padded with missing values
            buffer.push(record.get(i).unwrap_or("").to_string());
        }
    }

    let mut df = DataFrame::new();
    for (header, values) in headers.into_iter().zip(buffers) {
        df.add_column(header, infer_column(values))?;
    }
    Ok(df)
}

/// Number repeated names as `name.1`, `name.2`, ... skipping names already taken
fn dedup_headers<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<String> {
    let raw: Vec<&str> = raw.collect();
    let mut taken: HashSet<String> = HashSet::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut headers = Vec::with_capacity(raw.len());

    for name in raw {
        let mut header = name.to_string();
        if taken.contains(&header) {
            let count = counts.entry(name).or_insert(0);
            loop {
                *count += 1;
                header = format!("{}.{}", name, count);
                if !taken.contains(&header) {
                    break;
                }
            }
        }
        taken.insert(header.clone());
        headers.push(header);
    }
    headers
}

fn is_na(value: &str) -> bool {
    NA_VALUES.contains(&value)
}

/// Choose the narrowest column type that represents every cell
fn infer_column(values: Vec<String>) -> Column {
    let has_missing = values.iter().any(|s| is_na(s));
    let present = || values.iter().filter(|s| !is_na(s));

    if !has_missing {
        let ints: Option<Vec<i64>> = values.iter().map(|s| s.parse::<i64>().ok()).collect();
        if let Some(ints) = ints {
            return Column::Int64(Int64Column::new(ints));
        }
    }

    if present().all(|s| s.parse::<f64>().is_ok()) {
        let floats = values
            .iter()
            .map(|s| s.parse::<f64>().unwrap_or(f64::NAN))
            .collect();
        return Column::Float64(Float64Column::new(floats));
    }

    if !has_missing && values.iter().all(|s| parse_bool(s).is_some()) {
        let bools = values.iter().filter_map(|s| parse_bool(s)).collect();
        return Column::Boolean(BooleanColumn::new(bools));
    }

    let strings = values
        .into_iter()
        .map(|s| if is_na(&s) { String::new() } else { s })
        .collect();
    Column::String(StringColumn::new(strings))
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Write a DataFrame to a CSV file with a header row
pub fn write_csv<P: AsRef<Path>>(df: &DataFrame, path: P) -> Result<()> {
    let file = File::create(path.as_ref())?;
    let mut wtr = Writer::from_writer(file);

    wtr.write_record(df.column_names())?;

    for i in 0..df.row_count() {
        let row: Vec<String> = df.iter_columns().map(|(_, col)| col.format_value(i)).collect();
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}
