//! One-shot, whole-frame normalization
//!
//! Unlike the scalers, nothing is fitted: the statistics are computed on the
//! frame being transformed and discarded. Every column must be numeric and
//! complete.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::column::Float64Column;
use crate::error::{Error, Result};
use crate::stats::{nanmax, nanmean, nanmin, nanstd};
use crate::DataFrame;

/// Normalization applied by [`normalize`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NormalizeMethod {
    /// `(x - mean) / std` with the sample standard deviation
    Standard,
    /// `(x - min) / (max - min)`
    MinMax,
    /// `x / max(|x|)`
    MaxAbs,
    /// `ln(1 + x)`, all values must be positive
    Log,
    /// `sqrt(x)`, all values must be non-negative
    Power,
}

impl FromStr for NormalizeMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Standard" => Ok(NormalizeMethod::Standard),
            "MinMax" => Ok(NormalizeMethod::MinMax),
            "MaxAbs" | "MaxAbsoluteScaling" => Ok(NormalizeMethod::MaxAbs),
            "Log" => Ok(NormalizeMethod::Log),
            "Power" => Ok(NormalizeMethod::Power),
            other => Err(Error::Config(format!(
                "method must be \"Standard\", \"MinMax\", \"MaxAbsoluteScaling\", \"Log\", or \"Power\", got {:?}",
                other
            ))),
        }
    }
}

/// Normalize every column of `df` with `method`
pub fn normalize(df: &DataFrame, method: NormalizeMethod) -> Result<DataFrame> {
    let mut result = DataFrame::new();

    for (name, col) in df.iter_columns() {
        let values = col.to_f64_vec().ok_or_else(|| {
            Error::InvalidInput("all columns in the input data must be numeric".into())
        })?;
        if values.iter().any(|v| v.is_nan()) {
            return Err(Error::InvalidInput(
                "input data contains missing values, handle missing data before normalization"
                    .into(),
            ));
        }

        let normalized = match method {
            NormalizeMethod::Standard => {
                let (mean, std) = (nanmean(&values), nanstd(&values, 1));
                values.iter().map(|&v| (v - mean) / std).collect()
            }
            NormalizeMethod::MinMax => {
                let (min, max) = (nanmin(&values), nanmax(&values));
                values.iter().map(|&v| (v - min) / (max - min)).collect()
            }
            NormalizeMethod::MaxAbs => {
                let max_abs = values.iter().fold(0.0f64, |m, v| m.max(v.abs()));
                values.iter().map(|&v| v / max_abs).collect()
            }
            NormalizeMethod::Log => {
                if values.iter().any(|&v| v <= 0.0) {
                    return Err(Error::InvalidInput(
                        "log transformation requires all values to be positive".into(),
                    ));
                }
                values.iter().map(|&v| v.ln_1p()).collect()
            }
            NormalizeMethod::Power => {
                if values.iter().any(|&v| v < 0.0) {
                    return Err(Error::InvalidInput(
                        "power transformation requires all values to be non-negative".into(),
                    ));
                }
                values.iter().map(|&v| v.sqrt()).collect()
            }
        };

        result.add_column(name, Float64Column::new(normalized))?;
    }

    Ok(result)
}

/// Shorthand for [`normalize`] with [`NormalizeMethod::Standard`]
pub fn standardize(df: &DataFrame) -> Result<DataFrame> {
    normalize(df, NormalizeMethod::Standard)
}
