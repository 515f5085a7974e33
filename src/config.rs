//! Declarative preprocessing configuration
//!
//! A configuration names one scaler and the CSV options used to read its
//! input. It can be written in TOML, YAML or JSON:
//!
//! ```toml
//! [scaler]
//! kind = "robust"
//! quantile_range = [10.0, 90.0]
//!
//! [csv]
//! delimiter = ";"
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::io::{read_table_with, CsvOptions};
use crate::ml::pipeline::Scaler;
use crate::ml::scaler::{MaxAbsScaler, MinMaxScaler, RobustScaler, StandardScaler};

/// Scaler selection, tagged by `kind`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ScalerConfig {
    MinMax {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        feature_range: Option<(f64, f64)>,
    },
    Standard,
    MaxAbs,
    Robust {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        quantile_range: Option<(f64, f64)>,
    },
}

impl ScalerConfig {
    /// Construct the configured scaler, unfitted.
    ///
    /// A feature range is checked here. A quantile range is only checked when
    /// the scaler is fitted.
    pub fn build(&self) -> Result<Box<dyn Scaler>> {
        let scaler: Box<dyn Scaler> = match *self {
            ScalerConfig::MinMax { feature_range } => match feature_range {
                Some(range) => Box::new(MinMaxScaler::new(range)?),
                None => Box::new(MinMaxScaler::default()),
            },
            ScalerConfig::Standard => Box::new(StandardScaler::new()),
            ScalerConfig::MaxAbs => Box::new(MaxAbsScaler::new()),
            ScalerConfig::Robust { quantile_range } => match quantile_range {
                Some((lo, hi)) => Box::new(RobustScaler::new().with_quantile_range(lo, hi)),
                None => Box::new(RobustScaler::new()),
            },
        };
        Ok(scaler)
    }
}

/// Supported configuration file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
    Json,
}

impl ConfigFormat {
    /// Format implied by a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        match ext.to_ascii_lowercase().as_str() {
            "toml" => Ok(ConfigFormat::Toml),
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            "json" => Ok(ConfigFormat::Json),
            _ => Err(Error::Config(format!(
                "unsupported configuration format: {:?}",
                ext
            ))),
        }
    }
}

/// Scaler plus the options used to read its CSV input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreprocessConfig {
    pub scaler: ScalerConfig,
    #[serde(default)]
    pub csv: CsvOptions,
}

impl PreprocessConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_yaml_str(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    /// Parse `s` in the given format
    pub fn from_str_with(s: &str, format: ConfigFormat) -> Result<Self> {
        match format {
            ConfigFormat::Toml => Self::from_toml_str(s),
            ConfigFormat::Yaml => Self::from_yaml_str(s),
            ConfigFormat::Json => Self::from_json_str(s),
        }
    }

    /// Load a configuration file, picking the format from its extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let text = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
            _ => Error::Io(e),
        })?;

        let config = Self::from_str_with(&text, format)?;
        log::debug!("loaded {:?} configuration from {}", format, path.display());
        Ok(config)
    }

    /// Build the configured scaler
    pub fn build_scaler(&self) -> Result<Box<dyn Scaler>> {
        self.scaler.build()
    }

    /// Read `path` with the configured CSV options, then fit the configured
    /// scaler on it and transform it
    pub fn fit_transform_file<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<(Box<dyn Scaler>, Array2<f64>)> {
        let mut scaler = self.build_scaler()?;
        let df = read_table_with(path, &self.csv)?;
        let scaled = scaler.fit_transform((&df).into())?;
        Ok((scaler, scaled))
    }
}
