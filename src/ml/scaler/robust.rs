use ndarray::{Array1, Array2};

use super::{ensure_width, per_column};
use crate::error::{Error, Result};
use crate::ml::input::{validate_data, TabularInput};
use crate::ml::pipeline::Scaler;
use crate::stats::{nanmedian, nanpercentile};

/// Statistics learned by [`RobustScaler`]
#[derive(Debug, Clone, PartialEq)]
pub struct RobustParams {
    /// Per-column median
    pub center: Array1<f64>,
    /// Per-column quantile spread, 1.0 where the spread was zero
    pub scale: Array1<f64>,
    /// Columns whose spread was zero and got clamped
    pub zero_scale: Vec<bool>,
}

/// Centers on the median and scales by a quantile range, robust to outliers.
///
/// Unlike the other scalers a zero quantile range is not an error: the
/// column's scale is set to 1 so the column is only shifted by its median.
#[derive(Debug, Clone, PartialEq)]
pub struct RobustScaler {
    quantile_range: (f64, f64),
    params: Option<RobustParams>,
}

impl Default for RobustScaler {
    fn default() -> Self {
        Self {
            quantile_range: (25.0, 75.0),
            params: None,
        }
    }
}

impl RobustScaler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the percentile pair; validated when fitting
    pub fn with_quantile_range(mut self, q_low: f64, q_high: f64) -> Self {
        self.quantile_range = (q_low, q_high);
        self
    }

    pub fn quantile_range(&self) -> (f64, f64) {
        self.quantile_range
    }

    pub fn params(&self) -> Option<&RobustParams> {
        self.params.as_ref()
    }

    /// Indices of the columns whose scale was clamped during the last fit
    pub fn zero_scale_columns(&self) -> Vec<usize> {
        self.params
            .as_ref()
            .map(|p| {
                p.zero_scale
                    .iter()
                    .enumerate()
                    .filter(|&(_, &zero)| zero)
                    .map(|(i, _)| i)
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl Scaler for RobustScaler {
    fn name(&self) -> &'static str {
        "RobustScaler"
    }

    fn is_fitted(&self) -> bool {
        self.params.is_some()
    }

    fn fit(&mut self, input: TabularInput<'_>) -> Result<()> {
        let (q_low, q_high) = self.quantile_range;
        if !(0.0 <= q_low && q_low < q_high && q_high <= 100.0) {
            return Err(Error::Config(format!(
                "invalid quantile range: ({}, {})",
                q_low, q_high
            )));
        }

        let x = validate_data(input)?.matrix;
        let center = per_column(&x, nanmedian);
        let mut scale =
            per_column(&x, |col| nanpercentile(col, q_high)) - per_column(&x, |col| nanpercentile(col, q_low));

        let zero_scale: Vec<bool> = scale.iter().map(|&s| s == 0.0).collect();
        if zero_scale.iter().any(|&z| z) {
            log::warn!(
                "features with zero interquartile range detected, these features will not be scaled"
            );
            scale
                .iter_mut()
                .filter(|s| **s == 0.0)
                .for_each(|s| *s = 1.0);
        }

        log::debug!("fitted {} on {} rows x {} columns", self.name(), x.nrows(), x.ncols());
        self.params = Some(RobustParams {
            center,
            scale,
            zero_scale,
        });
        Ok(())
    }

    fn transform(&self, input: TabularInput<'_>) -> Result<Array2<f64>> {
        let params = self
            .params
            .as_ref()
            .ok_or_else(|| Error::NotFitted(self.name().into()))?;

        let mut x = validate_data(input)?.matrix;
        ensure_width(self.name(), params.center.len(), &x)?;

        x -= &params.center;
        x /= &params.scale;
        Ok(x)
    }
}
