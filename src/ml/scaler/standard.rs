use ndarray::{Array1, Array2};

use super::{ensure_nonzero, ensure_width, per_column};
use crate::error::{Error, Result};
use crate::ml::input::{validate_data, TabularInput};
use crate::ml::pipeline::Scaler;
use crate::stats::{nanmean, nanstd};

/// Statistics learned by [`StandardScaler`]
#[derive(Debug, Clone, PartialEq)]
pub struct StandardParams {
    pub mean: Array1<f64>,
    /// Population standard deviation (ddof = 0)
    pub std: Array1<f64>,
}

/// Centers every column on its mean and scales it to unit variance
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StandardScaler {
    params: Option<StandardParams>,
}

impl StandardScaler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn params(&self) -> Option<&StandardParams> {
        self.params.as_ref()
    }
}

impl Scaler for StandardScaler {
    fn name(&self) -> &'static str {
        "StandardScaler"
    }

    fn is_fitted(&self) -> bool {
        self.params.is_some()
    }

    fn fit(&mut self, input: TabularInput<'_>) -> Result<()> {
        let x = validate_data(input)?.matrix;
        let mean = per_column(&x, nanmean);
        let std = per_column(&x, |col| nanstd(col, 0));
        ensure_nonzero(&std, "standard deviation")?;

        log::debug!("fitted {} on {} rows x {} columns", self.name(), x.nrows(), x.ncols());
        self.params = Some(StandardParams { mean, std });
        Ok(())
    }

    fn transform(&self, input: TabularInput<'_>) -> Result<Array2<f64>> {
        let params = self
            .params
            .as_ref()
            .ok_or_else(|| Error::NotFitted(self.name().into()))?;

        let mut x = validate_data(input)?.matrix;
        ensure_width(self.name(), params.mean.len(), &x)?;

        x -= &params.mean;
        x /= &params.std;
        Ok(x)
    }
}
