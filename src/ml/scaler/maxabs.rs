use ndarray::{Array1, Array2};

use super::{ensure_nonzero, ensure_width, per_column};
use crate::error::{Error, Result};
use crate::ml::input::{validate_data, TabularInput};
use crate::ml::pipeline::Scaler;
use crate::stats::nanmax;

/// Statistics learned by [`MaxAbsScaler`]
#[derive(Debug, Clone, PartialEq)]
pub struct MaxAbsParams {
    pub max_abs: Array1<f64>,
}

/// Divides every column by its largest absolute value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaxAbsScaler {
    params: Option<MaxAbsParams>,
}

impl MaxAbsScaler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn params(&self) -> Option<&MaxAbsParams> {
        self.params.as_ref()
    }
}

impl Scaler for MaxAbsScaler {
    fn name(&self) -> &'static str {
        "MaxAbsScaler"
    }

    fn is_fitted(&self) -> bool {
        self.params.is_some()
    }

    fn fit(&mut self, input: TabularInput<'_>) -> Result<()> {
        let x = validate_data(input)?.matrix.mapv(f64::abs);
        let max_abs = per_column(&x, nanmax);
        ensure_nonzero(&max_abs, "maximum absolute value")?;

        log::debug!("fitted {} on {} rows x {} columns", self.name(), x.nrows(), x.ncols());
        self.params = Some(MaxAbsParams { max_abs });
        Ok(())
    }

    fn transform(&self, input: TabularInput<'_>) -> Result<Array2<f64>> {
        let params = self
            .params
            .as_ref()
            .ok_or_else(|| Error::NotFitted(self.name().into()))?;

        let mut x = validate_data(input)?.matrix;
        ensure_width(self.name(), params.max_abs.len(), &x)?;

        x /= &params.max_abs;
        Ok(x)
    }
}
