use ndarray::{Array1, Array2};

use super::{ensure_nonzero, ensure_width, per_column};
use crate::error::{Error, Result};
use crate::ml::input::{validate_data, TabularInput};
use crate::ml::pipeline::Scaler;
use crate::stats::{nanmax, nanmin};

/// Statistics learned by [`MinMaxScaler`]
#[derive(Debug, Clone, PartialEq)]
pub struct MinMaxParams {
    /// Per-column minimum
    pub min: Array1<f64>,
    /// Per-column `max - min`
    pub range: Array1<f64>,
}

/// Rescales every column linearly onto `feature_range`
///
/// ```
/// use ndarray::array;
/// use tabprep::ml::pipeline::Scaler;
/// use tabprep::ml::scaler::MinMaxScaler;
///
/// let mut scaler = MinMaxScaler::new((-1.0, 1.0)).unwrap();
/// let x = array![[0.0], [5.0], [10.0]];
/// let out = scaler.fit_transform((&x).into()).unwrap();
/// assert_eq!(out, array![[-1.0], [0.0], [1.0]]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MinMaxScaler {
    feature_range: (f64, f64),
    params: Option<MinMaxParams>,
}

impl Default for MinMaxScaler {
    fn default() -> Self {
        Self {
            feature_range: (0.0, 1.0),
            params: None,
        }
    }
}

impl MinMaxScaler {
    /// Create a MinMaxScaler mapping onto `(lo, hi)`; requires finite `lo < hi`
    pub fn new(feature_range: (f64, f64)) -> Result<Self> {
        let (lo, hi) = feature_range;
        if !(lo.is_finite() && hi.is_finite() && lo < hi) {
            return Err(Error::Config(format!(
                "feature_range must be two finite values where the first is less than the second, got ({}, {})",
                lo, hi
            )));
        }
        Ok(Self {
            feature_range,
            params: None,
        })
    }

    pub fn feature_range(&self) -> (f64, f64) {
        self.feature_range
    }

    /// Learned statistics, `None` until fitted
    pub fn params(&self) -> Option<&MinMaxParams> {
        self.params.as_ref()
    }
}

impl Scaler for MinMaxScaler {
    fn name(&self) -> &'static str {
        "MinMaxScaler"
    }

    fn is_fitted(&self) -> bool {
        self.params.is_some()
    }

    fn fit(&mut self, input: TabularInput<'_>) -> Result<()> {
        let x = validate_data(input)?.matrix;
        let min = per_column(&x, nanmin);
        let range = per_column(&x, nanmax) - &min;
        ensure_nonzero(&range, "range")?;

        log::debug!("fitted {} on {} rows x {} columns", self.name(), x.nrows(), x.ncols());
        self.params = Some(MinMaxParams { min, range });
        Ok(())
    }

    fn transform(&self, input: TabularInput<'_>) -> Result<Array2<f64>> {
        let params = self
            .params
            .as_ref()
            .ok_or_else(|| Error::NotFitted(self.name().into()))?;

        let mut x = validate_data(input)?.matrix;
        ensure_width(self.name(), params.min.len(), &x)?;

        let (lo, hi) = self.feature_range;
        x -= &params.min;
        x /= &params.range;
        // exact at both ends of the range
        x.mapv_inplace(|v| v * hi + (1.0 - v) * lo);
        Ok(x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_rejects_inverted_range() {
        assert!(matches!(MinMaxScaler::new((1.0, 0.0)), Err(Error::Config(_))));
        assert!(matches!(MinMaxScaler::new((0.0, 0.0)), Err(Error::Config(_))));
        assert!(matches!(
            MinMaxScaler::new((f64::NAN, 1.0)),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_nan_skipping_fit() {
        let mut scaler = MinMaxScaler::default();
        let x = array![[1.0], [f64::NAN], [3.0]];
        scaler.fit((&x).into()).unwrap();

        let params = scaler.params().unwrap();
        assert_eq!(params.min, array![1.0]);
        assert_eq!(params.range, array![2.0]);

        let out = scaler.transform((&x).into()).unwrap();
        assert_eq!(out[[0, 0]], 0.0);
        assert!(out[[1, 0]].is_nan());
        assert_eq!(out[[2, 0]], 1.0);
    }

    #[test]
    fn test_constant_column_is_fatal() {
        let mut scaler = MinMaxScaler::default();
        let x = array![[1.0, 5.0], [2.0, 5.0]];
        let err = scaler.fit((&x).into()).unwrap_err();
        assert!(matches!(err, Error::DegenerateColumn { column: 1, .. }));
        assert!(!scaler.is_fitted());
    }

    #[test]
    fn test_extremes_map_exactly_onto_range() {
        let mut scaler = MinMaxScaler::new((0.2, 0.9)).unwrap();
        let x = array![[1.0], [2.0], [5.0]];
        let out = scaler.fit_transform((&x).into()).unwrap();
        assert_eq!(out[[0, 0]], 0.2);
        assert_eq!(out[[2, 0]], 0.9);
    }

    #[test]
    fn test_width_mismatch() {
        let mut scaler = MinMaxScaler::default();
        scaler.fit((&array![[1.0], [2.0]]).into()).unwrap();
        let wide = array![[1.0, 2.0]];
        assert!(matches!(
            scaler.transform((&wide).into()),
            Err(Error::InvalidInput(_))
        ));
    }
}
