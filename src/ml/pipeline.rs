//! Scaler interface and scaler pipelines

use std::path::Path;

use ndarray::Array2;

use crate::error::{Error, Result};
use crate::io::read_table;
use crate::ml::input::{validate_data, TabularInput};

/// Fit/transform interface shared by every scaler.
///
/// A scaler is `Unfit` until [`Scaler::fit`] succeeds. Each successful fit
/// replaces the stored statistics; a failed fit leaves them untouched.
///
/// Instances are not synchronised. `transform` only reads the fitted state, but
/// sharing an instance that may be refitted requires external locking.
pub trait Scaler {
    /// Human readable scaler name, used in error messages
    fn name(&self) -> &'static str;

    /// Whether statistics are available for `transform`
    fn is_fitted(&self) -> bool;

    /// Compute and store per-column statistics
    fn fit(&mut self, input: TabularInput<'_>) -> Result<()>;

    /// Apply the stored statistics to `input`
    fn transform(&self, input: TabularInput<'_>) -> Result<Array2<f64>>;

    /// Fit on `input`, then transform the same input
    fn fit_transform(&mut self, input: TabularInput<'_>) -> Result<Array2<f64>> {
        self.fit(input)?;
        self.transform(input)
    }

    /// Read a CSV file and fit on it
    fn fit_from_path(&mut self, path: &Path) -> Result<()> {
        let df = read_table(path)?;
        self.fit((&df).into())
    }

    /// Read a CSV file and transform it
    fn transform_from_path(&self, path: &Path) -> Result<Array2<f64>> {
        let df = read_table(path)?;
        self.transform((&df).into())
    }

    /// Read a CSV file, fit on it and transform it
    fn fit_transform_from_path(&mut self, path: &Path) -> Result<Array2<f64>> {
        let df = read_table(path)?;
        self.fit_transform((&df).into())
    }
}

/// Chain of scalers, each fitted on the output of the previous one
#[derive(Default)]
pub struct Pipeline {
    scalers: Vec<Box<dyn Scaler>>,
}

impl Pipeline {
    /// Create an empty pipeline
    pub fn new() -> Self {
        Pipeline {
            scalers: Vec::new(),
        }
    }

    /// Append a scaler to the pipeline
    pub fn add_scaler<S: Scaler + 'static>(&mut self, scaler: S) -> &mut Self {
        self.scalers.push(Box::new(scaler));
        self
    }

    /// Append an already boxed scaler, e.g. one built from configuration
    pub fn add_boxed(&mut self, scaler: Box<dyn Scaler>) -> &mut Self {
        self.scalers.push(scaler);
        self
    }

    pub fn len(&self) -> usize {
        self.scalers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scalers.is_empty()
    }

    /// Fit every stage
    pub fn fit(&mut self, input: TabularInput<'_>) -> Result<()> {
        self.fit_transform(input).map(|_| ())
    }

    /// Run every stage in order. An empty pipeline returns the validated input.
    pub fn transform(&self, input: TabularInput<'_>) -> Result<Array2<f64>> {
        let mut stages = self.scalers.iter();
        let mut current = match stages.next() {
            Some(first) => first.transform(input)?,
            None => return Ok(validate_data(input)?.matrix),
        };

        for scaler in stages {
            current = scaler.transform((&current).into())?;
        }

        Ok(current)
    }

    /// Fit every stage on the output of the previous stage and return the result
    pub fn fit_transform(&mut self, input: TabularInput<'_>) -> Result<Array2<f64>> {
        let mut stages = self.scalers.iter_mut();
        let mut current = match stages.next() {
            Some(first) => first.fit_transform(input)?,
            None => return Ok(validate_data(input)?.matrix),
        };

        for scaler in stages {
            current = scaler.fit_transform((&current).into())?;
        }

        log::debug!("fitted pipeline of {} scalers", self.scalers.len());
        Ok(current)
    }

    /// Whether every stage has been fitted
    pub fn is_fitted(&self) -> bool {
        self.scalers.iter().all(|s| s.is_fitted())
    }

    /// Name of the first unfitted stage, if any
    pub fn first_unfitted(&self) -> Option<&'static str> {
        self.scalers.iter().find(|s| !s.is_fitted()).map(|s| s.name())
    }

    /// Fail with [`Error::NotFitted`] unless every stage is fitted
    pub fn ensure_fitted(&self) -> Result<()> {
        match self.first_unfitted() {
            Some(name) => Err(Error::NotFitted(format!("pipeline stage {}", name))),
            None => Ok(()),
        }
    }
}
