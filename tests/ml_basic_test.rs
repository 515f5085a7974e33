//! Basic end-to-end tests for the scaler pipeline

mod common;

use common::create_test_csv;
use ndarray::array;
use tabprep::column::{Float64Column, Int64Column};
use tabprep::{
    read_table, DataFrame, Error, MaxAbsScaler, MinMaxScaler, Pipeline, RobustScaler, Scaler,
    ScalerConfig, StandardScaler,
};

fn prepare_test_data(values: Vec<f64>) -> DataFrame {
    let mut df = DataFrame::new();
    df.add_column("feature", Float64Column::new(values)).unwrap();
    df
}

#[test]
fn test_standard_scaler_on_table() -> Result<(), Error> {
    let df = prepare_test_data(vec![1.0, 2.0, 3.0, 4.0, 5.0]);

    let mut scaler = StandardScaler::new();
    let transformed = scaler.fit_transform((&df).into())?;

    let values = transformed.column(0).to_vec();
    let mean: f64 = values.iter().sum::<f64>() / values.len() as f64;
    assert!(mean.abs() < 1e-10);
    assert!((values[4] - 2f64.sqrt()).abs() < 1e-10);

    let params = scaler.params().unwrap();
    assert_eq!(params.mean[0], 3.0);
    assert!((params.std[0] - 2f64.sqrt()).abs() < 1e-12);
    Ok(())
}

#[test]
fn test_minmax_scaler_on_table() -> Result<(), Error> {
    let df = prepare_test_data(vec![1.0, 2.0, 3.0, 4.0, 5.0]);

    let mut scaler = MinMaxScaler::default();
    let transformed = scaler.fit_transform((&df).into())?;
    assert_eq!(transformed.column(0).to_vec(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    Ok(())
}

#[test]
fn test_pipeline_from_csv() -> Result<(), Error> {
    let file = create_test_csv(
        "pipeline",
        &["age", "income", "segment"],
        &[
            &["20", "1000", "a"],
            &["30", "3000", "b"],
            &["40", "2000", "a"],
            &["50", "", "c"],
        ],
    );
    let df = read_table(file.path())?;

    let mut pipeline = Pipeline::new();
    pipeline
        .add_scaler(RobustScaler::new())
        .add_boxed(ScalerConfig::MaxAbs.build()?);
    assert_eq!(pipeline.len(), 2);

    let out = pipeline.fit_transform((&df).into())?;
    assert_eq!(out.shape(), &[4, 2]);
    assert!(out[[3, 1]].is_nan());
    assert!(out
        .iter()
        .filter(|v| !v.is_nan())
        .all(|v| v.abs() <= 1.0));

    let again = pipeline.transform((&df).into())?;
    assert_eq!(again[[0, 0]], out[[0, 0]]);
    Ok(())
}

#[test]
fn test_pipeline_stage_failure_is_reported() {
    let mut df = DataFrame::new();
    df.add_column("flat", Int64Column::new(vec![0, 0, 0])).unwrap();

    let mut pipeline = Pipeline::new();
    pipeline.add_scaler(MaxAbsScaler::new());
    let err = pipeline.fit((&df).into()).unwrap_err();
    assert!(matches!(err, Error::DegenerateColumn { column: 0, .. }));
    assert!(!pipeline.is_fitted());
    assert_eq!(pipeline.first_unfitted(), Some("MaxAbsScaler"));
    assert!(matches!(pipeline.ensure_fitted(), Err(Error::NotFitted(_))));
}

#[test]
fn test_integer_matrix_input() -> Result<(), Error> {
    let x = array![[2i64, -8], [4, 4]];
    let mut scaler = MaxAbsScaler::new();
    let out = scaler.fit_transform((&x).into())?;
    assert_eq!(out, array![[0.5, -1.0], [1.0, 0.5]]);
    Ok(())
}
