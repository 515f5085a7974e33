//! Frame-level transforms applied to tables read from CSV

mod common;

use std::collections::HashMap;

use common::create_test_csv;
use tabprep::column::Column;
use tabprep::ml::binning::{cut, Bins};
use tabprep::ml::cleaning::{drop_sparse, fill_mean, fill_zeros, Axis};
use tabprep::ml::encoding::{label_encode, one_hot_encode, ordinal_encode};
use tabprep::ml::features::{interaction_features, polynomial_features};
use tabprep::ml::normalize::{normalize, NormalizeMethod};
use tabprep::ml::outliers::{remove_iqr, remove_zscore};
use tabprep::{read_table, DataFrame, Error};

fn survey() -> DataFrame {
    let file = create_test_csv(
        "survey",
        &["age", "height", "size", "city"],
        &[
            &["23", "1.70", "m", "Oslo"],
            &["35", "", "s", "Lima"],
            &["41", "1.82", "l", ""],
            &["29", "1.65", "m", "Oslo"],
            &["", "", "s", ""],
        ],
    );
    read_table(file.path()).unwrap()
}

#[test]
fn test_clean_then_scale_ready() {
    let df = survey();

    let rows = drop_sparse(&df, Axis::Rows, Some(3)).unwrap();
    assert_eq!(rows.row_count(), 4);

    let filled = fill_mean(&rows).unwrap();
    let height = filled.numeric_values("height").unwrap();
    assert!((height[1] - (1.70 + 1.82 + 1.65) / 3.0).abs() < 1e-12);

    let zeros = fill_zeros(&df).unwrap();
    assert_eq!(zeros.numeric_values("age").unwrap()[4], 0.0);

    let columns = drop_sparse(&df, Axis::Columns, None).unwrap();
    assert_eq!(columns.column_names(), &["age", "height", "size", "city"]);
    let strict = drop_sparse(&df, Axis::Columns, Some(5)).unwrap();
    assert_eq!(strict.column_names(), &["size"]);
}

#[test]
fn test_normalize_after_cleaning() {
    let df = fill_zeros(&survey()).unwrap();
    let numeric = df.select(&["age", "height"]).unwrap();

    let scaled = normalize(&numeric, NormalizeMethod::MinMax).unwrap();
    let age = scaled.numeric_values("age").unwrap();
    assert_eq!(age[2], 1.0);
    assert_eq!(age[4], 0.0);

    assert!(matches!(
        normalize(&survey(), NormalizeMethod::Standard),
        Err(Error::InvalidInput(_))
    ));
}

#[test]
fn test_outlier_removal_keeps_other_columns() {
    let file = create_test_csv(
        "outliers",
        &["v", "tag"],
        &[
            &["1", "a"],
            &["2", "b"],
            &["2", "c"],
            &["3", "d"],
            &["2", "e"],
            &["40", "f"],
        ],
    );
    let df = read_table(file.path()).unwrap();

    let kept = remove_iqr(&df, "v").unwrap();
    assert_eq!(kept.row_count(), 5);
    match kept.column("tag").unwrap() {
        Column::String(tags) => assert!(!tags.values().contains(&"f".to_string())),
        other => panic!("unexpected column {:?}", other),
    }

    let wide = remove_zscore(&df, "v", (-10.0, 10.0)).unwrap();
    assert_eq!(wide.row_count(), 6);
}

#[test]
fn test_binning_ages() {
    let df = survey();
    let labels = vec!["young".to_string(), "older".to_string()];
    let binned = cut(
        &df,
        "age",
        &Bins::Edges(vec![18.0, 30.0, 65.0]),
        Some(&labels),
    )
    .unwrap();

    match binned.column("age_binned").unwrap() {
        Column::String(col) => {
            assert_eq!(col.values(), &["young", "older", "older", "young", ""])
        }
        other => panic!("unexpected column {:?}", other),
    }
    assert!(matches!(
        cut(&df, "city", &Bins::Count(2), None),
        Err(Error::InvalidInput(_))
    ));
}

#[test]
fn test_encoders_on_survey() {
    let df = survey();

    let labels = label_encode(&df, &["size"]).unwrap();
    assert_eq!(
        labels.numeric_values("size").unwrap(),
        vec![1.0, 2.0, 0.0, 1.0, 2.0]
    );

    let one_hot = one_hot_encode(&df, &["city"]).unwrap();
    assert!(!one_hot.contains_column("city"));
    assert_eq!(
        one_hot.column_names(),
        &["age", "height", "size", "city_Lima", "city_Oslo"]
    );
    assert_eq!(
        one_hot.numeric_values("city_Oslo").unwrap(),
        vec![1.0, 0.0, 0.0, 1.0, 0.0]
    );
    assert_eq!(
        one_hot.numeric_values("city_Lima").unwrap(),
        vec![0.0, 1.0, 0.0, 0.0, 0.0]
    );

    let mut order = HashMap::new();
    order.insert(
        "size".to_string(),
        vec!["s".to_string(), "m".to_string(), "l".to_string()],
    );
    let ordinal = ordinal_encode(&df, &["size"], &order).unwrap();
    assert_eq!(
        ordinal.numeric_values("size").unwrap(),
        vec![1.0, 0.0, 2.0, 1.0, 0.0]
    );

    let cities = label_encode(&df, &["city"]).unwrap();
    assert_eq!(
        cities.numeric_values("city").unwrap(),
        vec![1.0, 0.0, -1.0, 1.0, -1.0]
    );
}

#[test]
fn test_feature_generation() {
    let df = fill_zeros(&survey()).unwrap();

    let with_pairs = interaction_features(&df, &["age", "height"]).unwrap();
    let product = with_pairs.numeric_values("age_x_height").unwrap();
    assert!((product[0] - 23.0 * 1.70).abs() < 1e-12);

    let with_powers = polynomial_features(&df, &["age"], 2).unwrap();
    assert_eq!(with_powers.numeric_values("age^2").unwrap()[1], 1225.0);

    assert!(matches!(
        polynomial_features(&df, &["weight"], 2),
        Err(Error::ColumnNotFound(_))
    ));
}
