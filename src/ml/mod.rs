//! Preprocessing tools
//!
//! The scalers in [`scaler`] share the [`pipeline::Scaler`] interface and the
//! [`input`] adapter. The remaining modules are stateless column transforms
//! over a [`DataFrame`](crate::DataFrame).

pub mod binning;
pub mod cleaning;
pub mod encoding;
pub mod features;
pub mod input;
pub mod normalize;
pub mod outliers;
pub mod pipeline;
pub mod scaler;

pub use input::{validate_data, TabularInput, ValidatedData};
pub use pipeline::{Pipeline, Scaler};
pub use scaler::{MaxAbsScaler, MinMaxScaler, RobustScaler, StandardScaler};
