//! Core types and GeoJSON loading for major river basin water scarcity data.

pub mod basin;
pub mod loader;
pub mod metric;

pub use basin::{BasinCollection, BasinFeature, ValueRange};
pub use metric::{Metric, Month};
