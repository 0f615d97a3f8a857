//! River basin features and the collection they live in.
//!
//! Basins are standard GeoJSON features. Their property bag carries at least
//! `RIVERBASIN`, `population`, `average` and the twelve month keys, any of
//! which may be absent or `null`.

use crate::metric::{Month, BASIN_NAME_KEY};
use geojson::{Feature, FeatureCollection};
use itertools::{Itertools, MinMaxResult};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Closed numeric interval `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Extent of the given values, or `None` when there are none.
    pub fn of<I: IntoIterator<Item = f64>>(values: I) -> Option<Self> {
        match values.into_iter().minmax_by(|a, b| a.total_cmp(b)) {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(v) => Some(Self::new(v, v)),
            MinMaxResult::MinMax(min, max) => Some(Self::new(min, max)),
        }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Typed access to the basin properties of a feature.
pub trait BasinFeature {
    /// The `RIVERBASIN` identifier, if present and a string.
    fn basin_name(&self) -> Option<&str>;

    /// Numeric value of a property. Absent, `null`, non-numeric and
    /// non-finite values all read as `None`.
    fn metric_value(&self, key: &str) -> Option<f64>;
}

impl BasinFeature for Feature {
    fn basin_name(&self) -> Option<&str> {
        self.property(BASIN_NAME_KEY).and_then(|v| v.as_str())
    }

    fn metric_value(&self, key: &str) -> Option<f64> {
        self.property(key)
            .and_then(|v| v.as_f64())
            .filter(|v| v.is_finite())
    }
}

/// A loaded basin dataset.
///
/// Cheaply cloneable; equality is identity, so two handles compare equal
/// only when they point at the same loaded dataset.
#[derive(Debug, Clone)]
pub struct BasinCollection {
    inner: Arc<FeatureCollection>,
}

impl PartialEq for BasinCollection {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl From<FeatureCollection> for BasinCollection {
    fn from(collection: FeatureCollection) -> Self {
        Self {
            inner: Arc::new(collection),
        }
    }
}

impl BasinCollection {
    pub fn features(&self) -> &[Feature] {
        &self.inner.features
    }

    pub fn feature(&self, index: usize) -> Option<&Feature> {
        self.inner.features.get(index)
    }

    pub fn len(&self) -> usize {
        self.inner.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.features.is_empty()
    }

    pub fn feature_collection(&self) -> &FeatureCollection {
        &self.inner
    }

    /// Find the first feature whose `RIVERBASIN` equals `name`.
    pub fn find_basin(&self, name: &str) -> Option<&Feature> {
        self.features()
            .iter()
            .find(|f| f.basin_name() == Some(name))
    }

    /// All present values of `key`, in feature order.
    pub fn values(&self, key: &str) -> Vec<f64> {
        self.features()
            .iter()
            .filter_map(|f| f.metric_value(key))
            .collect()
    }

    /// Global min/max over every month of every feature, ignoring missing
    /// values. Computed once per dataset so the monthly color mapping stays
    /// comparable across months.
    pub fn monthly_range(&self) -> Option<ValueRange> {
        ValueRange::of(self.features().iter().flat_map(|f| {
            Month::ALL
                .into_iter()
                .filter_map(move |m| f.metric_value(m.key()))
        }))
    }

    /// The twelve monthly values of a feature, `None` where missing.
    pub fn monthly_series(feature: &Feature) -> [Option<f64>; 12] {
        Month::ALL.map(|m| feature.metric_value(m.key()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::parse_basins;

    const SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {"type": "Feature", "geometry": null,
             "properties": {"RIVERBASIN": "Nile", "population": 100, "average": 2.5,
                            "jan": 10, "feb": 40, "mar": null}},
            {"type": "Feature", "geometry": null,
             "properties": {"RIVERBASIN": "Indus", "population": 300, "average": null,
                            "jan": 1000, "dec": 0}},
            {"type": "Feature", "geometry": null,
             "properties": {"population": "unknown"}}
        ]
    }"#;

    #[test]
    fn test_basin_accessors() {
        let basins = parse_basins(SAMPLE).unwrap();
        assert_eq!(basins.len(), 3);
        let nile = basins.feature(0).unwrap();
        assert_eq!(nile.basin_name(), Some("Nile"));
        assert_eq!(nile.metric_value("population"), Some(100.0));
        assert_eq!(nile.metric_value("mar"), None);
        assert_eq!(nile.metric_value("apr"), None);

        let unnamed = basins.feature(2).unwrap();
        assert_eq!(unnamed.basin_name(), None);
        assert_eq!(unnamed.metric_value("population"), None);
    }

    #[test]
    fn test_values_skip_missing() {
        let basins = parse_basins(SAMPLE).unwrap();
        assert_eq!(basins.values("population"), vec![100.0, 300.0]);
        assert_eq!(basins.values("average"), vec![2.5]);
        assert!(basins.values("nov").is_empty());
    }

    #[test]
    fn test_monthly_range_spans_all_months() {
        let basins = parse_basins(SAMPLE).unwrap();
        let range = basins.monthly_range().unwrap();
        assert_eq!(range, ValueRange::new(0.0, 1000.0));
    }

    #[test]
    fn test_monthly_range_empty() {
        let basins = parse_basins(r#"{"type": "FeatureCollection", "features": []}"#).unwrap();
        assert_eq!(basins.monthly_range(), None);
    }

    #[test]
    fn test_find_basin_and_series() {
        let basins = parse_basins(SAMPLE).unwrap();
        let indus = basins.find_basin("Indus").unwrap();
        let series = BasinCollection::monthly_series(indus);
        assert_eq!(series[0], Some(1000.0));
        assert_eq!(series[1], None);
        assert_eq!(series[11], Some(0.0));
        assert!(basins.find_basin("Amazon").is_none());
    }

    #[test]
    fn test_equality_is_identity() {
        let a = parse_basins(SAMPLE).unwrap();
        let b = a.clone();
        let c = parse_basins(SAMPLE).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
