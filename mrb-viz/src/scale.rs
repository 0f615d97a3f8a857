//! Color scales for the choropleth.
//!
//! Two kinds are built from a dataset:
//! - a quantile scale (eight discrete buckets, yellow to red) over the values
//!   of the active property, used for `population` and `average`;
//! - a continuous scale (light to dark blue) over the global monthly range,
//!   used for every month so colors stay comparable while scrubbing.
//!
//! When there is nothing to build a domain from, the `Empty` scale paints
//! everything in the no-data color.

use crate::legend::LegendEntry;
use crate::palette::{self, Rgb};
use mrb_basins::{BasinCollection, Metric, Month, ValueRange};
use mrb_utils::format::format_with_commas;

/// Discrete scale whose breakpoints are quantiles of the input values.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantileScale {
    /// Input values, sorted ascending.
    values: Vec<f64>,
    /// `palette.len() - 1` breakpoints.
    thresholds: Vec<f64>,
    palette: &'static [Rgb],
}

impl QuantileScale {
    /// Build over `values` (non-finite values dropped). `None` when no values remain.
    pub fn new<I: IntoIterator<Item = f64>>(values: I, palette: &'static [Rgb]) -> Option<Self> {
        let mut values: Vec<f64> = values.into_iter().filter(|v| v.is_finite()).collect();
        if values.is_empty() || palette.is_empty() {
            return None;
        }
        values.sort_by(|a, b| a.total_cmp(b));

        let n = palette.len();
        let thresholds = (1..n)
            .map(|i| quantile_sorted(&values, i as f64 / n as f64))
            .collect();

        Some(Self {
            values,
            thresholds,
            palette,
        })
    }

    /// Bucket index for `value`: the number of breakpoints `<= value`.
    pub fn bucket(&self, value: f64) -> usize {
        self.thresholds.partition_point(|t| *t <= value)
    }

    pub fn color(&self, value: f64) -> Rgb {
        if value.is_nan() {
            return palette::NO_DATA;
        }
        self.palette[self.bucket(value)]
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// R-7 quantile of an ascending slice (linear interpolation between ranks).
pub fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    let n = sorted.len();
    if n == 0 {
        return f64::NAN;
    }
    if p <= 0.0 || n < 2 {
        return sorted[0];
    }
    if p >= 1.0 {
        return sorted[n - 1];
    }
    let h = (n - 1) as f64 * p;
    let i = h.floor() as usize;
    let lo = sorted[i];
    let hi = sorted[i + 1];
    lo + (hi - lo) * (h - i as f64)
}

/// Continuous scale interpolating through fixed stops across a fixed domain.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearScale {
    domain: ValueRange,
    stops: &'static [Rgb],
}

impl LinearScale {
    pub fn new(domain: ValueRange, stops: &'static [Rgb]) -> Self {
        Self { domain, stops }
    }

    /// Position of `value` in the domain. A zero-width domain maps to the middle.
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.domain.span();
        if span == 0.0 {
            0.5
        } else {
            (value - self.domain.min) / span
        }
    }

    pub fn color(&self, value: f64) -> Rgb {
        if value.is_nan() {
            return palette::NO_DATA;
        }
        palette::sample(self.stops, self.normalize(value))
    }

    pub fn domain(&self) -> ValueRange {
        self.domain
    }
}

/// The active color mapping, with the capabilities the styler and legend need.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorScale {
    Quantile(QuantileScale),
    Linear(LinearScale),
    /// Nothing to scale over; every value maps to [`palette::NO_DATA`].
    Empty,
}

impl ColorScale {
    /// CSS color for `value`.
    pub fn evaluate(&self, value: f64) -> String {
        self.rgb(value).to_string()
    }

    pub fn rgb(&self, value: f64) -> Rgb {
        match self {
            ColorScale::Quantile(q) => q.color(value),
            ColorScale::Linear(l) => l.color(value),
            ColorScale::Empty => palette::NO_DATA,
        }
    }

    /// `[min, max]` of the input domain; `[0, 0]` for the empty scale.
    pub fn domain(&self) -> ValueRange {
        match self {
            ColorScale::Quantile(q) => {
                let values = q.values();
                ValueRange::new(values[0], values[values.len() - 1])
            }
            ColorScale::Linear(l) => l.domain(),
            ColorScale::Empty => ValueRange::new(0.0, 0.0),
        }
    }

    pub fn is_continuous(&self) -> bool {
        matches!(self, ColorScale::Linear(_))
    }

    /// Quantile breakpoints; empty for the other kinds.
    pub fn quantiles(&self) -> &[f64] {
        match self {
            ColorScale::Quantile(q) => q.thresholds(),
            _ => &[],
        }
    }

    /// Ordered `(label, color)` pairs describing the mapping.
    ///
    /// Quantile: one entry per breakpoint, labelled `grade – nextGrade`, the
    /// last labelled `grade+`. Continuous: the domain minimum and maximum.
    pub fn legend_entries(&self) -> Vec<LegendEntry> {
        match self {
            ColorScale::Quantile(q) => {
                let grades = q.thresholds();
                grades
                    .iter()
                    .enumerate()
                    .map(|(i, grade)| {
                        let label = match grades.get(i + 1) {
                            Some(next) => format!(
                                "{} – {}",
                                format_with_commas(*grade),
                                format_with_commas(*next)
                            ),
                            None => format!("{}+", format_with_commas(*grade)),
                        };
                        LegendEntry::new(label, self.evaluate(*grade))
                    })
                    .collect()
            }
            ColorScale::Linear(l) => {
                let ValueRange { min, max } = l.domain();
                vec![
                    LegendEntry::new(format_with_commas(min), self.evaluate(min)),
                    LegendEntry::new(format_with_commas(max), self.evaluate(max)),
                ]
            }
            ColorScale::Empty => Vec::new(),
        }
    }
}

/// Build the color scale for the active metric.
///
/// `monthly_range` is the dataset-wide monthly extent, computed once per
/// dataset; it alone decides the domain of the monthly scale, so every month
/// shares one mapping.
pub fn build_scale(
    basins: &BasinCollection,
    metric: Metric,
    month: Month,
    monthly_range: Option<ValueRange>,
) -> ColorScale {
    let key = metric.property_key(month);
    let scale = if metric.is_monthly() {
        monthly_range
            .map(|range| ColorScale::Linear(LinearScale::new(range, &palette::MONTHLY_BLUES)))
            .unwrap_or(ColorScale::Empty)
    } else {
        QuantileScale::new(basins.values(key), &palette::SCARCITY)
            .map(ColorScale::Quantile)
            .unwrap_or(ColorScale::Empty)
    };

    match &scale {
        ColorScale::Empty => log::warn!("No values for '{}', using the no-data scale", key),
        ColorScale::Linear(_) => log::debug!("Built continuous scale for '{}'", key),
        ColorScale::Quantile(_) => log::debug!("Built quantile scale for '{}'", key),
    }
    scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use mrb_basins::loader::parse_basins;

    fn two_basins() -> BasinCollection {
        parse_basins(
            r#"{"type": "FeatureCollection", "features": [
                {"type": "Feature", "geometry": null,
                 "properties": {"RIVERBASIN": "A", "population": 100, "jan": 0, "feb": 600}},
                {"type": "Feature", "geometry": null,
                 "properties": {"RIVERBASIN": "B", "population": 300, "jan": null, "jul": 1000}}
            ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_quantile_scale_two_values() {
        let basins = two_basins();
        let scale = build_scale(&basins, Metric::Population, Month::Jan, None);
        assert!(!scale.is_continuous());
        assert_eq!(scale.domain(), ValueRange::new(100.0, 300.0));
        assert_eq!(
            scale.quantiles(),
            &[125.0, 150.0, 175.0, 200.0, 225.0, 250.0, 275.0]
        );
        assert_eq!(scale.evaluate(100.0), "#ffeda0");
        assert_eq!(scale.evaluate(300.0), "#800026");
    }

    #[test]
    fn test_quantile_at_most_eight_colors_and_monotonic() {
        let values: Vec<f64> = (0..50).map(|i| (i * i) as f64).collect();
        let q = QuantileScale::new(values.clone(), &palette::SCARCITY).unwrap();
        let buckets: Vec<usize> = values.iter().map(|v| q.bucket(*v)).collect();
        assert!(buckets.windows(2).all(|w| w[0] <= w[1]));

        let mut colors: Vec<String> = values.iter().map(|v| q.color(*v).to_string()).collect();
        colors.dedup();
        assert!(colors.len() <= 8);
        assert_eq!(q.color(-1.0), palette::SCARCITY[0]);
        assert_eq!(q.color(1e9), palette::SCARCITY[7]);
    }

    #[test]
    fn test_quantile_sorted_interpolates() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile_sorted(&sorted, 0.0), 1.0);
        assert_eq!(quantile_sorted(&sorted, 0.5), 2.5);
        assert_eq!(quantile_sorted(&sorted, 1.0), 4.0);
        assert_eq!(quantile_sorted(&[7.0], 0.3), 7.0);
    }

    #[test]
    fn test_continuous_scale_endpoints() {
        let basins = two_basins();
        let range = basins.monthly_range();
        assert_eq!(range, Some(ValueRange::new(0.0, 1000.0)));
        let scale = build_scale(&basins, Metric::Monthly, Month::Jan, range);
        assert!(scale.is_continuous());
        assert_eq!(scale.evaluate(0.0), palette::MONTHLY_BLUES[0].to_string());
        assert_eq!(scale.evaluate(1000.0), palette::MONTHLY_BLUES[7].to_string());
        assert_eq!(scale.domain(), ValueRange::new(0.0, 1000.0));
    }

    #[test]
    fn test_continuous_scale_is_month_independent() {
        let basins = two_basins();
        let range = basins.monthly_range();
        let jan = build_scale(&basins, Metric::Monthly, Month::Jan, range);
        let jul = build_scale(&basins, Metric::Monthly, Month::Jul, range);
        assert_eq!(jan, jul);
    }

    #[test]
    fn test_continuous_zero_width_domain() {
        let scale = LinearScale::new(ValueRange::new(5.0, 5.0), &palette::MONTHLY_BLUES);
        assert_eq!(scale.normalize(5.0), 0.5);
        assert_eq!(scale.normalize(100.0), 0.5);
    }

    #[test]
    fn test_empty_values_yield_sentinel_scale() {
        let basins = two_basins();
        let scale = build_scale(&basins, Metric::Average, Month::Jan, None);
        assert_eq!(scale, ColorScale::Empty);
        assert_eq!(scale.evaluate(42.0), palette::NO_DATA.to_string());
        assert!(scale.legend_entries().is_empty());

        let monthly = build_scale(&basins, Metric::Monthly, Month::Jan, None);
        assert_eq!(monthly, ColorScale::Empty);
    }

    #[test]
    fn test_metric_round_trip_is_idempotent() {
        let basins = two_basins();
        let range = basins.monthly_range();
        let direct = build_scale(&basins, Metric::Population, Month::Jan, range);
        let _monthly = build_scale(&basins, Metric::Monthly, Month::Jan, range);
        let back = build_scale(&basins, Metric::Population, Month::Jan, range);
        assert_eq!(direct, back);
    }

    #[test]
    fn test_legend_entries_quantile_labels() {
        let basins = two_basins();
        let scale = build_scale(&basins, Metric::Population, Month::Jan, None);
        let entries = scale.legend_entries();
        assert_eq!(entries.len(), 7);
        assert_eq!(entries[0].label, "125 – 150");
        assert_eq!(entries[0].color, palette::SCARCITY[1].to_string());
        assert_eq!(entries[6].label, "275+");
        assert_eq!(entries[6].color, palette::SCARCITY[7].to_string());
    }

    #[test]
    fn test_legend_entries_continuous() {
        let scale = ColorScale::Linear(LinearScale::new(
            ValueRange::new(0.0, 12500.0),
            &palette::MONTHLY_BLUES,
        ));
        let entries = scale.legend_entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].label, "0");
        assert_eq!(entries[1].label, "12,500");
        assert_eq!(entries[1].color, "#08519c");
    }
}
