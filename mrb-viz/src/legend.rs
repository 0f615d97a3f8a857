//! Legend model for the map overlay.

use crate::scale::ColorScale;
use mrb_utils::format::format_with_commas;

/// Number of evenly spaced samples used for the continuous gradient bar.
pub const GRADIENT_SAMPLES: usize = 8;

/// One labelled color in a legend.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
}

impl LegendEntry {
    pub fn new(label: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: color.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LegendBody {
    /// Horizontal gradient across the domain with min/max labels beneath.
    Gradient {
        stops: Vec<String>,
        min_label: String,
        max_label: String,
    },
    /// One swatch per quantile breakpoint.
    Swatches(Vec<LegendEntry>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    /// Uppercased property name, e.g. `POPULATION` or `JAN`.
    pub title: String,
    pub body: LegendBody,
}

impl Legend {
    /// Describe `scale` for the property `key`.
    pub fn new(scale: &ColorScale, key: &str, is_continuous: bool) -> Self {
        let title = key.to_uppercase();
        let body = if is_continuous {
            let domain = scale.domain();
            let steps = (GRADIENT_SAMPLES - 1) as f64;
            let stops = (0..GRADIENT_SAMPLES)
                .map(|i| scale.evaluate(domain.min + domain.span() * i as f64 / steps))
                .collect();
            LegendBody::Gradient {
                stops,
                min_label: format_with_commas(domain.min),
                max_label: format_with_commas(domain.max),
            }
        } else {
            LegendBody::Swatches(scale.legend_entries())
        };
        Self { title, body }
    }

    /// CSS `background` value for the gradient bar, if this is a gradient legend.
    pub fn gradient_css(&self) -> Option<String> {
        match &self.body {
            LegendBody::Gradient { stops, .. } => {
                Some(format!("linear-gradient(to right, {})", stops.join(", ")))
            }
            LegendBody::Swatches(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette;
    use crate::scale::{LinearScale, QuantileScale};
    use mrb_basins::ValueRange;

    #[test]
    fn test_gradient_legend() {
        let scale = ColorScale::Linear(LinearScale::new(
            ValueRange::new(0.0, 3500.0),
            &palette::MONTHLY_BLUES,
        ));
        let legend = Legend::new(&scale, "mar", true);
        assert_eq!(legend.title, "MAR");
        match &legend.body {
            LegendBody::Gradient {
                stops,
                min_label,
                max_label,
            } => {
                assert_eq!(stops.len(), GRADIENT_SAMPLES);
                assert_eq!(stops[0], "#eff3ff");
                assert_eq!(stops[GRADIENT_SAMPLES - 1], "#08519c");
                assert_eq!(min_label, "0");
                assert_eq!(max_label, "3,500");
            }
            other => panic!("expected gradient, got {:?}", other),
        }
        let css = legend.gradient_css().unwrap();
        assert!(css.starts_with("linear-gradient(to right, #eff3ff"));
        assert!(css.ends_with("#08519c)"));
    }

    #[test]
    fn test_swatch_legend() {
        let q = QuantileScale::new([1000.0, 2000.0, 3000.0, 4000.0, 5000.0], &palette::SCARCITY);
        let scale = ColorScale::Quantile(q.unwrap());
        let legend = Legend::new(&scale, "population", false);
        assert_eq!(legend.title, "POPULATION");
        assert!(legend.gradient_css().is_none());
        match legend.body {
            LegendBody::Swatches(entries) => {
                assert_eq!(entries.len(), 7);
                assert_eq!(entries[0].label, "1,500 – 2,000");
                assert!(entries[6].label.ends_with('+'));
            }
            other => panic!("expected swatches, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_scale_legend_has_no_swatches() {
        let legend = Legend::new(&ColorScale::Empty, "average", false);
        assert_eq!(legend.body, LegendBody::Swatches(Vec::new()));
    }
}
