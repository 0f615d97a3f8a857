//! Map view state: active metric and month, the color scale built for them,
//! and the generation counter that identifies the rendered map surface.

use crate::interaction::{InteractionHandler, SelectionListener};
use crate::legend::Legend;
use crate::scale::{build_scale, ColorScale};
use crate::style::{style_for, Style};
use mrb_basins::{BasinCollection, Metric, Month, ValueRange};

/// State of the choropleth for one loaded dataset.
///
/// The scale is replaced wholesale on every change. The generation only
/// moves when the metric changes; the map surface is keyed on it, so a metric
/// switch remounts the map while a month change just restyles it.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    metric: Metric,
    month: Month,
    monthly_range: Option<ValueRange>,
    scale: ColorScale,
    generation: u64,
}

impl MapView {
    pub fn new(basins: &BasinCollection) -> Self {
        let metric = Metric::default();
        let month = Month::default();
        let monthly_range = basins.monthly_range();
        Self {
            metric,
            month,
            monthly_range,
            scale: build_scale(basins, metric, month, monthly_range),
            generation: 0,
        }
    }

    /// Switch metric. Returns `false` when it was already active.
    ///
    /// The remount discards the polygon under the pointer without a
    /// pointer-leave, so the selection is cleared through `listener`.
    pub fn set_metric(
        &mut self,
        basins: &BasinCollection,
        metric: Metric,
        listener: &mut dyn SelectionListener,
    ) -> bool {
        if metric == self.metric {
            return false;
        }
        self.metric = metric;
        self.rebuild(basins);
        self.generation += 1;
        log::info!("Metric set to {}, map generation {}", metric, self.generation);
        listener.on_select(None);
        true
    }

    /// Switch month. Returns `false` when it was already active.
    pub fn set_month(&mut self, basins: &BasinCollection, month: Month) -> bool {
        if month == self.month {
            return false;
        }
        self.month = month;
        if self.metric.is_monthly() {
            self.rebuild(basins);
        }
        true
    }

    fn rebuild(&mut self, basins: &BasinCollection) {
        self.scale = build_scale(basins, self.metric, self.month, self.monthly_range);
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn monthly_range(&self) -> Option<ValueRange> {
        self.monthly_range
    }

    pub fn scale(&self) -> &ColorScale {
        &self.scale
    }

    pub fn is_continuous(&self) -> bool {
        self.scale.is_continuous()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The feature property currently driving the colors.
    pub fn property_key(&self) -> &'static str {
        self.metric.property_key(self.month)
    }

    /// Resting style of every feature, in feature order.
    pub fn styles(&self, basins: &BasinCollection, selected: Option<&str>) -> Vec<Style> {
        let key = self.property_key();
        basins
            .features()
            .iter()
            .map(|f| style_for(&self.scale, key, f, selected))
            .collect()
    }

    pub fn legend(&self) -> Legend {
        Legend::new(&self.scale, self.property_key(), self.is_continuous())
    }

    pub fn interaction(&self) -> InteractionHandler<'_> {
        InteractionHandler::new(&self.scale, self.property_key())
    }
}
