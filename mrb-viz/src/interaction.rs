//! Pointer interaction on basin polygons.
//!
//! The handler does not own the selection. It reports the hovered basin to a
//! [`SelectionListener`] and returns the visual effect the map should apply.
//! Entering a basin selects it; leaving clears the selection, so the
//! selection highlight only lasts as long as the hover.

use crate::scale::ColorScale;
use crate::style::{style_for, Style};
use geojson::Feature;
use mrb_basins::BasinFeature;
use mrb_utils::format::{escape_html, format_with_commas};

/// Shown in popups when the active property has no value.
pub const NO_DATA: &str = "No Data";
/// Shown in popups when the feature has no `RIVERBASIN`.
pub const UNKNOWN_BASIN: &str = "Unknown Basin";

/// Receives selection changes from the map.
pub trait SelectionListener {
    fn on_select(&mut self, basin: Option<&str>);
}

impl<F: FnMut(Option<&str>)> SelectionListener for F {
    fn on_select(&mut self, basin: Option<&str>) {
        self(basin)
    }
}

/// Info popup content for a hovered basin.
#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    pub basin: String,
    pub label: String,
    pub value: String,
}

impl Popup {
    pub fn to_html(&self) -> String {
        format!(
            "<strong>Basin:</strong> {}<br/><strong>{}:</strong> {}",
            escape_html(&self.basin),
            escape_html(&self.label),
            escape_html(&self.value)
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PopupAction {
    Open(Popup),
    Close,
}

/// What the map should do to the polygon after a pointer event.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverEffect {
    pub style: Style,
    /// Raise the polygon above its siblings.
    pub bring_to_front: bool,
    pub popup: PopupAction,
}

/// Formatted value of `key` for display: thousands separators, or
/// [`NO_DATA`] when the value is absent.
pub fn display_value(feature: &Feature, key: &str) -> String {
    feature
        .metric_value(key)
        .map(format_with_commas)
        .unwrap_or_else(|| NO_DATA.to_string())
}

/// Hover behavior for the polygons styled with one scale and property.
pub struct InteractionHandler<'a> {
    scale: &'a ColorScale,
    key: &'a str,
}

impl<'a> InteractionHandler<'a> {
    pub fn new(scale: &'a ColorScale, key: &'a str) -> Self {
        Self { scale, key }
    }

    /// Pointer entered `feature`: select it, highlight it, raise it, open the popup.
    pub fn pointer_enter(
        &self,
        feature: &Feature,
        listener: &mut dyn SelectionListener,
    ) -> HoverEffect {
        let basin = feature.basin_name();
        listener.on_select(basin);

        let resting = style_for(self.scale, self.key, feature, basin);
        HoverEffect {
            style: resting.hovered(),
            bring_to_front: true,
            popup: PopupAction::Open(self.popup(feature)),
        }
    }

    /// Pointer left `feature`: revert to the resting style, close the popup,
    /// clear the selection.
    ///
    /// The resting style is computed against the selection as it stands after
    /// this call, i.e. none.
    pub fn pointer_leave(
        &self,
        feature: &Feature,
        listener: &mut dyn SelectionListener,
    ) -> HoverEffect {
        let effect = HoverEffect {
            style: style_for(self.scale, self.key, feature, None),
            bring_to_front: false,
            popup: PopupAction::Close,
        };
        listener.on_select(None);
        effect
    }

    pub fn popup(&self, feature: &Feature) -> Popup {
        Popup {
            basin: feature.basin_name().unwrap_or(UNKNOWN_BASIN).to_string(),
            label: self.key.to_string(),
            value: display_value(feature, self.key),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::build_scale;
    use crate::style::{DEFAULT_WEIGHT, HOVER_BORDER};
    use mrb_basins::loader::parse_basins;
    use mrb_basins::{BasinCollection, Metric, Month, ValueRange};

    fn sample() -> BasinCollection {
        parse_basins(
            r#"{"type": "FeatureCollection", "features": [
                {"type": "Feature", "geometry": null,
                 "properties": {"RIVERBASIN": "A", "population": 1250000, "jan": null, "feb": 1000}},
                {"type": "Feature", "geometry": null,
                 "properties": {"population": 0}}
            ]}"#,
        )
        .unwrap()
    }

    #[derive(Default)]
    struct Recorder(Vec<Option<String>>);

    impl SelectionListener for Recorder {
        fn on_select(&mut self, basin: Option<&str>) {
            self.0.push(basin.map(str::to_string));
        }
    }

    #[test]
    fn test_hover_then_leave_notifies_in_order() {
        let basins = sample();
        let scale = build_scale(&basins, Metric::Population, Month::Jan, None);
        let handler = InteractionHandler::new(&scale, "population");
        let a = basins.feature(0).unwrap();

        let mut recorder = Recorder::default();
        handler.pointer_enter(a, &mut recorder);
        handler.pointer_leave(a, &mut recorder);
        assert_eq!(recorder.0, vec![Some("A".to_string()), None]);
    }

    #[test]
    fn test_enter_effect() {
        let basins = sample();
        let scale = build_scale(&basins, Metric::Population, Month::Jan, None);
        let handler = InteractionHandler::new(&scale, "population");
        let a = basins.feature(0).unwrap();

        let effect = handler.pointer_enter(a, &mut Recorder::default());
        assert!(effect.bring_to_front);
        assert_eq!(effect.style.color, HOVER_BORDER);
        match effect.popup {
            PopupAction::Open(popup) => {
                assert_eq!(popup.basin, "A");
                assert_eq!(popup.value, "1,250,000");
                assert_eq!(
                    popup.to_html(),
                    "<strong>Basin:</strong> A<br/><strong>population:</strong> 1,250,000"
                );
            }
            PopupAction::Close => panic!("expected popup to open"),
        }
    }

    #[test]
    fn test_leave_reverts_to_resting_style() {
        let basins = sample();
        let scale = build_scale(&basins, Metric::Population, Month::Jan, None);
        let handler = InteractionHandler::new(&scale, "population");
        let a = basins.feature(0).unwrap();

        let effect = handler.pointer_leave(a, &mut Recorder::default());
        assert_eq!(effect.popup, PopupAction::Close);
        assert_eq!(effect.style, style_for(&scale, "population", a, None));
        assert_eq!(effect.style.weight, DEFAULT_WEIGHT);
    }

    #[test]
    fn test_missing_value_shows_no_data() {
        let basins = sample();
        let range = Some(ValueRange::new(0.0, 1000.0));
        let scale = build_scale(&basins, Metric::Monthly, Month::Jan, range);
        let handler = InteractionHandler::new(&scale, "jan");
        let a = basins.feature(0).unwrap();

        assert_eq!(display_value(a, "jan"), NO_DATA);
        let popup = handler.popup(a);
        assert_eq!(popup.value, "No Data");
        assert_eq!(popup.label, "jan");
    }

    #[test]
    fn test_unnamed_basin() {
        let basins = sample();
        let scale = build_scale(&basins, Metric::Population, Month::Jan, None);
        let handler = InteractionHandler::new(&scale, "population");
        let unnamed = basins.feature(1).unwrap();

        let mut recorder = Recorder::default();
        let effect = handler.pointer_enter(unnamed, &mut recorder);
        assert_eq!(recorder.0, vec![None]);
        match effect.popup {
            PopupAction::Open(popup) => {
                assert_eq!(popup.basin, UNKNOWN_BASIN);
                assert_eq!(popup.value, "0");
            }
            PopupAction::Close => panic!("expected popup to open"),
        }
    }
}
