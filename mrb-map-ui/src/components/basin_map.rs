//! Choropleth map of river basins with metric controls and legend.
//!
//! Rendering is split in two effects: a full redraw keyed on the view
//! generation (metric switch), and a restyle whenever the property, scale or
//! selection changes. Pointer events come back from Leaflet through window
//! callbacks and are handled in a coroutine.

use crate::components::{MapLegend, MetricSelector, MonthSlider};
use crate::js_bridge::{self, HoverCallbacks, MapPayload};
use mrb_basins::{BasinCollection, Metric, Month};
use mrb_viz::interaction::SelectionListener;
use mrb_viz::style::rivers_style;
use mrb_viz::view::MapView;
use dioxus::prelude::*;
use futures::channel::mpsc::UnboundedReceiver;
use futures::StreamExt;
use std::cell::Cell;
use std::rc::Rc;

const MAP_CENTER: [f64; 2] = [40.0, 40.0];
const MAP_ZOOM: u8 = 2;
const TILE_URL: &str = "https://cartocdn_{s}.global.ssl.fastly.net/base-antique/{z}/{x}/{y}.png";
const ATTRIBUTION: &str =
    "&copy; <a href=\"http://osm.org/copyright\">OpenStreetMap</a> contributors";

/// DOM id of the map surface for a view generation.
pub fn map_container_id(generation: u64) -> String {
    format!("basin-map-{}", generation)
}

/// Pointer event forwarded from the map script.
#[derive(Debug)]
struct PointerEvent {
    container: String,
    index: usize,
    entered: bool,
}

/// Forwards selection changes to the parent.
///
/// Used for hover events and for the clear that accompanies a metric switch,
/// since the old map's pointer-leave is dropped as stale.
struct Notify(EventHandler<Option<String>>);

impl SelectionListener for Notify {
    fn on_select(&mut self, basin: Option<&str>) {
        self.0.call(basin.map(str::to_string));
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct BasinMapProps {
    pub basins: BasinCollection,
    /// Optional rivers overlay
    #[props(default)]
    pub rivers: Option<BasinCollection>,
    /// Currently selected basin, owned by the page
    pub selected: ReadSignal<Option<String>>,
    pub on_select: EventHandler<Option<String>>,
}

#[component]
pub fn BasinMap(props: BasinMapProps) -> Element {
    let BasinMapProps {
        basins,
        rivers,
        selected,
        on_select,
    } = props;

    let mut view = use_signal(|| MapView::new(&basins));
    let rendered = use_hook(|| Rc::new(Cell::new(0_u64)));

    let pointer_basins = basins.clone();
    let pointer = use_coroutine(move |mut rx: UnboundedReceiver<PointerEvent>| {
        let basins = pointer_basins.clone();
        async move {
            while let Some(event) = rx.next().await {
                handle_pointer(&basins, view, on_select, event);
            }
        }
    });

    use_hook(move || {
        let enter_tx = pointer.tx();
        let leave_tx = pointer.tx();
        Rc::new(HoverCallbacks::register(
            move |container, index| {
                let _ = enter_tx.unbounded_send(PointerEvent {
                    container,
                    index: index as usize,
                    entered: true,
                });
            },
            move |container, index| {
                let _ = leave_tx.unbounded_send(PointerEvent {
                    container,
                    index: index as usize,
                    entered: false,
                });
            },
        ))
    });

    // Full redraw on metric switch
    let generation = use_memo(move || view.read().generation());
    let render_basins = basins.clone();
    let render_rivers = rivers.clone();
    let render_mark = rendered.clone();
    use_effect(move || {
        let generation = generation();
        js_bridge::init_map_scripts();

        let view = view.peek();
        let styles = view.styles(&render_basins, selected.peek().as_deref());
        let payload = MapPayload {
            center: MAP_CENTER,
            zoom: MAP_ZOOM,
            tile_url: TILE_URL,
            attribution: ATTRIBUTION,
            basins: render_basins.feature_collection(),
            styles: &styles,
            rivers: render_rivers.as_ref().map(BasinCollection::feature_collection),
            rivers_style: rivers_style(),
        };
        js_bridge::render_basin_map(&map_container_id(generation), &payload);
        render_mark.set(generation);
    });

    // Restyle on month or selection change
    let styling = use_memo(move || {
        let view = view.read();
        (view.property_key(), view.scale().clone())
    });
    let restyle_basins = basins.clone();
    use_effect(move || {
        let _ = styling.read();
        let selected = selected.read().clone();
        let view = view.peek();
        let styles = view.styles(&restyle_basins, selected.as_deref());
        js_bridge::restyle_basins(&map_container_id(view.generation()), &styles);
    });

    let drop_mark = rendered.clone();
    use_drop(move || js_bridge::destroy_basin_map(&map_container_id(drop_mark.get())));

    let (metric, month, legend, container_id) = {
        let current = view.read();
        (
            current.metric(),
            current.month(),
            current.legend(),
            map_container_id(current.generation()),
        )
    };

    let metric_basins = basins.clone();
    let on_metric = move |metric: Metric| {
        if view.peek().metric() != metric {
            view.write()
                .set_metric(&metric_basins, metric, &mut Notify(on_select));
        }
    };
    let month_basins = basins.clone();
    let on_month = move |month: Month| {
        if view.peek().month() != month {
            view.write().set_month(&month_basins, month);
        }
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; height: 100%;",
            div {
                style: "display: flex; gap: 16px; align-items: center; flex-wrap: wrap;",
                MetricSelector { value: metric, on_change: on_metric }
                if metric.is_monthly() {
                    MonthSlider { value: month, on_change: on_month }
                }
            }
            div {
                style: "position: relative; flex: 1; min-height: 500px;",
                for id in std::iter::once(container_id) {
                    div {
                        key: "{id}",
                        id: "{id}",
                        style: "position: absolute; top: 0; right: 0; bottom: 0; left: 0;",
                    }
                }
                MapLegend { legend }
            }
        }
    }
}

fn handle_pointer(
    basins: &BasinCollection,
    view: Signal<MapView>,
    on_select: EventHandler<Option<String>>,
    event: PointerEvent,
) {
    let view = view.peek();
    let container = map_container_id(view.generation());
    if event.container != container {
        log::debug!("Ignoring pointer event from stale map {}", event.container);
        return;
    }
    let Some(feature) = basins.feature(event.index) else {
        log::warn!("Pointer event for unknown basin index {}", event.index);
        return;
    };

    let handler = view.interaction();
    let mut notify = Notify(on_select);
    let effect = if event.entered {
        handler.pointer_enter(feature, &mut notify)
    } else {
        handler.pointer_leave(feature, &mut notify)
    };
    js_bridge::apply_basin_effect(&container, event.index, &effect);
}
