//! Basins sized by population; clicking a tile selects the basin.

use mrb_basins::{BasinCollection, BasinFeature, Metric, Month};
use mrb_utils::format::format_with_commas;
use mrb_viz::interaction::UNKNOWN_BASIN;
use mrb_viz::layout::{squarify, Rect};
use mrb_viz::scale::build_scale;
use dioxus::prelude::*;

const WIDTH: f64 = 480.0;
const HEIGHT: f64 = 300.0;
/// Tiles smaller than this (either side) are drawn without a label.
const MIN_LABEL_SIDE: f64 = 40.0;

#[derive(Debug, Clone, PartialEq)]
struct TileCell {
    rect: Rect,
    name: Option<String>,
    population: f64,
    color: String,
}

fn tile_cells(basins: &BasinCollection) -> Vec<TileCell> {
    let key = Metric::Population.key();
    let weights: Vec<f64> = basins
        .features()
        .iter()
        .map(|f| f.metric_value(key).unwrap_or(0.0))
        .collect();
    let scale = build_scale(basins, Metric::Population, Month::default(), None);

    squarify(&weights, Rect::new(0.0, 0.0, WIDTH, HEIGHT))
        .into_iter()
        .map(|tile| TileCell {
            rect: tile.rect,
            name: basins
                .feature(tile.index)
                .and_then(|f| f.basin_name())
                .map(str::to_string),
            population: weights[tile.index],
            color: scale.evaluate(weights[tile.index]),
        })
        .collect()
}

#[component]
pub fn TreeMap(basins: BasinCollection, on_select: EventHandler<Option<String>>) -> Element {
    let cells = tile_cells(&basins);
    if cells.is_empty() {
        return rsx! {
            p {
                style: "color: #666; font-size: 13px;",
                "No population data."
            }
        };
    }

    rsx! {
        svg {
            width: "100%",
            view_box: "0 0 {WIDTH} {HEIGHT}",
            for cell in cells {
                TreeTile { cell, on_select }
            }
        }
    }
}

#[component]
fn TreeTile(cell: TileCell, on_select: EventHandler<Option<String>>) -> Element {
    let label = cell.name.clone().unwrap_or_else(|| UNKNOWN_BASIN.to_string());
    let tooltip = format!("{}: {}", label, format_with_commas(cell.population));
    let show_label = cell.rect.w >= MIN_LABEL_SIDE && cell.rect.h >= MIN_LABEL_SIDE / 2.0;
    let name = cell.name.clone();
    let Rect { x, y, w, h } = cell.rect;

    rsx! {
        g {
            style: "cursor: pointer;",
            onclick: move |_| on_select.call(name.clone()),
            rect {
                x: "{x}",
                y: "{y}",
                width: "{w}",
                height: "{h}",
                fill: "{cell.color}",
                stroke: "white",
                stroke_width: "1",
                title { "{tooltip}" }
            }
            if show_label {
                text {
                    x: "{x + 4.0}",
                    y: "{y + 14.0}",
                    font_size: "11",
                    fill: "#222",
                    "{label}"
                }
            }
        }
    }
}
