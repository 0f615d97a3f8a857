//! Typed wrappers around the Leaflet map script via `js_sys::eval()`.
//!
//! `assets/js/basin-map.js` is evaluated as globals (no ES modules) once
//! Leaflet has loaded, and its functions are promoted to `window.*`.
//! Payloads cross the boundary as JSON text embedded in a JS string literal.

use mrb_viz::interaction::{HoverEffect, PopupAction};
use mrb_viz::style::{LineStyle, Style};
use geojson::FeatureCollection;
use serde::Serialize;
use wasm_bindgen::prelude::*;

static BASIN_MAP_JS: &str = include_str!("../assets/js/basin-map.js");

/// Window property the map script calls when the pointer enters a basin.
const ENTER_CALLBACK: &str = "__mrbBasinEnter";
/// Window property the map script calls when the pointer leaves a basin.
const LEAVE_CALLBACK: &str = "__mrbBasinLeave";

/// Polls before giving up on a map that never appeared (100ms apart).
const MAX_POLLS: u32 = 100;

/// Everything the map script needs to draw one map surface.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapPayload<'a> {
    pub center: [f64; 2],
    pub zoom: u8,
    pub tile_url: &'a str,
    pub attribution: &'a str,
    pub basins: &'a FeatureCollection,
    /// Resting style of each basin, in feature order
    pub styles: &'a [Style],
    pub rivers: Option<&'a FeatureCollection>,
    pub rivers_style: LineStyle,
}

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('MRB JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote `text` as a JS string literal.
fn js_string(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| "\"\"".to_string())
}

/// Wait for Leaflet, then evaluate the map script at global scope.
/// Safe to call more than once.
pub fn init_map_scripts() {
    let store_js = format!(
        "if (!window.__mrbMapReady) window.__mrbMapScript = {};",
        js_string(BASIN_MAP_JS)
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__mrbMapReady || window.__mrbMapLoading) return;
            window.__mrbMapLoading = true;
            var waitForLeaflet = setInterval(function() {
                if (typeof L !== 'undefined') {
                    clearInterval(waitForLeaflet);
                    (0, eval)(window.__mrbMapScript);
                    delete window.__mrbMapScript;
                    if (typeof renderBasinMap !== 'undefined') window.renderBasinMap = renderBasinMap;
                    if (typeof restyleBasins !== 'undefined') window.restyleBasins = restyleBasins;
                    if (typeof applyBasinEffect !== 'undefined') window.applyBasinEffect = applyBasinEffect;
                    if (typeof destroyBasinMap !== 'undefined') window.destroyBasinMap = destroyBasinMap;
                    window.__mrbMapReady = true;
                    console.log('MRB map initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Draw the base tiles, the optional rivers layer and the basin polygons into
/// `container_id`, replacing any map previously drawn on the page.
///
/// Polls until the map script is ready and the container exists.
pub fn render_basin_map(container_id: &str, payload: &MapPayload<'_>) {
    let json = match serde_json::to_string(payload) {
        Ok(json) => json,
        Err(e) => {
            log::error!("Failed to serialize map payload: {}", e);
            return;
        }
    };
    let id = js_string(container_id);
    let data = js_string(&json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__mrbMapReady && document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.renderBasinMap({id}, JSON.parse({data}));
                    }} catch(e) {{ console.error('[MRB] renderBasinMap error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Reapply resting styles to every basin except the one under the pointer.
pub fn restyle_basins(container_id: &str, styles: &[Style]) {
    let json = match serde_json::to_string(styles) {
        Ok(json) => json,
        Err(e) => {
            log::error!("Failed to serialize basin styles: {}", e);
            return;
        }
    };
    let id = js_string(container_id);
    let data = js_string(&json);
    call_js(&format!(
        r#"
        (function() {{
            var attempts = 0;
            var poll = setInterval(function() {{
                attempts += 1;
                var ready = window.__mrbMapReady && window.__mrbMaps && window.__mrbMaps[{id}];
                if (ready || attempts > {MAX_POLLS}) {{
                    clearInterval(poll);
                    if (!ready) return;
                    try {{
                        window.restyleBasins({id}, JSON.parse({data}));
                    }} catch(e) {{ console.error('[MRB] restyleBasins error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Apply a hover effect to the basin at `index`.
pub fn apply_basin_effect(container_id: &str, index: usize, effect: &HoverEffect) {
    let style = match serde_json::to_string(&effect.style) {
        Ok(json) => json,
        Err(e) => {
            log::error!("Failed to serialize hover style: {}", e);
            return;
        }
    };
    let popup = match &effect.popup {
        PopupAction::Open(popup) => js_string(&popup.to_html()),
        PopupAction::Close => "null".to_string(),
    };
    call_js(&format!(
        "if (window.applyBasinEffect) window.applyBasinEffect({}, {}, {}, {}, {});",
        js_string(container_id),
        index,
        style,
        effect.bring_to_front,
        popup
    ));
}

/// Tear down the map drawn in `container_id`, if any.
pub fn destroy_basin_map(container_id: &str) {
    call_js(&format!(
        "if (window.destroyBasinMap) window.destroyBasinMap({});",
        js_string(container_id)
    ));
}

/// Pointer callbacks installed on `window` for the map script.
///
/// The closures live as long as this value; dropping it unregisters them.
pub struct HoverCallbacks {
    _enter: Closure<dyn FnMut(String, u32)>,
    _leave: Closure<dyn FnMut(String, u32)>,
}

impl HoverCallbacks {
    /// Install `on_enter` / `on_leave`, each called with the container id and
    /// the feature index.
    pub fn register<E, L>(on_enter: E, on_leave: L) -> Self
    where
        E: FnMut(String, u32) + 'static,
        L: FnMut(String, u32) + 'static,
    {
        let enter = Closure::<dyn FnMut(String, u32)>::new(on_enter);
        let leave = Closure::<dyn FnMut(String, u32)>::new(on_leave);

        match web_sys::window() {
            Some(window) => {
                let _ = js_sys::Reflect::set(
                    &window,
                    &JsValue::from_str(ENTER_CALLBACK),
                    enter.as_ref(),
                );
                let _ = js_sys::Reflect::set(
                    &window,
                    &JsValue::from_str(LEAVE_CALLBACK),
                    leave.as_ref(),
                );
            }
            None => log::warn!("No window; basin hover callbacks not installed"),
        }

        Self {
            _enter: enter,
            _leave: leave,
        }
    }
}

impl Drop for HoverCallbacks {
    fn drop(&mut self) {
        call_js(&format!(
            "delete window.{}; delete window.{};",
            ENTER_CALLBACK, LEAVE_CALLBACK
        ));
    }
}
