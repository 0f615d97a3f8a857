//! Choropleth logic for the river basin dashboard.
//!
//! This crate turns a loaded basin dataset into everything the map needs,
//! independent of any rendering framework:
//! - `scale`: quantile and continuous color scales
//! - `style`: per-feature polygon styles, including the selected highlight
//! - `interaction`: hover enter/leave effects and selection notification
//! - `legend`: gradient or swatch legend model for the active scale
//! - `view`: the map view state machine (metric, month, scale, generation)
//! - `layout`: geometry for the bar chart and tree map

pub mod interaction;
pub mod layout;
pub mod legend;
pub mod palette;
pub mod scale;
pub mod style;
pub mod view;
