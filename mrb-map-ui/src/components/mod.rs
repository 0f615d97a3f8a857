//! Dioxus RSX components for the river basin dashboard.

mod bar_chart;
mod basin_map;
mod chart_header;
mod chart_panel;
mod error_display;
mod loading_spinner;
mod map_legend;
mod metric_selector;
mod month_slider;
mod tree_map;

pub use bar_chart::BarChart;
pub use basin_map::BasinMap;
pub use chart_header::ChartHeader;
pub use chart_panel::ChartPanel;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use map_legend::MapLegend;
pub use metric_selector::MetricSelector;
pub use month_slider::MonthSlider;
pub use tree_map::TreeMap;
