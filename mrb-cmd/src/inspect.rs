//! `inspect` command: summarize a basin dataset.

use anyhow::Context;
use mrb_basins::loader::read_basins;
use mrb_basins::{BasinCollection, BasinFeature, Metric, Month};
use mrb_viz::scale::build_scale;

pub fn run_inspect(file: &str) -> anyhow::Result<()> {
    let basins = read_basins(file).with_context(|| format!("failed to inspect {}", file))?;
    print!("{}", summary(&basins));
    Ok(())
}

/// Human-readable report: basin count, monthly range, population breaks.
pub fn summary(basins: &BasinCollection) -> String {
    let named = basins
        .features()
        .iter()
        .filter(|f| f.basin_name().is_some())
        .count();
    let mut out = format!("Basins: {} ({} named)\n", basins.len(), named);

    match basins.monthly_range() {
        Some(range) => out.push_str(&format!("Monthly range: {} to {}\n", range.min, range.max)),
        None => out.push_str("Monthly range: no monthly values\n"),
    }

    let scale = build_scale(basins, Metric::Population, Month::default(), None);
    let breaks: Vec<String> = scale.quantiles().iter().map(|q| q.to_string()).collect();
    if breaks.is_empty() {
        out.push_str("Population breaks: none\n");
    } else {
        out.push_str(&format!("Population breaks: {}\n", breaks.join(", ")));
    }
    out
}
