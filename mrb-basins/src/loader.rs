//! Loading the basin dataset from GeoJSON text or the static data file.
//!
//! `parse_basins`/`read_basins` return errors. `load_basins` is the
//! page-facing boundary: it logs the failure and hands back `None` so
//! callers render an empty state instead of failing.

use crate::basin::BasinCollection;
use anyhow::Context;
use geojson::{FeatureCollection, GeoJson};
use log::{error, info};
use std::path::Path;

/// File name of the primary dataset inside the public directory.
pub const BASINS_FILE_NAME: &str = "updated_mrb_basins.json";

/// Location of the primary dataset, relative to the project root.
pub const BASINS_FILE: &str = "public/updated_mrb_basins.json";

/// Parse GeoJSON text that must be a `FeatureCollection`.
pub fn parse_basins(json: &str) -> anyhow::Result<BasinCollection> {
    let geojson: GeoJson = json.parse().context("invalid GeoJSON")?;
    let collection =
        FeatureCollection::try_from(geojson).context("GeoJSON is not a FeatureCollection")?;
    Ok(BasinCollection::from(collection))
}

/// Read and parse a GeoJSON file from disk.
pub fn read_basins<P: AsRef<Path>>(path: P) -> anyhow::Result<BasinCollection> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    parse_basins(&text).with_context(|| format!("failed to parse {}", path.display()))
}

/// Parse embedded GeoJSON text, logging and discarding any failure.
pub fn load_basins(json: &str) -> Option<BasinCollection> {
    match parse_basins(json) {
        Ok(basins) => {
            info!("Loaded {} basin features", basins.len());
            Some(basins)
        }
        Err(e) => {
            error!("Error loading GeoJSON data: {:#}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_feature_collection() {
        let json = r#"{"type": "FeatureCollection", "features": [
            {"type": "Feature", "geometry": {"type": "Point", "coordinates": [31.2, 30.0]},
             "properties": {"RIVERBASIN": "Nile", "population": 250000000}}
        ]}"#;
        let basins = parse_basins(json).unwrap();
        assert_eq!(basins.len(), 1);
    }

    #[test]
    fn test_parse_rejects_single_feature() {
        let json = r#"{"type": "Feature", "geometry": null, "properties": {}}"#;
        assert!(parse_basins(json).is_err());
    }

    #[test]
    fn test_load_returns_none_on_garbage() {
        assert!(load_basins("").is_none());
        assert!(load_basins("{not json").is_none());
    }

    #[test]
    fn test_read_missing_file_names_path() {
        let err = read_basins("does/not/exist.json").unwrap_err();
        assert!(format!("{:#}", err).contains("does/not/exist.json"));
    }
}
