use std::{fs, path::Path};

use anyhow::Context;
use geojson::{FeatureCollection, GeoJson};

/// Parse a GeoJSON file into a FeatureCollection.
///
/// Fails if the file is missing, unreadable, not valid GeoJSON, or not a
/// FeatureCollection at the top level.
pub fn read_feature_collection(filepath: &Path) -> anyhow::Result<FeatureCollection> {
    let contents =
        fs::read_to_string(filepath).with_context(|| format!("Reading GeoJSON {:?}", filepath))?;
    let geojson_contents: GeoJson = contents
        .parse()
        .with_context(|| format!("Parsing GeoJSON {:?}", filepath))?;
    FeatureCollection::try_from(geojson_contents)
        .with_context(|| format!("{:?} is not a FeatureCollection", filepath))
}

pub fn write_feature_collection(
    collection: &FeatureCollection,
    output_filepath: &Path,
) -> anyhow::Result<()> {
    fs::write(output_filepath, collection.to_string())
        .with_context(|| format!("Writing GeoJSON {:?}", output_filepath))
}
