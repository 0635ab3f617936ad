use anyhow::anyhow;
use geojson::{Feature, FeatureCollection, JsonObject, JsonValue};
use indicatif::ProgressBar;

use super::timeseries;

/// Reading reported for a station whose feed has no data rows.
pub const NOT_AVAILABLE: &str = "N/A";

/// Property names read from input features and the column holding the
/// temperature reading in each station's feed.
#[derive(Debug)]
pub struct EnrichOptions {
    pub station_name_property: String,
    pub data_url_property: String,
    pub temperature_column: String,
}

/// Enrich every feature in the collection with the latest reading from
/// its feed, one fetch per feature, strictly in order.
///
/// `fetch` resolves a URL to the body of the referenced delimited-text
/// resource. The first failure aborts the whole run; features are never
/// partially rewritten.
pub fn enrich_collection<F>(
    collection: &mut FeatureCollection,
    options: &EnrichOptions,
    mut fetch: F,
) -> anyhow::Result<()>
where
    F: FnMut(&str) -> anyhow::Result<String>,
{
    let bar = ProgressBar::new(collection.features.len() as u64);
    for feature in collection.features.iter_mut() {
        let url = string_property(feature, &options.data_url_property)?;
        let csv_text = fetch(&url)?;
        let temperature =
            match timeseries::latest_column_value(&csv_text, &options.temperature_column)? {
                Some(value) => value,
                None => NOT_AVAILABLE.to_string(),
            };
        rewrite_properties(feature, &options.station_name_property, temperature)?;
        bar.inc(1);
    }
    Ok(())
}

/// Replace all of a feature's properties with exactly `name` and
/// `temperature`. `name` is copied verbatim from `name_property`; the
/// original properties are discarded.
pub fn rewrite_properties(
    feature: &mut Feature,
    name_property: &str,
    temperature: String,
) -> anyhow::Result<()> {
    let name = string_property(feature, name_property)?;
    let mut properties = JsonObject::new();
    properties.insert("name".to_string(), JsonValue::from(name));
    properties.insert("temperature".to_string(), JsonValue::from(temperature));
    feature.properties = Some(properties);
    Ok(())
}

fn string_property(feature: &Feature, property: &str) -> anyhow::Result<String> {
    let value = feature
        .property(property)
        .ok_or_else(|| anyhow!("Feature has no '{}' property", property))?;
    match value.as_str() {
        Some(value) => Ok(value.to_string()),
        None => Err(anyhow!("Property '{}' is not a string", property)),
    }
}
