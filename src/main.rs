extern crate log;
pub mod geofile;
pub mod weather;

use crate::weather::download;
use crate::weather::enrich::{enrich_collection, EnrichOptions};
use anyhow::anyhow;
use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;
use std::{fs::read_to_string, path::Path};

/// Enrich a GeoJSON collection of weather stations with the latest
/// temperature reading from each station's CSV feed.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the input config file.
    #[arg(short, long)]
    config_filepath: String,
}

#[derive(Deserialize, Debug)]
struct Config {
    input_geojson_path: PathBuf,
    output_geojson_path: PathBuf,
    station_name_property: String,
    data_url_property: String,
    temperature_column: String,
}

fn run(config: &Config) -> anyhow::Result<()> {
    log::info!("Reading stations from {:?}", config.input_geojson_path);
    let mut collection = geofile::geojson::read_feature_collection(&config.input_geojson_path)?;
    log::info!("Read {} stations", collection.features.len());

    let client = download::build_client()?;
    let options = EnrichOptions {
        station_name_property: config.station_name_property.clone(),
        data_url_property: config.data_url_property.clone(),
        temperature_column: config.temperature_column.clone(),
    };
    log::info!("Fetching the latest reading for each station");
    enrich_collection(&mut collection, &options, |url| {
        download::fetch_delimited_text(&client, url)
    })?;

    log::info!(
        "Writing enriched stations to {:?}",
        config.output_geojson_path
    );
    geofile::geojson::write_feature_collection(&collection, &config.output_geojson_path)?;
    println!("GeoJSON updated successfully");
    Ok(())
}

fn try_main() -> anyhow::Result<()> {
    let args = Args::try_parse()?;
    if !Path::new(&args.config_filepath).exists() {
        return Err(anyhow!("Config file {} not found", &args.config_filepath));
    }
    let config_contents = read_to_string(args.config_filepath)?;
    let config: Config = serde_yaml::from_str(&config_contents)?;
    run(&config)
}

fn main() {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info")
    }
    env_logger::init();
    if let Err(e) = try_main() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1)
    }
}
