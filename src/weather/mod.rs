pub mod download;
pub mod enrich;
pub mod timeseries;
