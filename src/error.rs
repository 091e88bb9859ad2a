//! Error types for loading street data and configuration.

use thiserror::Error;

/// Failure while fetching or parsing the street network.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The data file could not be read from disk.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The browser fetch failed or returned a non-success status.
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// The payload is not valid JSON.
    #[error("failed to parse GeoJSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Valid JSON, but neither a FeatureCollection nor a Feature.
    #[error("expected a GeoJSON FeatureCollection, found {0}")]
    NotAFeatureCollection(String),
}

/// Failure while loading or validating [`crate::config::MapConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[source] serde_json::Error),

    /// The bounding box has zero or negative width or height.
    #[error(
        "degenerate bounding box: lng {min_lng}..{max_lng}, lat {min_lat}..{max_lat}"
    )]
    DegenerateBounds {
        min_lng: f64,
        min_lat: f64,
        max_lng: f64,
        max_lat: f64,
    },

    #[error("invalid render style: {0}")]
    InvalidStyle(&'static str),
}
