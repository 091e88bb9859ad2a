//! Startup configuration.
//!
//! Native builds read an optional JSON file named by `STREET_GLOW_CONFIG`
//! and take the data source from the first command-line argument. Web
//! builds read overrides from the page's URL query string.

use crate::error::ConfigError;
use crate::geo::{GeoBoundingBox, RenderStyle};
use serde::{Deserialize, Serialize};

/// Environment variable naming the JSON config file.
pub const CONFIG_ENV: &str = "STREET_GLOW_CONFIG";

/// Settings fixed for the lifetime of the app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapConfig {
    /// GeoJSON file path (native) or URL (web)
    pub data_source: String,
    /// Geographic extent mapped onto the canvas
    pub bounds: GeoBoundingBox,
    /// Falloff distance and stroke width
    pub style: RenderStyle,
    /// Drop streets that do not touch `bounds` after loading
    pub crop_to_bounds: bool,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            data_source: "maps/cropped_detroit.geojson".to_string(),
            bounds: GeoBoundingBox::default(),
            style: RenderStyle::default(),
            crop_to_bounds: false,
        }
    }
}

impl MapConfig {
    /// Parses and validates a JSON config. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the bounding box and style constants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bounds.validate()?;

        if !(self.style.max_distance.is_finite() && self.style.max_distance > 0.0) {
            return Err(ConfigError::InvalidStyle("maxDistance must be positive"));
        }
        if !(self.style.line_width.is_finite() && self.style.line_width > 0.0) {
            return Err(ConfigError::InvalidStyle("lineWidth must be positive"));
        }

        Ok(())
    }

    /// Loads the config from the environment and command line.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = match std::env::var(CONFIG_ENV) {
            Ok(path) => {
                let json = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
                    path: path.clone(),
                    source,
                })?;
                log::info!("Loaded config from {}", path);
                Self::from_json(&json)?
            }
            Err(_) => Self::default(),
        };

        if let Some(source) = std::env::args().nth(1) {
            config.data_source = source;
        }

        config.validate()?;
        Ok(config)
    }

    /// Loads the config from the browser URL query string.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let search = web_sys::window()
            .and_then(|window| window.location().search().ok())
            .unwrap_or_default();
        config.apply_query(&search);

        config.validate()?;
        Ok(config)
    }

    /// Applies `data`, `crop` and `bbox` overrides from a URL query string.
    ///
    /// `bbox` is `minLng,minLat,maxLng,maxLat`. Unparseable values are ignored.
    pub fn apply_query(&mut self, search: &str) {
        let query = search.trim_start_matches('?');
        if query.is_empty() {
            return;
        }

        for pair in query.split('&') {
            let mut kv = pair.splitn(2, '=');
            let key = kv.next().unwrap_or("");
            let value = kv.next().unwrap_or("");
            match key {
                "data" if !value.is_empty() => self.data_source = value.to_string(),
                "crop" => self.crop_to_bounds = matches!(value, "" | "1" | "true"),
                "bbox" => match parse_bbox(value) {
                    Some(bounds) => self.bounds = bounds,
                    None => log::warn!("Ignoring invalid bbox parameter: {}", value),
                },
                _ => {}
            }
        }
    }
}

fn parse_bbox(value: &str) -> Option<GeoBoundingBox> {
    let parts: Vec<f64> = value
        .split(',')
        .map(|p| p.trim().parse().ok())
        .collect::<Option<_>>()?;

    match parts.as_slice() {
        [min_lng, min_lat, max_lng, max_lat] => {
            GeoBoundingBox::new(*min_lng, *min_lat, *max_lng, *max_lat).ok()
        }
        _ => None,
    }
}
