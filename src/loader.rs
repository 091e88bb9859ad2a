//! Async street data loading with cross-platform support.
//!
//! Uses channel-based communication to bridge the async load
//! with egui's synchronous update loop.

use crate::error::LoadError;
use crate::geo::{parse_streets, StreetFeature};
use eframe::egui;
use std::sync::mpsc::{channel, Receiver, Sender};

/// Outcome of one load request.
pub type LoadResult = Result<Vec<StreetFeature>, LoadError>;

/// Channel-based loader for the street GeoJSON.
///
/// Reading and parsing happen off the update loop; the result is sent
/// through the channel and a repaint is requested so the next frame
/// picks it up. Failed loads are reported once and never retried.
pub struct StreetLoadChannel {
    sender: Sender<LoadResult>,
    receiver: Receiver<LoadResult>,
}

impl Default for StreetLoadChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl StreetLoadChannel {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self { sender, receiver }
    }

    /// Spawns a load of `source`, a file path on native builds.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(&self, ctx: egui::Context, source: String) {
        let sender = self.sender.clone();

        std::thread::spawn(move || {
            log::info!("Loading streets from {}", source);
            let result = load_streets_from_file(&source);
            let _ = sender.send(result);
            ctx.request_repaint();
        });
    }

    /// Spawns a load of `source`, a URL fetched relative to the page on web builds.
    #[cfg(target_arch = "wasm32")]
    pub fn load(&self, ctx: egui::Context, source: String) {
        let sender = self.sender.clone();

        wasm_bindgen_futures::spawn_local(async move {
            log::info!("Fetching streets from {}", source);
            let result = match fetch_text(&source).await {
                Ok(text) => parse_streets(&text),
                Err(e) => Err(e),
            };
            let _ = sender.send(result);
            ctx.request_repaint();
        });
    }

    /// Non-blocking check for a completed load.
    ///
    /// Returns Some(result) if a load finished, None if nothing is ready yet.
    pub fn try_recv(&self) -> Option<LoadResult> {
        self.receiver.try_recv().ok()
    }
}

/// Reads and parses a GeoJSON file from disk.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_streets_from_file(path: &str) -> LoadResult {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_string(),
        source,
    })?;
    parse_streets(&text)
}

/// Fetches a URL and returns the body as text.
#[cfg(target_arch = "wasm32")]
async fn fetch_text(url: &str) -> Result<String, LoadError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let fetch_error = |reason: String| LoadError::Fetch {
        url: url.to_string(),
        reason,
    };

    let window = web_sys::window().ok_or_else(|| fetch_error("no window".to_string()))?;

    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| fetch_error(format!("{:?}", e)))?;
    let response: web_sys::Response = response
        .dyn_into()
        .map_err(|_| fetch_error("fetch did not return a Response".to_string()))?;

    if !response.ok() {
        return Err(fetch_error(format!("HTTP {}", response.status())));
    }

    let body = response
        .text()
        .map_err(|e| fetch_error(format!("{:?}", e)))?;
    let text = JsFuture::from(body)
        .await
        .map_err(|e| fetch_error(format!("{:?}", e)))?;

    text.as_string()
        .ok_or_else(|| fetch_error("response body is not text".to_string()))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("street-glow-{}.geojson", std::process::id()));
        std::fs::write(
            &path,
            r#"{ "type": "FeatureCollection", "features": [
                { "type": "Feature", "properties": { "RDNAME": "Cass Ave" },
                  "geometry": { "type": "LineString", "coordinates": [[-83.05, 42.33], [-83.05, 42.335]] } }
            ] }"#,
        )
        .unwrap();

        let streets = load_streets_from_file(path.to_str().unwrap()).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(streets.len(), 1);
        assert_eq!(streets[0].name, "Cass Ave");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_streets_from_file("/nonexistent/street-glow/streets.geojson");

        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[test]
    fn test_channel_delivers_result() {
        let channel = StreetLoadChannel::new();
        assert!(channel.try_recv().is_none());

        channel.load(egui::Context::default(), "/nonexistent/streets.geojson".to_string());

        let mut result = None;
        for _ in 0..200 {
            result = channel.try_recv();
            if result.is_some() {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(10));
        }

        assert!(matches!(result, Some(Err(LoadError::Io { .. }))));
    }
}
