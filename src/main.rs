#![warn(clippy::all)]

//! Street Glow - an interactive street network map.
//!
//! Street centerlines are loaded from GeoJSON, projected from a fixed
//! bounding box onto the canvas, and re-colored every time the pointer
//! moves: segments glow red near the pointer and fade to black with
//! distance.

mod config;
mod error;
mod events;
mod geo;
mod loader;
mod renderer;
mod state;
mod surface;
mod ui;

use config::MapConfig;
use eframe::egui;
use events::EventQueue;
use loader::StreetLoadChannel;
use renderer::StreetCanvas;
use state::AppState;

// Native entry point
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = match MapConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let native_options = eframe::NativeOptions::default();

    eframe::run_native(
        "Street Glow",
        native_options,
        Box::new(|cc| Ok(Box::new(StreetGlowApp::new(cc, config)))),
    )
}

// WASM entry point - main is not called on wasm32
#[cfg(target_arch = "wasm32")]
fn main() {}

/// Entry point for the WASM application.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub async fn start() {
    use eframe::wasm_bindgen::JsCast as _;

    // Redirect `log` messages to `console.log`:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let config = MapConfig::load().unwrap_or_else(|e| {
        log::warn!("Invalid configuration, using defaults: {}", e);
        MapConfig::default()
    });

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async move {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document to attach to");
            return;
        };

        let Some(canvas) = document
            .get_element_by_id("street_canvas")
            .and_then(|e| e.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            log::error!("Failed to find canvas element #street_canvas");
            return;
        };

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(StreetGlowApp::new(cc, config)))),
            )
            .await;

        // Remove the loading text once the app has loaded:
        if let Some(loading_text) = document.get_element_by_id("loading_text") {
            match start_result {
                Ok(_) => {
                    loading_text.remove();
                }
                Err(e) => {
                    loading_text.set_inner_html(
                        "<p>The app has crashed. See the developer console for details.</p>",
                    );
                    log::error!("Failed to start eframe: {e:?}");
                }
            }
        }
    });
}

/// Main application state and logic.
pub struct StreetGlowApp {
    /// Application state containing all sub-states
    state: AppState,

    /// Events collected during the current frame
    events: EventQueue,

    /// Channel for the async street data load
    loader: StreetLoadChannel,

    /// Rasterized street layer and its texture
    street_canvas: StreetCanvas,
}

impl StreetGlowApp {
    /// Creates the app and starts loading the street data.
    pub fn new(cc: &eframe::CreationContext<'_>, config: MapConfig) -> Self {
        let state = AppState::new(&config);
        let loader = StreetLoadChannel::new();
        loader.load(cc.egui_ctx.clone(), config.data_source.clone());

        Self {
            state,
            events: EventQueue::new(),
            loader,
            street_canvas: StreetCanvas::new(),
        }
    }
}

impl eframe::App for StreetGlowApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(result) = self.loader.try_recv() {
            self.events.push(result.into());
        }

        ui::render_top_bar(ctx, &self.state);
        ui::render_canvas(
            ctx,
            &mut self.state,
            &mut self.events,
            &mut self.street_canvas,
        );
    }
}
