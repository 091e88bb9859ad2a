//! Street layer renderer and texture.
//!
//! The street network is rasterized on the CPU into a [`RasterSurface`] and
//! uploaded as an egui texture whenever the inputs change. Between changes
//! the existing texture is simply painted again.

use crate::geo::{render_streets, RenderSummary, Viewport};
use crate::state::AppState;
use crate::surface::RasterSurface;
use eframe::egui::{self, pos2, Color32, Painter, Rect, TextureHandle, TextureOptions};
use web_time::Instant;

/// Owns the raster surface and its GPU texture.
pub struct StreetCanvas {
    surface: RasterSurface,
    texture: Option<TextureHandle>,
}

impl Default for StreetCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl StreetCanvas {
    pub fn new() -> Self {
        Self {
            surface: RasterSurface::for_viewport(Viewport::default()),
            texture: None,
        }
    }

    /// Re-renders the streets for the current state and uploads the result.
    pub fn redraw(&mut self, ctx: &egui::Context, state: &mut AppState) -> RenderSummary {
        let start = Instant::now();

        self.surface.resize(state.projection.viewport);
        let summary = render_streets(
            &mut self.surface,
            &state.streets,
            state.focus,
            &state.projection,
            &state.style,
        );

        let image = self.surface.to_color_image();
        match &mut self.texture {
            Some(texture) => texture.set(image, TextureOptions::NEAREST),
            None => {
                self.texture = Some(ctx.load_texture("street_layer", image, TextureOptions::NEAREST))
            }
        }

        let elapsed = start.elapsed();
        state.render_stats.record(summary, elapsed);
        log::debug!(
            "Rendered {} segments / {} samples in {:.1}ms",
            summary.segments,
            summary.samples,
            elapsed.as_secs_f64() * 1000.0
        );

        summary
    }

    /// Paints the last uploaded texture stretched over `rect`.
    pub fn paint(&self, painter: &Painter, rect: Rect) {
        if let Some(texture) = &self.texture {
            painter.image(
                texture.id(),
                rect,
                Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0)),
                Color32::WHITE,
            );
        }
    }
}
