//! Drawing surfaces the street renderer paints onto.
//!
//! The renderer only speaks the small path-based [`Surface`] API, which
//! mirrors an immediate-mode 2D canvas: set a line width, build a path one
//! point at a time while changing the stroke color, then stroke it.

mod raster;
#[cfg(test)]
pub mod recording;

pub use raster::RasterSurface;

use eframe::egui::{Color32, Pos2};

/// Immediate-mode 2D drawing context.
pub trait Surface {
    /// Erases the whole surface to transparent.
    fn clear(&mut self);

    /// Sets the width used by subsequent strokes.
    fn set_line_width(&mut self, width: f32);

    /// Discards any pending path and starts a new one.
    fn begin_path(&mut self);

    /// Sets the color applied to points added after this call.
    fn set_stroke_color(&mut self, color: Color32);

    /// Extends the current path to `pos`. The first point only positions the pen.
    fn line_to(&mut self, pos: Pos2);

    /// Draws the current path.
    fn stroke(&mut self);
}
