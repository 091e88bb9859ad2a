//! Software RGBA surface that is uploaded to the GPU as a texture.

use super::Surface;
use crate::geo::Viewport;
use eframe::egui::{Color32, ColorImage, Pos2};

/// CPU-side pixel buffer with thick-line path stroking.
///
/// Each piece of a stroked path is filled with the stroke color that was
/// active when the piece's end point was added, so a path built with changing
/// colors renders as a gradient. Joins and caps are round.
pub struct RasterSurface {
    size: [usize; 2],
    pixels: Vec<Color32>,
    line_width: f32,
    stroke_color: Color32,
    path: Vec<(Pos2, Color32)>,
}

impl RasterSurface {
    /// Creates a transparent surface of `[width, height]` pixels.
    pub fn new(size: [usize; 2]) -> Self {
        Self {
            size,
            pixels: vec![Color32::TRANSPARENT; size[0] * size[1]],
            line_width: 1.0,
            stroke_color: Color32::BLACK,
            path: Vec::new(),
        }
    }

    pub fn for_viewport(viewport: Viewport) -> Self {
        Self::new(pixel_size(viewport))
    }

    /// Reallocates the buffer if the viewport size changed. Returns true on change.
    pub fn resize(&mut self, viewport: Viewport) -> bool {
        let size = pixel_size(viewport);
        if size == self.size {
            return false;
        }
        self.size = size;
        self.pixels = vec![Color32::TRANSPARENT; size[0] * size[1]];
        true
    }

    #[allow(dead_code)]
    pub fn size(&self) -> [usize; 2] {
        self.size
    }

    #[allow(dead_code)]
    pub fn pixels(&self) -> &[Color32] {
        &self.pixels
    }

    /// Returns the pixel at (x, y), or `None` outside the surface.
    #[allow(dead_code)]
    pub fn pixel(&self, x: usize, y: usize) -> Option<Color32> {
        if x >= self.size[0] || y >= self.size[1] {
            return None;
        }
        self.pixels.get(y * self.size[0] + x).copied()
    }

    /// Converts the buffer into an image ready for texture upload.
    pub fn to_color_image(&self) -> ColorImage {
        let bytes: Vec<u8> = self.pixels.iter().flat_map(|c| c.to_array()).collect();
        ColorImage::from_rgba_premultiplied(self.size, &bytes)
    }

    /// Fills every pixel within half the line width of `a`-`b`.
    fn fill_segment(&mut self, a: Pos2, b: Pos2, color: Color32) {
        let radius = self.line_width / 2.0;
        if radius <= 0.0 || !a.is_finite() || !b.is_finite() {
            return;
        }
        let [width, height] = self.size;
        if width == 0 || height == 0 {
            return;
        }

        let x0 = ((a.x.min(b.x) - radius).floor() as i64).max(0);
        let x1 = ((a.x.max(b.x) + radius).ceil() as i64).min(width as i64 - 1);
        let y0 = ((a.y.min(b.y) - radius).floor() as i64).max(0);
        let y1 = ((a.y.max(b.y) + radius).ceil() as i64).min(height as i64 - 1);
        if x0 > x1 || y0 > y1 {
            return;
        }

        let ab = b - a;
        let len_sq = ab.length_sq();
        let radius_sq = radius * radius;

        for y in y0..=y1 {
            let row = y as usize * width;
            for x in x0..=x1 {
                let center = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
                let t = if len_sq > 0.0 {
                    ((center - a).dot(ab) / len_sq).clamp(0.0, 1.0)
                } else {
                    0.0
                };
                let closest = a + ab * t;
                if (center - closest).length_sq() <= radius_sq {
                    self.pixels[row + x as usize] = color;
                }
            }
        }
    }
}

impl Surface for RasterSurface {
    fn clear(&mut self) {
        self.pixels.fill(Color32::TRANSPARENT);
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn set_stroke_color(&mut self, color: Color32) {
        self.stroke_color = color;
    }

    fn line_to(&mut self, pos: Pos2) {
        self.path.push((pos, self.stroke_color));
    }

    fn stroke(&mut self) {
        let path = std::mem::take(&mut self.path);
        for pair in path.windows(2) {
            let (start, _) = pair[0];
            let (end, color) = pair[1];
            self.fill_segment(start, end, color);
        }
        self.path = path;
    }
}

fn pixel_size(viewport: Viewport) -> [usize; 2] {
    [
        viewport.width.round().max(1.0) as usize,
        viewport.height.round().max(1.0) as usize,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horizontal_stroke(surface: &mut RasterSurface, color: Color32) {
        surface.set_line_width(4.0);
        surface.begin_path();
        surface.set_stroke_color(color);
        surface.line_to(Pos2::new(2.0, 10.0));
        surface.line_to(Pos2::new(18.0, 10.0));
        surface.stroke();
    }

    #[test]
    fn test_stroke_covers_line_width() {
        let mut surface = RasterSurface::new([20, 20]);
        horizontal_stroke(&mut surface, Color32::RED);

        assert_eq!(surface.pixel(10, 9), Some(Color32::RED));
        assert_eq!(surface.pixel(10, 10), Some(Color32::RED));
        assert_eq!(surface.pixel(10, 4), Some(Color32::TRANSPARENT));
        assert_eq!(surface.pixel(10, 15), Some(Color32::TRANSPARENT));
    }

    #[test]
    fn test_single_point_path_draws_nothing() {
        let mut surface = RasterSurface::new([10, 10]);
        surface.set_line_width(8.0);
        surface.begin_path();
        surface.set_stroke_color(Color32::RED);
        surface.line_to(Pos2::new(5.0, 5.0));
        surface.stroke();

        assert!(surface.pixels().iter().all(|c| *c == Color32::TRANSPARENT));
    }

    #[test]
    fn test_piece_takes_color_of_its_end_point() {
        let mut surface = RasterSurface::new([30, 10]);
        surface.set_line_width(2.0);
        surface.begin_path();
        surface.set_stroke_color(Color32::BLUE);
        surface.line_to(Pos2::new(0.0, 5.0));
        surface.set_stroke_color(Color32::RED);
        surface.line_to(Pos2::new(10.0, 5.0));
        surface.set_stroke_color(Color32::GREEN);
        surface.line_to(Pos2::new(30.0, 5.0));
        surface.stroke();

        assert_eq!(surface.pixel(5, 5), Some(Color32::RED));
        assert_eq!(surface.pixel(20, 5), Some(Color32::GREEN));
    }

    #[test]
    fn test_clear_and_clipping() {
        let mut surface = RasterSurface::new([20, 20]);
        surface.set_line_width(6.0);
        surface.begin_path();
        surface.line_to(Pos2::new(-50.0, -50.0));
        surface.line_to(Pos2::new(70.0, 70.0));
        surface.stroke();

        assert_eq!(surface.pixel(10, 10), Some(Color32::BLACK));

        surface.clear();
        assert!(surface.pixels().iter().all(|c| *c == Color32::TRANSPARENT));
    }

    #[test]
    fn test_non_finite_points_ignored() {
        let mut surface = RasterSurface::new([10, 10]);
        surface.set_line_width(8.0);
        surface.begin_path();
        surface.line_to(Pos2::new(f32::NAN, 5.0));
        surface.line_to(Pos2::new(5.0, f32::INFINITY));
        surface.stroke();

        assert!(surface.pixels().iter().all(|c| *c == Color32::TRANSPARENT));
    }

    #[test]
    fn test_resize_reports_change() {
        let mut surface = RasterSurface::for_viewport(Viewport::new(100.0, 50.0));
        assert_eq!(surface.size(), [100, 50]);

        assert!(!surface.resize(Viewport::new(100.2, 49.8)));
        assert!(surface.resize(Viewport::new(64.0, 64.0)));
        assert_eq!(surface.size(), [64, 64]);
        assert_eq!(surface.pixels().len(), 64 * 64);
        assert_eq!(surface.to_color_image().size, [64, 64]);
    }
}
