//! Map projection and coordinate transformation.
//!
//! Handles converting between geographic coordinates (lon/lat) and
//! screen coordinates for rendering on the canvas.

use crate::error::ConfigError;
use eframe::egui::Pos2;
use geo_types::Coord;
use serde::{Deserialize, Serialize};

/// Rectangular geographic extent mapped onto the full viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoBoundingBox {
    pub min_lng: f64,
    pub min_lat: f64,
    pub max_lng: f64,
    pub max_lat: f64,
}

impl Default for GeoBoundingBox {
    fn default() -> Self {
        // Downtown Detroit
        Self {
            min_lng: -83.057379,
            min_lat: 42.329023,
            max_lng: -83.038781,
            max_lat: 42.336422,
        }
    }
}

impl GeoBoundingBox {
    /// Creates a bounding box, rejecting zero or negative extents.
    pub fn new(min_lng: f64, min_lat: f64, max_lng: f64, max_lat: f64) -> Result<Self, ConfigError> {
        let bounds = Self {
            min_lng,
            min_lat,
            max_lng,
            max_lat,
        };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Checks `min < max` on both axes. NaN edges fail the check.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_lng < self.max_lng && self.min_lat < self.max_lat {
            Ok(())
        } else {
            Err(ConfigError::DegenerateBounds {
                min_lng: self.min_lng,
                min_lat: self.min_lat,
                max_lng: self.max_lng,
                max_lat: self.max_lat,
            })
        }
    }

    pub fn width(&self) -> f64 {
        self.max_lng - self.min_lng
    }

    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Returns true if the coordinate lies inside or on the edge of the box.
    pub fn contains(&self, coord: Coord<f64>) -> bool {
        coord.x >= self.min_lng
            && coord.x <= self.max_lng
            && coord.y >= self.min_lat
            && coord.y <= self.max_lat
    }

    /// Returns true if the segment `a`-`b` touches the box.
    ///
    /// Liang-Barsky parametric clipping: the segment intersects when the
    /// entering parameter never exceeds the leaving one.
    pub fn intersects_segment(&self, a: Coord<f64>, b: Coord<f64>) -> bool {
        if self.contains(a) || self.contains(b) {
            return true;
        }

        let dx = b.x - a.x;
        let dy = b.y - a.y;
        let mut t_enter = 0.0_f64;
        let mut t_leave = 1.0_f64;

        let edges = [
            (-dx, a.x - self.min_lng),
            (dx, self.max_lng - a.x),
            (-dy, a.y - self.min_lat),
            (dy, self.max_lat - a.y),
        ];

        for (p, q) in edges {
            if p == 0.0 {
                if q < 0.0 {
                    return false;
                }
                continue;
            }
            let t = q / p;
            if p < 0.0 {
                t_enter = t_enter.max(t);
            } else {
                t_leave = t_leave.min(t);
            }
            if t_enter > t_leave {
                return false;
            }
        }

        true
    }
}

/// Drawing surface size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Projects (lon, lat) into the viewport.
///
/// Longitude maps linearly onto x. Latitude maps onto y with the axis
/// flipped, since screen rows grow downward.
pub fn project(lon: f64, lat: f64, bounds: &GeoBoundingBox, viewport: Viewport) -> Pos2 {
    let x = (lon - bounds.min_lng) / bounds.width() * viewport.width as f64;
    let y = (1.0 - (lat - bounds.min_lat) / bounds.height()) * viewport.height as f64;
    Pos2::new(x as f32, y as f32)
}

/// Map projection for converting geographic to screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapProjection {
    /// Geographic extent shown on screen
    pub bounds: GeoBoundingBox,
    /// Current surface size
    pub viewport: Viewport,
}

impl MapProjection {
    pub fn new(bounds: GeoBoundingBox, viewport: Viewport) -> Self {
        Self { bounds, viewport }
    }

    /// Converts geographic coordinates (x = lon, y = lat) to screen position.
    pub fn geo_to_screen(&self, coord: Coord<f64>) -> Pos2 {
        project(coord.x, coord.y, &self.bounds, self.viewport)
    }

    /// Converts screen position back to geographic coordinates (lon, lat).
    ///
    /// Used for the cursor readout; precision is limited by `f32` screen space.
    pub fn screen_to_geo(&self, pos: Pos2) -> Coord<f64> {
        let norm_x = pos.x as f64 / self.viewport.width as f64;
        let norm_y = pos.y as f64 / self.viewport.height as f64;

        Coord {
            x: self.bounds.min_lng + norm_x * self.bounds.width(),
            y: self.bounds.min_lat + (1.0 - norm_y) * self.bounds.height(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_bounds() -> GeoBoundingBox {
        GeoBoundingBox::new(0.0, 0.0, 10.0, 10.0).unwrap()
    }

    fn assert_pos(actual: Pos2, x: f32, y: f32) {
        assert!(
            (actual.x - x).abs() < 1e-4 && (actual.y - y).abs() < 1e-4,
            "expected ({x}, {y}), got {actual:?}"
        );
    }

    #[test]
    fn test_projection_corners_and_center() {
        let bounds = unit_bounds();
        let viewport = Viewport::new(100.0, 100.0);

        assert_pos(project(0.0, 0.0, &bounds, viewport), 0.0, 100.0);
        assert_pos(project(10.0, 10.0, &bounds, viewport), 100.0, 0.0);
        assert_pos(project(5.0, 5.0, &bounds, viewport), 50.0, 50.0);
    }

    #[test]
    fn test_projection_non_square_viewport() {
        let projection = MapProjection::new(unit_bounds(), Viewport::new(200.0, 50.0));

        assert_pos(projection.geo_to_screen(Coord { x: 2.5, y: 7.5 }), 50.0, 12.5);
    }

    #[test]
    fn test_default_bounds_span_viewport() {
        let bounds = GeoBoundingBox::default();
        let viewport = Viewport::new(1920.0, 1080.0);

        let top_left = project(bounds.min_lng, bounds.max_lat, &bounds, viewport);
        let bottom_right = project(bounds.max_lng, bounds.min_lat, &bounds, viewport);

        assert_pos(top_left, 0.0, 0.0);
        assert!((bottom_right.x - 1920.0).abs() < 0.01);
        assert!((bottom_right.y - 1080.0).abs() < 0.01);
    }

    #[test]
    fn test_screen_to_geo_inverts_projection() {
        let projection = MapProjection::new(unit_bounds(), Viewport::new(100.0, 100.0));
        let coord = projection.screen_to_geo(Pos2::new(25.0, 75.0));

        assert!((coord.x - 2.5).abs() < 1e-6);
        assert!((coord.y - 2.5).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_bounds_rejected() {
        assert!(GeoBoundingBox::new(1.0, 0.0, 1.0, 10.0).is_err());
        assert!(GeoBoundingBox::new(0.0, 5.0, 10.0, 4.0).is_err());
        assert!(GeoBoundingBox::new(f64::NAN, 0.0, 10.0, 10.0).is_err());
    }

    #[test]
    fn test_segment_intersection() {
        let bounds = unit_bounds();

        // Crosses the box with both endpoints outside
        assert!(bounds.intersects_segment(Coord { x: -5.0, y: 5.0 }, Coord { x: 15.0, y: 5.0 }));
        // One endpoint inside
        assert!(bounds.intersects_segment(Coord { x: 5.0, y: 5.0 }, Coord { x: 50.0, y: 50.0 }));
        // Passes beside the box
        assert!(!bounds.intersects_segment(Coord { x: -5.0, y: 11.0 }, Coord { x: 15.0, y: 11.0 }));
        // Diagonal that misses the corner
        assert!(!bounds.intersects_segment(Coord { x: 9.0, y: 12.0 }, Coord { x: 12.0, y: 9.0 }));
    }
}
