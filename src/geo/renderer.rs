//! Street network rendering.
//!
//! Every segment is sampled once per screen pixel of length and each sample
//! is colored by its distance to the focus point, so long segments fade
//! smoothly as they pass near the pointer.

use super::{MapProjection, StreetFeature};
use crate::state::FocusPoint;
use crate::surface::Surface;
use eframe::egui::{Color32, Pos2};
use serde::{Deserialize, Serialize};

/// Fixed drawing constants for the street layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderStyle {
    /// Distance in pixels at which streets fade fully to black
    pub max_distance: f32,
    /// Stroke width for every segment
    pub line_width: f32,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            max_distance: 400.0,
            line_width: 8.0,
        }
    }
}

/// Counts from one render pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderSummary {
    pub segments: usize,
    pub samples: usize,
}

/// Maps a distance to the focus point onto a red intensity.
///
/// Linear falloff from pure red at 0 to black at `max_distance` and beyond.
/// Infinite distance (no focus) is black.
pub fn color_for(distance: f32, max_distance: f32) -> Color32 {
    let intensity = ((max_distance - distance) / max_distance).clamp(0.0, 1.0);
    // NaN casts to 0
    let red = (255.0 * intensity).floor() as u8;
    Color32::from_rgb(red, 0, 0)
}

/// Number of sample intervals for a segment of screen length `length`.
pub fn sample_count(length: f32) -> usize {
    if length.is_finite() {
        length.ceil() as usize
    } else {
        0
    }
}

/// Evenly spaced points from `start` to `end`, both included.
///
/// Yields `intervals + 1` points; with zero intervals only `start` is yielded.
pub fn sample_points(start: Pos2, end: Pos2, intervals: usize) -> impl Iterator<Item = Pos2> {
    (0..=intervals).map(move |j| {
        let t = if intervals == 0 {
            0.0
        } else {
            j as f32 / intervals as f32
        };
        start + (end - start) * t
    })
}

/// Clears `surface` and redraws every street for the current focus.
pub fn render_streets<S: Surface + ?Sized>(
    surface: &mut S,
    streets: &[StreetFeature],
    focus: FocusPoint,
    projection: &MapProjection,
    style: &RenderStyle,
) -> RenderSummary {
    let mut summary = RenderSummary::default();

    surface.clear();
    surface.set_line_width(style.line_width);

    for street in streets {
        for path in &street.paths {
            for pair in path.windows(2) {
                let start = projection.geo_to_screen(pair[0]);
                let end = projection.geo_to_screen(pair[1]);
                summary.samples += render_segment(surface, start, end, focus, style);
                summary.segments += 1;
            }
        }
    }

    summary
}

/// Draws one segment as a single path with per-sample colors. Returns the sample count.
fn render_segment<S: Surface + ?Sized>(
    surface: &mut S,
    start: Pos2,
    end: Pos2,
    focus: FocusPoint,
    style: &RenderStyle,
) -> usize {
    let intervals = sample_count(start.distance(end));
    let mut samples = 0;

    surface.begin_path();
    for point in sample_points(start, end, intervals) {
        let color = color_for(focus.distance_to(point), style.max_distance);
        surface.set_stroke_color(color);
        surface.line_to(point);
        samples += 1;
    }
    surface.stroke();

    samples
}
