//! Surface double that records every call, for renderer tests.

use super::Surface;
use eframe::egui::{Color32, Pos2};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear,
    LineWidth(f32),
    BeginPath,
    StrokeColor(Color32),
    LineTo(Pos2),
    Stroke,
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Points passed to `line_to`, grouped per stroked path.
    pub fn stroked_paths(&self) -> Vec<Vec<(Pos2, Color32)>> {
        let mut paths = Vec::new();
        let mut current = Vec::new();
        let mut color = Color32::TRANSPARENT;

        for call in &self.calls {
            match call {
                DrawCall::BeginPath => current.clear(),
                DrawCall::StrokeColor(c) => color = *c,
                DrawCall::LineTo(p) => current.push((*p, color)),
                DrawCall::Stroke => paths.push(std::mem::take(&mut current)),
                DrawCall::Clear | DrawCall::LineWidth(_) => {}
            }
        }

        paths
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn set_line_width(&mut self, width: f32) {
        self.calls.push(DrawCall::LineWidth(width));
    }

    fn begin_path(&mut self) {
        self.calls.push(DrawCall::BeginPath);
    }

    fn set_stroke_color(&mut self, color: Color32) {
        self.calls.push(DrawCall::StrokeColor(color));
    }

    fn line_to(&mut self, pos: Pos2) {
        self.calls.push(DrawCall::LineTo(pos));
    }

    fn stroke(&mut self) {
        self.calls.push(DrawCall::Stroke);
    }
}
