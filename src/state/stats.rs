//! Render statistics for the top bar.

use crate::geo::RenderSummary;
use std::time::Duration;

/// Counters from the most recent redraw.
#[derive(Default, Clone)]
pub struct RenderStats {
    /// Wall time of the last redraw in milliseconds.
    pub last_render_ms: Option<f64>,

    /// Segments drawn in the last redraw.
    pub segments: usize,

    /// Color samples evaluated in the last redraw.
    pub samples: usize,

    /// Total redraws this session.
    pub frames_rendered: u64,
}

impl RenderStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome of one redraw.
    pub fn record(&mut self, summary: RenderSummary, elapsed: Duration) {
        self.last_render_ms = Some(elapsed.as_secs_f64() * 1000.0);
        self.segments = summary.segments;
        self.samples = summary.samples;
        self.frames_rendered += 1;
    }

    /// Format stats for display (e.g., "1,204 seg · 88,310 px · 4.2ms").
    pub fn format_summary(&self) -> String {
        match self.last_render_ms {
            Some(ms) => format!(
                "{} seg · {} px · {:.1}ms",
                format_count(self.segments),
                format_count(self.samples),
                ms
            ),
            None => "-".to_string(),
        }
    }
}

/// Format a count with thousands separators.
fn format_count(count: usize) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
