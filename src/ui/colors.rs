//! Centralized color constants for the UI.

use eframe::egui::Color32;

/// General UI colors for labels and values.
pub mod ui {
    use super::Color32;

    /// Muted gray for stat labels.
    pub const LABEL: Color32 = Color32::from_rgb(100, 100, 100);
    /// Slightly brighter for stat values.
    pub const VALUE: Color32 = Color32::from_rgb(160, 160, 160);
    /// Failure indicator.
    pub const ERROR: Color32 = Color32::from_rgb(255, 80, 80);
}

/// Colors for the map canvas.
pub mod canvas {
    use super::Color32;

    /// Background behind the transparent street layer.
    pub const BACKGROUND: Color32 = Color32::WHITE;
    /// Overlay readout text.
    pub const OVERLAY_TEXT: Color32 = Color32::from_rgb(60, 60, 70);
}
