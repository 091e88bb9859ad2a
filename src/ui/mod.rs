//! UI modules for the Street Glow application.
//!
//! The UI is split into two panels:
//! - Top bar: Title, load status, and render stats
//! - Central canvas: Street map with pointer glow

mod canvas;
mod colors;
mod top_bar;

pub use canvas::render_canvas;
pub use top_bar::render_top_bar;
