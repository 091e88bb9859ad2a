//! Street network model, projection and rendering.
//!
//! This module loads street centerlines from GeoJSON, projects them from a
//! fixed geographic bounding box into screen space, and paints them with a
//! proximity glow around the focus point.

mod projection;
mod renderer;
mod street;

pub use projection::{GeoBoundingBox, MapProjection, Viewport};
pub use renderer::{render_streets, RenderStyle, RenderSummary};
pub use street::{crop_to_bounds, parse_streets, StreetFeature, StreetGeometry};
