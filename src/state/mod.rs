//! Application state management.
//!
//! All mutable state lives in [`AppState`], owned by the app and changed
//! only through [`AppState::apply`] as events are dispatched.

mod focus;
mod stats;

pub use focus::FocusPoint;
pub use stats::RenderStats;

use crate::config::MapConfig;
use crate::events::AppEvent;
use crate::geo::{crop_to_bounds, MapProjection, RenderStyle, StreetFeature, Viewport};

/// Progress of the street data load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded,
    Failed(String),
}

/// Root application state.
pub struct AppState {
    /// Parsed street network (empty until loaded)
    pub streets: Vec<StreetFeature>,

    /// Pointer position on the canvas
    pub focus: FocusPoint,

    /// Bounding box and current canvas size
    pub projection: MapProjection,

    /// Glow falloff and stroke width
    pub style: RenderStyle,

    /// Whether loaded streets are cropped to the bounding box
    pub crop_to_bounds: bool,

    /// Where the street data comes from
    pub data_source: String,

    pub load_state: LoadState,

    /// Application status message displayed in top bar
    pub status_message: String,

    pub render_stats: RenderStats,
}

impl AppState {
    pub fn new(config: &MapConfig) -> Self {
        Self {
            streets: Vec::new(),
            focus: FocusPoint::unset(),
            projection: MapProjection::new(config.bounds, Viewport::default()),
            style: config.style,
            crop_to_bounds: config.crop_to_bounds,
            data_source: config.data_source.clone(),
            load_state: LoadState::Loading,
            status_message: format!("Loading {}...", config.data_source),
            render_stats: RenderStats::new(),
        }
    }

    /// Applies one event. Returns true if the street layer must be redrawn.
    pub fn apply(&mut self, event: AppEvent) -> bool {
        match event {
            AppEvent::FocusMoved(pos) => {
                let focus = FocusPoint::at(pos);
                if self.focus == focus {
                    return false;
                }
                self.focus = focus;
                true
            }
            AppEvent::Resized(viewport) => {
                if self.projection.viewport == viewport {
                    return false;
                }
                log::debug!("Viewport resized to {}x{}", viewport.width, viewport.height);
                self.projection.viewport = viewport;
                true
            }
            AppEvent::StreetsLoaded(streets) => {
                let total = streets.len();
                self.streets = if self.crop_to_bounds {
                    crop_to_bounds(streets, &self.projection.bounds)
                } else {
                    streets
                };
                if self.streets.len() < total {
                    log::info!(
                        "Cropped {} streets outside the bounding box",
                        total - self.streets.len()
                    );
                }

                let segments: usize = self.streets.iter().map(|s| s.segment_count()).sum();
                log::info!(
                    "Loaded {} streets ({} segments) from {}",
                    self.streets.len(),
                    segments,
                    self.data_source
                );
                self.load_state = LoadState::Loaded;
                self.status_message = format!("{} streets", self.streets.len());
                true
            }
            AppEvent::LoadFailed(error) => {
                log::error!("Failed to load streets from {}: {}", self.data_source, error);
                self.status_message = format!("Failed to load streets: {}", error);
                self.load_state = LoadState::Failed(error.to_string());
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadError;
    use crate::geo::{GeoBoundingBox, StreetGeometry};
    use eframe::egui::Pos2;
    use geo_types::Coord;

    fn test_state(crop: bool) -> AppState {
        let config = MapConfig {
            bounds: GeoBoundingBox::new(0.0, 0.0, 10.0, 10.0).unwrap(),
            crop_to_bounds: crop,
            ..Default::default()
        };
        AppState::new(&config)
    }

    fn streets() -> Vec<StreetFeature> {
        vec![
            StreetFeature::new(
                "Inside",
                StreetGeometry::Single(vec![Coord { x: 1.0, y: 1.0 }, Coord { x: 2.0, y: 2.0 }]),
            ),
            StreetFeature::new(
                "Far Away",
                StreetGeometry::Single(vec![Coord { x: 50.0, y: 50.0 }, Coord { x: 60.0, y: 50.0 }]),
            ),
        ]
    }

    #[test]
    fn test_initial_state() {
        let state = test_state(false);

        assert_eq!(state.load_state, LoadState::Loading);
        assert!(state.streets.is_empty());
        assert_eq!(state.focus, FocusPoint::unset());
    }

    #[test]
    fn test_focus_change_requests_redraw_once() {
        let mut state = test_state(false);

        assert!(state.apply(AppEvent::FocusMoved(Pos2::new(10.0, 20.0))));
        assert!(!state.apply(AppEvent::FocusMoved(Pos2::new(10.0, 20.0))));
        assert_eq!(state.focus.position(), Some(Pos2::new(10.0, 20.0)));
    }

    #[test]
    fn test_resize_updates_projection() {
        let mut state = test_state(false);

        assert!(state.apply(AppEvent::Resized(Viewport::new(640.0, 480.0))));
        assert!(!state.apply(AppEvent::Resized(Viewport::new(640.0, 480.0))));
        assert_eq!(state.projection.viewport, Viewport::new(640.0, 480.0));
    }

    #[test]
    fn test_streets_loaded() {
        let mut state = test_state(false);

        assert!(state.apply(AppEvent::StreetsLoaded(streets())));
        assert_eq!(state.load_state, LoadState::Loaded);
        assert_eq!(state.streets.len(), 2);
    }

    #[test]
    fn test_streets_loaded_with_crop() {
        let mut state = test_state(true);

        state.apply(AppEvent::StreetsLoaded(streets()));
        assert_eq!(state.streets.len(), 1);
        assert_eq!(state.streets[0].name, "Inside");
    }

    #[test]
    fn test_load_failure_is_reported() {
        let mut state = test_state(false);
        let error = LoadError::NotAFeatureCollection("Point".to_string());

        assert!(!state.apply(AppEvent::LoadFailed(error)));
        assert!(matches!(state.load_state, LoadState::Failed(_)));
        assert!(state.status_message.starts_with("Failed to load streets"));
        assert!(state.streets.is_empty());
    }
}
