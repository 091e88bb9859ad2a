//! Application events and the dispatch queue.
//!
//! Pointer, resize and loader results are queued during a frame and applied
//! to [`AppState`] in arrival order before the street layer is redrawn, so a
//! redraw always sees the latest focus and fully loaded data.

use crate::error::LoadError;
use crate::geo::{StreetFeature, Viewport};
use crate::state::AppState;
use eframe::egui::Pos2;
use std::collections::VecDeque;

/// Something that changed the inputs to the street layer.
#[derive(Debug)]
pub enum AppEvent {
    /// Pointer moved to a canvas-relative position.
    FocusMoved(Pos2),
    /// Canvas size changed.
    Resized(Viewport),
    /// Street data finished loading.
    StreetsLoaded(Vec<StreetFeature>),
    /// Street data could not be loaded.
    LoadFailed(LoadError),
}

impl From<Result<Vec<StreetFeature>, LoadError>> for AppEvent {
    fn from(result: Result<Vec<StreetFeature>, LoadError>) -> Self {
        match result {
            Ok(streets) => AppEvent::StreetsLoaded(streets),
            Err(e) => AppEvent::LoadFailed(e),
        }
    }
}

/// FIFO of pending events for the current frame.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<AppEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: AppEvent) {
        self.events.push_back(event);
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Applies all pending events in order. Returns true if any requested a redraw.
    pub fn dispatch(&mut self, state: &mut AppState) -> bool {
        let mut needs_redraw = false;
        while let Some(event) = self.events.pop_front() {
            needs_redraw |= state.apply(event);
        }
        needs_redraw
    }
}
