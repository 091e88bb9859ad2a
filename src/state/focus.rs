//! Pointer focus driving the street glow.

use eframe::egui::Pos2;

/// Last known pointer position on the map canvas, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FocusPoint(Option<Pos2>);

impl FocusPoint {
    pub fn unset() -> Self {
        Self(None)
    }

    pub fn at(pos: Pos2) -> Self {
        Self(Some(pos))
    }

    pub fn position(&self) -> Option<Pos2> {
        self.0
    }

    /// Screen distance from the focus to `point`; infinite when unset.
    pub fn distance_to(&self, point: Pos2) -> f32 {
        self.0.map_or(f32::INFINITY, |focus| focus.distance(point))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_focus_is_infinitely_far() {
        let focus = FocusPoint::unset();

        assert!(focus.position().is_none());
        assert_eq!(focus.distance_to(Pos2::ZERO), f32::INFINITY);
    }

    #[test]
    fn test_distance_is_euclidean() {
        let focus = FocusPoint::at(Pos2::new(3.0, 0.0));

        assert!((focus.distance_to(Pos2::new(0.0, 4.0)) - 5.0).abs() < 1e-6);
    }
}
