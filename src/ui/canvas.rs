//! Central canvas UI: street map area.

use super::colors;
use crate::events::{AppEvent, EventQueue};
use crate::geo::Viewport;
use crate::renderer::StreetCanvas;
use crate::state::AppState;
use eframe::egui::{self, Rect, RichText, Sense, Vec2};

/// Render the street map, feeding pointer and size changes through `events`.
pub fn render_canvas(
    ctx: &egui::Context,
    state: &mut AppState,
    events: &mut EventQueue,
    street_canvas: &mut StreetCanvas,
) {
    egui::CentralPanel::default()
        .frame(egui::Frame::new().fill(colors::canvas::BACKGROUND))
        .show(ctx, |ui| {
            let available_size = ui.available_size();

            // Allocate the full available space for the canvas
            let (response, painter) = ui.allocate_painter(available_size, Sense::hover());
            let rect = response.rect;

            events.push(AppEvent::Resized(Viewport::new(rect.width(), rect.height())));

            // Focus is canvas-relative; it is kept when the pointer leaves
            if let Some(pos) = response.hover_pos() {
                events.push(AppEvent::FocusMoved((pos - rect.min).to_pos2()));
            }

            if events.dispatch(state) {
                street_canvas.redraw(ctx, state);
            }

            painter.rect_filled(rect, 0.0, colors::canvas::BACKGROUND);
            street_canvas.paint(&painter, rect);

            draw_overlay_info(ui, &rect, state);
        });
}

fn draw_overlay_info(ui: &mut egui::Ui, rect: &Rect, state: &AppState) {
    let overlay_pos = rect.left_top() + Vec2::new(10.0, 10.0);
    let overlay_rect = Rect::from_min_size(overlay_pos, Vec2::new(220.0, 60.0));

    let focus_text = match state.focus.position() {
        Some(pos) => {
            let coord = state.projection.screen_to_geo(pos);
            format!(
                "Focus: {:.0},{:.0} ({:.5}, {:.5})",
                pos.x, pos.y, coord.y, coord.x
            )
        }
        None => "Focus: -".to_string(),
    };

    ui.scope_builder(egui::UiBuilder::new().max_rect(overlay_rect), |ui| {
        ui.vertical(|ui| {
            ui.label(
                RichText::new(format!("Streets: {}", state.streets.len()))
                    .monospace()
                    .size(12.0)
                    .color(colors::canvas::OVERLAY_TEXT),
            );
            ui.label(
                RichText::new(focus_text)
                    .monospace()
                    .size(12.0)
                    .color(colors::canvas::OVERLAY_TEXT),
            );
        });
    });
}
