//! Top bar UI: app title, load status and render stats.

use super::colors;
use crate::state::{AppState, LoadState};
use eframe::egui::{self, Color32, RichText};

pub fn render_top_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::top("top_bar")
        .exact_height(36.0)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.label(
                    RichText::new("Street Glow")
                        .strong()
                        .size(16.0)
                        .color(Color32::WHITE),
                );

                ui.separator();

                let status_color = match state.load_state {
                    LoadState::Failed(_) => colors::ui::ERROR,
                    _ => Color32::GRAY,
                };
                let status = ui.label(
                    RichText::new(&state.status_message)
                        .size(13.0)
                        .color(status_color),
                );
                if let LoadState::Failed(reason) = &state.load_state {
                    status.on_hover_text(reason);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        RichText::new(state.render_stats.format_summary())
                            .monospace()
                            .size(11.0)
                            .color(colors::ui::VALUE),
                    );
                    ui.label(RichText::new("Render:").size(11.0).color(colors::ui::LABEL));
                });
            });
        });
}
