//! Toast notifications and the background-load indicator.

use eframe::egui;

use crate::app::LunaStoryApp;
use crate::state::LoadingState;
use crate::ui::rgb;

/// Seconds a toast stays on screen
const TOAST_SECONDS: u64 = 3;

impl LunaStoryApp {
    /// Render the current toast (or the loading indicator) in the bottom right corner
    pub fn render_toast(&mut self, ctx: &egui::Context) {
        let margin = 20.0;
        let font_size = self.scaled_font(14.0);

        if let LoadingState::Loading(filename) = &self.loading_state {
            egui::Area::new(egui::Id::new("loading_indicator"))
                .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-margin, -margin))
                .order(egui::Order::Foreground)
                .show(ctx, |ui| {
                    egui::Frame::NONE
                        .fill(ui.visuals().extreme_bg_color)
                        .corner_radius(8)
                        .inner_margin(egui::Margin::symmetric(16, 12))
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.spinner();
                                ui.label(
                                    egui::RichText::new(format!("Loading {}...", filename))
                                        .size(font_size),
                                );
                            });
                        });
                });
            return;
        }

        let Some((message, time, toast_type)) = &self.toast_message else {
            return;
        };

        if time.elapsed().as_secs() >= TOAST_SECONDS {
            self.toast_message = None;
            return;
        }

        egui::Area::new(egui::Id::new("toast"))
            .anchor(egui::Align2::RIGHT_BOTTOM, egui::vec2(-margin, -margin))
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::NONE
                    .fill(rgb(toast_type.color()))
                    .corner_radius(8)
                    .inner_margin(egui::Margin::symmetric(16, 12))
                    .shadow(egui::epaint::Shadow {
                        offset: [2, 2],
                        blur: 8,
                        spread: 0,
                        color: egui::Color32::from_black_alpha(60),
                    })
                    .show(ui, |ui| {
                        ui.set_min_width(200.0);
                        ui.set_max_width(400.0);
                        ui.label(
                            egui::RichText::new(message)
                                .color(rgb(toast_type.text_color()))
                                .size(font_size),
                        );
                    });
            });

        // Keep repainting so the toast disappears on time
        ctx.request_repaint_after(std::time::Duration::from_millis(250));
    }
}
