//! Welcome screen shown until market data is loaded.

use eframe::egui;

use crate::app::LunaStoryApp;
use crate::state::{LoadingState, DEFAULT_DATA_FILE, PRICE_LINE_COLOR, SUPPORTED_EXTENSIONS};
use crate::ui::rgb;

impl LunaStoryApp {
    /// Title plus a drop zone for the market data file
    pub fn render_welcome(&mut self, ui: &mut egui::Ui) {
        let accent = rgb(PRICE_LINE_COLOR);
        let card_bg = egui::Color32::from_rgb(240, 240, 236);
        let text_gray = egui::Color32::from_rgb(110, 110, 110);
        let is_loading = matches!(self.loading_state, LoadingState::Loading(_));

        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.2);

            ui.heading(
                egui::RichText::new("The Rise and Fall of LUNA and UST")
                    .size(self.scaled_font(26.0))
                    .strong(),
            );
            ui.add_space(24.0);

            egui::Frame::NONE
                .fill(card_bg)
                .corner_radius(12)
                .inner_margin(24.0)
                .show(ui, |ui| {
                    ui.set_max_width(360.0);

                    ui.vertical_centered(|ui| {
                        if is_loading {
                            ui.spinner();
                            return;
                        }

                        let button = egui::Button::new(
                            egui::RichText::new("Select market data")
                                .color(egui::Color32::WHITE)
                                .size(self.scaled_font(14.0)),
                        )
                        .fill(accent)
                        .corner_radius(6);

                        let response = ui.add(button);
                        if response.hovered() {
                            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                        }
                        if response.clicked() {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("Market Data", SUPPORTED_EXTENSIONS)
                                .pick_file()
                            {
                                let story = self.settings.last_story_file.clone();
                                self.start_loading(path, story);
                            }
                        }

                        ui.add_space(10.0);
                        ui.label(
                            egui::RichText::new("or drop a file here")
                                .color(text_gray)
                                .size(self.scaled_font(13.0)),
                        );
                        ui.add_space(10.0);
                        ui.label(
                            egui::RichText::new(format!(
                                "CoinGecko market_chart JSON (prices, market_caps, total_volumes). \
                                 Looked up at {} on startup.",
                                DEFAULT_DATA_FILE
                            ))
                            .color(text_gray)
                            .size(self.scaled_font(11.0)),
                        );
                    });
                });
        });
    }
}
