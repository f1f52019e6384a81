//! Menu bar UI components (File, Story, View, Help menus).

use eframe::egui;

use crate::app::LunaStoryApp;
use crate::state::{DetailMode, FontScale, LoadingState, Page, SUPPORTED_EXTENSIONS};
use crate::story::EventId;

impl LunaStoryApp {
    /// Render the application menu bar
    pub fn render_menu_bar(&mut self, ui: &mut egui::Ui) {
        // Pre-compute scaled font sizes for use in closures
        let font_14 = self.scaled_font(14.0);
        let font_15 = self.scaled_font(15.0);

        egui::MenuBar::new().ui(ui, |ui| {
            ui.style_mut()
                .text_styles
                .insert(egui::TextStyle::Button, egui::FontId::proportional(font_15));

            // File menu
            ui.menu_button("File", |ui| {
                ui.set_min_width(200.0);
                menu_item_fonts(ui, font_14);

                let is_loading = matches!(self.loading_state, LoadingState::Loading(_));
                let has_data = self.loaded.is_some();

                if ui
                    .add_enabled(!is_loading, egui::Button::new("Open Market Data..."))
                    .clicked()
                {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("Market Data", SUPPORTED_EXTENSIONS)
                        .pick_file()
                    {
                        let story = self.settings.last_story_file.clone();
                        self.start_loading(path, story);
                    }
                    ui.close();
                }

                if ui
                    .add_enabled(
                        !is_loading && has_data,
                        egui::Button::new("Open Story File..."),
                    )
                    .clicked()
                {
                    if let Some(path) = rfd::FileDialog::new()
                        .add_filter("Story", SUPPORTED_EXTENSIONS)
                        .pick_file()
                    {
                        self.reload_with_story(Some(path));
                    }
                    ui.close();
                }

                let using_file_story = self
                    .loaded
                    .as_ref()
                    .is_some_and(|l| l.story_path.is_some());
                if ui
                    .add_enabled(
                        !is_loading && using_file_story,
                        egui::Button::new("Use Built-in Story"),
                    )
                    .clicked()
                {
                    self.reload_with_story(None);
                    ui.close();
                }

                ui.separator();

                if ui.button("Quit").clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                    ui.close();
                }
            });

            // Story menu - same transitions as the on-chart buttons
            ui.menu_button("Story", |ui| {
                ui.set_min_width(180.0);
                menu_item_fonts(ui, font_14);

                let (primary_label, has_detail) = match &self.stepper {
                    Some(stepper) => (
                        stepper.primary_action().label(),
                        stepper.detail_action().is_some(),
                    ),
                    None => ("start", false),
                };
                let on_overview = self.page == Page::Overview;

                if ui
                    .add_enabled(
                        self.stepper.is_some() && on_overview,
                        egui::Button::new(primary_label),
                    )
                    .on_hover_text("\u{2192} / Space")
                    .clicked()
                {
                    self.advance_story();
                    ui.close();
                }

                if ui
                    .add_enabled(has_detail && on_overview, egui::Button::new("Details"))
                    .on_hover_text("D")
                    .clicked()
                {
                    self.activate_detail();
                    ui.close();
                }

                ui.separator();

                if ui
                    .add_enabled(self.stepper.is_some(), egui::Button::new("Start Over"))
                    .clicked()
                {
                    self.reset_story();
                    ui.close();
                }
            });

            // View menu - pages and display preferences
            ui.menu_button("View", |ui| {
                ui.set_min_width(200.0);
                menu_item_fonts(ui, font_14);

                section_label(ui, "Page", font_14);

                if ui
                    .radio(self.page == Page::Overview, "Overview")
                    .clicked()
                {
                    self.show_overview();
                    ui.close();
                }

                let events: Vec<EventId> = self
                    .loaded
                    .as_ref()
                    .map(|l| l.story.events().collect())
                    .unwrap_or_default();
                for event in events {
                    if ui
                        .radio(self.page == Page::Event(event), event.to_string())
                        .clicked()
                    {
                        self.open_event_page(event);
                        ui.close();
                    }
                }

                ui.separator();
                section_label(ui, "Details Button", font_14);

                for mode in DetailMode::all() {
                    if ui
                        .radio(self.settings.detail_mode == *mode, mode.name())
                        .clicked()
                    {
                        self.set_detail_mode(*mode);
                        ui.close();
                    }
                }

                ui.separator();
                section_label(ui, "Font Size", font_14);

                for scale in FontScale::all() {
                    if ui
                        .radio_value(&mut self.settings.font_scale, *scale, scale.name())
                        .clicked()
                    {
                        self.persist_settings();
                        ui.close();
                    }
                }
            });

            // Help menu
            ui.menu_button("Help", |ui| {
                ui.set_min_width(220.0);
                menu_item_fonts(ui, font_14);

                ui.label("\u{2192} / Space: next annotation");
                ui.label("D: toggle details");
                ui.label("Esc: back to overview");

                ui.separator();

                ui.label(
                    egui::RichText::new(format!("Version {}", env!("CARGO_PKG_VERSION")))
                        .color(egui::Color32::GRAY),
                );
            });
        });
    }
}

/// Dropdown items use the body font size
fn menu_item_fonts(ui: &mut egui::Ui, size: f32) {
    ui.style_mut()
        .text_styles
        .insert(egui::TextStyle::Button, egui::FontId::proportional(size));
    ui.style_mut()
        .text_styles
        .insert(egui::TextStyle::Body, egui::FontId::proportional(size));
}

fn section_label(ui: &mut egui::Ui, text: &str, size: f32) {
    ui.label(
        egui::RichText::new(text)
            .size(size)
            .color(egui::Color32::GRAY),
    );
}
