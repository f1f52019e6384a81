//! On-chart stepper buttons.

use eframe::egui;

use crate::stepper::StoryView;
use crate::ui::chart::ChartFrame;
use crate::ui::rgb;

/// Which stepper buttons were clicked this frame
#[derive(Clone, Copy, Debug, Default)]
pub struct StepperClicks {
    pub primary: bool,
    pub detail: bool,
}

impl StepperClicks {
    /// Draw the primary and (when present) detail buttons where the view
    /// placed them
    pub fn render(
        ctx: &egui::Context,
        frame: &ChartFrame,
        view: &StoryView<'_>,
        font_size: f32,
    ) -> Self {
        let primary = story_button(
            ctx,
            "stepper_primary",
            frame.screen_rect(&view.buttons.primary),
            view.primary.label(),
            view.primary.color(),
            font_size,
        );

        let detail = match (view.detail, view.buttons.detail) {
            (Some(action), Some(rect)) => story_button(
                ctx,
                "stepper_detail",
                frame.screen_rect(&rect),
                action.label(),
                action.color(),
                font_size,
            ),
            _ => false,
        };

        Self { primary, detail }
    }
}

/// A rounded pastel button floating over the chart. Returns true when clicked.
pub fn story_button(
    ctx: &egui::Context,
    id: &str,
    rect: egui::Rect,
    label: &str,
    fill: [u8; 3],
    font_size: f32,
) -> bool {
    egui::Area::new(egui::Id::new(id))
        .fixed_pos(rect.min)
        .order(egui::Order::Foreground)
        .show(ctx, |ui| {
            let button = egui::Button::new(
                egui::RichText::new(label)
                    .size(font_size)
                    .color(egui::Color32::BLACK),
            )
            .fill(rgb(fill))
            .stroke(egui::Stroke::new(1.0, egui::Color32::from_gray(60)))
            .corner_radius(20)
            .min_size(rect.size());

            let response = ui.add(button);
            if response.hovered() {
                ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
            }
            response.clicked()
        })
        .inner
}
