//! Crosshair and legend for the focused sample.

use eframe::egui;

use crate::data::MarketPoint;
use crate::legend::legend_lines;
use crate::state::{CROSSHAIR_COLOR, FOCUS_RADIUS, LEGEND_LINE_HEIGHT};
use crate::ui::chart::ChartFrame;
use crate::ui::rgb;

/// Circle on the focused sample with dashed guides to the right and bottom edges
pub fn draw_crosshair(painter: &egui::Painter, frame: &ChartFrame, point: &MarketPoint) {
    let color = rgb(CROSSHAIR_COLOR);
    let stroke = egui::Stroke::new(1.0, color);
    let pos = frame.data_to_screen(point.timestamp, point.price);

    painter.extend(egui::Shape::dashed_line(
        &[pos, egui::pos2(frame.rect.max.x, pos.y)],
        stroke,
        3.0,
        3.0,
    ));
    painter.extend(egui::Shape::dashed_line(
        &[pos, egui::pos2(pos.x, frame.rect.max.y)],
        stroke,
        3.0,
        3.0,
    ));

    painter.circle_stroke(pos, FOCUS_RADIUS, egui::Stroke::new(1.5, color));
}

/// Date, price, market cap and volume in the top-left corner of the chart
pub fn draw_legend(
    painter: &egui::Painter,
    frame: &ChartFrame,
    point: &MarketPoint,
    font_size: f32,
) {
    let origin = frame.rect.min + egui::vec2(15.0, 10.0);

    for (i, line) in legend_lines(point).into_iter().enumerate() {
        painter.text(
            origin + egui::vec2(0.0, i as f32 * LEGEND_LINE_HEIGHT),
            egui::Align2::LEFT_TOP,
            line,
            egui::FontId::monospace(font_size),
            egui::Color32::from_gray(30),
        );
    }
}
