//! Annotation callouts: a connector from the data point to a note box with a
//! title and wrapped body text.

use eframe::egui;

use crate::state::{ANNOTATION_COLOR, CALLOUT_BACKGROUND};
use crate::story::{Annotation, LongForm, Offset};
use crate::ui::chart::ChartFrame;
use crate::ui::rgb;

const PADDING: f32 = 6.0;
const TITLE_GAP: f32 = 4.0;

/// One callout ready to paint
#[derive(Clone, Debug)]
pub struct Callout<'a> {
    pub timestamp: i64,
    pub value: f64,
    pub title: String,
    pub text: &'a str,
    pub offset: Offset,
    pub wrap_width: f32,
}

impl<'a> Callout<'a> {
    pub fn short(annotation: &'a Annotation) -> Self {
        Self {
            timestamp: annotation.timestamp,
            value: annotation.value,
            title: annotation.display_title(),
            text: &annotation.short_text,
            offset: annotation.offset,
            wrap_width: annotation.wrap_width,
        }
    }

    pub fn long(annotation: &'a Annotation, long_form: &'a LongForm) -> Self {
        Self {
            timestamp: annotation.timestamp,
            value: annotation.value,
            title: annotation.display_title(),
            text: &long_form.text,
            offset: long_form.offset,
            wrap_width: long_form.wrap_width,
        }
    }

    /// Paint the connector and note box. The box grows away from the anchor
    /// in the direction of the offset.
    pub fn draw(&self, painter: &egui::Painter, frame: &ChartFrame, font_size: f32) {
        let color = rgb(ANNOTATION_COLOR);
        let stroke = egui::Stroke::new(1.0, color);

        let anchor = frame.data_to_screen(self.timestamp, self.value);
        let note = anchor + egui::vec2(self.offset.dx, self.offset.dy);

        painter.circle_filled(anchor, 2.5, color);
        painter.line_segment([anchor, note], stroke);

        let title = painter.layout(
            self.title.clone(),
            egui::FontId::proportional(font_size + 1.0),
            color,
            self.wrap_width,
        );
        let body = painter.layout(
            self.text.to_string(),
            egui::FontId::proportional(font_size),
            color,
            self.wrap_width,
        );

        let width = title.size().x.max(body.size().x) + PADDING * 2.0;
        let height = title.size().y + TITLE_GAP + body.size().y + PADDING * 2.0;

        let left = if self.offset.dx < 0.0 {
            note.x - width
        } else {
            note.x
        };
        let top = if self.offset.dy < 0.0 {
            note.y - height
        } else {
            note.y
        };
        let rect = egui::Rect::from_min_size(egui::pos2(left, top), egui::vec2(width, height));

        painter.rect_filled(
            rect,
            2.0,
            rgb(CALLOUT_BACKGROUND),
        );

        // Rule along the edge the connector meets
        let rule_y = if self.offset.dy < 0.0 {
            rect.max.y
        } else {
            rect.min.y
        };
        painter.line_segment(
            [egui::pos2(rect.min.x, rule_y), egui::pos2(rect.max.x, rule_y)],
            stroke,
        );

        let title_pos = rect.min + egui::vec2(PADDING, PADDING);
        let body_pos = title_pos + egui::vec2(0.0, title.size().y + TITLE_GAP);
        painter.galley(title_pos, title, color);
        painter.galley(body_pos, body, color);
    }
}
