//! Chart rendering for the overview and event pages.
//!
//! The price line is an egui_plot line over the fixed story domain. Callouts,
//! the crosshair, the legend and the stepper buttons are painted on top in
//! screen space using the same `ChartScale` the core uses for button
//! placement, so everything lines up with the plot frame.

use eframe::egui;
use egui_plot::{Line, Plot, PlotBounds, PlotPoints};

use crate::app::LunaStoryApp;
use crate::layout::{
    place_buttons, ChartScale, ScreenRect, TIME_DOMAIN_END_MS, TIME_DOMAIN_START_MS,
    VALUE_CEILING,
};
use crate::legend::format_axis_date;
use crate::series::Sample;
use crate::state::{ToastType, PRICE_LINE_COLOR};
use crate::stepper::{AnnotationDisplay, DetailAction};
use crate::ui::callouts::Callout;
use crate::ui::controls::{story_button, StepperClicks};
use crate::ui::overlay::{draw_crosshair, draw_legend};
use crate::ui::rgb;

/// Where the plot landed on screen this frame
#[derive(Clone, Copy, Debug)]
pub struct ChartFrame {
    pub rect: egui::Rect,
    pub scale: ChartScale,
}

impl ChartFrame {
    pub fn new(rect: egui::Rect) -> Self {
        Self {
            rect,
            scale: ChartScale::new(rect.width(), rect.height()),
        }
    }

    /// Chart pixel coordinates to screen position
    pub fn to_screen(&self, (x, y): (f32, f32)) -> egui::Pos2 {
        self.rect.min + egui::vec2(x, y)
    }

    /// Chart-pixel rectangle to a screen rectangle
    pub fn screen_rect(&self, rect: &ScreenRect) -> egui::Rect {
        egui::Rect::from_min_size(
            self.to_screen((rect.x, rect.y)),
            egui::vec2(rect.width, rect.height),
        )
    }

    /// Screen position of a data point
    pub fn data_to_screen(&self, timestamp: i64, value: f64) -> egui::Pos2 {
        self.to_screen(self.scale.point(timestamp, value))
    }

    /// Timestamp under a screen position, `None` outside the plot frame
    pub fn pointer_timestamp(&self, pos: egui::Pos2) -> Option<i64> {
        self.rect
            .contains(pos)
            .then(|| self.scale.invert_x(pos.x - self.rect.min.x))
    }
}

/// Draw the price line over the fixed domain and report the plot frame
fn show_price_plot(ui: &mut egui::Ui, id: &str, prices: &[Sample]) -> ChartFrame {
    let line_color = rgb(PRICE_LINE_COLOR);

    // Fixed domain: no zoom, drag or scroll
    let plot = Plot::new(id)
        .show_x(false)
        .show_y(false)
        .show_grid(false)
        .y_axis_position(egui_plot::HPlacement::Right)
        .x_axis_formatter(|mark, _range| format_axis_date(mark.value.round() as i64))
        .y_axis_formatter(|mark, _range| format!("${:.0}", mark.value))
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false);

    let response = plot.show(ui, |plot_ui| {
        plot_ui.set_plot_bounds(PlotBounds::from_min_max(
            [TIME_DOMAIN_START_MS as f64, 0.0],
            [TIME_DOMAIN_END_MS as f64, VALUE_CEILING],
        ));

        if !prices.is_empty() {
            let points: PlotPoints = prices
                .iter()
                .map(|s| [s.timestamp as f64, s.value])
                .collect();
            plot_ui.line(Line::new("LUNA", points).color(line_color).width(1.5));
        }
    });

    ChartFrame::new(*response.transform.frame())
}

/// Timestamp under the mouse, if it is over the plot
fn hover_timestamp(ui: &egui::Ui, frame: &ChartFrame) -> Option<i64> {
    ui.input(|i| i.pointer.hover_pos())
        .and_then(|pos| frame.pointer_timestamp(pos))
}

fn render_error(ui: &mut egui::Ui, message: &str) {
    ui.colored_label(rgb(ToastType::Error.color()), message);
}

impl LunaStoryApp {
    /// The step-through chart
    pub fn render_overview(&mut self, ui: &mut egui::Ui) {
        let font_size = self.scaled_font(13.0);
        let title_size = self.scaled_font(20.0);

        ui.label(
            egui::RichText::new("The Rise and Fall of LUNA and UST")
                .size(title_size)
                .strong(),
        );

        // Plot first so the pointer maps onto this frame's geometry
        let frame = {
            let (Some(loaded), Some(stepper)) = (&self.loaded, &self.stepper) else {
                return;
            };
            match stepper.visible_prices(&loaded.market) {
                Ok(prices) => show_price_plot(ui, "overview_chart", prices),
                Err(e) => {
                    render_error(ui, &e.to_string());
                    return;
                }
            }
        };
        self.set_pointer(hover_timestamp(ui, &frame));

        let (Some(loaded), Some(stepper)) = (&self.loaded, &self.stepper) else {
            return;
        };
        let view = match stepper.view(&loaded.market, &frame.scale) {
            Ok(view) => view,
            Err(e) => {
                render_error(ui, &e.to_string());
                return;
            }
        };

        let painter = ui.painter().clone();
        match &view.annotations {
            AnnotationDisplay::Short(annotations) => {
                for annotation in annotations.iter() {
                    Callout::short(annotation).draw(&painter, &frame, font_size);
                }
            }
            AnnotationDisplay::LongForm {
                annotation,
                long_form,
            } => {
                Callout::long(annotation, long_form).draw(&painter, &frame, font_size);
            }
        }

        if let Some(point) = &view.focus {
            draw_crosshair(&painter, &frame, point);
            draw_legend(&painter, &frame, point, font_size);
        }

        let clicks = StepperClicks::render(ui.ctx(), &frame, &view, font_size);

        if clicks.primary {
            self.advance_story();
        }
        if clicks.detail {
            self.activate_detail();
        }
    }

    /// Full history with one event's long-form callout
    pub fn render_event_page(&mut self, ui: &mut egui::Ui) {
        let font_size = self.scaled_font(13.0);
        let title_size = self.scaled_font(20.0);

        let frame = {
            let (Some(loaded), Some(page)) = (&self.loaded, &self.event_page) else {
                return;
            };
            ui.label(
                egui::RichText::new(page.annotation().display_title())
                    .size(title_size)
                    .strong(),
            );
            show_price_plot(ui, "event_chart", page.view(&loaded.market).prices)
        };
        self.set_pointer(hover_timestamp(ui, &frame));

        let (Some(loaded), Some(page)) = (&self.loaded, &self.event_page) else {
            return;
        };
        let view = page.view(&loaded.market);

        let painter = ui.painter().clone();
        Callout::long(view.annotation, view.long_form).draw(&painter, &frame, font_size);

        if let Some(point) = &view.focus {
            draw_crosshair(&painter, &frame, point);
            draw_legend(&painter, &frame, point, font_size);
        }

        // Back button sits beside the callout like the overview's buttons
        let anchor = frame
            .scale
            .point(view.annotation.timestamp, view.annotation.value);
        let layout = place_buttons(
            Some((anchor, view.long_form.offset)),
            frame.scale.height,
            false,
        );
        let back = DetailAction::Back;
        if story_button(
            ui.ctx(),
            "event_back",
            frame.screen_rect(&layout.primary),
            back.label(),
            back.color(),
            font_size,
        ) {
            self.show_overview();
        }
    }
}
