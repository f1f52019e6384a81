//! Chart geometry: value/time scales and stepper button placement.
//!
//! The chart domain is fixed (it does not follow the loaded data) so that the
//! story reads the same way regardless of how much history is present.
//! Positions here are chart-local pixels with the origin at the top-left of
//! the plot area and Y growing downward.

use crate::story::Offset;

/// Start of the time axis: 2019-06-08T00:00:00Z
pub const TIME_DOMAIN_START_MS: i64 = 1_559_952_000_000;

/// End of the time axis: 2022-08-06T00:00:00Z
pub const TIME_DOMAIN_END_MS: i64 = 1_659_744_000_000;

/// Top of the price axis
pub const VALUE_CEILING: f64 = 119.18;

/// Stepper button width in pixels
pub const BUTTON_WIDTH: f32 = 60.0;

/// Stepper button height in pixels
pub const BUTTON_HEIGHT: f32 = 40.0;

/// Vertical gap between the primary and the detail button
pub const BUTTON_GAP: f32 = 10.0;

/// Distance of the idle start button above the bottom of the chart
pub const START_BUTTON_LIFT: f32 = 100.0;

/// Horizontal offset past which a callout counts as "pointing left"
const LEFT_CALLOUT_THRESHOLD: f32 = -20.0;

/// Axis-aligned rectangle in chart-local pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ScreenRect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Center point
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// Linear time -> x and value -> y mapping over the fixed chart domain
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartScale {
    pub width: f32,
    pub height: f32,
    time_domain: (i64, i64),
    value_domain: (f64, f64),
}

impl ChartScale {
    /// Scale over the default story domain
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_domain(
            width,
            height,
            (TIME_DOMAIN_START_MS, TIME_DOMAIN_END_MS),
            (0.0, VALUE_CEILING),
        )
    }

    pub fn with_domain(
        width: f32,
        height: f32,
        time_domain: (i64, i64),
        value_domain: (f64, f64),
    ) -> Self {
        Self {
            width,
            height,
            time_domain,
            value_domain,
        }
    }

    pub fn time_domain(&self) -> (i64, i64) {
        self.time_domain
    }

    pub fn value_domain(&self) -> (f64, f64) {
        self.value_domain
    }

    /// Horizontal pixel position of a timestamp
    pub fn x(&self, timestamp: i64) -> f32 {
        let (start, end) = self.time_domain;
        let span = (end - start) as f64;
        if span == 0.0 {
            return 0.0;
        }
        ((timestamp as f64 - start as f64) / span * self.width as f64) as f32
    }

    /// Vertical pixel position of a value (ceiling at the top)
    pub fn y(&self, value: f64) -> f32 {
        let (low, high) = self.value_domain;
        let span = high - low;
        if span == 0.0 {
            return self.height;
        }
        (self.height as f64 - (value - low) / span * self.height as f64) as f32
    }

    /// Pixel position of a (timestamp, value) pair
    pub fn point(&self, timestamp: i64, value: f64) -> (f32, f32) {
        (self.x(timestamp), self.y(value))
    }

    /// Timestamp under a horizontal pixel position, rounded to the millisecond
    pub fn invert_x(&self, x: f32) -> i64 {
        let (start, end) = self.time_domain;
        if self.width == 0.0 {
            return start;
        }
        let span = (end - start) as f64;
        start.saturating_add((x as f64 / self.width as f64 * span).round() as i64)
    }
}

/// Where the stepper buttons go for the current frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonLayout {
    pub primary: ScreenRect,
    pub detail: Option<ScreenRect>,
}

/// Place the stepper buttons next to the current callout.
///
/// `anchor` is the annotation's anchor point in chart pixels plus its
/// callout offset; `None` means no annotation is current, which puts the
/// start button in the bottom-left corner. The branches keep the buttons
/// out of the quadrant the callout is drawn into.
pub fn place_buttons(
    anchor: Option<((f32, f32), Offset)>,
    chart_height: f32,
    with_detail: bool,
) -> ButtonLayout {
    let (x, y) = match anchor {
        None => (0.0, chart_height - START_BUTTON_LIFT),
        Some(((ax, ay), offset)) => {
            let (dx, dy) = (offset.dx, offset.dy);
            if dx < LEFT_CALLOUT_THRESHOLD && dy < 0.0 {
                (ax + dx - 20.0, ay + dy + BUTTON_HEIGHT + BUTTON_GAP)
            } else if dx < LEFT_CALLOUT_THRESHOLD && dy > 0.0 {
                (ax + dx - 5.0, ay + dy - BUTTON_HEIGHT * 2.0)
            } else {
                (ax + dx + 20.0, ay + dy + 5.0)
            }
        }
    };

    let primary = ScreenRect::new(x, y, BUTTON_WIDTH, BUTTON_HEIGHT);
    let detail = with_detail.then(|| {
        ScreenRect::new(
            x,
            y + BUTTON_HEIGHT + BUTTON_GAP,
            BUTTON_WIDTH,
            BUTTON_HEIGHT,
        )
    });

    ButtonLayout { primary, detail }
}
