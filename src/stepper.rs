//! Annotation stepper: progressive disclosure of the story.
//!
//! The stepper owns the story and a pointer into it. `None` is the initial
//! state (nothing revealed); each [`Stepper::advance`] reveals one more
//! annotation and stepping past the last one wraps back to `None`. When the
//! current annotation belongs to an event, [`Stepper::toggle_detail`] swaps
//! its short callout for the long-form narrative.
//!
//! Every transition is followed by a call to [`Stepper::view`], which derives
//! everything the renderer needs: the visible price prefix, the callouts to
//! draw, the focused point under the pointer and the button affordances.

use crate::data::{MarketData, MarketPoint};
use crate::layout::{place_buttons, ButtonLayout, ChartScale};
use crate::series::{Sample, SeriesError};
use crate::story::{Annotation, EventId, LongForm, Story};

/// Action behind the primary button
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrimaryAction {
    /// Nothing revealed yet
    Start,
    /// Somewhere in the middle of the story
    Next,
    /// On the last annotation; the next click starts over
    Reset,
}

impl PrimaryAction {
    pub fn label(&self) -> &'static str {
        match self {
            PrimaryAction::Start => "start",
            PrimaryAction::Next => "next",
            PrimaryAction::Reset => "reset",
        }
    }

    /// Button fill color
    pub fn color(&self) -> [u8; 3] {
        match self {
            PrimaryAction::Start => [0x77, 0xdd, 0x77], // Pastel green
            PrimaryAction::Next => [0xff, 0xcc, 0xcb],  // Pastel pink
            PrimaryAction::Reset => [0xa7, 0xc7, 0xe7], // Pastel blue
        }
    }
}

/// Action behind the drill-down button
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailAction {
    /// Short callout shown, clicking shows the long form
    Show,
    /// Long form shown, clicking goes back
    Back,
}

impl DetailAction {
    pub fn label(&self) -> &'static str {
        match self {
            DetailAction::Show => "show",
            DetailAction::Back => "back",
        }
    }

    pub fn color(&self) -> [u8; 3] {
        [0x77, 0xdd, 0x77]
    }
}

/// Which callouts are on screen
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnnotationDisplay<'a> {
    /// Short callouts of every annotation revealed so far
    Short(&'a [Annotation]),
    /// Only the long form of the current annotation
    LongForm {
        annotation: &'a Annotation,
        long_form: &'a LongForm,
    },
}

impl AnnotationDisplay<'_> {
    pub fn is_empty(&self) -> bool {
        matches!(self, AnnotationDisplay::Short(list) if list.is_empty())
    }
}

/// Everything the renderer draws for one stepper state
#[derive(Clone, Debug, PartialEq)]
pub struct StoryView<'a> {
    /// Price samples up to and including the current annotation
    pub prices: &'a [Sample],
    pub annotations: AnnotationDisplay<'a>,
    /// Sample under the pointer, if the pointer is within the revealed range
    pub focus: Option<MarketPoint>,
    pub primary: PrimaryAction,
    pub detail: Option<DetailAction>,
    pub buttons: ButtonLayout,
}

/// Owns the story and the current position in it
#[derive(Clone, Debug)]
pub struct Stepper {
    story: Story,
    current: Option<usize>,
    show_long_form: bool,
    /// Last pointer timestamp, cleared on every advance
    pointer: Option<i64>,
}

impl Stepper {
    pub fn new(story: Story) -> Self {
        Self {
            story,
            current: None,
            show_long_form: false,
            pointer: None,
        }
    }

    pub fn story(&self) -> &Story {
        &self.story
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_annotation(&self) -> Option<&Annotation> {
        self.current.and_then(|i| self.story.get(i))
    }

    /// Event id of the current annotation, if it has one
    pub fn current_event(&self) -> Option<EventId> {
        self.current_annotation().and_then(|a| a.event)
    }

    pub fn show_long_form(&self) -> bool {
        self.show_long_form
    }

    pub fn pointer(&self) -> Option<i64> {
        self.pointer
    }

    /// Reveal the next annotation, wrapping to the initial state after the last
    pub fn advance(&mut self) {
        self.current = match self.current {
            None => Some(0),
            Some(i) if i + 1 < self.story.len() => Some(i + 1),
            Some(_) => None,
        };
        self.show_long_form = false;
        self.pointer = None;
        tracing::debug!("Stepper advanced to {:?}", self.current);
    }

    /// Back to the initial state
    pub fn reset(&mut self) {
        self.current = None;
        self.show_long_form = false;
        self.pointer = None;
    }

    /// Flip between short and long form. Returns false (and does nothing)
    /// when the current annotation has no event.
    pub fn toggle_detail(&mut self) -> bool {
        if self.current_event().is_none() {
            return false;
        }
        self.show_long_form = !self.show_long_form;
        tracing::debug!(
            "Detail view {} for {:?}",
            if self.show_long_form { "shown" } else { "hidden" },
            self.current_event()
        );
        true
    }

    /// Record the pointer position for the next view
    pub fn hover(&mut self, timestamp: i64) {
        self.pointer = Some(timestamp);
    }

    pub fn clear_hover(&mut self) {
        self.pointer = None;
    }

    /// Nearest sample to `timestamp`, if it does not run ahead of the story.
    ///
    /// The bound is inclusive: probing exactly at the current annotation
    /// still yields a point.
    pub fn focus_at(&self, market: &MarketData, timestamp: i64) -> Option<MarketPoint> {
        let current = self.current_annotation()?;
        if timestamp > current.timestamp {
            return None;
        }
        market.nearest_point(timestamp)
    }

    pub fn primary_action(&self) -> PrimaryAction {
        match self.current {
            None => PrimaryAction::Start,
            Some(i) if i + 1 == self.story.len() => PrimaryAction::Reset,
            Some(_) => PrimaryAction::Next,
        }
    }

    pub fn detail_action(&self) -> Option<DetailAction> {
        self.current_event().map(|_| {
            if self.show_long_form {
                DetailAction::Back
            } else {
                DetailAction::Show
            }
        })
    }

    /// Price samples revealed so far
    pub fn visible_prices<'a>(&self, market: &'a MarketData) -> Result<&'a [Sample], SeriesError> {
        match self.current_annotation() {
            None => Ok(&[]),
            Some(annotation) => market.prices().prefix_through(annotation.timestamp),
        }
    }

    /// Callouts for the current state
    pub fn visible_annotations(&self) -> AnnotationDisplay<'_> {
        let Some(index) = self.current else {
            return AnnotationDisplay::Short(&[]);
        };
        let annotations = self.story.annotations();

        if self.show_long_form {
            if let Some(long_form) = annotations[index].long_form.as_ref() {
                return AnnotationDisplay::LongForm {
                    annotation: &annotations[index],
                    long_form,
                };
            }
        }

        AnnotationDisplay::Short(&annotations[..=index])
    }

    /// Button rectangles for a chart of the given scale
    pub fn button_layout(&self, scale: &ChartScale) -> ButtonLayout {
        let anchor = self
            .current_annotation()
            .map(|a| (scale.point(a.timestamp, a.value), a.offset));
        place_buttons(anchor, scale.height, self.detail_action().is_some())
    }

    /// Derive the full view for the renderer
    pub fn view<'a>(
        &'a self,
        market: &'a MarketData,
        scale: &ChartScale,
    ) -> Result<StoryView<'a>, SeriesError> {
        Ok(StoryView {
            prices: self.visible_prices(market)?,
            annotations: self.visible_annotations(),
            focus: self.pointer.and_then(|t| self.focus_at(market, t)),
            primary: self.primary_action(),
            detail: self.detail_action(),
            buttons: self.button_layout(scale),
        })
    }
}
