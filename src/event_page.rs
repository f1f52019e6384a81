//! Standalone page for a single event.
//!
//! Shows the whole price history with just the long-form narrative of one
//! event. Unlike the overview, the crosshair is not bounded by the story: any
//! pointer position focuses the nearest sample.

use crate::data::{MarketData, MarketPoint};
use crate::series::Sample;
use crate::story::{Annotation, EventId, LongForm, Story, StoryError};

/// Everything the renderer draws for an event page
#[derive(Clone, Debug, PartialEq)]
pub struct EventView<'a> {
    pub prices: &'a [Sample],
    pub annotation: &'a Annotation,
    pub long_form: &'a LongForm,
    pub focus: Option<MarketPoint>,
}

/// One highlighted event over the full series
#[derive(Clone, Debug)]
pub struct EventPage {
    event: EventId,
    annotation: Annotation,
    long_form: LongForm,
    pointer: Option<i64>,
}

impl EventPage {
    /// Page for `event` taken from `story`
    pub fn for_event(story: &Story, event: EventId) -> Result<Self, StoryError> {
        let (index, annotation) = story.event(event)?;
        let long_form = annotation
            .long_form
            .clone()
            .ok_or_else(|| StoryError::MissingLongForm {
                index,
                title: annotation.title.clone(),
            })?;

        Ok(Self {
            event,
            annotation: annotation.clone(),
            long_form,
            pointer: None,
        })
    }

    pub fn event(&self) -> EventId {
        self.event
    }

    pub fn annotation(&self) -> &Annotation {
        &self.annotation
    }

    pub fn long_form(&self) -> &LongForm {
        &self.long_form
    }

    pub fn hover(&mut self, timestamp: i64) {
        self.pointer = Some(timestamp);
    }

    pub fn clear_hover(&mut self) {
        self.pointer = None;
    }

    pub fn view<'a>(&'a self, market: &'a MarketData) -> EventView<'a> {
        EventView {
            prices: market.prices().samples(),
            annotation: &self.annotation,
            long_form: &self.long_form,
            focus: self.pointer.and_then(|t| market.nearest_point(t)),
        }
    }
}
