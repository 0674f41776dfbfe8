// UI models module
// Per-occurrence layout wrapper around a domain event

use chrono::{DateTime, Duration, Local};
use serde::Serialize;

use crate::models::event::Event;

/// One rendered segment of an event in a grid row.
///
/// `left`, `width` and `top` are layout values owned by the rendering layer:
/// `left`/`width` are percentages of the row width, `top` is the stacking slot.
/// An event spanning several weeks yields one model per row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventUIModel {
    pub model: Event,
    pub left: f32,
    pub width: f32,
    pub top: f32,
}

impl EventUIModel {
    pub fn new(model: Event) -> Self {
        Self {
            model,
            left: 0.0,
            width: 0.0,
            top: 0.0,
        }
    }

    pub fn starts(&self) -> DateTime<Local> {
        self.model.start
    }

    pub fn ends(&self) -> DateTime<Local> {
        self.model.end
    }

    pub fn duration(&self) -> Duration {
        self.model.duration()
    }

    /// A copy of this model laid out at a different horizontal position.
    /// Used for drag previews so the rendered model is never touched.
    pub fn with_layout(&self, left: f32, width: f32) -> Self {
        Self {
            left,
            width,
            ..self.clone()
        }
    }

    pub fn with_top(mut self, top: f32) -> Self {
        self.top = top;
        self
    }
}

impl From<Event> for EventUIModel {
    fn from(model: Event) -> Self {
        Self::new(model)
    }
}
