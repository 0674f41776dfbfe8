// Event Resize Tracking
//
// Resizing in the month grid drags the right edge of an event segment
// across the columns of the pointer's row.
// - Only the end date moves; the start column is fixed.
// - The pointer must be at or after the start column and away from the
//   current end column for the resize to commit.

use chrono::NaiveDate;

use crate::models::grid::GridGeometry;
use crate::models::ui::EventUIModel;
use crate::utils::date::grid_date_index;

/// Columns an event segment occupies within one week row
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EventColumnSpan {
    pub start: usize,
    pub end: usize,
}

impl EventColumnSpan {
    /// Locate `event` in `week_dates`. Dates outside the row clamp to its edges.
    pub fn locate(event: &EventUIModel, week_dates: &[NaiveDate]) -> Option<Self> {
        Some(Self {
            start: grid_date_index(event.starts().date_naive(), week_dates)?,
            end: grid_date_index(event.ends().date_naive(), week_dates)?,
        })
    }

    /// Whether releasing over `column` changes the event's end
    pub fn accepts(&self, column: usize) -> bool {
        self.start <= column && column != self.end
    }
}

/// Shadow of an event being resized
#[derive(Clone, Debug, PartialEq)]
pub struct ResizePreview {
    pub span: EventColumnSpan,
    /// Column under the pointer
    pub column: usize,
    /// Width from the start column through the pointer column (percent)
    pub width: f32,
    pub shadow: EventUIModel,
}

/// Preview for resizing `event` to `column` of a row laid out by `geometry`.
///
/// `None` while the pointer is left of the start column, since the edge
/// cannot be dragged past the start.
pub fn resize_preview(
    event: &EventUIModel,
    week_dates: &[NaiveDate],
    column: usize,
    geometry: &GridGeometry,
) -> Option<ResizePreview> {
    let span = EventColumnSpan::locate(event, week_dates)?;
    let width = geometry.span_width(span.start, column)?;
    let left = geometry.cell(span.start)?.left;

    Some(ResizePreview {
        span,
        column,
        width,
        shadow: event.with_layout(left, width),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::Event;
    use chrono::{Local, TimeZone};

    fn week() -> Vec<NaiveDate> {
        NaiveDate::from_ymd_opt(2024, 6, 16)
            .unwrap()
            .iter_days()
            .take(7)
            .collect()
    }

    fn event_on(start_day: u32, end_day: u32) -> EventUIModel {
        let start = Local.with_ymd_and_hms(2024, 6, start_day, 9, 0, 0).earliest().unwrap();
        let end = Local.with_ymd_and_hms(2024, 6, end_day, 17, 0, 0).earliest().unwrap();
        EventUIModel::new(Event::new("Conference", start, end).unwrap())
    }

    #[test]
    fn test_locate_span_in_row() {
        let span = EventColumnSpan::locate(&event_on(18, 21), &week()).unwrap();
        assert_eq!(span, EventColumnSpan { start: 2, end: 5 });
    }

    #[test]
    fn test_locate_clamps_event_crossing_the_row() {
        let span = EventColumnSpan::locate(&event_on(12, 25), &week()).unwrap();
        assert_eq!(span, EventColumnSpan { start: 0, end: 6 });
    }

    #[test]
    fn test_accepts_only_forward_changes() {
        let span = EventColumnSpan { start: 2, end: 5 };
        assert!(!span.accepts(1));
        assert!(span.accepts(2));
        assert!(span.accepts(3));
        assert!(!span.accepts(5));
        assert!(span.accepts(6));
    }

    #[test]
    fn test_preview_width_spans_to_pointer() {
        let geometry = GridGeometry::new(vec![0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0], 1).unwrap();
        let event = event_on(18, 19);

        let preview = resize_preview(&event, &week(), 4, &geometry).unwrap();
        assert_eq!(preview.width, 30.0);
        assert_eq!(preview.shadow.left, 20.0);
        assert_eq!(preview.shadow.width, 30.0);
        // rendered model untouched
        assert_eq!(event.width, 0.0);
    }

    #[test]
    fn test_no_preview_left_of_start() {
        let geometry = GridGeometry::uniform(7, 1).unwrap();
        assert!(resize_preview(&event_on(18, 19), &week(), 1, &geometry).is_none());
    }
}
