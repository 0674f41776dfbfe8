// Event mutation service
//
// Turns a finished drag into the start/end changes committed to the event
// store. Planning is pure; applying is left to the store.

use chrono::{DateTime, Duration, Local, NaiveDate};
use serde::Serialize;

use crate::models::event::Event;
use crate::utils::date::{difference_in_days, duration_ms, MS_PER_DAY};

/// Fields to overwrite on the stored event
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct EventChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Local>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Local>>,
}

impl EventChanges {
    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// `event` with these changes applied
    pub fn apply_to(&self, event: &Event) -> Event {
        Event {
            start: self.start.unwrap_or(event.start),
            end: self.end.unwrap_or(event.end),
            ..event.clone()
        }
    }
}

/// Mutation request handed to the event store
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventUpdateRequest {
    pub event: Event,
    pub event_data: EventChanges,
}

/// The application's event store. Requests are fire-and-forget.
#[cfg_attr(test, mockall::automock)]
pub trait EventStore {
    fn update_event(&mut self, request: EventUpdateRequest);
}

/// Collects requests instead of applying them
impl EventStore for Vec<EventUpdateRequest> {
    fn update_event(&mut self, request: EventUpdateRequest) {
        self.push(request);
    }
}

/// Move `original` so it starts on `current_grid_date`.
///
/// The shift is a whole number of fixed-length days, so the duration is
/// preserved exactly and the time of day only changes across DST shifts.
pub fn plan_move(original: &Event, current_grid_date: NaiveDate) -> EventChanges {
    let day_offset = difference_in_days(current_grid_date, original.start.date_naive());
    let time_offset = Duration::milliseconds(day_offset * MS_PER_DAY);

    let start = original.start + time_offset;
    let end = start + Duration::milliseconds(duration_ms(original.start, original.end));

    EventChanges {
        start: Some(start),
        end: Some(end),
    }
}

/// Move the end of `original` onto `target_grid_date`, keeping its time of day.
///
/// The new end is the target date at the original end's local time, not
/// midnight of the target date, so a 17:00 end stays at 17:00.
/// Only `end` changes. `None` when that local time does not exist on the
/// target date, or when the new end would not be after the start.
pub fn plan_resize(original: &Event, target_grid_date: NaiveDate) -> Option<EventChanges> {
    let end = target_grid_date
        .and_time(original.end.time())
        .and_local_timezone(Local)
        .earliest()?;

    if end <= original.start {
        log::warn!(
            "Resize of event {:?} to {} would end before it starts, ignoring",
            original.id,
            target_grid_date
        );
        return None;
    }

    Some(EventChanges {
        start: None,
        end: Some(end),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, m, d, h, 0, 0).earliest().unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn event(start: DateTime<Local>, end: DateTime<Local>) -> Event {
        Event::builder()
            .id(7)
            .title("Trip")
            .start(start)
            .end(end)
            .build()
            .unwrap()
    }

    #[test]
    fn test_plan_move_shifts_by_days() {
        let original = event(at(2024, 3, 10, 0), at(2024, 3, 11, 0));
        let changes = plan_move(&original, date(2024, 3, 15));

        let start = changes.start.unwrap();
        let end = changes.end.unwrap();
        assert_eq!(start.date_naive(), date(2024, 3, 15));
        assert_eq!(end.date_naive(), date(2024, 3, 16));
        assert_eq!(end - start, original.duration());
    }

    #[test]
    fn test_plan_move_offset_is_whole_days_in_ms() {
        let original = event(at(2024, 6, 3, 8), at(2024, 6, 4, 22));
        let changes = plan_move(&original, date(2024, 6, 6));

        let start = changes.start.unwrap();
        let end = changes.end.unwrap();
        assert_eq!(duration_ms(original.start, start), 3 * MS_PER_DAY);
        assert_eq!(duration_ms(start, end), duration_ms(original.start, original.end));
    }

    #[test]
    fn test_plan_move_backwards() {
        let original = event(at(2024, 6, 20, 9), at(2024, 6, 20, 17));
        let changes = plan_move(&original, date(2024, 6, 3));

        assert_eq!(changes.start.unwrap().date_naive(), date(2024, 6, 3));
        assert_eq!(changes.end.unwrap() - changes.start.unwrap(), Duration::hours(8));
    }

    #[test]
    fn test_plan_move_same_day_is_identity() {
        let original = event(at(2024, 6, 20, 9), at(2024, 6, 22, 17));
        let changes = plan_move(&original, date(2024, 6, 20));
        assert_eq!(changes.apply_to(&original), original);
    }

    #[test]
    fn test_plan_resize_only_touches_end() {
        let original = event(at(2024, 6, 18, 9), at(2024, 6, 19, 17));
        let changes = plan_resize(&original, date(2024, 6, 22)).unwrap();

        assert!(changes.start.is_none());
        assert_eq!(changes.end, Some(at(2024, 6, 22, 17)));

        let resized = changes.apply_to(&original);
        assert_eq!(resized.start, original.start);
        assert_eq!(resized.title, "Trip");
    }

    #[test]
    fn test_plan_resize_rejects_end_before_start() {
        let original = event(at(2024, 6, 18, 18), at(2024, 6, 19, 9));
        assert!(plan_resize(&original, date(2024, 6, 18)).is_none());
    }

    #[test]
    fn test_changes_serialize_only_set_fields() {
        let changes = EventChanges {
            start: None,
            end: Some(at(2024, 6, 22, 17)),
        };
        let value = serde_json::to_value(changes).unwrap();
        assert!(value.get("start").is_none());
        assert!(value.get("end").is_some());
        assert!(!changes.is_empty());
        assert!(EventChanges::default().is_empty());
    }

    #[test]
    fn test_vec_store_records_requests() {
        let original = event(at(2024, 6, 18, 9), at(2024, 6, 19, 17));
        let mut store: Vec<EventUpdateRequest> = Vec::new();
        store.update_event(EventUpdateRequest {
            event: original.clone(),
            event_data: plan_move(&original, date(2024, 6, 25)),
        });

        assert_eq!(store.len(), 1);
        assert_eq!(store[0].event.id, Some(7));
    }

    #[test]
    fn test_mock_store_receives_request() {
        let original = event(at(2024, 6, 18, 9), at(2024, 6, 19, 17));
        let mut store = MockEventStore::new();
        store
            .expect_update_event()
            .withf(|request| request.event.id == Some(7) && request.event_data.start.is_none())
            .times(1)
            .return_const(());

        if let Some(changes) = plan_resize(&original, date(2024, 6, 21)) {
            store.update_event(EventUpdateRequest {
                event: original,
                event_data: changes,
            });
        }
    }
}
