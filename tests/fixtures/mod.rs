// Test fixtures - reusable grid layouts and events
// Shared by the integration and property tests
#![allow(dead_code)]

use chrono::{DateTime, Local, NaiveDate, TimeZone, Weekday};
use egui::{Pos2, Rect, Vec2};
use month_grid::models::event::Event;
use month_grid::models::grid::{
    ContainerBox, DateMatrix, GridGeometry, PointerEventKind, PointerSample,
};
use month_grid::models::ui::EventUIModel;
use month_grid::services::grid_position::GridPositionFinder;

/// Width and height of one cell in the fixture layouts
pub const CELL: f32 = 100.0;

/// Sample dates for testing
pub mod dates {
    use super::*;

    pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    pub fn local(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Local> {
        Local
            .with_ymd_and_hms(year, month, day, hour, minute, 0)
            .earliest()
            .unwrap()
    }
}

/// Grid layouts
pub mod layouts {
    use super::*;

    /// Container at (40, 80) with a 2px left border, one CELL per column/row
    pub fn container(rows: usize) -> ContainerBox {
        ContainerBox::new(Rect::from_min_size(
            Pos2::new(40.0, 80.0),
            Vec2::new(7.0 * CELL + 2.0, rows as f32 * CELL),
        ))
        .with_client_insets(2.0, 0.0)
    }

    /// June 2024 starting on Sunday: six rows, June 16..22 is row 3
    pub fn june_2024() -> GridPositionFinder {
        let dates = DateMatrix::for_month(2024, 6, Weekday::Sun, false).unwrap();
        let rows = dates.row_count();
        let geometry = GridGeometry::new(
            (0..7).map(|c| c as f32 * 100.0 / 7.0).collect(),
            rows,
        )
        .unwrap();
        GridPositionFinder::new(container(rows), geometry, dates)
    }

    /// Screen position of the centre of a cell in `container(rows)`
    pub fn cell_centre(row: usize, column: usize) -> Pos2 {
        Pos2::new(
            42.0 + column as f32 * CELL + CELL / 2.0,
            80.0 + row as f32 * CELL + CELL / 2.0,
        )
    }

    pub fn sample(row: usize, column: usize, kind: PointerEventKind) -> PointerSample {
        PointerSample::new(cell_centre(row, column), kind)
    }
}

/// Sample events
pub mod events {
    use super::*;

    pub fn workshop() -> Event {
        Event::builder()
            .id(11)
            .title("Design Workshop")
            .start(dates::local(2024, 6, 18, 9, 30))
            .end(dates::local(2024, 6, 21, 16, 0))
            .category("Work")
            .build()
            .unwrap()
    }

    pub fn lunch() -> Event {
        Event::builder()
            .id(12)
            .title("Team Lunch")
            .start(dates::local(2024, 6, 19, 12, 0))
            .end(dates::local(2024, 6, 19, 13, 0))
            .build()
            .unwrap()
    }

    pub fn ui(event: Event) -> EventUIModel {
        EventUIModel::new(event)
    }
}
