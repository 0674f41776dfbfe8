// Month day cell state: date colour, "+N more" count and the popup request
// the count opens.

use chrono::NaiveDate;
use egui::Rect;

use crate::models::grid::ContainerBox;
use crate::models::settings::{CellPalette, MonthGridConfig};
use crate::models::ui::EventUIModel;
use crate::services::overflow::exceed_count;
use crate::services::popup::{compute_rect, PopupMetrics};
use crate::utils::date::DayKind;

use super::messages::{PopupType, SeeMorePopupRequest};

/// What the cell renderer needs for one date
#[derive(Debug, Clone, PartialEq)]
pub struct CellState {
    pub date: NaiveDate,
    pub day_kind: DayKind,
    pub date_color: String,
    /// Events hidden behind "+N more"
    pub exceed_count: usize,
}

impl CellState {
    pub fn has_overflow(&self) -> bool {
        self.exceed_count > 0
    }
}

pub fn date_color(kind: DayKind, palette: &CellPalette) -> &str {
    match kind {
        DayKind::Holiday => &palette.holiday,
        DayKind::Saturday => &palette.saturday,
        DayKind::Weekday => &palette.weekday,
    }
}

/// # Panics
/// Panics if the configured event height plus margin is not positive;
/// [`MonthGridConfig::validate`] rejects such configs.
pub fn cell_state(
    config: &MonthGridConfig,
    date: NaiveDate,
    events: &[EventUIModel],
    cell_height: f32,
) -> CellState {
    let day_kind = DayKind::of(date);
    CellState {
        date,
        day_kind,
        date_color: date_color(day_kind, &config.palette).to_string(),
        exceed_count: exceed_count(events.len(), cell_height, config.event_unit_height()),
    }
}

/// Popup request for the "+N more" button of a cell
pub fn see_more_request(
    metrics: &PopupMetrics,
    date: NaiveDate,
    events: &[EventUIModel],
    cell_rect: Rect,
    grid_rect: Rect,
    container: &ContainerBox,
) -> SeeMorePopupRequest {
    SeeMorePopupRequest {
        popup_type: PopupType::SeeMore,
        date,
        popup_rect: compute_rect(metrics, cell_rect, grid_rect, container, events.len()),
        events: events.to_vec(),
    }
}
