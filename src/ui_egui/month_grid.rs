// Month Grid Interaction Surface
//
// Owns the layout snapshot and the drag session of one month grid. Pointer
// samples come in, event updates go out to the store, and everything the
// presentation layer should react to is queued as a GridMessage.

use chrono::NaiveDate;
use egui::Rect;

use crate::models::grid::{
    ContainerBox, DateMatrix, GridError, GridGeometry, GridPosition, PointerEventKind,
    PointerSample,
};
use crate::models::settings::MonthGridConfig;
use crate::models::ui::EventUIModel;
use crate::services::event_mutation::EventStore;
use crate::services::grid_position::GridPositionFinder;
use crate::services::popup::PopupMetrics;

use super::drag::{CancelReason, DragKind, DragManager, DragOutcome};
use super::messages::GridMessage;
use super::month_cell::{cell_state, see_more_request, CellState};
use super::resize::ResizePreview;

pub struct MonthGrid {
    config: MonthGridConfig,
    metrics: PopupMetrics,
    finder: GridPositionFinder,
    drag: DragManager,
    outbox: Vec<GridMessage>,
}

impl MonthGrid {
    /// Grid for `year-month` with seven equal columns
    pub fn for_month(
        config: MonthGridConfig,
        container: ContainerBox,
        year: i32,
        month: u32,
    ) -> Result<Self, GridError> {
        let dates = DateMatrix::for_month(year, month, config.first_weekday(), config.fixed_weeks)?;
        let geometry = GridGeometry::uniform(7, dates.row_count())?;
        Ok(Self::new(config, GridPositionFinder::new(container, geometry, dates)))
    }

    pub fn new(config: MonthGridConfig, finder: GridPositionFinder) -> Self {
        Self {
            metrics: PopupMetrics::from_config(&config),
            config,
            finder,
            drag: DragManager::new(),
            outbox: Vec::new(),
        }
    }

    pub fn config(&self) -> &MonthGridConfig {
        &self.config
    }

    pub fn finder(&self) -> &GridPositionFinder {
        &self.finder
    }

    pub fn drag(&self) -> &DragManager {
        &self.drag
    }

    /// The container moved or was resized
    pub fn relayout(&mut self, container: ContainerBox) {
        self.finder.set_container(container);
    }

    /// Pointer-down on a rendered event segment
    pub fn begin_drag(&mut self, kind: DragKind, event: EventUIModel, sample: PointerSample) {
        if let Some(reason) = self.drag.begin(kind, event, sample, &self.finder) {
            self.outbox.push(GridMessage::DragCancelled(reason));
        }
    }

    /// Feed one pointer sample. Returns the outcome when it ends a drag.
    pub fn handle_pointer(
        &mut self,
        sample: PointerSample,
        store: &mut dyn EventStore,
    ) -> Option<DragOutcome> {
        match sample.kind {
            PointerEventKind::Down => {
                // pointer capture should prevent this; never leave two sessions
                if self.drag.active().is_some() {
                    self.drag.clear();
                    self.outbox.push(GridMessage::DragCancelled(CancelReason::Superseded));
                }
                None
            }
            PointerEventKind::Move => {
                self.drag.update(sample, &self.finder);
                None
            }
            PointerEventKind::Up => {
                self.drag.active()?;
                self.drag.update(sample, &self.finder);
                let outcome = self.drag.finish(self.finder.dates());
                match &outcome {
                    DragOutcome::Committed(request) => {
                        store.update_event(request.clone());
                        self.outbox.push(GridMessage::EventUpdated(request.clone()));
                    }
                    DragOutcome::Cancelled(reason) => {
                        self.outbox.push(GridMessage::DragCancelled(*reason));
                    }
                }
                Some(outcome)
            }
        }
    }

    /// External "clear drag" signal. Safe to call when idle.
    pub fn clear_drag(&mut self) {
        self.drag.clear();
    }

    pub fn current_position(&self) -> Option<GridPosition> {
        self.drag.current_position()
    }

    /// Move shadow to render in `row_index`, if the pointer is over that row
    pub fn move_preview(&self, row_index: usize) -> Option<EventUIModel> {
        let layout = self.finder.geometry().row_layout();
        self.drag.move_preview(row_index, &layout)
    }

    /// Resize shadow to render in `row_index`, if the pointer is over that row
    pub fn resize_preview(&self, row_index: usize) -> Option<ResizePreview> {
        let week_dates = self.finder.dates().row(row_index)?;
        self.drag
            .resize_preview(row_index, week_dates, self.finder.geometry())
    }

    pub fn cell(&self, date: NaiveDate, events: &[EventUIModel], cell_height: f32) -> CellState {
        cell_state(&self.config, date, events, cell_height)
    }

    /// "+N more" clicked: queue the popup for `date`.
    ///
    /// Dates outside the grid are ignored.
    pub fn open_see_more(
        &mut self,
        date: NaiveDate,
        events: &[EventUIModel],
        cell_rect: Rect,
        grid_rect: Rect,
    ) -> bool {
        if self.finder.dates().position_of(date).is_none() {
            log::debug!("See-more requested for {} which is not on the grid", date);
            return false;
        }

        let request = see_more_request(
            &self.metrics,
            date,
            events,
            cell_rect,
            grid_rect,
            self.finder.container(),
        );
        self.outbox.push(GridMessage::ShowPopup(request));
        true
    }

    /// Hand queued messages to the presentation layer
    pub fn drain_messages(&mut self) -> Vec<GridMessage> {
        std::mem::take(&mut self.outbox)
    }
}
