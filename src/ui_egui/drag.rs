// Event Drag Sessions
//
// Tracks one in-progress move or resize of an event in the month grid:
// Idle -> Armed (pointer down on an event) -> Dragging (pointer moved)
// -> Committed | Cancelled (pointer up) -> Idle.

use chrono::NaiveDate;

use crate::models::grid::{CellInfo, DateMatrix, GridGeometry, GridPosition, PointerSample};
use crate::models::ui::EventUIModel;
use crate::services::event_mutation::{plan_move, plan_resize, EventUpdateRequest};
use crate::services::grid_position::GridPositionFinder;

use super::resize::{resize_preview, EventColumnSpan, ResizePreview};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragKind {
    Move,
    Resize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    /// Pointer is down on an event but has not moved yet
    Armed,
    Dragging,
}

/// Why a finished drag did not change the event
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CancelReason {
    /// Nothing was being dragged
    NoActiveDrag,
    /// The pointer never resolved to a grid cell
    NoPosition,
    /// Dropped back on the cell the drag started from
    NeverLeftOrigin,
    /// Resize released left of the event start or on its current end
    ResizeOrdering,
    /// The planned times do not form a valid event
    InvalidSpan,
    /// A new pointer-down arrived while a drag was active
    Superseded,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DragOutcome {
    Committed(EventUpdateRequest),
    Cancelled(CancelReason),
}

/// State of the active drag
#[derive(Clone, Debug)]
pub struct DragContext {
    pub kind: DragKind,
    /// The rendered segment the drag started on
    pub anchor: EventUIModel,
    pub start_pos: GridPosition,
    pub current_pos: Option<GridPosition>,
    pub phase: DragPhase,
}

/// Owns the single drag session of an interaction surface
#[derive(Debug, Default)]
pub struct DragManager {
    active: Option<DragContext>,
}

impl DragManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> DragPhase {
        self.active
            .as_ref()
            .map_or(DragPhase::Idle, |context| context.phase)
    }

    pub fn active(&self) -> Option<&DragContext> {
        self.active.as_ref()
    }

    pub fn is_active_for(&self, kind: DragKind) -> bool {
        self.active.as_ref().is_some_and(|context| context.kind == kind)
    }

    pub fn current_position(&self) -> Option<GridPosition> {
        self.active.as_ref().and_then(|context| context.current_pos)
    }

    /// Start dragging `anchor` from the cell under `sample`.
    ///
    /// An existing session is cancelled first. Returns `Some` with the reason
    /// when that happened. The new session only starts if the pointer
    /// resolves to a cell.
    pub fn begin(
        &mut self,
        kind: DragKind,
        anchor: EventUIModel,
        sample: PointerSample,
        finder: &GridPositionFinder,
    ) -> Option<CancelReason> {
        let superseded = self.active.take().map(|previous| {
            log::debug!(
                "Drag of event {:?} superseded by a new pointer-down",
                previous.anchor.model.id
            );
            CancelReason::Superseded
        });

        match finder.find(sample) {
            Some(start_pos) => {
                log::debug!(
                    "Begin {:?} of event {:?} at row {} column {}",
                    kind,
                    anchor.model.id,
                    start_pos.row_index,
                    start_pos.column_index
                );
                self.active = Some(DragContext {
                    kind,
                    anchor,
                    start_pos,
                    current_pos: None,
                    phase: DragPhase::Armed,
                });
            }
            None => log::warn!("Pointer-down outside any grid cell, drag not started"),
        }

        superseded
    }

    /// Track the pointer. Keeps the last cell when the sample does not resolve.
    pub fn update(
        &mut self,
        sample: PointerSample,
        finder: &GridPositionFinder,
    ) -> Option<GridPosition> {
        let context = self.active.as_mut()?;

        if let Some(position) = finder.find(sample) {
            context.current_pos = Some(position);
            context.phase = DragPhase::Dragging;
        }

        context.current_pos
    }

    /// Shadow for a move, shown only in the row under the pointer
    pub fn move_preview(&self, row_index: usize, row_layout: &[CellInfo]) -> Option<EventUIModel> {
        let context = self.active.as_ref().filter(|c| c.kind == DragKind::Move)?;
        let current = context.current_pos.filter(|pos| pos.row_index == row_index)?;
        let cell = row_layout.get(current.column_index)?;

        Some(context.anchor.with_layout(cell.left, cell.width))
    }

    /// Width preview for a resize, shown only in the row under the pointer
    pub fn resize_preview(
        &self,
        row_index: usize,
        week_dates: &[NaiveDate],
        geometry: &GridGeometry,
    ) -> Option<ResizePreview> {
        let context = self.active.as_ref().filter(|c| c.kind == DragKind::Resize)?;
        let current = context.current_pos.filter(|pos| pos.row_index == row_index)?;

        resize_preview(&context.anchor, week_dates, current.column_index, geometry)
    }

    /// End the gesture and decide whether it commits. Always returns to Idle.
    pub fn finish(&mut self, dates: &DateMatrix) -> DragOutcome {
        let Some(context) = self.active.take() else {
            return DragOutcome::Cancelled(CancelReason::NoActiveDrag);
        };

        let outcome = Self::evaluate(&context, dates);
        match &outcome {
            DragOutcome::Committed(request) => log::debug!(
                "{:?} of event {:?} committed: {:?}",
                context.kind,
                request.event.id,
                request.event_data
            ),
            DragOutcome::Cancelled(reason) => log::debug!(
                "{:?} of event {:?} cancelled: {:?}",
                context.kind,
                context.anchor.model.id,
                reason
            ),
        }
        outcome
    }

    fn evaluate(context: &DragContext, dates: &DateMatrix) -> DragOutcome {
        let Some(current) = context.current_pos else {
            return DragOutcome::Cancelled(CancelReason::NoPosition);
        };
        let event = &context.anchor.model;

        match context.kind {
            DragKind::Move => {
                if current.date == context.start_pos.date {
                    return DragOutcome::Cancelled(CancelReason::NeverLeftOrigin);
                }
                DragOutcome::Committed(EventUpdateRequest {
                    event: event.clone(),
                    event_data: plan_move(event, current.date),
                })
            }
            DragKind::Resize => {
                let Some(week_dates) = dates.row(current.row_index) else {
                    return DragOutcome::Cancelled(CancelReason::NoPosition);
                };
                let Some(span) = EventColumnSpan::locate(&context.anchor, week_dates) else {
                    return DragOutcome::Cancelled(CancelReason::NoPosition);
                };
                if !span.accepts(current.column_index) {
                    return DragOutcome::Cancelled(CancelReason::ResizeOrdering);
                }
                let Some(target) = week_dates.get(current.column_index) else {
                    return DragOutcome::Cancelled(CancelReason::NoPosition);
                };
                match plan_resize(event, *target) {
                    Some(event_data) => DragOutcome::Committed(EventUpdateRequest {
                        event: event.clone(),
                        event_data,
                    }),
                    None => DragOutcome::Cancelled(CancelReason::InvalidSpan),
                }
            }
        }
    }

    /// Drop any session without committing. Safe to call when idle.
    pub fn clear(&mut self) {
        if let Some(context) = self.active.take() {
            log::debug!("Drag of event {:?} cleared", context.anchor.model.id);
        }
    }
}
