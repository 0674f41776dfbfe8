// Grid Messages
// Outbound notifications from the month grid to the presentation layer

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::ui::EventUIModel;
use crate::services::event_mutation::EventUpdateRequest;
use crate::services::popup::PopupRect;

use super::drag::CancelReason;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PopupType {
    SeeMore,
}

/// Request to open the overflow popup for one date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeeMorePopupRequest {
    pub popup_type: PopupType,
    pub date: NaiveDate,
    pub popup_rect: PopupRect,
    pub events: Vec<EventUIModel>,
}

/// Messages emitted by the month grid
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum GridMessage {
    /// Show a popup
    ShowPopup(SeeMorePopupRequest),
    /// A drag was committed and handed to the event store
    EventUpdated(EventUpdateRequest),
    /// A drag ended without changes
    DragCancelled(CancelReason),
}

impl GridMessage {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
