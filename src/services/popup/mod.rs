// Popup geometry service
//
// Sizes the "see more" popup and picks the corner it is anchored to so that
// it stays inside the application container.

use egui::{Pos2, Rect, Vec2};
use serde::{Serialize, Serializer};

use crate::models::grid::ContainerBox;
use crate::models::settings::MonthGridConfig;
use crate::utils::math::{ratio, to_percent};

/// Metrics the popup is laid out with, resolved from [`MonthGridConfig`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopupMetrics {
    pub padding: f32,
    pub header_height: f32,
    pub header_margin_bottom: f32,
    pub min_width: f32,
    pub max_visible_events: usize,
    /// Event height plus its top margin
    pub event_unit_height: f32,
    pub override_width: Option<f32>,
    pub override_height: Option<f32>,
}

impl PopupMetrics {
    pub fn from_config(config: &MonthGridConfig) -> Self {
        let more_view = &config.more_view;
        Self {
            padding: more_view.padding,
            header_height: more_view.header_height,
            header_margin_bottom: more_view.header_margin_bottom,
            min_width: more_view.min_width,
            max_visible_events: more_view.max_visible_events,
            event_unit_height: config.event_unit_height(),
            override_width: more_view.width,
            override_height: more_view.height,
        }
    }
}

impl Default for PopupMetrics {
    fn default() -> Self {
        Self::from_config(&MonthGridConfig::default())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PopupSize {
    pub width: f32,
    pub height: f32,
}

/// A CSS length as exchanged with the popup renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CssLength {
    Px(f32),
    Percent(f32),
}

impl Serialize for CssLength {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // whole pixels go out as integers: `0`, not `0.0`
            CssLength::Px(value) if value.is_finite() && value.fract() == 0.0 => {
                serializer.serialize_i64(*value as i64)
            }
            CssLength::Px(value) => serializer.serialize_f32(*value),
            CssLength::Percent(value) => serializer.serialize_str(&to_percent(*value)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAnchor {
    Left(CssLength),
    Right(CssLength),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAnchor {
    Top(CssLength),
    Bottom(CssLength),
}

/// Exactly one horizontal and one vertical anchor
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PopupPosition {
    #[serde(flatten)]
    pub horizontal: HorizontalAnchor,
    #[serde(flatten)]
    pub vertical: VerticalAnchor,
}

impl PopupPosition {
    pub fn top_left(left_percent: f32, top_percent: f32) -> Self {
        Self {
            horizontal: HorizontalAnchor::Left(CssLength::Percent(left_percent)),
            vertical: VerticalAnchor::Top(CssLength::Percent(top_percent)),
        }
    }

    pub fn top_right(top_percent: f32) -> Self {
        Self {
            horizontal: HorizontalAnchor::Right(CssLength::Px(0.0)),
            vertical: VerticalAnchor::Top(CssLength::Percent(top_percent)),
        }
    }

    pub fn bottom_left(left_percent: f32) -> Self {
        Self {
            horizontal: HorizontalAnchor::Left(CssLength::Percent(left_percent)),
            vertical: VerticalAnchor::Bottom(CssLength::Px(0.0)),
        }
    }

    pub fn bottom_right() -> Self {
        Self {
            horizontal: HorizontalAnchor::Right(CssLength::Px(0.0)),
            vertical: VerticalAnchor::Bottom(CssLength::Px(0.0)),
        }
    }
}

/// Size and placement handed to the popup renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PopupRect {
    #[serde(flatten)]
    pub size: PopupSize,
    #[serde(flatten)]
    pub position: PopupPosition,
}

/// Popup size for `event_count` events.
///
/// `grid_height` is the height of the row container holding the cell and
/// `cell_width` the cell's rendered width. The height never drops below
/// `grid_height + 2 * padding`; a NaN height (malformed style metrics) is
/// replaced by that floor as well.
pub fn compute_size(
    metrics: &PopupMetrics,
    grid_height: f32,
    cell_width: f32,
    event_count: usize,
) -> PopupSize {
    let min_height = grid_height + metrics.padding * 2.0;

    let width = metrics
        .override_width
        .filter(|width| *width > 0.0)
        .unwrap_or_else(|| (cell_width + metrics.padding * 2.0).max(metrics.min_width));

    let visible = event_count.min(metrics.max_visible_events) as f32;
    let height = metrics.override_height.filter(|height| *height > 0.0).unwrap_or(
        metrics.header_height
            + metrics.header_margin_bottom
            + metrics.padding
            + metrics.event_unit_height * visible,
    );

    let height = if height.is_nan() || height < min_height {
        min_height
    } else {
        height
    };

    PopupSize { width, height }
}

/// Pick the anchor corner for a popup whose top-left would sit at
/// `anchor_percent` (`[left%, top%]` of the container).
///
/// The popup flips to the right/bottom edge once it would reach the
/// container edge (`>=`, so touching the edge also flips).
pub fn compute_position(
    anchor_percent: [f32; 2],
    popup: PopupSize,
    container: Vec2,
) -> PopupPosition {
    let [left, top] = anchor_percent;
    let abs_left = left * container.x / 100.0;
    let abs_top = top * container.y / 100.0;

    let overflows_right = abs_left + popup.width >= container.x;
    let overflows_bottom = abs_top + popup.height >= container.y;

    match (overflows_right, overflows_bottom) {
        (true, true) => PopupPosition::bottom_right(),
        (false, true) => PopupPosition::bottom_left(left),
        (true, false) => PopupPosition::top_right(top),
        (false, false) => PopupPosition::top_left(left, top),
    }
}

/// Where the popup's top-left corner would go, as container percentages:
/// the cell's left edge and the row's top edge, pulled out by the padding.
pub fn anchor_percent(
    cell_rect: Rect,
    grid_rect: Rect,
    container: &ContainerBox,
    padding: f32,
) -> [f32; 2] {
    let relative = container.relative(Pos2::new(cell_rect.min.x, grid_rect.min.y));
    [
        ratio(container.width(), 100.0, relative.x - padding),
        ratio(container.height(), 100.0, relative.y - padding),
    ]
}

/// Size and position of the popup for a cell, in one value
pub fn compute_rect(
    metrics: &PopupMetrics,
    cell_rect: Rect,
    grid_rect: Rect,
    container: &ContainerBox,
    event_count: usize,
) -> PopupRect {
    let size = compute_size(metrics, grid_rect.height(), cell_rect.width(), event_count);
    let anchor = anchor_percent(cell_rect, grid_rect, container, metrics.padding);
    let position = compute_position(
        anchor,
        size,
        Vec2::new(container.width(), container.height()),
    );

    PopupRect { size, position }
}
