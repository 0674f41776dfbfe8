// Grid module
// Layout description of the month grid: column boundaries, visible dates,
// container box and resolved pointer positions

use chrono::{Datelike, NaiveDate, Weekday};
use egui::{Pos2, Rect, Vec2};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    #[error("grid must have at least one column")]
    NoColumns,
    #[error("grid must have at least one row")]
    NoRows,
    #[error("first column boundary must be 0, got {0}")]
    FirstBoundaryNotZero(f32),
    #[error("column boundaries must be strictly increasing (index {0})")]
    BoundariesNotIncreasing(usize),
    #[error("column boundary {0} is outside [0, 100)")]
    BoundaryOutOfRange(f32),
    #[error("date row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("dates must be consecutive, {found} follows {previous}")]
    DateGap {
        previous: NaiveDate,
        found: NaiveDate,
    },
    #[error("invalid month {year}-{month}")]
    InvalidMonth { year: i32, month: u32 },
}

/// Horizontal placement of one column, as percentages of the row width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellInfo {
    pub left: f32,
    pub width: f32,
}

/// How the grid is sliced: column left boundaries (percent) and row count.
/// Rebuilt whenever the layout changes.
#[derive(Debug, Clone, PartialEq)]
pub struct GridGeometry {
    boundaries: Vec<f32>,
    row_count: usize,
}

impl GridGeometry {
    pub fn new(boundaries: Vec<f32>, row_count: usize) -> Result<Self, GridError> {
        let first = *boundaries.first().ok_or(GridError::NoColumns)?;
        if row_count == 0 {
            return Err(GridError::NoRows);
        }
        if first != 0.0 {
            return Err(GridError::FirstBoundaryNotZero(first));
        }
        if let Some(bad) = boundaries.iter().find(|b| !b.is_finite() || **b >= 100.0) {
            return Err(GridError::BoundaryOutOfRange(*bad));
        }
        if let Some(index) = boundaries.windows(2).position(|pair| pair[1] <= pair[0]) {
            return Err(GridError::BoundariesNotIncreasing(index + 1));
        }

        Ok(Self {
            boundaries,
            row_count,
        })
    }

    /// Equal-width columns
    pub fn uniform(columns: usize, row_count: usize) -> Result<Self, GridError> {
        let width = 100.0 / columns as f32;
        Self::new((0..columns).map(|i| i as f32 * width).collect(), row_count)
    }

    pub fn boundaries(&self) -> &[f32] {
        &self.boundaries
    }

    pub fn column_count(&self) -> usize {
        self.boundaries.len()
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Column containing `percent`, before clamping.
    ///
    /// Right-open lookup: the first boundary strictly greater than `percent`,
    /// minus one. Positions left of the grid give -1.
    pub fn column_at(&self, percent: f32) -> isize {
        self.boundaries.partition_point(|b| *b <= percent) as isize - 1
    }

    pub fn cell(&self, column: usize) -> Option<CellInfo> {
        let left = *self.boundaries.get(column)?;
        let right = self.boundaries.get(column + 1).copied().unwrap_or(100.0);
        Some(CellInfo {
            left,
            width: right - left,
        })
    }

    /// Left/width of every column in a row
    pub fn row_layout(&self) -> Vec<CellInfo> {
        (0..self.column_count()).filter_map(|c| self.cell(c)).collect()
    }

    /// Width from the left edge of `start` to the right edge of `end`.
    /// `None` when `end` precedes `start` or either is out of range.
    pub fn span_width(&self, start: usize, end: usize) -> Option<f32> {
        if end < start {
            return None;
        }
        let first = self.cell(start)?;
        let last = self.cell(end)?;
        Some(last.left + last.width - first.left)
    }
}

/// Visible dates, one row per week
#[derive(Debug, Clone, PartialEq)]
pub struct DateMatrix {
    rows: Vec<Vec<NaiveDate>>,
}

impl DateMatrix {
    /// Validates equal row lengths and consecutive dates with no gaps
    pub fn from_rows(rows: Vec<Vec<NaiveDate>>) -> Result<Self, GridError> {
        let expected = rows.first().ok_or(GridError::NoRows)?.len();
        if expected == 0 {
            return Err(GridError::NoColumns);
        }

        for (index, row) in rows.iter().enumerate() {
            if row.len() != expected {
                return Err(GridError::RaggedRow {
                    row: index,
                    expected,
                    found: row.len(),
                });
            }
        }

        let mut dates = rows.iter().flatten();
        if let Some(mut previous) = dates.next().copied() {
            for &found in dates {
                if previous.succ_opt() != Some(found) {
                    return Err(GridError::DateGap { previous, found });
                }
                previous = found;
            }
        }

        Ok(Self { rows })
    }

    /// Weeks covering `year-month`, starting each week on `first_day_of_week`.
    /// With `fixed_weeks` the matrix always has six rows.
    pub fn for_month(
        year: i32,
        month: u32,
        first_day_of_week: Weekday,
        fixed_weeks: bool,
    ) -> Result<Self, GridError> {
        let invalid = || GridError::InvalidMonth { year, month };
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)?;
        let next_month = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        }
        .ok_or_else(invalid)?;

        let days_in_month = (next_month - first).num_days() as u32;
        let lead = (first.weekday().num_days_from_monday() + 7
            - first_day_of_week.num_days_from_monday())
            % 7;
        let weeks = if fixed_weeks {
            6
        } else {
            (lead + days_in_month).div_ceil(7)
        };

        let grid_start = first - chrono::Duration::days(lead as i64);
        let rows = (0..weeks)
            .map(|week| {
                grid_start
                    .iter_days()
                    .skip(week as usize * 7)
                    .take(7)
                    .collect()
            })
            .collect();

        Self::from_rows(rows)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, index: usize) -> Option<&[NaiveDate]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn get(&self, row: usize, column: usize) -> Option<NaiveDate> {
        self.rows.get(row)?.get(column).copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[NaiveDate]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Row and column of `date`, if visible
    pub fn position_of(&self, date: NaiveDate) -> Option<(usize, usize)> {
        self.rows.iter().enumerate().find_map(|(r, row)| {
            row.iter().position(|d| *d == date).map(|c| (r, c))
        })
    }
}

/// The grid container's bounding box and client border insets
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerBox {
    pub rect: Rect,
    pub client_left: f32,
    pub client_top: f32,
}

impl ContainerBox {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            client_left: 0.0,
            client_top: 0.0,
        }
    }

    pub fn with_client_insets(mut self, client_left: f32, client_top: f32) -> Self {
        self.client_left = client_left;
        self.client_top = client_top;
        self
    }

    pub fn width(&self) -> f32 {
        self.rect.width()
    }

    pub fn height(&self) -> f32 {
        self.rect.height()
    }

    /// `pos` relative to the client box
    pub fn relative(&self, pos: Pos2) -> Vec2 {
        pos - self.rect.min - Vec2::new(self.client_left, self.client_top)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
}

/// One raw pointer reading from the input layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerSample {
    pub position: Pos2,
    pub kind: PointerEventKind,
}

impl PointerSample {
    pub fn new(position: Pos2, kind: PointerEventKind) -> Self {
        Self { position, kind }
    }

    /// Sample the primary pointer from an egui frame's input
    pub fn from_input(input: &egui::InputState) -> Option<Self> {
        let position = input.pointer.latest_pos()?;
        let kind = if input.pointer.primary_pressed() {
            PointerEventKind::Down
        } else if input.pointer.primary_released() {
            PointerEventKind::Up
        } else {
            PointerEventKind::Move
        };
        Some(Self { position, kind })
    }
}

/// A pointer resolved onto the grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPosition {
    pub row_index: usize,
    pub column_index: usize,
    pub date: NaiveDate,
    pub pointer: Pos2,
    pub trigger: PointerEventKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_geometry_validation() {
        assert_eq!(GridGeometry::new(vec![], 1), Err(GridError::NoColumns));
        assert_eq!(GridGeometry::new(vec![0.0], 0), Err(GridError::NoRows));
        assert_eq!(
            GridGeometry::new(vec![5.0, 50.0], 1),
            Err(GridError::FirstBoundaryNotZero(5.0))
        );
        assert_eq!(
            GridGeometry::new(vec![0.0, 50.0, 50.0], 1),
            Err(GridError::BoundariesNotIncreasing(2))
        );
        assert_eq!(
            GridGeometry::new(vec![0.0, 100.0], 1),
            Err(GridError::BoundaryOutOfRange(100.0))
        );
        assert!(GridGeometry::new(vec![0.0, 30.0, 60.0], 4).is_ok());
    }

    #[test]
    fn test_column_at_is_right_open() {
        let geometry = GridGeometry::new(vec![0.0, 25.0, 50.0, 75.0], 1).unwrap();
        assert_eq!(geometry.column_at(-1.0), -1);
        assert_eq!(geometry.column_at(0.0), 0);
        assert_eq!(geometry.column_at(24.9), 0);
        assert_eq!(geometry.column_at(25.0), 1);
        assert_eq!(geometry.column_at(99.0), 3);
        assert_eq!(geometry.column_at(150.0), 3);
    }

    #[test]
    fn test_row_layout_and_span_width() {
        let geometry = GridGeometry::new(vec![0.0, 20.0, 50.0], 1).unwrap();
        let layout = geometry.row_layout();

        assert_eq!(layout.len(), 3);
        assert_eq!(layout[1], CellInfo { left: 20.0, width: 30.0 });
        assert_eq!(layout[2], CellInfo { left: 50.0, width: 50.0 });
        assert_eq!(geometry.span_width(0, 1), Some(50.0));
        assert_eq!(geometry.span_width(1, 2), Some(80.0));
        assert_eq!(geometry.span_width(2, 1), None);
        assert_eq!(geometry.span_width(0, 3), None);
    }

    #[test]
    fn test_date_matrix_rejects_gaps_and_ragged_rows() {
        let ragged = DateMatrix::from_rows(vec![
            vec![date(2024, 3, 1), date(2024, 3, 2)],
            vec![date(2024, 3, 3)],
        ]);
        assert!(matches!(ragged, Err(GridError::RaggedRow { row: 1, .. })));

        let gap = DateMatrix::from_rows(vec![vec![date(2024, 3, 1), date(2024, 3, 3)]]);
        assert!(matches!(gap, Err(GridError::DateGap { .. })));
    }

    #[test]
    fn test_for_month_sunday_start() {
        // March 2024 starts on a Friday
        let matrix = DateMatrix::for_month(2024, 3, Weekday::Sun, false).unwrap();
        assert_eq!(matrix.row_count(), 6);
        assert_eq!(matrix.get(0, 0), Some(date(2024, 2, 25)));
        assert_eq!(matrix.get(0, 5), Some(date(2024, 3, 1)));
        assert_eq!(matrix.get(5, 6), Some(date(2024, 4, 6)));
        assert_eq!(matrix.position_of(date(2024, 3, 15)), Some((2, 5)));
    }

    #[test]
    fn test_for_month_monday_start_and_fixed_weeks() {
        // February 2021 starts on a Monday and fills exactly four weeks
        let matrix = DateMatrix::for_month(2021, 2, Weekday::Mon, false).unwrap();
        assert_eq!(matrix.row_count(), 4);
        assert_eq!(matrix.get(0, 0), Some(date(2021, 2, 1)));

        let fixed = DateMatrix::for_month(2021, 2, Weekday::Mon, true).unwrap();
        assert_eq!(fixed.row_count(), 6);
    }

    #[test]
    fn test_for_month_invalid() {
        assert_eq!(
            DateMatrix::for_month(2024, 13, Weekday::Sun, false),
            Err(GridError::InvalidMonth { year: 2024, month: 13 })
        );
    }

    #[test]
    fn test_container_relative_position() {
        let container = ContainerBox::new(Rect::from_min_size(
            Pos2::new(100.0, 50.0),
            Vec2::new(700.0, 600.0),
        ))
        .with_client_insets(1.0, 2.0);

        assert_eq!(container.relative(Pos2::new(151.0, 82.0)), Vec2::new(50.0, 30.0));
        assert_eq!(container.width(), 700.0);
    }

    #[test]
    fn test_pointer_sample_without_pointer() {
        let input = egui::InputState::default();
        assert!(PointerSample::from_input(&input).is_none());
    }
}
