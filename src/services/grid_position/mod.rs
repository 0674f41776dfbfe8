// Grid position service
// Resolves raw pointer samples onto month grid cells

use crate::models::grid::{ContainerBox, DateMatrix, GridGeometry, GridPosition, PointerSample};
use crate::utils::math::{limit, ratio};

/// Resolve `sample` to the grid cell under it.
///
/// Pointers outside the container clamp to the nearest cell. Returns `None`
/// only when no date exists at the resolved cell.
pub fn find_grid_position(
    sample: PointerSample,
    container: &ContainerBox,
    geometry: &GridGeometry,
    dates: &DateMatrix,
) -> Option<GridPosition> {
    let row_count = geometry.row_count().min(dates.row_count());
    if row_count == 0 {
        return None;
    }

    let relative = container.relative(sample.position);
    let column = geometry.column_at(ratio(container.width(), 100.0, relative.x));
    // `as` saturates and maps NaN to 0, clamping handles the rest
    let row = ratio(container.height(), geometry.row_count() as f32, relative.y).floor() as isize;

    let row_index = limit(row, 0, row_count as isize - 1) as usize;
    let row_dates = dates.row(row_index)?;
    if row_dates.is_empty() {
        return None;
    }

    let column_index = limit(column, 0, row_dates.len() as isize - 1) as usize;
    let date = *row_dates.get(column_index)?;

    Some(GridPosition {
        row_index,
        column_index,
        date,
        pointer: sample.position,
        trigger: sample.kind,
    })
}

/// Layout snapshot used to resolve pointer samples at pointer-move rate
#[derive(Debug, Clone)]
pub struct GridPositionFinder {
    container: ContainerBox,
    geometry: GridGeometry,
    dates: DateMatrix,
}

impl GridPositionFinder {
    pub fn new(container: ContainerBox, geometry: GridGeometry, dates: DateMatrix) -> Self {
        Self {
            container,
            geometry,
            dates,
        }
    }

    pub fn find(&self, sample: PointerSample) -> Option<GridPosition> {
        let position = find_grid_position(sample, &self.container, &self.geometry, &self.dates);
        log::trace!("pointer {:?} resolved to {:?}", sample.position, position);
        position
    }

    pub fn container(&self) -> &ContainerBox {
        &self.container
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    pub fn dates(&self) -> &DateMatrix {
        &self.dates
    }

    /// Container moved or resized without changing the grid itself
    pub fn set_container(&mut self, container: ContainerBox) {
        self.container = container;
    }
}
