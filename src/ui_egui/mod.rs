// Month grid interaction layer

pub mod drag;
pub mod messages;
pub mod month_cell;
pub mod month_grid;
pub mod resize;

pub use month_grid::MonthGrid;
