// Overflow service
// How many events a fixed-height cell has to hide behind "+N more"

/// Number of whole event rows of `unit_height_px` that fit in a cell
///
/// # Panics
/// Panics if `unit_height_px` is not a positive finite number.
pub fn cell_capacity(cell_height_px: f32, unit_height_px: f32) -> usize {
    assert!(
        unit_height_px.is_finite() && unit_height_px > 0.0,
        "event unit height must be positive, got {}",
        unit_height_px
    );
    // Negative or NaN cell heights saturate to zero rows
    (cell_height_px / unit_height_px).floor() as usize
}

/// Events that do not fit in the cell, `max(0, count - capacity)`.
///
/// `unit_height_px` includes the per-event vertical margin.
///
/// # Panics
/// Panics if `unit_height_px` is not a positive finite number.
pub fn exceed_count(event_count: usize, cell_height_px: f32, unit_height_px: f32) -> usize {
    event_count.saturating_sub(cell_capacity(cell_height_px, unit_height_px))
}

pub fn exceed_count_for<T>(events: &[T], cell_height_px: f32, unit_height_px: f32) -> usize {
    exceed_count(events.len(), cell_height_px, unit_height_px)
}
