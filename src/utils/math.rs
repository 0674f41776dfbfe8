// Numeric helpers for grid geometry

/// Solves `a : b = y : x` for `x`, i.e. `b * y / a`.
///
/// A zero `a` yields 0.0 so degenerate containers map onto the first cell.
pub fn ratio(a: f32, b: f32, y: f32) -> f32 {
    if a == 0.0 {
        return 0.0;
    }
    (b * y) / a
}

/// Clamp `value` into `[min, max]`. `max` wins if the bounds cross.
pub fn limit(value: isize, min: isize, max: isize) -> isize {
    value.max(min).min(max)
}

/// Convert a CSS length token such as `"24px"` or `"24"` into a number.
///
/// Returns NaN when the token is not a number. Callers guard against it.
pub fn px_to_num(value: &str) -> f32 {
    let trimmed = value.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim();
    number.parse::<f32>().unwrap_or(f32::NAN)
}

/// Format a percentage the way layout values are exchanged, e.g. `"12.5%"`
pub fn to_percent(value: f32) -> String {
    format!("{}%", value)
}
