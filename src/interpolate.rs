//! Pure interpolation helpers for lamp attribute transitions.
//!
//! Brightness and saturation fade along a straight numeric line, while hue
//! lives on a circular 0-360 degree color wheel and must fade along the
//! shorter arc, wrapping across the 0/360 boundary when that arc crosses it.
//!
//! Both functions are pure and re-entrant; they can be called from any number
//! of threads with no coordination.

/// Compute the point between two integers at a fractional position.
///
/// Returns `start + (end - start) * position`, with the fractional offset
/// truncated toward zero. The truncation (rather than rounding) biases
/// results toward `start` when `end > start` and toward `end` when
/// `end < start`; callers relying on exact frame values depend on this.
///
/// `position` is not validated: values outside `[0.0, 1.0]` extrapolate
/// linearly past `start`/`end`.
///
/// # Examples
///
/// ```
/// use lamp_fade_rs::interpolate_linear;
///
/// assert_eq!(interpolate_linear(0, 100, 0.5), 50);
/// assert_eq!(interpolate_linear(0, 10, 0.16), 1); // 1.6 truncates to 1
/// assert_eq!(interpolate_linear(10, 0, 0.16), 9); // -1.6 truncates to -1
/// ```
pub fn interpolate_linear(start: i32, end: i32, position: f64) -> i32 {
    let length = end - start;
    // `as i32` truncates toward zero, matching the C-style int cast.
    let offset = (length as f64 * position) as i32;
    start + offset
}

/// Compute the hue between two angles at a fractional position, along the
/// shorter arc of the color wheel.
///
/// `p1` and `p2` are conventionally in `[0, 359]` but are not validated.
/// The result is always normalized into `[0, 359]`.
///
/// When the two hues are exactly 180 degrees apart the arc lengths are equal
/// and the fade always runs through the numerically increasing direction.
///
/// # Examples
///
/// ```
/// use lamp_fade_rs::interpolate_hue;
///
/// // Red to green, halfway: yellow.
/// assert_eq!(interpolate_hue(0, 120, 0.5), 60);
///
/// // The short arc from 350 to 10 crosses the 0/360 boundary.
/// assert_eq!(interpolate_hue(350, 10, 0.5), 0);
/// ```
pub fn interpolate_hue(p1: i32, p2: i32, position: f64) -> i32 {
    let mut difference = p2 - p1;
    // Fold the difference onto the shorter arc. Exactly -180 stays put, so
    // both 180-degree cases run through the increasing direction.
    if difference > 180 {
        difference -= 360;
    } else if difference < -180 {
        difference += 360;
    }

    // Recast so the fade runs from the numerically smaller angle, flipping
    // the position when the endpoints swap.
    let (start, mut end, pos) = if difference > 0 {
        (p1, p2, position)
    } else {
        (p2, p1, 1.0 - position)
    };

    // Unwrap across the 0/360 boundary so the range is increasing.
    while end < start {
        end += 360;
    }

    let result = interpolate_linear(start, end, pos);
    // rem_euclid keeps the result non-negative even when an out-of-range
    // position drives `result` below -360.
    (result + 360).rem_euclid(360)
}
