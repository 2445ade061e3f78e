//! Pure scroll-geometry to animation-state mapping. No document access here;
//! the side-effecting code in `features::sticky_graph` stays thin.

/// Normalized position of the viewport inside the tracking container.
///
/// The scrollable distance is floored at 1 so a track no taller than the
/// viewport yields a finite (and immediately saturated) value instead of
/// dividing by zero.
pub fn scroll_progress(track_top: f32, track_height: f32, viewport_height: f32) -> f32 {
    let scrollable = (track_height - viewport_height).max(1.0);
    ((-track_top) / scrollable).clamp(0.0, 1.0)
}

/// Accelerated reveal: reaches 1.0 when progress hits `divisor` so the line
/// finishes drawing before the user scrolls off the end of the track.
pub fn draw_phase(progress: f32, divisor: f32) -> f32 {
    (progress / divisor).min(1.0)
}

/// Highest threshold strictly exceeded by `progress`, or -1 when none is.
/// Thresholds are ascending, so the result is monotone in `progress`.
pub fn step_index(progress: f32, thresholds: &[f32]) -> i32 {
    let mut index = -1;
    for (i, t) in thresholds.iter().enumerate() {
        if progress > *t {
            index = i as i32;
        }
    }
    index
}
