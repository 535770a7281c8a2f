use crate::config::TrailConfig;
use nalgebra::Vector2;

/// Easing coefficient of point `index` in a trail of `count` points.
///
/// Not clamped: past `count - tail_gap` it drops below `min_speed`, and it
/// turns negative further out. With `count < tail_gap` it exceeds `max_speed`.
pub fn lag_factor(index: usize, count: usize, config: &TrailConfig) -> f64 {
    let span = count as f64 - config.tail_gap as f64;
    config.max_speed - (index as f64 / span) * (config.max_speed - config.min_speed)
}

/// Moves every follower toward its predecessor. Point 0 is left untouched.
///
/// Points are updated in increasing index order, so point `i` chases the
/// position point `i - 1` reached in this same pass.
pub fn advance_trail(points: &mut [Vector2<f64>], config: &TrailConfig) {
    let count = points.len();
    for i in 1..count {
        let lag = lag_factor(i, count, config);
        let prev = points[i - 1];
        let curr = &mut points[i];
        *curr += (prev - *curr) * lag;
    }
}
