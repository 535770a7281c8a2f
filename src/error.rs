use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrailError {
    /// The lag formula divides by `count - tail_gap`.
    #[error("invalid point count {count} (tail gap {tail_gap})")]
    InvalidPointCount { count: usize, tail_gap: usize },

    #[error("trail palette must contain at least one color")]
    EmptyPalette,

    #[error("speed bounds must be finite, got min {min} max {max}")]
    InvalidSpeed { min: f64, max: f64 },

    #[error("handle index {index} is out of range for a trail of {count} points")]
    HandleIndexOutOfRange { index: usize, count: usize },

    #[error("graphics error: {0}")]
    Graphics(String),

    #[error("logging setup failed: {0}")]
    Logging(String),
}
