pub mod advance;
pub mod animator;
pub mod config;
pub mod dot;
pub mod error;
pub mod frame;
pub mod logging;
pub mod pointer;
pub mod world_gen;

pub use animator::{advance_cursor_trail_system, CursorTrail, Lifecycle};
pub use config::{Rgb, TrailConfig};
pub use error::TrailError;
