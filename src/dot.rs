use crate::config::Rgb;
use nalgebra::Vector2;

/// Drawable target for one trail point. Lives on an entity owned by the page.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Dot {
    /// Top-left corner of the dot's bounding box, in screen pixels.
    pub position: Vector2<f64>,
    pub color: Rgb,
    pub size: f64,
    pub opacity: f32,
    /// Animator frame that last painted this dot.
    pub painted_at: Option<u64>,
}

impl Dot {
    pub fn center(&self) -> Vector2<f64> {
        self.position.add_scalar(self.size / 2.)
    }

    pub fn alpha(&self) -> u8 {
        (self.opacity.clamp(0., 1.) * 255.).round() as u8
    }
}
