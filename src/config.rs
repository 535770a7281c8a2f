use crate::error::TrailError;
use nalgebra::Vector2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Rgb {
        Rgb { r, g, b }
    }
}

pub const CYAN: Rgb = Rgb::new(0x00, 0xd9, 0xff);
pub const INDIGO: Rgb = Rgb::new(0x4a, 0x5f, 0xd9);

/// Page background behind the trail.
pub const BACKGROUND: Rgb = Rgb::new(0x0a, 0x0e, 0x27);

#[derive(Clone, Debug, PartialEq)]
pub struct TrailConfig {
    /// Number of trail points, including the lead point.
    pub count: usize,
    /// Colors are assigned cyclically by point index.
    pub palette: Vec<Rgb>,
    pub dot_size: f64,
    pub opacity: f32,
    pub min_speed: f64,
    pub max_speed: f64,
    /// The lag factor reaches `min_speed` at index `count - tail_gap`.
    pub tail_gap: usize,
    /// Subtracted from every pointer position before it becomes the lead.
    pub offset: Vector2<f64>,
}

impl Default for TrailConfig {
    fn default() -> Self {
        TrailConfig {
            count: 50,
            palette: vec![CYAN, CYAN, CYAN, INDIGO, INDIGO, INDIGO],
            dot_size: 25.0,
            opacity: 0.10,
            min_speed: 0.5,
            max_speed: 1.0,
            tail_gap: 10,
            offset: Vector2::new(10.0, 10.0),
        }
    }
}

impl TrailConfig {
    pub fn validate(&self) -> Result<(), TrailError> {
        if self.count == 0 || self.count == self.tail_gap {
            return Err(TrailError::InvalidPointCount {
                count: self.count,
                tail_gap: self.tail_gap,
            });
        }
        if self.palette.is_empty() {
            return Err(TrailError::EmptyPalette);
        }
        if !self.min_speed.is_finite() || !self.max_speed.is_finite() {
            return Err(TrailError::InvalidSpeed {
                min: self.min_speed,
                max: self.max_speed,
            });
        }
        Ok(())
    }

    pub fn color_for(&self, index: usize) -> Rgb {
        self.palette[index % self.palette.len()]
    }
}
