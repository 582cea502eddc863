use crate::{Color, Tuple};

/// A light source with no size, radiating equally in every direction.
/// Intensity does not fall off with distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Tuple,
    pub intensity: Color,
}

impl PointLight {
    pub fn new(position: Tuple, intensity: Color) -> Self {
        Self {
            position,
            intensity,
        }
    }
}

impl Default for PointLight {
    fn default() -> Self {
        let position = Tuple::point(0., 0., 0.);
        let intensity = Color::white();
        Self::new(position, intensity)
    }
}
