use crate::{Matrix, Tuple};

/// Ray.origin is a point, Ray.direction is a vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Tuple,
    pub direction: Tuple,
}

impl Ray {
    /// Origin should be a point, direction should be a vector.
    pub fn new(origin: Tuple, direction: Tuple) -> Self {
        debug_assert!(origin.is_point(), "ray origin must be a point");
        debug_assert!(direction.is_vector(), "ray direction must be a vector");
        Self { origin, direction }
    }

    pub fn position(&self, t: f64) -> Tuple {
        self.origin + self.direction * t
    }

    /// The direction is deliberately left unnormalized, so that t values
    /// in the transformed space line up with t values in the original one.
    pub fn transform(&self, matrix: &Matrix) -> Self {
        let origin = matrix * self.origin;
        let direction = matrix * self.direction;
        Self { origin, direction }
    }
}
