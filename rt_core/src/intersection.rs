use std::ptr;

use crate::{intersections::Intersections, shape::Shape, Ray, Result, Tuple, EPSILON};

/// State of an intersection, precomputed once for shading.
#[derive(Clone, Debug)]
pub struct Computations<'a> {
    pub t: f64,
    pub object: &'a dyn Shape,
    pub point: Tuple,
    pub eye_vector: Tuple,
    pub normal_vector: Tuple,
    pub inside: bool,
    /// `point` nudged along the normal, used to cast shadow and reflection rays
    /// without the surface shadowing itself.
    pub over_point: Tuple,
    /// `point` nudged against the normal, where refracted rays start.
    pub under_point: Tuple,
    pub reflect_vector: Tuple,
    /// Refractive index of the material being exited.
    pub n1: f64,
    /// Refractive index of the material being entered.
    pub n2: f64,
}

impl<'a> Computations<'a> {
    /// Computes the Schlick approximation for Fresnel effect
    /// (i.e. the fraction of light reflected by a transparent surface).
    pub fn schlick(&self) -> f64 {
        // find the cosine of the angle between the eye and the normal vectors
        let mut cos = self.eye_vector.dot(&self.normal_vector);

        if self.n1 > self.n2 {
            let n = self.n1 / self.n2;
            let sin2_t = n.powi(2) * (1. - cos.powi(2));
            if sin2_t > 1. {
                // total internal reflection
                return 1.;
            }

            // when n1 > n2, use cos(theta_t) instead
            cos = (1. - sin2_t).sqrt();
        }

        let r0 = ((self.n1 - self.n2) / (self.n1 + self.n2)).powi(2);
        r0 + (1. - r0) * (1. - cos).powi(5)
    }
}

/// A ray-object intersection: the distance `t` along the ray
/// and the object that was hit.
#[derive(Clone, Copy, Debug)]
pub struct Intersection<'a> {
    pub t: f64,
    pub object: &'a dyn Shape,
}

impl<'a> Intersection<'a> {
    pub fn new(t: f64, object: &'a dyn Shape) -> Self {
        Self { t, object }
    }

    /// Precomputes the point (in world space) where the intersection occurred
    /// the eye vector (pointing back toward the eye/camera)
    /// and the normal vector.
    ///
    /// `intersections` is the full set this intersection belongs to;
    /// it is used to find the refractive indices on both sides of the surface.
    pub fn prepare_computations(
        &self,
        ray: &Ray,
        intersections: &Intersections<'a>,
    ) -> Result<Computations<'a>> {
        let point = ray.position(self.t);
        let eye_vector = -ray.direction;
        let normal_vector = self.object.normal_at(point)?;

        // if the dot product of normal_vector and eye_vector is negative
        // then they're pointing in (roughly) opposite directions
        let (inside, normal_vector) = if normal_vector.dot(&eye_vector) < 0. {
            (true, -normal_vector)
        } else {
            (false, normal_vector)
        };

        let reflect_vector = ray.direction.reflect(normal_vector)?;
        let over_point = point + normal_vector * EPSILON;
        let under_point = point - normal_vector * EPSILON;

        let (n1, n2) = self.refractive_indices(intersections);

        Ok(Computations {
            t: self.t,
            object: self.object,
            point,
            eye_vector,
            normal_vector,
            inside,
            over_point,
            under_point,
            reflect_vector,
            n1,
            n2,
        })
    }

    /// Walks the intersections in order of `t`, keeping track of the objects
    /// the ray is currently inside of. n1 belongs to the material being exited
    /// and n2 to the one being entered; outside of everything it is 1.0.
    fn refractive_indices(&self, intersections: &Intersections<'a>) -> (f64, f64) {
        let sorted;
        let intersections = if intersections.is_sorted() {
            intersections
        } else {
            sorted = intersections.sorted();
            &sorted
        };

        let mut containers: Vec<&dyn Shape> = vec![];
        let (mut n1, mut n2) = (1., 1.);

        for intersection in intersections {
            let is_hit = intersection == self;
            if is_hit {
                n1 = refractive_index(&containers);
            }

            match containers
                .iter()
                .position(|object| ptr::addr_eq(*object, intersection.object))
            {
                Some(position) => {
                    containers.remove(position);
                }
                None => containers.push(intersection.object),
            }

            if is_hit {
                n2 = refractive_index(&containers);
                break;
            }
        }

        (n1, n2)
    }
}

/// Refractive index of the innermost object the ray is in, or vacuum.
fn refractive_index(containers: &[&dyn Shape]) -> f64 {
    containers
        .last()
        .map_or(1., |object| object.material().refractive_index)
}

/// Two intersections are the same when they have the same `t`
/// and refer to the very same object.
impl<'a> PartialEq for Intersection<'a> {
    fn eq(&self, other: &Self) -> bool {
        self.t == other.t && ptr::addr_eq(self.object, other.object)
    }
}
