use std::fmt::Debug;

use crate::{
    intersection::Intersection, intersections::Intersections, material::Material, Matrix, Ray,
    Result, Tuple,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeType {
    Sphere,
    Plane,
    #[cfg(test)]
    TestShape,
}

/// A primitive that lives in its own object space.
///
/// Implementors only describe the primitive in object space
/// (`local_intersect`, `local_normal_at`); the conversion between world
/// space and object space is done once, here and in [`Intersect`].
pub trait Shape: Debug + Send + Sync {
    /// Returns the `t` values at which the (object space) ray
    /// meets the shape, in ascending order.
    fn local_intersect(&self, local_ray: &Ray) -> Vec<f64>;

    /// Computes the local normal for a given point.
    fn local_normal_at(&self, local_point: Tuple) -> Tuple;

    /// Returns the transformation matrix for this Shape.
    fn transformation(&self) -> &Matrix;

    /// Inverse of `transformation()`, computed once when the transformation is set.
    fn inverse_transformation(&self) -> &Matrix;

    /// Fails without modifying the shape if `transformation` is singular.
    fn set_transformation(&mut self, transformation: Matrix) -> Result<()>;

    fn material(&self) -> &Material;

    fn set_material(&mut self, material: Material);

    /// Gets object type.
    fn shape_type(&self) -> ShapeType;

    /// Computes the normal vector at the world point.
    fn normal_at(&self, world_point: Tuple) -> Result<Tuple> {
        let inverse = self.inverse_transformation();
        let local_point = inverse * world_point;
        let local_normal = self.local_normal_at(local_point);

        // the inverse transpose keeps normals perpendicular to the surface
        // under non-uniform scaling; it can leave garbage in w, which we drop
        let mut world_normal = &inverse.transpose() * local_normal;
        world_normal.w = 0.;
        world_normal.norm()
    }
}

/// Shapes are equal when they would render identically:
/// same kind of primitive, same transformation, same material.
impl PartialEq for dyn Shape {
    fn eq(&self, other: &Self) -> bool {
        self.shape_type() == other.shape_type()
            && self.transformation() == other.transformation()
            && self.material() == other.material()
    }
}

pub trait Intersect {
    /// Computes the intersections of the given world-space ray with this object.
    fn intersect(&self, ray: &Ray) -> Intersections<'_>;
}

impl<S: Shape> Intersect for S {
    fn intersect(&self, ray: &Ray) -> Intersections<'_> {
        intersect_shape(self, ray)
    }
}

impl Intersect for dyn Shape {
    fn intersect(&self, ray: &Ray) -> Intersections<'_> {
        intersect_shape(self, ray)
    }
}

fn intersect_shape<'a>(shape: &'a dyn Shape, ray: &Ray) -> Intersections<'a> {
    // t is invariant under the transformation, so the local t values
    // can be used as they are
    let local_ray = ray.transform(shape.inverse_transformation());
    shape
        .local_intersect(&local_ray)
        .into_iter()
        .map(|t| Intersection::new(t, shape))
        .collect()
}

pub mod sphere {

    use super::*;

    /// Unit sphere centered at the origin of its object space.
    #[derive(Debug, PartialEq, Clone)]
    pub struct Sphere {
        transformation: Matrix,
        inverse: Matrix,
        material: Material,
    }

    impl Sphere {
        pub fn new(transformation: Matrix, material: Material) -> Result<Self> {
            let inverse = transformation.inverse()?;
            Ok(Self {
                transformation,
                inverse,
                material,
            })
        }

        /// Instantiates a new glass Sphere
        /// (transparency = 1, refractive_index = 1.5).
        pub fn glass() -> Self {
            let material = Material {
                transparency: 1.,
                refractive_index: 1.5,
                ..Default::default()
            };
            Self::default().with_material(material)
        }

        pub fn with_transformation(mut self, transformation: Matrix) -> Result<Self> {
            self.set_transformation(transformation)?;
            Ok(self)
        }

        pub fn with_material(mut self, material: Material) -> Self {
            self.material = material;
            self
        }
    }

    impl Default for Sphere {
        fn default() -> Self {
            Self {
                transformation: Matrix::identity(),
                inverse: Matrix::identity(),
                material: Material::default(),
            }
        }
    }

    impl Shape for Sphere {
        /// Returns two values if the ray meets the sphere
        /// (equal ones if it only grazes it), or none if it misses.
        fn local_intersect(&self, ray: &Ray) -> Vec<f64> {
            // the vector from the sphere's center to the ray origin
            let sphere_to_ray = ray.origin - Tuple::point(0., 0., 0.);

            let a = ray.direction.dot(&ray.direction);
            let b = 2. * ray.direction.dot(&sphere_to_ray);
            let c = sphere_to_ray.dot(&sphere_to_ray) - 1.;

            let discriminant = b.powi(2) - 4. * a * c;
            if discriminant < 0. {
                return vec![];
            }

            let t1 = (-b - discriminant.sqrt()) / (2. * a);
            let t2 = (-b + discriminant.sqrt()) / (2. * a);
            vec![t1, t2]
        }

        fn local_normal_at(&self, local_point: Tuple) -> Tuple {
            local_point - Tuple::point(0., 0., 0.)
        }

        fn transformation(&self) -> &Matrix {
            &self.transformation
        }

        fn inverse_transformation(&self) -> &Matrix {
            &self.inverse
        }

        fn set_transformation(&mut self, transformation: Matrix) -> Result<()> {
            self.inverse = transformation.inverse()?;
            self.transformation = transformation;
            Ok(())
        }

        fn material(&self) -> &Material {
            &self.material
        }

        fn set_material(&mut self, material: Material) {
            self.material = material;
        }

        fn shape_type(&self) -> ShapeType {
            ShapeType::Sphere
        }
    }

}

pub mod plane {
    use crate::EPSILON;

    use super::*;

    /// The xz plane of its object space, extending infinitely.
    #[derive(Debug, PartialEq, Clone)]
    pub struct Plane {
        transformation: Matrix,
        inverse: Matrix,
        material: Material,
    }

    impl Plane {
        pub fn new() -> Self {
            Self {
                transformation: Matrix::identity(),
                inverse: Matrix::identity(),
                material: Material::default(),
            }
        }

        pub fn with_transformation(mut self, transformation: Matrix) -> Result<Self> {
            self.set_transformation(transformation)?;
            Ok(self)
        }

        pub fn with_material(mut self, material: Material) -> Self {
            self.material = material;
            self
        }
    }

    impl Default for Plane {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Shape for Plane {
        fn local_intersect(&self, ray: &Ray) -> Vec<f64> {
            // a ray parallel to the plane (or lying in it) never hits it
            if ray.direction.y.abs() < EPSILON {
                return vec![];
            }

            vec![-ray.origin.y / ray.direction.y]
        }

        fn local_normal_at(&self, _point: Tuple) -> Tuple {
            // Every single point on the plane has the same normal
            Tuple::vector(0., 1., 0.)
        }

        fn transformation(&self) -> &Matrix {
            &self.transformation
        }

        fn inverse_transformation(&self) -> &Matrix {
            &self.inverse
        }

        fn set_transformation(&mut self, transformation: Matrix) -> Result<()> {
            self.inverse = transformation.inverse()?;
            self.transformation = transformation;
            Ok(())
        }

        fn material(&self) -> &Material {
            &self.material
        }

        fn set_material(&mut self, material: Material) {
            self.material = material;
        }

        fn shape_type(&self) -> ShapeType {
            ShapeType::Plane
        }
    }

}
