pub mod camera;
pub mod canvas;
pub mod color;
mod common;
mod error;
pub mod intersection;
pub mod intersections;
pub mod light;
pub mod material;
mod matrix;
mod ray;
pub mod shape;
pub mod transformation;
mod tuple;
pub mod world;

pub use camera::{Camera, RenderOptions};
pub use canvas::Canvas;
pub use color::Color;
pub use common::{equal, EPSILON};
pub use error::RayTracerError;
pub use intersection::{Computations, Intersection};
pub use intersections::Intersections;
pub use light::PointLight;
pub use material::Material;
pub use matrix::{Matrix, MatrixError};
pub use ray::Ray;
pub use shape::{plane::Plane, sphere::Sphere, Intersect, Shape, ShapeType};
pub use transformation::view_transform;
pub use tuple::{Tuple, TupleKind};
pub use world::World;

pub type Result<T> = std::result::Result<T, RayTracerError>;
