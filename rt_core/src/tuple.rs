use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::{common::equal, error::RayTracerError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TupleKind {
    Point,
    Vector,
}

#[derive(Debug, Clone, Copy)]
pub struct Tuple {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub w: f64,
}

impl Tuple {
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    pub fn point(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z, w: 1.0 }
    }

    pub fn vector(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z, w: 0.0 }
    }

    /// `None` unless w is (within epsilon) 1 or 0,
    /// e.g. for negated points or the sum of two points.
    pub fn kind(&self) -> Option<TupleKind> {
        if equal(self.w, 1.0) {
            Some(TupleKind::Point)
        } else if equal(self.w, 0.0) {
            Some(TupleKind::Vector)
        } else {
            None
        }
    }

    pub fn is_point(&self) -> bool {
        self.kind() == Some(TupleKind::Point)
    }

    pub fn is_vector(&self) -> bool {
        self.kind() == Some(TupleKind::Vector)
    }

    pub fn magnitude(&self) -> f64 {
        let sum = self.x.powi(2) + self.y.powi(2) + self.z.powi(2) + self.w.powi(2);
        sum.sqrt()
    }

    pub fn norm(&self) -> Result<Self> {
        let magnitude = self.magnitude();
        if magnitude == 0. {
            return Err(RayTracerError::ZeroMagnitude);
        }
        Ok(*self / magnitude)
    }

    /// Dot product over all four components.
    /// For vectors w is 0, so this is the usual 3D dot product.
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    pub fn cross(&self, other: &Self) -> Result<Self> {
        if !self.is_vector() || !other.is_vector() {
            return Err(RayTracerError::NonVectorTuple);
        }

        // only implemented for the three-dimensional case,
        // since that's all we need (w is ignored since it's 0)
        Ok(Tuple::vector(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        ))
    }

    /// Reflects this vector around `normal`, which must be a unit vector.
    pub fn reflect(self, normal: Self) -> Result<Self> {
        if !self.is_vector() || !normal.is_vector() {
            return Err(RayTracerError::NonVectorTuple);
        }
        Ok(self - normal * 2. * self.dot(&normal))
    }

    /// Like `+`, but reports point + point as an error instead of
    /// producing a tuple with w = 2.
    pub fn checked_add(self, other: Self) -> Result<Self> {
        if self.is_point() && other.is_point() {
            return Err(RayTracerError::PointAddition);
        }
        Ok(self + other)
    }

    fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z), f(self.w))
    }

    fn zip_with(self, other: Self, f: impl Fn(f64, f64) -> f64) -> Self {
        Self::new(
            f(self.x, other.x),
            f(self.y, other.y),
            f(self.z, other.z),
            f(self.w, other.w),
        )
    }
}

impl PartialEq for Tuple {
    fn eq(&self, other: &Self) -> bool {
        equal(self.x, other.x)
            && equal(self.y, other.y)
            && equal(self.z, other.z)
            && equal(self.w, other.w)
    }
}

impl Add for Tuple {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        debug_assert!(
            !(self.is_point() && other.is_point()),
            "adding two points is meaningless"
        );
        self.zip_with(other, |a, b| a + b)
    }
}

impl Sub for Tuple {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.zip_with(other, |a, b| a - b)
    }
}

impl Neg for Tuple {
    type Output = Self;

    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}

impl Mul<f64> for Tuple {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.map(|c| c * rhs)
    }
}

impl Div<f64> for Tuple {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        self.map(|c| c / rhs)
    }
}
