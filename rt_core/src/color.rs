use std::iter::Sum;
use std::ops::{Add, Mul, Sub};

use crate::equal;

/// Linear RGB color. Components are not clamped; values above 1 are
/// legal intermediate results and are only clamped when encoded.
#[derive(Debug, Default, Clone, Copy)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Color {
    pub fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    pub fn white() -> Self {
        Self::new(1., 1., 1.)
    }

    /// Alias for Color::default().
    pub fn black() -> Self {
        Self::default()
    }

    /// From 8-bit channels, where 255 maps to 1.0.
    pub fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red.into(), green.into(), blue.into()).map(|channel| channel / 255.)
    }

    pub fn is_black(&self) -> bool {
        *self == Self::black()
    }

    fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.red), f(self.green), f(self.blue))
    }

    fn zip_with(self, other: Self, f: impl Fn(f64, f64) -> f64) -> Self {
        Self::new(
            f(self.red, other.red),
            f(self.green, other.green),
            f(self.blue, other.blue),
        )
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        equal(self.red, other.red) && equal(self.green, other.green) && equal(self.blue, other.blue)
    }
}

impl Add for Color {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.zip_with(other, |a, b| a + b)
    }
}

impl Sub for Color {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.zip_with(other, |a, b| a - b)
    }
}

impl Mul<f64> for Color {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.map(|channel| channel * rhs)
    }
}

/// Hadamard (component-wise) product, used to filter one color by another.
impl Mul<Self> for Color {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        self.zip_with(other, |a, b| a * b)
    }
}

impl Sum for Color {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::black(), Add::add)
    }
}
