use crate::color::Color;

/// A rectangular grid of pixels, stored in row-major order.
/// Colors are kept as computed; nothing is clamped here.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
}

impl Canvas {
    /// Every pixel starts out black.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::black(); width * height],
        }
    }

    /// Builds a canvas from pixels already laid out row by row.
    pub(crate) fn from_pixels(width: usize, height: usize, pixels: Vec<Color>) -> Self {
        debug_assert_eq!(pixels.len(), width * height);
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Panics if x or y are outside the canvas.
    pub fn pixel_at(&self, x: usize, y: usize) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Panics if x or y are outside the canvas.
    pub fn write_pixel(&mut self, x: usize, y: usize, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// The pixels one row at a time, top row first.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.pixels.chunks(self.width.max(1))
    }

    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) is outside of a {}x{} canvas",
            self.width,
            self.height
        );
        y * self.width + x
    }
}
