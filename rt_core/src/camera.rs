use std::time::Instant;

use crate::{
    canvas::Canvas,
    world::{World, DEFAULT_REMAINING},
    Color, Matrix, Ray, Result, Tuple,
};

use indicatif::{ParallelProgressIterator, ProgressBar, ProgressIterator, ProgressStyle};
use rayon::prelude::*;

/// Knobs for [`Camera::render_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// How many bounces reflected and refracted rays may take.
    pub max_depth: usize,
    /// Render rows on the rayon thread pool.
    pub parallel: bool,
    /// Draw a progress bar to stderr.
    pub show_progress: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_REMAINING,
            parallel: false,
            show_progress: false,
        }
    }
}

/// Maps the three-dimensional scene onto a two-dimensional canvas.
/// The canvas sits one unit in front of the camera, which looks toward -z.
#[derive(Debug, Clone)]
pub struct Camera {
    hsize: usize,
    vsize: usize,
    field_of_view: f64,
    transformation: Matrix,
    inverse: Matrix,
    half_width: f64,
    half_height: f64,
    pixel_size: f64,
}

impl Camera {
    /// `hsize` and `vsize` are the canvas size in pixels,
    /// `field_of_view` is the horizontal angle (in radians) the camera can see.
    pub fn new(hsize: usize, vsize: usize, field_of_view: f64) -> Self {
        let half_view = (field_of_view / 2.).tan();
        let aspect = hsize as f64 / vsize as f64;

        let (half_width, half_height) = if aspect >= 1. {
            (half_view, half_view / aspect)
        } else {
            (half_view * aspect, half_view)
        };

        let pixel_size = half_width * 2. / hsize as f64;

        log::debug!(
            "Camera {hsize}x{vsize}: half_width={half_width}, half_height={half_height}, pixel_size={pixel_size}"
        );

        Self {
            hsize,
            vsize,
            field_of_view,
            transformation: Matrix::identity(),
            inverse: Matrix::identity(),
            half_width,
            half_height,
            pixel_size,
        }
    }

    /// Fails if `transformation` can't be inverted.
    pub fn with_transformation(mut self, transformation: Matrix) -> Result<Self> {
        self.inverse = transformation.inverse()?;
        self.transformation = transformation;
        Ok(self)
    }

    pub fn hsize(&self) -> usize {
        self.hsize
    }

    pub fn vsize(&self) -> usize {
        self.vsize
    }

    pub fn field_of_view(&self) -> f64 {
        self.field_of_view
    }

    pub fn pixel_size(&self) -> f64 {
        self.pixel_size
    }

    pub fn half_width(&self) -> f64 {
        self.half_width
    }

    pub fn half_height(&self) -> f64 {
        self.half_height
    }

    pub fn transformation(&self) -> &Matrix {
        &self.transformation
    }

    /// Computes the world coordinates at the center of the given pixel,
    /// then constructs a ray that passes through that point.
    pub fn ray_for_pixel(&self, px: usize, py: usize) -> Result<Ray> {
        // the offset from the edge of the canvas to the pixel's center
        let x_offset = (px as f64 + 0.5) * self.pixel_size;
        let y_offset = (py as f64 + 0.5) * self.pixel_size;

        // the untransformed coordinates of the pixel in the world space
        // (the camera looks toward -z, so +x is to the *left*)
        let world_x = self.half_width - x_offset;
        let world_y = self.half_height - y_offset;

        // using the camera matrix, transform the canvas point and the origin,
        // and then compute the ray's direction vector
        // (the canvas is at z=-1)
        let pixel = &self.inverse * Tuple::point(world_x, world_y, -1.);
        let origin = &self.inverse * Tuple::point(0., 0., 0.);
        let direction = (pixel - origin).norm()?;

        Ok(Ray::new(origin, direction))
    }

    /// Renders with the default [`RenderOptions`]: sequentially,
    /// without a progress bar, with the default recursion budget.
    pub fn render(&self, world: &World) -> Result<Canvas> {
        self.render_with(world, &RenderOptions::default())
    }

    /// Creates a canvas and casts a ray through each of its pixels,
    /// coloring the pixels with the colors of the corresponding intersections.
    pub fn render_with(&self, world: &World, options: &RenderOptions) -> Result<Canvas> {
        log::info!(
            "Rendering {}x{} image ({} objects, {} lights)",
            self.hsize,
            self.vsize,
            world.objects().len(),
            world.lights().len()
        );
        if world.lights().is_empty() {
            log::warn!("Rendering a world with no lights");
        }
        let start = Instant::now();

        let progress = if options.show_progress {
            ProgressBar::new(self.vsize as u64)
                .with_style(progress_style())
                .with_message("Rendering...")
        } else {
            ProgressBar::hidden()
        };

        let render_row = |y: usize| -> Result<Vec<Color>> {
            (0..self.hsize)
                .map(|x| {
                    let ray = self.ray_for_pixel(x, y)?;
                    world.color_at(&ray, options.max_depth)
                })
                .collect()
        };

        // each row is produced by exactly one task and stitched together in order
        let rows = if options.parallel {
            (0..self.vsize)
                .into_par_iter()
                .progress_with(progress.clone())
                .map(render_row)
                .collect::<Result<Vec<_>>>()?
        } else {
            (0..self.vsize)
                .progress_with(progress.clone())
                .map(render_row)
                .collect::<Result<Vec<_>>>()?
        };
        progress.finish_and_clear();

        let pixels = rows.into_iter().flatten().collect();
        let image = Canvas::from_pixels(self.hsize, self.vsize, pixels);

        log::info!(
            "Rendered {}x{} image in {:.2?}",
            self.hsize,
            self.vsize,
            start.elapsed()
        );
        Ok(image)
    }
}

fn progress_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{msg} {elapsed:>5} -- {eta:5} {bar:40.cyan/blue} {pos:>7}/{len:7} {percent}%",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
}
