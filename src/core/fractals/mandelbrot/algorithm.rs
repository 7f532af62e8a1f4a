use crate::core::actions::render_grid::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::escape_time::{Classification, classify};

/// Escape-time classification of the pixels of one viewport.
///
/// Holds its own copy of the viewport, so the live view can change while a
/// render that started from it is still running.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    viewport: Viewport,
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = Classification;

    #[inline]
    fn compute(&self, pixel: Point) -> Classification {
        classify(self.viewport.point_at(pixel), self.max_iterations)
    }
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(viewport: Viewport, max_iterations: u32) -> Self {
        Self {
            viewport,
            max_iterations,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}
