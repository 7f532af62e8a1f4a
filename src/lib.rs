mod controllers;
mod core;
mod presenters;

pub use controllers::ports::file_presenter::FilePresenterPort;
pub use controllers::session::{
    DEFAULT_GRID_SIZE, Frame, RenderConfig, RenderSession, RenderSessionError, RenderStrategy,
};
pub use crate::core::actions::compute_zoom::compute_zoom::{ZoomError, compute_zoom};
pub use crate::core::actions::render_grid::ports::colour_map::ColourMap;
pub use crate::core::actions::render_grid::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::render_grid::render_grid::{RenderError, render_grid};
pub use crate::core::actions::render_grid::render_grid_rayon::render_grid_rayon;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_grid::{PixelGrid, PixelGridError};
pub use crate::core::data::point::Point;
pub use crate::core::data::selection::{Selection, SelectionParseError};
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
pub use crate::core::fractals::mandelbrot::colour_map::TwoToneColourMap;
pub use crate::core::fractals::mandelbrot::errors::IterationCountError;
pub use crate::core::fractals::mandelbrot::escape_time::{
    Classification, DIVERGENCE_THRESHOLD, classify, escape_iteration,
};
pub use crate::core::fractals::mandelbrot::iteration_count::{IterationCount, MAX_ITERATIONS};
pub use crate::core::state::viewport_state::ViewportState;
pub use presenters::file::ppm::{PpmFilePresenter, write_ppm};
