use crate::core::actions::render_grid::ports::colour_map::ColourMap;
use crate::core::actions::render_grid::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::colour::Colour;
use crate::core::data::pixel_grid::{BYTES_PER_PIXEL, PixelGrid, PixelGridError};
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    PixelGrid(PixelGridError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelGrid(err) => write!(f, "pixel grid error: {}", err),
        }
    }
}

impl Error for RenderError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::PixelGrid(err) => Some(err),
        }
    }
}

impl From<PixelGridError> for RenderError {
    fn from(err: PixelGridError) -> Self {
        Self::PixelGrid(err)
    }
}

/// Renders a `size` × `size` grid one row at a time on the calling thread.
///
/// Each pixel is computed by `algorithm` and written through `colour_map`
/// straight into the grid, which is the only allocation.
pub fn render_grid<Alg, CMap>(
    size: u32,
    algorithm: &Alg,
    colour_map: &CMap,
) -> Result<PixelGrid, RenderError>
where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Success>,
{
    let mut grid = PixelGrid::new(size)?;

    for (y, row) in grid.rows_mut().enumerate() {
        fill_row(row, y, algorithm, colour_map);
    }

    Ok(grid)
}

/// Writes every pixel of row `y`. `row` holds exactly one row of RGB bytes.
#[inline]
pub(crate) fn fill_row<Alg, CMap>(row: &mut [u8], y: usize, algorithm: &Alg, colour_map: &CMap)
where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Success>,
{
    let y = y as i32;

    for (x, pixel) in row.chunks_exact_mut(BYTES_PER_PIXEL).enumerate() {
        let Colour { r, g, b } = colour_map.map(algorithm.compute(Point { x: x as i32, y }));

        pixel[0] = r;
        pixel[1] = g;
        pixel[2] = b;
    }
}
