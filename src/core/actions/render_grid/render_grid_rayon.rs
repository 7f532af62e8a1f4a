use rayon::prelude::*;

use crate::core::actions::render_grid::ports::colour_map::ColourMap;
use crate::core::actions::render_grid::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::render_grid::render_grid::{RenderError, fill_row};
use crate::core::data::pixel_grid::PixelGrid;

/// Renders the grid in parallel using rayon's work-stealing scheduler.
///
/// Rows are handed out as disjoint slices of the one preallocated buffer, so
/// the output is byte-for-byte the same as [`render_grid`](super::render_grid::render_grid).
pub fn render_grid_rayon<Alg, CMap>(
    size: u32,
    algorithm: &Alg,
    colour_map: &CMap,
) -> Result<PixelGrid, RenderError>
where
    Alg: FractalAlgorithm + Sync,
    CMap: ColourMap<Alg::Success> + Sync,
{
    let mut grid = PixelGrid::new(size)?;
    let row_bytes = grid.row_bytes();

    grid.bytes_mut()
        .par_chunks_mut(row_bytes)
        .enumerate()
        .for_each(|(y, row)| fill_row(row, y, algorithm, colour_map));

    Ok(grid)
}
