use std::path::Path;

use crate::core::data::pixel_grid::PixelGrid;

pub trait FilePresenterPort {
    fn present(&self, grid: &PixelGrid, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
