use std::time::Duration;

use crate::core::data::pixel_grid::PixelGrid;
use crate::core::data::viewport::Viewport;

#[derive(Debug)]
pub struct Frame {
    pub grid: PixelGrid,
    pub viewport: Viewport,
    pub max_iterations: u32,
    pub render_duration: Duration,
}
