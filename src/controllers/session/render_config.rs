use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::colour_map::TwoToneColourMap;

pub const DEFAULT_GRID_SIZE: u32 = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderStrategy {
    #[default]
    Sequential,
    Rayon,
}

impl RenderStrategy {
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Sequential => "sequential",
            Self::Rayon => "rayon",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    pub grid_size: u32,
    pub default_viewport: Viewport,
    pub colour_map: TwoToneColourMap,
    pub strategy: RenderStrategy,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            default_viewport: Viewport::DEFAULT,
            colour_map: TwoToneColourMap::default(),
            strategy: RenderStrategy::default(),
        }
    }
}
