use crate::core::actions::render_grid::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::fractals::mandelbrot::escape_time::Classification;

/// Paints stable points one colour and divergent points another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwoToneColourMap {
    stable: Colour,
    divergent: Colour,
}

impl ColourMap<Classification> for TwoToneColourMap {
    #[inline]
    fn map(&self, value: Classification) -> Colour {
        match value {
            Classification::Stable => self.stable,
            Classification::Divergent => self.divergent,
        }
    }

    fn display_name(&self) -> &str {
        "Two-tone"
    }
}

impl TwoToneColourMap {
    #[must_use]
    pub fn new(stable: Colour, divergent: Colour) -> Self {
        Self { stable, divergent }
    }

    #[must_use]
    pub fn stable(&self) -> Colour {
        self.stable
    }

    #[must_use]
    pub fn divergent(&self) -> Colour {
        self.divergent
    }
}

impl Default for TwoToneColourMap {
    fn default() -> Self {
        Self::new(Colour::CYAN, Colour::LIGHT_SALMON)
    }
}
