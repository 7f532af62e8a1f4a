use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;
use std::slice::ChunksExactMut;

pub const BYTES_PER_PIXEL: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelGridError {
    EmptyGrid,
    TooLarge { size: u32 },
}

impl fmt::Display for PixelGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "pixel grid size must be greater than zero"),
            Self::TooLarge { size } => {
                write!(f, "pixel grid of {}x{} does not fit in memory", size, size)
            }
        }
    }
}

impl Error for PixelGridError {}

/// Square RGB image, row-major, three bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    size: u32,
    buffer: Vec<u8>,
}

impl PixelGrid {
    pub fn new(size: u32) -> Result<Self, PixelGridError> {
        if size == 0 {
            return Err(PixelGridError::EmptyGrid);
        }

        let total_bytes = (size as usize)
            .checked_mul(size as usize)
            .and_then(|pixels| pixels.checked_mul(BYTES_PER_PIXEL))
            .ok_or(PixelGridError::TooLarge { size })?;

        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(total_bytes)
            .map_err(|_| PixelGridError::TooLarge { size })?;
        buffer.resize(total_bytes, 0);

        Ok(Self { size, buffer })
    }

    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.buffer
    }

    #[must_use]
    pub fn row_bytes(&self) -> usize {
        self.size as usize * BYTES_PER_PIXEL
    }

    #[must_use]
    pub fn contains_point(&self, pixel: Point) -> bool {
        let size = i64::from(self.size);

        (0..size).contains(&i64::from(pixel.x)) && (0..size).contains(&i64::from(pixel.y))
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<Colour> {
        if !self.contains_point(pixel) {
            return None;
        }

        let index = pixel.y as usize * self.row_bytes() + pixel.x as usize * BYTES_PER_PIXEL;

        Some(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    pub(crate) fn rows_mut(&mut self) -> ChunksExactMut<'_, u8> {
        let row_bytes = self.row_bytes();
        self.buffer.chunks_exact_mut(row_bytes)
    }

    pub(crate) fn bytes_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }
}
