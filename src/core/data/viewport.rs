use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

pub const DEFAULT_ORIGIN: Complex = Complex {
    real: -2.0,
    imag: -1.5,
};
pub const DEFAULT_SCALE: f64 = 1.0 / 333.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    NonFiniteScale { scale_real: f64, scale_imag: f64 },
    NonPositiveScale { scale_real: f64, scale_imag: f64 },
    NonFiniteOrigin { origin: Complex },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteScale {
                scale_real,
                scale_imag,
            } => {
                write!(
                    f,
                    "viewport scale must be finite: real {}, imag {}",
                    scale_real, scale_imag
                )
            }
            Self::NonPositiveScale {
                scale_real,
                scale_imag,
            } => {
                write!(
                    f,
                    "viewport scale must be positive: real {}, imag {}",
                    scale_real, scale_imag
                )
            }
            Self::NonFiniteOrigin { origin } => {
                write!(
                    f,
                    "viewport origin must be finite: ({}, {})",
                    origin.real, origin.imag
                )
            }
        }
    }
}

impl Error for ViewportError {}

/// An axis-aligned window of the complex plane laid over a pixel grid.
///
/// Pixel `(x, y)` maps to `origin + (x · scale_real, y · scale_imag)`, so the
/// origin is the complex point under the top-left pixel.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    origin: Complex,
    scale_real: f64,
    scale_imag: f64,
}

impl Viewport {
    /// Real axis from -2 to 1, imaginary axis from -1.5 to 1.5 on a 1000 pixel grid.
    pub const DEFAULT: Self = Self {
        origin: DEFAULT_ORIGIN,
        scale_real: DEFAULT_SCALE,
        scale_imag: DEFAULT_SCALE,
    };

    pub fn new(origin: Complex, scale_real: f64, scale_imag: f64) -> Result<Self, ViewportError> {
        if !origin.real.is_finite() || !origin.imag.is_finite() {
            return Err(ViewportError::NonFiniteOrigin { origin });
        }

        if !scale_real.is_finite() || !scale_imag.is_finite() {
            return Err(ViewportError::NonFiniteScale {
                scale_real,
                scale_imag,
            });
        }

        if scale_real <= 0.0 || scale_imag <= 0.0 {
            return Err(ViewportError::NonPositiveScale {
                scale_real,
                scale_imag,
            });
        }

        Ok(Self {
            origin,
            scale_real,
            scale_imag,
        })
    }

    #[must_use]
    pub fn origin(&self) -> Complex {
        self.origin
    }

    #[must_use]
    pub fn scale_real(&self) -> f64 {
        self.scale_real
    }

    #[must_use]
    pub fn scale_imag(&self) -> f64 {
        self.scale_imag
    }

    #[inline]
    #[must_use]
    pub fn point_at(&self, pixel: Point) -> Complex {
        Complex {
            real: self.origin.real + f64::from(pixel.x) * self.scale_real,
            imag: self.origin.imag + f64::from(pixel.y) * self.scale_imag,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "origin ({}, {}) scale ({:e}, {:e})",
            self.origin.real, self.origin.imag, self.scale_real, self.scale_imag
        )
    }
}
