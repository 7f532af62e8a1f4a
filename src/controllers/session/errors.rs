use std::error::Error;
use std::fmt;

use crate::core::actions::compute_zoom::compute_zoom::ZoomError;
use crate::core::actions::render_grid::render_grid::RenderError;
use crate::core::fractals::mandelbrot::errors::IterationCountError;

#[derive(Debug, Clone, PartialEq)]
pub enum RenderSessionError {
    InvalidIterationCount(IterationCountError),
    Zoom(ZoomError),
    Render(RenderError),
    NothingToZoom,
    RenderInProgress,
}

impl fmt::Display for RenderSessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidIterationCount(err) => write!(f, "invalid iteration count: {}", err),
            Self::Zoom(err) => write!(f, "zoom rejected: {}", err),
            Self::Render(err) => write!(f, "render failed: {}", err),
            Self::NothingToZoom => write!(f, "nothing has been rendered yet, cannot zoom"),
            Self::RenderInProgress => write!(f, "another render is already in progress"),
        }
    }
}

impl Error for RenderSessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidIterationCount(err) => Some(err),
            Self::Zoom(err) => Some(err),
            Self::Render(err) => Some(err),
            Self::NothingToZoom | Self::RenderInProgress => None,
        }
    }
}

impl From<IterationCountError> for RenderSessionError {
    fn from(err: IterationCountError) -> Self {
        Self::InvalidIterationCount(err)
    }
}

impl From<ZoomError> for RenderSessionError {
    fn from(err: ZoomError) -> Self {
        Self::Zoom(err)
    }
}

impl From<RenderError> for RenderSessionError {
    fn from(err: RenderError) -> Self {
        Self::Render(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_wraps_inner_error() {
        let err = RenderSessionError::from(IterationCountError::OutOfRange { value: -3 });

        assert_eq!(
            err.to_string(),
            "invalid iteration count: iteration count -3 must be between 1 and 8192"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn test_reentrancy_error_has_no_source() {
        let err = RenderSessionError::RenderInProgress;

        assert_eq!(err.to_string(), "another render is already in progress");
        assert!(err.source().is_none());
    }
}
