use crate::core::data::complex::Complex;
use crate::core::data::selection::Selection;
use crate::core::data::viewport::{Viewport, ViewportError};
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ZoomError {
    DegenerateSelection { width: u32, height: u32 },
    GridTooSmall { grid_size: u32 },
    InvalidViewport(ViewportError),
}

impl fmt::Display for ZoomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DegenerateSelection { width, height } => {
                write!(
                    f,
                    "zoom selection must have non-zero width and height: {}x{}",
                    width, height
                )
            }
            Self::GridTooSmall { grid_size } => {
                write!(f, "cannot zoom on a grid of {} pixels, need at least 2", grid_size)
            }
            Self::InvalidViewport(err) => write!(f, "zoom produced an invalid viewport: {}", err),
        }
    }
}

impl Error for ZoomError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidViewport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ViewportError> for ZoomError {
    fn from(err: ViewportError) -> Self {
        Self::InvalidViewport(err)
    }
}

/// Maps a selection over a `grid_size` × `grid_size` grid to the viewport it covers.
///
/// The selection's top-left corner becomes the new origin and its extent,
/// measured against the `grid_size - 1` pixel span of the grid, scales the
/// current per-pixel step. Corners outside the grid are pulled to its edge
/// first. A selection with no width or no height is rejected.
pub fn compute_zoom(
    selection: Selection,
    grid_size: u32,
    current: Viewport,
) -> Result<Viewport, ZoomError> {
    if grid_size < 2 {
        return Err(ZoomError::GridTooSmall { grid_size });
    }

    let selection = selection.clamped_to(grid_size);

    if selection.is_degenerate() {
        return Err(ZoomError::DegenerateSelection {
            width: selection.width(),
            height: selection.height(),
        });
    }

    let span = f64::from(grid_size - 1);
    let current_origin = current.origin();

    let origin = Complex {
        real: current_origin.real + f64::from(selection.left()) * current.scale_real(),
        imag: current_origin.imag + f64::from(selection.top()) * current.scale_imag(),
    };
    let scale_real = current.scale_real() * (f64::from(selection.width()) / span);
    let scale_imag = current.scale_imag() * (f64::from(selection.height()) / span);

    Ok(Viewport::new(origin, scale_real, scale_imag)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::point::Point;

    fn selection(x1: i32, y1: i32, x2: i32, y2: i32) -> Selection {
        Selection::new(Point { x: x1, y: y1 }, Point { x: x2, y: y2 })
    }

    #[test]
    fn test_full_grid_selection_is_a_no_op() {
        let result = compute_zoom(selection(0, 0, 999, 999), 1000, Viewport::DEFAULT).unwrap();

        assert_eq!(result, Viewport::DEFAULT);
    }

    #[test]
    fn test_inner_selection_narrows_both_axes() {
        let current = Viewport::DEFAULT;
        let result = compute_zoom(selection(250, 300, 750, 400), 1000, current).unwrap();

        assert!(result.scale_real() < current.scale_real());
        assert!(result.scale_imag() < current.scale_imag());
    }

    #[test]
    fn test_zoom_origin_and_scale() {
        let current = Viewport::new(Complex::ZERO, 1.0, 2.0).unwrap();
        let result = compute_zoom(selection(30, 10, 10, 40), 101, current).unwrap();

        assert_eq!(result.origin(), Complex { real: 10.0, imag: 20.0 });
        assert_eq!(result.scale_real(), 1.0 * (20.0 / 100.0));
        assert_eq!(result.scale_imag(), 2.0 * (30.0 / 100.0));
    }

    #[test]
    fn test_corner_order_does_not_matter() {
        let current = Viewport::DEFAULT;
        let forward = compute_zoom(selection(100, 200, 400, 600), 1000, current).unwrap();
        let backward = compute_zoom(selection(400, 600, 100, 200), 1000, current).unwrap();
        let crossed = compute_zoom(selection(100, 600, 400, 200), 1000, current).unwrap();

        assert_eq!(forward, backward);
        assert_eq!(forward, crossed);
    }

    #[test]
    fn test_successive_zooms_compose() {
        let first = compute_zoom(selection(0, 0, 499, 499), 1000, Viewport::DEFAULT).unwrap();
        let second = compute_zoom(selection(0, 0, 499, 499), 1000, first).unwrap();

        assert!(second.scale_real() < first.scale_real());
        assert_eq!(second.origin(), Viewport::DEFAULT.origin());

        let expected = Viewport::DEFAULT.scale_real() * (499.0 / 999.0) * (499.0 / 999.0);
        assert!((second.scale_real() - expected).abs() < 1e-15);
    }

    #[test]
    fn test_zoomed_viewport_maps_selection_corner() {
        let current = Viewport::DEFAULT;
        let result = compute_zoom(selection(500, 500, 600, 600), 1000, current).unwrap();

        assert_eq!(result.origin(), current.point_at(Point { x: 500, y: 500 }));
    }

    #[test]
    fn test_zero_width_selection_is_degenerate() {
        let result = compute_zoom(selection(300, 100, 300, 500), 1000, Viewport::DEFAULT);

        assert_eq!(
            result,
            Err(ZoomError::DegenerateSelection {
                width: 0,
                height: 400
            })
        );
    }

    #[test]
    fn test_single_click_is_degenerate() {
        let result = compute_zoom(selection(42, 42, 42, 42), 1000, Viewport::DEFAULT);

        assert_eq!(
            result,
            Err(ZoomError::DegenerateSelection {
                width: 0,
                height: 0
            })
        );
    }

    #[test]
    fn test_selection_outside_grid_is_clamped() {
        let clamped = compute_zoom(selection(-50, -50, 1500, 1500), 1000, Viewport::DEFAULT).unwrap();

        assert_eq!(clamped, Viewport::DEFAULT);
    }

    #[test]
    fn test_selection_entirely_past_edge_is_degenerate() {
        let result = compute_zoom(selection(1200, 10, 1300, 90), 1000, Viewport::DEFAULT);

        assert_eq!(
            result,
            Err(ZoomError::DegenerateSelection {
                width: 0,
                height: 80
            })
        );
    }

    #[test]
    fn test_grid_too_small() {
        let result = compute_zoom(selection(0, 0, 1, 1), 1, Viewport::DEFAULT);

        assert_eq!(result, Err(ZoomError::GridTooSmall { grid_size: 1 }));
    }

    #[test]
    fn test_underflowing_scale_is_rejected() {
        let tiny = Viewport::new(Complex::ZERO, f64::MIN_POSITIVE * 1e-15, 1.0).unwrap();
        let result = compute_zoom(selection(0, 0, 1, 999), 1000, tiny);

        assert!(matches!(
            result,
            Err(ZoomError::InvalidViewport(ViewportError::NonPositiveScale { .. }))
        ));
    }

    #[test]
    fn test_error_source_chain() {
        let err = ZoomError::from(ViewportError::NonPositiveScale {
            scale_real: 0.0,
            scale_imag: 1.0,
        });

        assert!(err.source().is_some());
        assert!(
            ZoomError::DegenerateSelection { width: 0, height: 0 }
                .source()
                .is_none()
        );
    }
}
