use crate::core::data::viewport::Viewport;

/// The single live viewport plus the one it resets to.
///
/// Only [`replace`](Self::replace) and [`reset`](Self::reset) change it; the
/// caller validates viewports before handing them over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportState {
    current: Viewport,
    default: Viewport,
}

impl ViewportState {
    #[must_use]
    pub fn new(default: Viewport) -> Self {
        Self {
            current: default,
            default,
        }
    }

    #[must_use]
    pub fn current(&self) -> Viewport {
        self.current
    }

    #[must_use]
    pub fn default_viewport(&self) -> Viewport {
        self.default
    }

    pub fn reset(&mut self) -> Viewport {
        self.current = self.default;
        self.current
    }

    pub fn replace(&mut self, viewport: Viewport) {
        self.current = viewport;
    }

    #[must_use]
    pub fn is_default(&self) -> bool {
        self.current == self.default
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::new(Viewport::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;

    fn zoomed() -> Viewport {
        Viewport::new(
            Complex {
                real: -0.75,
                imag: 0.1,
            },
            1e-5,
            2e-5,
        )
        .unwrap()
    }

    #[test]
    fn test_starts_at_default() {
        let state = ViewportState::default();

        assert_eq!(state.current(), Viewport::DEFAULT);
        assert_eq!(state.default_viewport(), Viewport::DEFAULT);
        assert!(state.is_default());
    }

    #[test]
    fn test_replace() {
        let mut state = ViewportState::default();
        state.replace(zoomed());

        assert_eq!(state.current(), zoomed());
        assert_eq!(state.default_viewport(), Viewport::DEFAULT);
        assert!(!state.is_default());
    }

    #[test]
    fn test_reset_is_idempotent_regardless_of_history() {
        let mut state = ViewportState::default();

        assert_eq!(state.reset(), Viewport::DEFAULT);

        state.replace(zoomed());
        state.replace(Viewport::new(Complex::ZERO, 1.0, 1.0).unwrap());
        assert_eq!(state.reset(), Viewport::DEFAULT);
        assert_eq!(state.reset(), Viewport::DEFAULT);
        assert_eq!(state.current(), Viewport::DEFAULT);
    }

    #[test]
    fn test_custom_default() {
        let mut state = ViewportState::new(zoomed());
        state.replace(Viewport::DEFAULT);

        assert_eq!(state.reset(), zoomed());
    }
}
