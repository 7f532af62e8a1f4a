use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use log::{debug, info, warn};

use crate::controllers::session::errors::RenderSessionError;
use crate::controllers::session::frame::Frame;
use crate::controllers::session::render_config::{RenderConfig, RenderStrategy};
use crate::core::actions::compute_zoom::compute_zoom::compute_zoom;
use crate::core::actions::render_grid::ports::colour_map::ColourMap;
use crate::core::actions::render_grid::render_grid::{RenderError, render_grid};
use crate::core::actions::render_grid::render_grid_rayon::render_grid_rayon;
use crate::core::data::selection::Selection;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::iteration_count::IterationCount;
use crate::core::state::viewport_state::ViewportState;

/// Drives renders and zooms for one view of the set.
///
/// A session accepts one request at a time. A request that arrives while
/// another is running fails with [`RenderSessionError::RenderInProgress`].
/// The viewport and the last frame change together, and only after a render
/// has succeeded, so a rejected request leaves both as they were.
pub struct RenderSession {
    config: RenderConfig,
    viewport_state: Mutex<ViewportState>,
    last_frame: Mutex<Option<Arc<Frame>>>,
    in_flight: AtomicBool,
}

struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

impl RenderSession {
    #[must_use]
    pub fn new(config: RenderConfig) -> Self {
        Self {
            viewport_state: Mutex::new(ViewportState::new(config.default_viewport)),
            last_frame: Mutex::new(None),
            in_flight: AtomicBool::new(false),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport_state().current()
    }

    #[must_use]
    pub fn last_frame(&self) -> Option<Arc<Frame>> {
        self.last_frame_slot().clone()
    }

    #[must_use]
    pub fn is_rendering(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// First render of a session: the default viewport at the given budget.
    pub fn render_initial(&self, iterations: i64) -> Result<Arc<Frame>, RenderSessionError> {
        self.render_default(iterations)
    }

    /// Returns to the default viewport and renders it.
    pub fn render_reset(&self, iterations: i64) -> Result<Arc<Frame>, RenderSessionError> {
        self.render_default(iterations)
    }

    /// Re-renders the live viewport, typically with a new budget.
    pub fn render_current(&self, iterations: i64) -> Result<Arc<Frame>, RenderSessionError> {
        let max_iterations = IterationCount::try_from(iterations).inspect_err(|err| {
            warn!("Rejected render: {}", err);
        })?;
        let _guard = self.begin()?;

        let viewport = self.viewport();
        let frame = self.render(viewport, max_iterations)?;

        Ok(self.store_frame(frame))
    }

    /// Zooms into `selection`, a rectangle over the last rendered grid.
    pub fn render_zoom(
        &self,
        selection: Selection,
        iterations: i64,
    ) -> Result<Arc<Frame>, RenderSessionError> {
        let max_iterations = IterationCount::try_from(iterations).inspect_err(|err| {
            warn!("Rejected zoom: {}", err);
        })?;
        let _guard = self.begin()?;

        if self.last_frame_slot().is_none() {
            warn!("Rejected zoom: nothing rendered yet");
            return Err(RenderSessionError::NothingToZoom);
        }

        let current = self.viewport();
        let viewport = compute_zoom(selection, self.config.grid_size, current).inspect_err(|err| {
            warn!("Rejected zoom: {}", err);
        })?;
        let frame = self.render(viewport, max_iterations)?;

        self.viewport_state().replace(viewport);
        info!("Zoomed to {}", viewport);

        Ok(self.store_frame(frame))
    }

    fn render_default(&self, iterations: i64) -> Result<Arc<Frame>, RenderSessionError> {
        let max_iterations = IterationCount::try_from(iterations).inspect_err(|err| {
            warn!("Rejected render: {}", err);
        })?;
        let _guard = self.begin()?;

        let viewport = self.viewport_state().default_viewport();
        let frame = self.render(viewport, max_iterations)?;

        self.viewport_state().reset();
        info!("Viewport reset to {}", viewport);

        Ok(self.store_frame(frame))
    }

    fn render(&self, viewport: Viewport, max_iterations: IterationCount) -> Result<Frame, RenderError> {
        let algorithm = MandelbrotAlgorithm::new(viewport, max_iterations.get());
        let colour_map = &self.config.colour_map;
        let size = self.config.grid_size;

        debug!(
            "Rendering {}x{} grid, {} iterations, {} ({}, {})",
            size,
            size,
            max_iterations.get(),
            viewport,
            colour_map.display_name(),
            self.config.strategy.display_name()
        );

        let start = Instant::now();
        let grid = match self.config.strategy {
            RenderStrategy::Sequential => render_grid(size, &algorithm, colour_map)?,
            RenderStrategy::Rayon => render_grid_rayon(size, &algorithm, colour_map)?,
        };
        let render_duration = start.elapsed();

        debug!("Render finished in {:?}", render_duration);

        Ok(Frame {
            grid,
            viewport,
            max_iterations: max_iterations.get(),
            render_duration,
        })
    }

    fn begin(&self) -> Result<InFlightGuard<'_>, RenderSessionError> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| {
                warn!("Rejected request: render already in progress");
                RenderSessionError::RenderInProgress
            })?;

        Ok(InFlightGuard {
            flag: &self.in_flight,
        })
    }

    fn store_frame(&self, frame: Frame) -> Arc<Frame> {
        let frame = Arc::new(frame);
        *self.last_frame_slot() = Some(Arc::clone(&frame));
        frame
    }

    fn viewport_state(&self) -> MutexGuard<'_, ViewportState> {
        self.viewport_state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn last_frame_slot(&self) -> MutexGuard<'_, Option<Arc<Frame>>> {
        self.last_frame.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for RenderSession {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}
