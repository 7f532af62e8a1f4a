//! Render session: the in-process API the presentation shell talks to.
//!
//! The shell hands over iteration counts and zoom selections and gets back
//! finished [`Frame`]s. Everything numeric happens in `core/`.

mod errors;
mod frame;
mod render_config;
mod render_session;

pub use errors::RenderSessionError;
pub use frame::Frame;
pub use render_config::{DEFAULT_GRID_SIZE, RenderConfig, RenderStrategy};
pub use render_session::RenderSession;
