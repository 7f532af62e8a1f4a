pub mod compute_zoom;
pub mod render_grid;
