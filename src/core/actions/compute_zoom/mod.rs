pub mod compute_zoom;
