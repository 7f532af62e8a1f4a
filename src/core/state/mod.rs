pub mod viewport_state;
