pub mod algorithm;
pub mod colour_map;
pub mod errors;
pub mod escape_time;
pub mod iteration_count;
