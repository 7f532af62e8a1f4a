pub mod colour;
pub mod complex;
pub mod pixel_grid;
pub mod point;
pub mod selection;
pub mod viewport;
