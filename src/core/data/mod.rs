pub mod colour;
pub mod complex;
pub mod divergence_field;
pub mod pixel_buffer;
pub mod point;
pub mod viewport;
