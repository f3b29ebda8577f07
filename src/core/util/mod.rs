pub mod iteration_ramp;
pub mod pixel_to_complex_coords;
