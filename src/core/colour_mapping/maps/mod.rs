pub mod rainbow_wheel;
pub mod wave;
