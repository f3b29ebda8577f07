pub mod controller;
pub mod precompute;

pub use controller::{SCALE_FACTOR, ZoomController};
pub use precompute::{PrecomputeCache, PrecomputeError, PrecomputedSequence, ZOOMS, build_sequence};
