use crate::core::data::point::Point;

/// Per-pixel computation over a square window.
///
/// Implementations must be pure: the same pixel always yields the same
/// value, so pixels can be evaluated in any order or in parallel.
pub trait FractalAlgorithm {
    type Success;

    fn window_size(&self) -> u32;

    fn compute(&self, pixel: Point) -> Self::Success;
}
