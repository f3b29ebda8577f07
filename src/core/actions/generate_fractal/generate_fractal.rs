use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Row-major single-threaded evaluation of every pixel in the window.
pub fn generate_fractal<Alg: FractalAlgorithm>(algorithm: &Alg) -> Vec<Alg::Success> {
    let window_size = algorithm.window_size();

    (0..window_size)
        .flat_map(|y| (0..window_size).map(move |x| Point { x, y }))
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubAlgorithm {
        window_size: u32,
    }

    impl FractalAlgorithm for StubAlgorithm {
        type Success = u32;

        fn window_size(&self) -> u32 {
            self.window_size
        }

        fn compute(&self, pixel: Point) -> Self::Success {
            pixel.y * 10 + pixel.x
        }
    }

    #[test]
    fn generates_row_major_order() {
        let results = generate_fractal(&StubAlgorithm { window_size: 3 });

        assert_eq!(results, vec![0, 1, 2, 10, 11, 12, 20, 21, 22]);
    }

    #[test]
    fn empty_window_generates_nothing() {
        let results = generate_fractal(&StubAlgorithm { window_size: 0 });

        assert!(results.is_empty());
    }
}
