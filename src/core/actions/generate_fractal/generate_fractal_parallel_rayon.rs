use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// Rows are the unit of work. Each row is filled by exactly one worker and
/// the rows are stitched back in row-major order, so the output matches
/// [`generate_fractal`](super::generate_fractal::generate_fractal) exactly.
pub fn generate_fractal_parallel_rayon<Alg>(algorithm: &Alg) -> Vec<Alg::Success>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
{
    let window_size = algorithm.window_size();

    let rows: Vec<Vec<Alg::Success>> = (0..window_size)
        .into_par_iter()
        .map(|y| {
            (0..window_size)
                .map(|x| algorithm.compute(Point { x, y }))
                .collect()
        })
        .collect();

    rows.into_iter().flatten().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;

    #[derive(Debug)]
    struct StubAlgorithm {
        window_size: u32,
    }

    impl FractalAlgorithm for StubAlgorithm {
        type Success = u64;

        fn window_size(&self) -> u32 {
            self.window_size
        }

        fn compute(&self, pixel: Point) -> Self::Success {
            u64::from(pixel.x) * 1_000 + u64::from(pixel.y)
        }
    }

    #[test]
    fn test_rayon_generates_same_results_as_sequential() {
        let algorithm = StubAlgorithm { window_size: 10 };

        let sequential_results = generate_fractal(&algorithm);
        let rayon_results = generate_fractal_parallel_rayon(&algorithm);

        assert_eq!(rayon_results, sequential_results);
    }

    #[test]
    fn test_rayon_with_single_pixel() {
        let algorithm = StubAlgorithm { window_size: 1 };

        assert_eq!(generate_fractal_parallel_rayon(&algorithm), vec![0]);
    }

    #[test]
    fn test_rayon_with_large_window() {
        let algorithm = StubAlgorithm { window_size: 200 };

        let sequential_results = generate_fractal(&algorithm);
        let rayon_results = generate_fractal_parallel_rayon(&algorithm);

        assert_eq!(rayon_results.len(), 40_000);
        assert_eq!(rayon_results, sequential_results);
    }
}
