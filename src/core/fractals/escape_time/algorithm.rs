use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::viewport::ViewportConfig;
use crate::core::fractals::escape_time::params::FractalParams;
use crate::core::fractals::escape_time::termination::TerminationPolicy;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;
use std::ops::ControlFlow;

/// Escape-time iteration of `z -> z^2 + c` over a snapshot of the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EscapeTimeAlgorithm {
    viewport: ViewportConfig,
    params: FractalParams,
}

impl FractalAlgorithm for EscapeTimeAlgorithm {
    type Success = u32;

    fn window_size(&self) -> u32 {
        self.viewport.window_size()
    }

    fn compute(&self, pixel: Point) -> Self::Success {
        self.compute_point(pixel)
    }
}

impl EscapeTimeAlgorithm {
    #[must_use]
    pub fn new(viewport: ViewportConfig, params: FractalParams) -> Self {
        Self { viewport, params }
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportConfig {
        &self.viewport
    }

    #[must_use]
    pub fn params(&self) -> &FractalParams {
        &self.params
    }

    /// Divergence speed of one pixel, always in `0..=max_iterations`.
    #[must_use]
    pub fn compute_point(&self, pixel: Point) -> u32 {
        let mapped = pixel_to_complex_coords(pixel, &self.viewport);
        let (z0, c) = self.params.mode().seed(mapped);
        let max_iterations = self.params.max_iterations();

        match self.params.termination() {
            TerminationPolicy::EscapeRadius => {
                escape_time(z0, c, max_iterations, self.params.escape_radius())
            }
            TerminationPolicy::Convergence {
                precision_digits,
                divergence_bound,
            } => convergence_time(z0, c, max_iterations, precision_digits, divergence_bound),
        }
    }
}

fn escape_time(z0: Complex, c: Complex, max_iterations: u32, escape_radius: f64) -> u32 {
    let outcome = (1..=max_iterations).try_fold(z0, |z, iteration| {
        let next = z.square() + c;

        if next.outside_square(escape_radius) {
            ControlFlow::Break(iteration)
        } else {
            ControlFlow::Continue(next)
        }
    });

    match outcome {
        ControlFlow::Break(iteration) => iteration,
        ControlFlow::Continue(_) => 0,
    }
}

fn convergence_time(
    z0: Complex,
    c: Complex,
    max_iterations: u32,
    precision_digits: i32,
    divergence_bound: f64,
) -> u32 {
    let pow_10 = 10f64.powi(precision_digits);
    let round_off = |value: f64| (value * pow_10).round();
    let mut z = z0;

    for iteration in 1..=max_iterations {
        let next = z.square() + c;

        if round_off(z.real) == round_off(next.real) && round_off(z.imag) == round_off(next.imag) {
            return iteration;
        }

        z = next;

        if z.outside_square(divergence_bound) {
            return 0;
        }
    }

    max_iterations
}
