use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::data::divergence_field::DivergenceField;
use crate::core::data::viewport::ViewportConfig;
use crate::core::fractals::escape_time::algorithm::EscapeTimeAlgorithm;
use crate::core::fractals::escape_time::params::FractalParams;
use log::debug;
use std::time::Instant;

/// How a full field is evaluated. Both strategies produce identical fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldStrategy {
    Serial,
    #[default]
    Parallel,
}

/// Computes the divergence speed of every pixel in the viewport.
///
/// The viewport and parameters are copied into the algorithm up front, and
/// the field is returned only once every cell is filled.
#[must_use]
pub fn compute_field(
    viewport: &ViewportConfig,
    params: &FractalParams,
    strategy: FieldStrategy,
) -> DivergenceField {
    let algorithm = EscapeTimeAlgorithm::new(*viewport, *params);
    let start = Instant::now();

    let values = match strategy {
        FieldStrategy::Serial => generate_fractal(&algorithm),
        FieldStrategy::Parallel => generate_fractal_parallel_rayon(&algorithm),
    };

    debug!(
        "{} field {}x{} ({} iterations) computed in {:.3}s",
        params.display_name(),
        viewport.window_size(),
        viewport.window_size(),
        params.max_iterations(),
        start.elapsed().as_secs_f64()
    );

    let field = DivergenceField::from_computed(viewport.window_size(), values);

    debug!(
        "{} of {} pixels bounded",
        field.bounded_count(),
        field.values().len()
    );

    field
}
