use crate::core::actions::compute_field::FieldStrategy;
use crate::core::colour_mapping::kinds::ColourSchemeKind;
use crate::core::fractals::escape_time::errors::FractalParamsError;
use crate::core::fractals::escape_time::params::{
    DEFAULT_ESCAPE_RADIUS, DEFAULT_MAX_ITERATIONS, FractalParams,
};
use crate::core::fractals::escape_time::recurrence::RecurrenceMode;
use crate::core::fractals::escape_time::termination::TerminationPolicy;
use crate::core::zoom::{SCALE_FACTOR, ZOOMS};

pub const DEFAULT_WINDOW_SIZE: u32 = 768;
pub const DEFAULT_COLOUR_SMOOTHING: f64 = 1.5;

/// Everything [`FractalExplorer::configure`](super::FractalExplorer::configure)
/// needs to start a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorerConfig {
    pub window_size: u32,
    pub mode: RecurrenceMode,
    pub max_iterations: u32,
    pub escape_radius: f64,
    pub termination: TerminationPolicy,
    pub scale_factor: f64,
    pub max_precompute_levels: usize,
    pub colour_scheme: ColourSchemeKind,
    /// Divides the colour ratio further; must be positive.
    pub colour_smoothing: f64,
    pub strategy: FieldStrategy,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            mode: RecurrenceMode::default(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            escape_radius: DEFAULT_ESCAPE_RADIUS,
            termination: TerminationPolicy::default(),
            scale_factor: SCALE_FACTOR,
            max_precompute_levels: ZOOMS,
            colour_scheme: ColourSchemeKind::default(),
            colour_smoothing: DEFAULT_COLOUR_SMOOTHING,
            strategy: FieldStrategy::default(),
        }
    }
}

impl ExplorerConfig {
    /// Defaults for everything except the window and the recurrence.
    #[must_use]
    pub fn new(window_size: u32, mode: RecurrenceMode, max_iterations: u32) -> Self {
        Self {
            window_size,
            mode,
            max_iterations,
            ..Self::default()
        }
    }

    pub(crate) fn fractal_params(&self) -> Result<FractalParams, FractalParamsError> {
        Ok(FractalParams::new(self.mode, self.max_iterations)?
            .with_escape_radius(self.escape_radius)?
            .with_termination(self.termination))
    }
}
