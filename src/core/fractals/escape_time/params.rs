use crate::core::fractals::escape_time::errors::FractalParamsError;
use crate::core::fractals::escape_time::recurrence::RecurrenceMode;
use crate::core::fractals::escape_time::termination::TerminationPolicy;

pub const DEFAULT_ESCAPE_RADIUS: f64 = 2.0;
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FractalParams {
    mode: RecurrenceMode,
    max_iterations: u32,
    escape_radius: f64,
    termination: TerminationPolicy,
}

impl Default for FractalParams {
    fn default() -> Self {
        Self {
            mode: RecurrenceMode::default(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            escape_radius: DEFAULT_ESCAPE_RADIUS,
            termination: TerminationPolicy::default(),
        }
    }
}

impl FractalParams {
    pub fn new(mode: RecurrenceMode, max_iterations: u32) -> Result<Self, FractalParamsError> {
        if max_iterations == 0 {
            return Err(FractalParamsError::ZeroMaxIterations);
        }

        Ok(Self {
            mode,
            max_iterations,
            ..Self::default()
        })
    }

    pub fn with_escape_radius(mut self, escape_radius: f64) -> Result<Self, FractalParamsError> {
        if !escape_radius.is_finite() || escape_radius <= 0.0 {
            return Err(FractalParamsError::NonPositiveEscapeRadius { escape_radius });
        }

        self.escape_radius = escape_radius;
        Ok(self)
    }

    #[must_use]
    pub fn with_termination(mut self, termination: TerminationPolicy) -> Self {
        self.termination = termination;
        self
    }

    pub fn display_name(&self) -> &str {
        self.mode.kind().display_name()
    }

    #[must_use]
    pub fn mode(&self) -> RecurrenceMode {
        self.mode
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn escape_radius(&self) -> f64 {
        self.escape_radius
    }

    #[must_use]
    pub fn termination(&self) -> TerminationPolicy {
        self.termination
    }

    pub fn set_mode(&mut self, mode: RecurrenceMode) {
        self.mode = mode
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) -> Result<(), FractalParamsError> {
        if max_iterations == 0 {
            return Err(FractalParamsError::ZeroMaxIterations);
        }

        self.max_iterations = max_iterations;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;

    #[test]
    fn zero_max_iterations_is_rejected() {
        assert_eq!(
            FractalParams::new(RecurrenceMode::Mandelbrot, 0),
            Err(FractalParamsError::ZeroMaxIterations)
        );
    }

    #[test]
    fn new_uses_default_radius_and_policy() {
        let params = FractalParams::new(RecurrenceMode::julia(Complex::new(-0.8, 0.156)), 64).unwrap();

        assert_eq!(params.max_iterations(), 64);
        assert_eq!(params.escape_radius(), DEFAULT_ESCAPE_RADIUS);
        assert_eq!(params.termination(), TerminationPolicy::EscapeRadius);
        assert_eq!(params.display_name(), "Julia");
    }

    #[test]
    fn escape_radius_must_be_positive_and_finite() {
        let params = FractalParams::default();

        assert!(params.with_escape_radius(0.0).is_err());
        assert!(params.with_escape_radius(-2.0).is_err());
        assert!(params.with_escape_radius(f64::INFINITY).is_err());
        assert_eq!(params.with_escape_radius(4.0).unwrap().escape_radius(), 4.0);
    }

    #[test]
    fn set_max_iterations_keeps_old_value_on_error() {
        let mut params = FractalParams::default();

        assert!(params.set_max_iterations(0).is_err());
        assert_eq!(params.max_iterations(), DEFAULT_MAX_ITERATIONS);

        params.set_max_iterations(250).unwrap();
        assert_eq!(params.max_iterations(), 250);
    }
}
