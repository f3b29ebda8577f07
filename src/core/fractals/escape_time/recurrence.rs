use crate::core::data::complex::Complex;

/// Constant `c` of the Julia variant in the stock build.
pub const DEFAULT_JULIA_CONSTANT: Complex = Complex::new(-0.18, -0.67);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecurrenceKind {
    #[default]
    Mandelbrot,
    Julia,
}

impl RecurrenceKind {
    pub const ALL: &'static [Self] = &[Self::Mandelbrot, Self::Julia];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
        }
    }
}

impl std::fmt::Display for RecurrenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

/// Which of `z0` and `c` the mapped pixel supplies to `z -> z^2 + c`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum RecurrenceMode {
    /// `c` is the pixel, `z0` is the origin.
    #[default]
    Mandelbrot,
    /// `c` is fixed, `z0` is the pixel.
    Julia { constant: Complex },
}

impl RecurrenceMode {
    #[must_use]
    pub fn julia(constant: Complex) -> Self {
        Self::Julia { constant }
    }

    #[must_use]
    pub fn kind(&self) -> RecurrenceKind {
        match self {
            Self::Mandelbrot => RecurrenceKind::Mandelbrot,
            Self::Julia { .. } => RecurrenceKind::Julia,
        }
    }

    /// Returns `(z0, c)` for a pixel mapped to `point`.
    #[must_use]
    pub fn seed(&self, point: Complex) -> (Complex, Complex) {
        match *self {
            Self::Mandelbrot => (Complex::ORIGIN, point),
            Self::Julia { constant } => (point, constant),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mandelbrot_seeds_from_origin() {
        let point = Complex::new(0.25, -0.5);

        assert_eq!(
            RecurrenceMode::Mandelbrot.seed(point),
            (Complex::ORIGIN, point)
        );
    }

    #[test]
    fn julia_seeds_from_pixel() {
        let point = Complex::new(0.25, -0.5);
        let mode = RecurrenceMode::julia(DEFAULT_JULIA_CONSTANT);

        assert_eq!(mode.seed(point), (point, DEFAULT_JULIA_CONSTANT));
    }

    #[test]
    fn kinds_match_modes() {
        assert_eq!(RecurrenceMode::Mandelbrot.kind(), RecurrenceKind::Mandelbrot);
        assert_eq!(
            RecurrenceMode::julia(Complex::ORIGIN).kind(),
            RecurrenceKind::Julia
        );
    }

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(RecurrenceKind::ALL.first(), Some(&RecurrenceKind::default()));
    }
}
