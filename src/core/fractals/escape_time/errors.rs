use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FractalParamsError {
    ZeroMaxIterations,
    NonPositiveEscapeRadius { escape_radius: f64 },
}

impl fmt::Display for FractalParamsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "Maximum iterations must be greater than zero")
            }
            Self::NonPositiveEscapeRadius { escape_radius } => {
                write!(f, "Escape radius must be positive and finite: {}", escape_radius)
            }
        }
    }
}

impl Error for FractalParamsError {}
