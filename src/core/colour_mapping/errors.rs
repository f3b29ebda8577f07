use std::{error::Error, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColourMapError {
    /// `0` marks a bounded pixel; callers paint it as background instead.
    ZeroSentinel,
    IterationsExceedMax {
        iterations: u32,
        max_iterations: u32,
    },
}

impl fmt::Display for ColourMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSentinel => {
                write!(f, "divergence 0 is the background sentinel and has no colour")
            }
            Self::IterationsExceedMax {
                iterations,
                max_iterations,
            } => {
                write!(
                    f,
                    "iterations {} exceeds maximum {}",
                    iterations, max_iterations
                )
            }
        }
    }
}

impl Error for ColourMapError {}

/// Shared guard for maps keyed on escape counts.
pub(crate) fn check_divergence(iterations: u32, max_iterations: u32) -> Result<(), ColourMapError> {
    if iterations == 0 {
        return Err(ColourMapError::ZeroSentinel);
    }

    if iterations > max_iterations {
        return Err(ColourMapError::IterationsExceedMax {
            iterations,
            max_iterations,
        });
    }

    Ok(())
}
