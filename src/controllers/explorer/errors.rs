use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::GeneratePixelBufferError;
use crate::core::colour_mapping::errors::ColourMapError;
use crate::core::data::viewport::ViewportError;
use crate::core::fractals::escape_time::errors::FractalParamsError;
use crate::core::zoom::PrecomputeError;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ExplorerError {
    /// A compute or navigation call arrived before `configure`.
    NotConfigured,
    InvalidColourSmoothing { smoothing: f64 },
    TooManyPrecomputeLevels { levels: usize, max_levels: usize },
    NoPrecomputedSequence,
    Viewport(ViewportError),
    Params(FractalParamsError),
    Precompute(PrecomputeError),
    ColourMap(ColourMapError),
    Render(GeneratePixelBufferError),
}

impl fmt::Display for ExplorerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotConfigured => write!(f, "explorer used before configure"),
            Self::InvalidColourSmoothing { smoothing } => {
                write!(f, "colour smoothing must be positive and finite: {}", smoothing)
            }
            Self::TooManyPrecomputeLevels { levels, max_levels } => {
                write!(
                    f,
                    "precompute depth {} exceeds the limit of {} levels",
                    levels, max_levels
                )
            }
            Self::NoPrecomputedSequence => write!(f, "no precomputed sequence is active"),
            Self::Viewport(err) => write!(f, "viewport error: {}", err),
            Self::Params(err) => write!(f, "parameter error: {}", err),
            Self::Precompute(err) => write!(f, "precompute error: {}", err),
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::Render(err) => write!(f, "render error: {}", err),
        }
    }
}

impl Error for ExplorerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotConfigured
            | Self::InvalidColourSmoothing { .. }
            | Self::TooManyPrecomputeLevels { .. }
            | Self::NoPrecomputedSequence => None,
            Self::Viewport(err) => Some(err),
            Self::Params(err) => Some(err),
            Self::Precompute(err) => Some(err),
            Self::ColourMap(err) => Some(err),
            Self::Render(err) => Some(err),
        }
    }
}

impl From<ViewportError> for ExplorerError {
    fn from(err: ViewportError) -> Self {
        Self::Viewport(err)
    }
}

impl From<FractalParamsError> for ExplorerError {
    fn from(err: FractalParamsError) -> Self {
        Self::Params(err)
    }
}

impl From<PrecomputeError> for ExplorerError {
    fn from(err: PrecomputeError) -> Self {
        Self::Precompute(err)
    }
}

impl From<ColourMapError> for ExplorerError {
    fn from(err: ColourMapError) -> Self {
        Self::ColourMap(err)
    }
}

impl From<GeneratePixelBufferError> for ExplorerError {
    fn from(err: GeneratePixelBufferError) -> Self {
        Self::Render(err)
    }
}
