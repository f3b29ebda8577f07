use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum DivergenceFieldError {
    PixelOutsideBounds { pixel: Point, window_size: u32 },
    BoundsMismatch { expected_len: usize, actual_len: usize },
}

impl fmt::Display for DivergenceFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutsideBounds { pixel, window_size } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} field",
                    pixel.x, pixel.y, window_size, window_size
                )
            }
            Self::BoundsMismatch {
                expected_len,
                actual_len,
            } => {
                write!(
                    f,
                    "field needs {} values but {} were supplied",
                    expected_len, actual_len
                )
            }
        }
    }
}

impl Error for DivergenceFieldError {}

/// Escape counts for every pixel of a square window, row-major.
///
/// `0` marks a pixel that never escaped within the iteration budget; any
/// other value is the 1-based iteration at which it escaped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DivergenceField {
    window_size: u32,
    values: Vec<u32>,
}

impl DivergenceField {
    pub fn from_values(window_size: u32, values: Vec<u32>) -> Result<Self, DivergenceFieldError> {
        let expected_len = (window_size as usize) * (window_size as usize);

        if values.len() != expected_len {
            return Err(DivergenceFieldError::BoundsMismatch {
                expected_len,
                actual_len: values.len(),
            });
        }

        Ok(Self::from_computed(window_size, values))
    }

    /// For generators that produce exactly one value per pixel.
    pub(crate) fn from_computed(window_size: u32, values: Vec<u32>) -> Self {
        Self {
            window_size,
            values,
        }
    }

    #[must_use]
    pub fn window_size(&self) -> u32 {
        self.window_size
    }

    #[must_use]
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn value_at(&self, pixel: Point) -> Result<u32, DivergenceFieldError> {
        if pixel.x >= self.window_size || pixel.y >= self.window_size {
            return Err(DivergenceFieldError::PixelOutsideBounds {
                pixel,
                window_size: self.window_size,
            });
        }

        let index = (pixel.y as usize) * (self.window_size as usize) + pixel.x as usize;

        Ok(self.values[index])
    }

    #[must_use]
    pub fn bounded_count(&self) -> usize {
        self.values.iter().filter(|&&value| value == 0).count()
    }
}
