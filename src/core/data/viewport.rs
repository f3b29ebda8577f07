use crate::core::data::complex::Complex;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewportError {
    ZeroWindowSize,
    InvalidScaleFactor { scale_factor: f64 },
}

impl fmt::Display for ViewportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroWindowSize => write!(f, "window size must be greater than zero"),
            Self::InvalidScaleFactor { scale_factor } => {
                write!(
                    f,
                    "scale factor must be a finite number greater than one: {}",
                    scale_factor
                )
            }
        }
    }
}

impl Error for ViewportError {}

/// Where the user currently is on the complex plane.
///
/// `scale` is the number of pixels per plane unit. It always equals
/// `base_scale() * scale_factor^zoom_index` for the scale factor of the
/// controller that owns the viewport.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewportConfig {
    window_size: u32,
    pub(crate) scale: f64,
    pub(crate) zoom_position: Complex,
    pub(crate) last_zoom_position: Complex,
    pub(crate) zoom_index: i32,
}

impl ViewportConfig {
    pub fn new(window_size: u32) -> Result<Self, ViewportError> {
        if window_size == 0 {
            return Err(ViewportError::ZeroWindowSize);
        }

        let mut viewport = Self {
            window_size,
            scale: 0.0,
            zoom_position: Complex::ORIGIN,
            last_zoom_position: Complex::ORIGIN,
            zoom_index: 0,
        };
        viewport.reset();

        Ok(viewport)
    }

    #[must_use]
    pub fn window_size(&self) -> u32 {
        self.window_size
    }

    /// Scale of the unzoomed view: the plane square `[-2, 2]^2` fills the window.
    #[must_use]
    pub fn base_scale(&self) -> f64 {
        f64::from(self.window_size) / 4.0
    }

    #[must_use]
    pub fn half_size(&self) -> f64 {
        f64::from(self.window_size) / 2.0
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn zoom_position(&self) -> Complex {
        self.zoom_position
    }

    #[must_use]
    pub fn last_zoom_position(&self) -> Complex {
        self.last_zoom_position
    }

    #[must_use]
    pub fn zoom_index(&self) -> i32 {
        self.zoom_index
    }

    pub(crate) fn reset(&mut self) {
        self.scale = self.base_scale();
        self.zoom_position = Complex::ORIGIN;
        self.last_zoom_position = Complex::ORIGIN;
        self.zoom_index = 0;
    }
}
