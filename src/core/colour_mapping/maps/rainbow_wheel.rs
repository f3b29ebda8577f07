use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_mapping::errors::{ColourMapError, check_divergence};
use crate::core::colour_mapping::kinds::ColourSchemeKind;
use crate::core::colour_mapping::map::EscapeColourMap;
use crate::core::data::colour::Colour;

const REGION_SPAN: u32 = 256;
const REGIONS: u32 = 6;
const WHEEL_SPAN: u32 = REGION_SPAN * REGIONS;

/// Hue wheel over six linear ramps: red, yellow, green, cyan, blue, magenta
/// and back to red. In each region two channels are fixed and the third
/// moves by the offset into the region.
#[must_use]
pub fn wheel_colour(normalized: u32) -> Colour {
    let normalized = normalized.min(WHEEL_SPAN - 1);
    let region = normalized / REGION_SPAN;
    let offset = (normalized % REGION_SPAN) as u8;

    match region {
        0 => Colour::new(255, offset, 0),
        1 => Colour::new(255 - offset, 255, 0),
        2 => Colour::new(0, 255, offset),
        3 => Colour::new(0, 255 - offset, 255),
        4 => Colour::new(offset, 0, 255),
        _ => Colour::new(255, 0, 255 - offset),
    }
}

/// Maps a ratio in `[0, 1)` onto [`wheel_colour`]. Ratios outside that
/// range are clamped to the first and last wheel positions.
#[must_use]
pub fn rainbow_wheel(ratio: f64) -> Colour {
    let scaled = ratio * f64::from(WHEEL_SPAN);
    let normalized = if scaled.is_nan() || scaled <= 0.0 {
        0
    } else {
        (scaled as u32).min(WHEEL_SPAN - 1)
    };

    wheel_colour(normalized)
}

#[derive(Debug)]
pub struct RainbowWheel {
    max_iterations: u32,
    smoothing: f64,
}

impl ColourMap<u32> for RainbowWheel {
    fn map(&self, iterations: u32) -> Result<Colour, ColourMapError> {
        check_divergence(iterations, self.max_iterations)?;

        let ratio = f64::from(iterations) / (f64::from(self.max_iterations) * self.smoothing);

        Ok(rainbow_wheel(ratio))
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl EscapeColourMap for RainbowWheel {
    fn kind(&self) -> ColourSchemeKind {
        ColourSchemeKind::RainbowWheel
    }
}

impl RainbowWheel {
    /// `smoothing` stretches the ratio denominator; `1.5` keeps the
    /// deepest escapes away from the red end of the wheel.
    #[must_use]
    pub fn new(max_iterations: u32, smoothing: f64) -> Self {
        Self {
            max_iterations,
            smoothing,
        }
    }
}
