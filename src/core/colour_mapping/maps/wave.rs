use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_mapping::errors::{ColourMapError, check_divergence};
use crate::core::colour_mapping::kinds::ColourSchemeKind;
use crate::core::colour_mapping::map::EscapeColourMap;
use crate::core::data::colour::Colour;

const CHANNEL_PHASE: u32 = 85;
const WAVE_PERIOD_DIVISOR: u32 = 15;

/// `125 * sin(n / 15) + 126`, with integer division inside the sine so the
/// channel steps every 15 iterations.
#[must_use]
pub fn wave(n: u32) -> u8 {
    let phase = f64::from(n / WAVE_PERIOD_DIVISOR);

    (125.0 * phase.sin() + 126.0) as u8
}

#[derive(Debug)]
pub struct Wave {
    max_iterations: u32,
}

impl ColourMap<u32> for Wave {
    fn map(&self, iterations: u32) -> Result<Colour, ColourMapError> {
        check_divergence(iterations, self.max_iterations)?;

        Ok(Colour {
            r: wave(iterations),
            g: wave(iterations.saturating_add(CHANNEL_PHASE)),
            b: wave(iterations.saturating_add(2 * CHANNEL_PHASE)),
        })
    }

    fn display_name(&self) -> &str {
        self.kind().display_name()
    }
}

impl EscapeColourMap for Wave {
    fn kind(&self) -> ColourSchemeKind {
        ColourSchemeKind::Wave
    }
}

impl Wave {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wave_is_flat_within_a_step() {
        assert_eq!(wave(0), 126);
        assert_eq!(wave(14), 126);
        assert_eq!(wave(15), 231);
    }

    #[test]
    fn channels_are_phase_shifted() {
        let mapper = Wave::new(100);

        assert_eq!(mapper.map(1), Ok(Colour::new(126, 6, 1)));
        assert_eq!(mapper.map(15), Ok(Colour::new(231, 91, 58)));
        assert_eq!(mapper.map(30), Ok(Colour::new(239, 208, 178)));
    }

    #[test]
    fn map_rejects_zero_sentinel() {
        assert_eq!(Wave::new(100).map(0), Err(ColourMapError::ZeroSentinel));
    }

    #[test]
    fn map_is_pure() {
        let mapper = Wave::new(500);

        for iterations in 1..=500 {
            assert_eq!(mapper.map(iterations), mapper.map(iterations));
        }
    }
}
