use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_mapping::errors::ColourMapError;
use crate::core::data::colour::Colour;
use crate::core::data::divergence_field::DivergenceField;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum GeneratePixelBufferError {
    ColourMap(ColourMapError),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for GeneratePixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for GeneratePixelBufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourMap(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<ColourMapError> for GeneratePixelBufferError {
    fn from(err: ColourMapError) -> Self {
        Self::ColourMap(err)
    }
}

impl From<PixelBufferError> for GeneratePixelBufferError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

/// Paints a divergence field into RGB pixels.
///
/// Bounded pixels (value `0`) are never passed to the colour map and stay
/// black, the same as a cleared background.
pub fn generate_pixel_buffer<CMap: ColourMap<u32>>(
    field: &DivergenceField,
    mapper: &CMap,
) -> Result<PixelBuffer, GeneratePixelBufferError> {
    let mut buffer: PixelBufferData = Vec::with_capacity(field.values().len() * 3);

    for &value in field.values() {
        let Colour { r, g, b } = if value == 0 {
            Colour::BLACK
        } else {
            mapper.map(value)?
        };

        buffer.push(r);
        buffer.push(g);
        buffer.push(b);
    }

    Ok(PixelBuffer::from_data(field.window_size(), buffer)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct StubColourMapSuccess {}

    impl ColourMap<u32> for StubColourMapSuccess {
        fn map(&self, value: u32) -> Result<Colour, ColourMapError> {
            if value == 0 {
                return Err(ColourMapError::ZeroSentinel);
            }

            let v = value as u8;
            Ok(Colour { r: v, g: v, b: v })
        }

        fn display_name(&self) -> &str {
            "Stub Success"
        }
    }

    #[derive(Debug)]
    struct StubColourMapFailure {}

    impl ColourMap<u32> for StubColourMapFailure {
        fn map(&self, value: u32) -> Result<Colour, ColourMapError> {
            Err(ColourMapError::IterationsExceedMax {
                iterations: value,
                max_iterations: 0,
            })
        }

        fn display_name(&self) -> &str {
            "Stub Failure"
        }
    }

    #[test]
    fn paints_each_value_in_row_major_order() {
        let field = DivergenceField::from_values(2, vec![1, 2, 3, 4]).unwrap();

        let buffer = generate_pixel_buffer(&field, &StubColourMapSuccess {}).unwrap();

        assert_eq!(buffer.window_size(), 2);
        assert_eq!(
            buffer.buffer(),
            &vec![1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4]
        );
    }

    #[test]
    fn bounded_pixels_stay_black_without_consulting_the_map() {
        let field = DivergenceField::from_values(2, vec![0, 0, 0, 0]).unwrap();

        let buffer = generate_pixel_buffer(&field, &StubColourMapFailure {}).unwrap();

        assert!(buffer.buffer().iter().all(|&byte| byte == 0));
    }

    #[test]
    fn colour_map_failure_is_propagated() {
        let field = DivergenceField::from_values(2, vec![0, 7, 0, 0]).unwrap();

        let result = generate_pixel_buffer(&field, &StubColourMapFailure {});

        assert!(matches!(
            result,
            Err(GeneratePixelBufferError::ColourMap(
                ColourMapError::IterationsExceedMax { iterations: 7, .. }
            ))
        ));
    }
}
