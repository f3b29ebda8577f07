use std::error::Error;
use std::fmt;

fn window_to_buffer_size(window_size: u32) -> usize {
    (window_size as usize) * (window_size as usize) * 3
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    BoundsMismatch {
        window_size: u32,
        expected_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                window_size,
                expected_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "{}x{} window needs {} bytes but buffer holds {}",
                    window_size, window_size, expected_size, buffer_size
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Packed RGB8 pixels for a square window, row-major.
#[derive(Debug)]
pub struct PixelBuffer {
    window_size: u32,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    pub fn from_data(window_size: u32, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let expected_size = window_to_buffer_size(window_size);

        if expected_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                window_size,
                expected_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self {
            window_size,
            buffer,
        })
    }

    #[must_use]
    pub fn window_size(&self) -> u32 {
        self.window_size
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_data_accepts_exact_size() {
        let data: Vec<u8> = vec![
            255, 0, 0, // (0,0) red
            0, 255, 0, // (1,0) green
            0, 0, 255, // (0,1) blue
            255, 255, 0, // (1,1) yellow
        ];

        let buffer = PixelBuffer::from_data(2, data.clone()).unwrap();

        assert_eq!(buffer.window_size(), 2);
        assert_eq!(buffer.buffer(), &data);
        assert_eq!(buffer.buffer_size(), 12);
    }

    #[test]
    fn from_data_rejects_short_buffer() {
        let result = PixelBuffer::from_data(2, vec![255, 0, 0]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                window_size: 2,
                expected_size: 12,
                buffer_size: 3
            }
        );
    }

    #[test]
    fn from_data_rejects_long_buffer() {
        let result = PixelBuffer::from_data(2, vec![0; 24]);

        assert_eq!(
            result.unwrap_err(),
            PixelBufferError::BoundsMismatch {
                window_size: 2,
                expected_size: 12,
                buffer_size: 24
            }
        );
    }
}
