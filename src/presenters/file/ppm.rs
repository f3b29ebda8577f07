use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes frames as binary PPM (`P6`, 8 bits per channel).
#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let mut file = BufWriter::new(File::create(filepath)?);
        let size = buffer.window_size();

        writeln!(file, "P6")?;
        writeln!(file, "{} {}", size, size)?;
        writeln!(file, "255")?;
        file.write_all(buffer.buffer())?;
        file.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_header_then_raw_rgb() {
        let data = vec![255, 0, 0, 0, 255, 0, 0, 0, 255, 9, 9, 9];
        let buffer = PixelBuffer::from_data(2, data.clone()).unwrap();
        let path = std::env::temp_dir().join(format!("fractal_zoom_ppm_{}.ppm", std::process::id()));

        PpmFilePresenter::new().present(&buffer, &path).unwrap();

        let written = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        let header = b"P6\n2 2\n255\n";
        assert_eq!(&written[..header.len()], header);
        assert_eq!(&written[header.len()..], data.as_slice());
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let buffer = PixelBuffer::from_data(1, vec![0, 0, 0]).unwrap();
        let path = std::env::temp_dir()
            .join("fractal_zoom_missing_dir")
            .join("nested")
            .join("frame.ppm");

        assert!(PpmFilePresenter::new().present(&buffer, path).is_err());
    }
}
