use std::path::Path;

use log::info;

use crate::controllers::explorer::{ExplorerConfig, ExplorerError, FractalExplorer};
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;

/// Headless driver: configures an explorer, applies zoom clicks and saves
/// the painted live view through a file presenter.
pub struct CliRenderController<P: FilePresenterPort> {
    presenter: P,
    explorer: FractalExplorer,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> CliRenderController<P> {
    pub fn new(presenter: P, config: ExplorerConfig) -> Result<Self, ExplorerError> {
        let mut explorer = FractalExplorer::new();
        explorer.configure(config)?;

        Ok(Self {
            presenter,
            explorer,
            buffer: None,
        })
    }

    #[must_use]
    pub fn explorer(&self) -> &FractalExplorer {
        &self.explorer
    }

    /// Zooms in about each pixel in turn, as if clicked in order.
    pub fn zoom_in_at(&mut self, clicks: &[Point]) -> Result<(), ExplorerError> {
        for &pixel in clicks {
            self.explorer.zoom_in(pixel)?;
        }

        Ok(())
    }

    pub fn generate(&mut self) -> Result<(), ExplorerError> {
        let buffer = self.explorer.render_current()?;
        let viewport = self.explorer.viewport()?;

        info!(
            "rendered {}x{} frame at scale {} around ({}, {})",
            buffer.window_size(),
            buffer.window_size(),
            viewport.scale(),
            viewport.zoom_position().real,
            viewport.zoom_position().imag
        );

        self.buffer = Some(buffer);

        Ok(())
    }

    /// Writes the last generated frame. Does nothing before [`Self::generate`].
    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if let Some(buffer) = &self.buffer {
            self.presenter.present(buffer, filepath.as_ref())?;
            info!("saved to {}", filepath.as_ref().display());
        }

        Ok(())
    }
}
