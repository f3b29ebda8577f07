use crate::core::data::point::Point;
use crate::core::data::viewport::{ViewportConfig, ViewportError};
use crate::core::util::pixel_to_complex_coords::{
    pixel_to_complex_coords, zoom_position_for_anchor,
};
use log::info;

pub const SCALE_FACTOR: f64 = 2.0;

/// Multiplies the scale by `scale_factor` while keeping the plane point under
/// `pixel` fixed on screen. Leaves `last_zoom_position` and `zoom_index`
/// alone so the precompute walk can reuse it.
pub(crate) fn zoom_in_about(viewport: &mut ViewportConfig, pixel: Point, scale_factor: f64) {
    let anchor = pixel_to_complex_coords(pixel, viewport);

    viewport.scale *= scale_factor;
    viewport.zoom_position =
        zoom_position_for_anchor(anchor, pixel, viewport.half_size(), viewport.scale);
}

/// Owns the live viewport and applies zoom transitions to it.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomController {
    viewport: ViewportConfig,
    scale_factor: f64,
}

impl ZoomController {
    pub fn new(window_size: u32, scale_factor: f64) -> Result<Self, ViewportError> {
        if !scale_factor.is_finite() || scale_factor <= 1.0 {
            return Err(ViewportError::InvalidScaleFactor { scale_factor });
        }

        Ok(Self {
            viewport: ViewportConfig::new(window_size)?,
            scale_factor,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> &ViewportConfig {
        &self.viewport
    }

    #[must_use]
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    pub fn zoom_in(&mut self, pixel: Point) {
        self.viewport.last_zoom_position = self.viewport.zoom_position;
        self.viewport.zoom_index += 1;
        zoom_in_about(&mut self.viewport, pixel, self.scale_factor);

        info!(
            "zoom in at ({}, {}), scale {:.2}^{}",
            pixel.x, pixel.y, self.scale_factor, self.viewport.zoom_index
        );
    }

    /// Undoes the last zoom-in. Only one previous position is remembered, so
    /// a second consecutive zoom-out keeps that same position.
    pub fn zoom_out(&mut self) {
        self.viewport.scale /= self.scale_factor;
        self.viewport.zoom_index -= 1;
        self.viewport.zoom_position = self.viewport.last_zoom_position;

        info!(
            "zoom out, scale {:.2}^{}",
            self.scale_factor, self.viewport.zoom_index
        );
    }

    pub fn reset(&mut self) {
        self.viewport.reset();

        info!("fractal reset");
    }
}
