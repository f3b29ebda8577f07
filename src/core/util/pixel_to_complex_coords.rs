use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::viewport::ViewportConfig;

/// Maps a pixel to the plane point it shows under `viewport`.
///
/// The window center maps to `zoom_position`; pixel rows grow downward while
/// the imaginary axis grows upward, hence the sign flip on `y`.
#[must_use]
pub fn pixel_to_complex_coords(pixel: Point, viewport: &ViewportConfig) -> Complex {
    let half = viewport.half_size();
    let zoom_position = viewport.zoom_position();

    Complex {
        real: (f64::from(pixel.x) - half) / viewport.scale() + zoom_position.real,
        imag: -(f64::from(pixel.y) - half) / viewport.scale() + zoom_position.imag,
    }
}

/// Inverse of [`pixel_to_complex_coords`] solved for the zoom position:
/// the center that puts `anchor` under `pixel` at `scale`.
#[must_use]
pub fn zoom_position_for_anchor(anchor: Complex, pixel: Point, half_size: f64, scale: f64) -> Complex {
    Complex {
        real: anchor.real - (f64::from(pixel.x) - half_size) / scale,
        imag: anchor.imag + (f64::from(pixel.y) - half_size) / scale,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn center_pixel_maps_to_zoom_position() {
        let mut viewport = ViewportConfig::new(16).unwrap();
        viewport.zoom_position = Complex::new(-0.75, 0.1);
        viewport.scale = 1024.0;

        assert_eq!(
            pixel_to_complex_coords(Point::new(8, 8), &viewport),
            Complex::new(-0.75, 0.1)
        );
    }

    #[test]
    fn default_view_spans_minus_two_to_two() {
        let viewport = ViewportConfig::new(16).unwrap();

        assert_eq!(
            pixel_to_complex_coords(Point::new(0, 0), &viewport),
            Complex::new(-2.0, 2.0)
        );
        assert_eq!(
            pixel_to_complex_coords(Point::new(16, 16), &viewport),
            Complex::new(2.0, -2.0)
        );
    }

    #[test]
    fn rows_below_center_have_negative_imaginary_part() {
        let viewport = ViewportConfig::new(100).unwrap();
        let point = pixel_to_complex_coords(Point::new(50, 75), &viewport);

        assert_eq!(point.real, 0.0);
        assert_eq!(point.imag, -1.0);
    }

    #[test]
    fn zoom_position_for_anchor_inverts_mapping() {
        let mut viewport = ViewportConfig::new(64).unwrap();
        viewport.zoom_position = Complex::new(0.3, -0.2);
        viewport.scale = 48.0;
        let pixel = Point::new(5, 41);

        let anchor = pixel_to_complex_coords(pixel, &viewport);
        let recovered =
            zoom_position_for_anchor(anchor, pixel, viewport.half_size(), viewport.scale());

        assert!((recovered.real - 0.3).abs() < EPSILON);
        assert!((recovered.imag + 0.2).abs() < EPSILON);
    }
}
