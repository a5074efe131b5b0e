use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::screen_size::ScreenSize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewLimits {
    pub initial_zoom: f64,
    /// Multiplier applied to the zoom scale per zoom pulse.
    pub zoom_factor: f64,
    /// Smallest zoom scale; below this f64 coordinates stop resolving neighbouring pixels.
    pub min_zoom: f64,
}

impl Default for ViewLimits {
    fn default() -> Self {
        Self {
            initial_zoom: 0.007,
            zoom_factor: 0.35,
            min_zoom: 1e-14,
        }
    }
}

/// Pan centre and zoom scale (complex units per logical pixel).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    center_real: f64,
    center_imag: f64,
    prior_center_real: f64,
    prior_center_imag: f64,
    zoom_scale: f64,
}

impl ViewTransform {
    #[must_use]
    pub fn new(limits: &ViewLimits) -> Self {
        Self {
            center_real: 0.0,
            center_imag: 0.0,
            prior_center_real: 0.0,
            prior_center_imag: 0.0,
            zoom_scale: limits.initial_zoom.max(limits.min_zoom),
        }
    }

    #[must_use]
    pub fn center_real(&self) -> f64 {
        self.center_real
    }

    /// Stored with the screen's downward orientation; negate for the mathematical imaginary part.
    #[must_use]
    pub fn center_imag(&self) -> f64 {
        self.center_imag
    }

    #[must_use]
    pub fn prior_center(&self) -> (f64, f64) {
        (self.prior_center_real, self.prior_center_imag)
    }

    #[must_use]
    pub fn zoom_scale(&self) -> f64 {
        self.zoom_scale
    }

    /// Magnification relative to the starting zoom.
    #[must_use]
    pub fn magnification(&self, limits: &ViewLimits) -> f64 {
        limits.initial_zoom / self.zoom_scale
    }

    #[must_use]
    pub fn pixel_to_complex(&self, pixel: Point, screen: ScreenSize) -> Complex {
        let dx = f64::from(pixel.x - screen.half_width());
        let dy = f64::from(pixel.y - screen.half_height());

        Complex {
            real: dx * self.zoom_scale + self.center_real,
            imag: -dy * self.zoom_scale - self.center_imag,
        }
    }

    /// Moves the centre to `pointer`, accumulating onto the previous centre.
    pub fn pan(&mut self, pointer: Point, screen: ScreenSize) {
        let dx = f64::from(pointer.x - screen.half_width());
        let dy = f64::from(pointer.y - screen.half_height());

        self.center_real = dx * self.zoom_scale + self.prior_center_real;
        self.prior_center_real = self.center_real;
        self.center_imag = dy * self.zoom_scale + self.prior_center_imag;
        self.prior_center_imag = self.center_imag;
    }

    pub fn zoom(&mut self, pointer: Point, screen: ScreenSize, limits: &ViewLimits) {
        self.pan(pointer, screen);
        self.zoom_scale = (self.zoom_scale * limits.zoom_factor).max(limits.min_zoom);
    }

    pub fn reset(&mut self, limits: &ViewLimits) {
        *self = Self::new(limits);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> ScreenSize {
        ScreenSize::new(640, 480, 20).unwrap()
    }

    #[test]
    fn default_limits_are_finite_and_consistent() {
        let limits = ViewLimits::default();

        assert!(limits.initial_zoom > limits.min_zoom);
        assert!(limits.min_zoom > 0.0);
        assert!(limits.zoom_factor > 0.0 && limits.zoom_factor < 1.0);
    }

    #[test]
    fn screen_centre_maps_to_origin() {
        let view = ViewTransform::new(&ViewLimits::default());

        assert_eq!(
            view.pixel_to_complex(Point { x: 320, y: 240 }, screen()),
            Complex { real: 0.0, imag: 0.0 }
        );
    }

    #[test]
    fn vertical_axis_is_inverted() {
        let view = ViewTransform::new(&ViewLimits::default());
        let below = view.pixel_to_complex(Point { x: 320, y: 250 }, screen());
        let above = view.pixel_to_complex(Point { x: 320, y: 230 }, screen());

        assert_eq!(below.real, 0.0);
        assert!((below.imag + 0.07).abs() < 1e-12);
        assert!((above.imag - 0.07).abs() < 1e-12);
    }

    #[test]
    fn pans_accumulate() {
        let limits = ViewLimits::default();
        let mut view = ViewTransform::new(&limits);

        view.pan(Point { x: 330, y: 250 }, screen());
        view.pan(Point { x: 330, y: 250 }, screen());

        assert!((view.center_real() - 0.14).abs() < 1e-12);
        assert!((view.center_imag() - 0.14).abs() < 1e-12);
        assert_eq!(view.prior_center(), (view.center_real(), view.center_imag()));
    }

    #[test]
    fn pan_then_reset_restores_initial_view() {
        let limits = ViewLimits::default();
        let initial = ViewTransform::new(&limits);
        let mut view = initial;

        view.pan(Point { x: 17, y: 401 }, screen());
        view.zoom(Point { x: 600, y: 30 }, screen(), &limits);
        view.reset(&limits);

        assert_eq!(view, initial);
    }

    #[test]
    fn zoom_at_centre_scales_without_moving() {
        let limits = ViewLimits::default();
        let mut view = ViewTransform::new(&limits);

        view.zoom(Point { x: 320, y: 240 }, screen(), &limits);

        assert!((view.zoom_scale() - 0.00245).abs() < 1e-15);
        assert_eq!(view.center_real(), 0.0);
        assert_eq!(view.center_imag(), 0.0);
    }

    #[test]
    fn repeated_zoom_stops_at_precision_floor() {
        let limits = ViewLimits::default();
        let mut view = ViewTransform::new(&limits);
        let centre = Point { x: 320, y: 240 };
        let mut expected = limits.initial_zoom;

        for _ in 0..25 {
            view.zoom(centre, screen(), &limits);
            expected *= limits.zoom_factor;
            assert_eq!(view.zoom_scale(), expected);
        }

        for _ in 0..20 {
            view.zoom(centre, screen(), &limits);
        }

        assert_eq!(view.zoom_scale(), limits.min_zoom);

        view.zoom(centre, screen(), &limits);
        assert_eq!(view.zoom_scale(), limits.min_zoom);
    }

    #[test]
    fn magnification_is_relative_to_initial_zoom() {
        let limits = ViewLimits::default();
        let mut view = ViewTransform::new(&limits);

        assert_eq!(view.magnification(&limits), 1.0);

        view.zoom(Point { x: 320, y: 240 }, screen(), &limits);
        assert!((view.magnification(&limits) - 1.0 / 0.35).abs() < 1e-9);
    }
}
