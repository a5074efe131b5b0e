use std::num::NonZeroU32;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::screen_size::ScreenSize;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::view::view_transform::ViewTransform;

const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Iterations of `z = z^2 + c` from zero until `|z|^2 >= 4`, capped at `max_iterations`.
#[must_use]
pub fn escape_time(c: Complex, max_iterations: u32) -> u32 {
    let mut z = Complex::ZERO;
    let mut iteration = 0;

    while z.magnitude_squared() < ESCAPE_RADIUS_SQUARED && iteration != max_iterations {
        z = z.square() + c;
        iteration += 1;
    }

    iteration
}

/// Escape-time engine bound to one view transform and iteration limit.
#[derive(Debug, Clone, Copy)]
pub struct MandelbrotAlgorithm {
    screen: ScreenSize,
    view: ViewTransform,
    max_iterations: u32,
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;

    fn compute(&self, pixel: Point) -> u32 {
        escape_time(self.view.pixel_to_complex(pixel, self.screen), self.max_iterations)
    }
}

impl MandelbrotAlgorithm {
    pub fn new(screen: ScreenSize, view: ViewTransform, max_iterations: u32) -> Result<Self, MandelbrotError> {
        let max_iterations = NonZeroU32::new(max_iterations).ok_or(MandelbrotError::ZeroMaxIterationsError)?;

        Ok(Self::with_limit(screen, view, max_iterations))
    }

    /// Infallible form for callers that already hold a non-zero limit.
    #[must_use]
    pub fn with_limit(screen: ScreenSize, view: ViewTransform, max_iterations: NonZeroU32) -> Self {
        Self {
            screen,
            view,
            max_iterations: max_iterations.get(),
        }
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}
