use std::error::Error;
use std::fmt;
use crate::core::data::screen_size::ScreenSizeError;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;

/// Startup failures. Nothing in the loop itself fails once constructed.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewerError {
    ScreenSize(ScreenSizeError),
    Mandelbrot(MandelbrotError),
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ScreenSize(err) => write!(f, "invalid screen size: {}", err),
            Self::Mandelbrot(err) => write!(f, "invalid fractal settings: {}", err),
        }
    }
}

impl Error for ViewerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ScreenSize(err) => Some(err),
            Self::Mandelbrot(err) => Some(err),
        }
    }
}

impl From<ScreenSizeError> for ViewerError {
    fn from(err: ScreenSizeError) -> Self {
        Self::ScreenSize(err)
    }
}

impl From<MandelbrotError> for ViewerError {
    fn from(err: MandelbrotError) -> Self {
        Self::Mandelbrot(err)
    }
}
