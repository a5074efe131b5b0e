use std::error::Error;
use std::fmt;
use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScreenSizeError {
    OddWidth { width: u32 },
    TooSmall { width: u32, height: u32, top_margin: u32 },
}

impl fmt::Display for ScreenSizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OddWidth { width } => {
                write!(f, "screen width {} must be even for 2:1 chroma subsampling", width)
            }
            Self::TooSmall { width, height, top_margin } => {
                write!(
                    f,
                    "screen {}x{} leaves no renderable area below a top margin of {} rows",
                    width, height, top_margin
                )
            }
        }
    }
}

impl Error for ScreenSizeError {}

/// Logical screen dimensions plus the rows reserved for overlay text.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ScreenSize {
    width: u32,
    height: u32,
    top_margin: u32,
    renderable: PixelRect,
    renderable_output: PixelRect,
}

impl ScreenSize {
    pub fn new(width: u32, height: u32, top_margin: u32) -> Result<Self, ScreenSizeError> {
        if width % 2 != 0 {
            return Err(ScreenSizeError::OddWidth { width });
        }

        if width < 4 || height < top_margin.saturating_add(2) || height > i32::MAX as u32 {
            return Err(ScreenSizeError::TooSmall { width, height, top_margin });
        }

        let too_small = |_: PixelRectError| ScreenSizeError::TooSmall { width, height, top_margin };
        let origin = Point { x: 0, y: top_margin as i32 };
        let rows = height - top_margin;
        let renderable = PixelRect::from_origin_size(origin, width, rows).map_err(too_small)?;
        let renderable_output =
            PixelRect::from_origin_size(origin, width / 2, rows).map_err(too_small)?;

        Ok(Self {
            width,
            height,
            top_margin,
            renderable,
            renderable_output,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn top_margin(&self) -> u32 {
        self.top_margin
    }

    #[must_use]
    pub fn half_width(&self) -> i32 {
        (self.width / 2) as i32
    }

    #[must_use]
    pub fn half_height(&self) -> i32 {
        (self.height / 2) as i32
    }

    /// Width of the packed output surface: two logical pixels per output pixel.
    #[must_use]
    pub fn output_width(&self) -> u32 {
        self.width / 2
    }

    /// Logical pixels below the top margin.
    #[must_use]
    pub fn renderable_rect(&self) -> PixelRect {
        self.renderable
    }

    /// Output-surface pixels below the top margin.
    #[must_use]
    pub fn renderable_output_rect(&self) -> PixelRect {
        self.renderable_output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderable_rect_skips_top_margin() {
        let screen = ScreenSize::new(640, 480, 20).unwrap();
        let rect = screen.renderable_rect();

        assert_eq!(rect.top_left(), Point { x: 0, y: 20 });
        assert_eq!(rect.bottom_right(), Point { x: 639, y: 479 });
        assert_eq!(screen.output_width(), 320);
        assert_eq!(screen.renderable_output_rect().width(), 320);
        assert_eq!(screen.renderable_output_rect().rows(), 20..480);
        assert_eq!(screen.half_width(), 320);
        assert_eq!(screen.half_height(), 240);
    }

    #[test]
    fn odd_width_is_rejected() {
        assert_eq!(
            ScreenSize::new(641, 480, 20),
            Err(ScreenSizeError::OddWidth { width: 641 })
        );
    }

    #[test]
    fn margin_must_leave_room_to_render() {
        assert_eq!(
            ScreenSize::new(640, 21, 20),
            Err(ScreenSizeError::TooSmall { width: 640, height: 21, top_margin: 20 })
        );
        assert_eq!(
            ScreenSize::new(0, 480, 20),
            Err(ScreenSizeError::TooSmall { width: 0, height: 480, top_margin: 20 })
        );
        assert!(ScreenSize::new(4, 22, 20).is_ok());
    }

    #[test]
    fn smallest_screen_has_one_row_pair_of_output() {
        let screen = ScreenSize::new(4, 22, 20).unwrap();

        assert_eq!(screen.renderable_rect().rows(), 20..22);
        assert_eq!(screen.renderable_rect().width(), 4);
        assert_eq!(screen.renderable_output_rect().width(), 2);
        assert_eq!(screen.renderable_output_rect().columns(), 0..2);
    }
}
