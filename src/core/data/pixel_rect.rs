use std::error::Error;
use std::fmt;
use std::ops::Range;
use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PixelRectError {
    InvalidSize { width: i64, height: i64 },
}

impl fmt::Display for PixelRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "pixel rect must be at least 2x2: {}x{}", width, height)
            }
        }
    }
}

impl Error for PixelRectError {}

/// Inclusive rectangle of logical pixels.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    top_left: Point,
    bottom_right: Point,
}

impl PixelRect {
    pub fn new(top_left: Point, bottom_right: Point) -> Result<Self, PixelRectError> {
        let width = i64::from(bottom_right.x) - i64::from(top_left.x) + 1;
        let height = i64::from(bottom_right.y) - i64::from(top_left.y) + 1;

        if width < 2 || height < 2 {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    pub fn from_origin_size(origin: Point, width: u32, height: u32) -> Result<Self, PixelRectError> {
        let bottom_right = Point {
            x: origin.x.saturating_add(width as i32).saturating_sub(1),
            y: origin.y.saturating_add(height as i32).saturating_sub(1),
        };

        Self::new(origin, bottom_right)
    }

    #[must_use]
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        (self.bottom_right.x - self.top_left.x + 1) as u32
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        (self.bottom_right.y - self.top_left.y + 1) as u32
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.width() as usize * self.height() as usize
    }

    #[must_use]
    pub fn rows(&self) -> Range<i32> {
        self.top_left.y..self.bottom_right.y + 1
    }

    #[must_use]
    pub fn columns(&self) -> Range<i32> {
        self.top_left.x..self.bottom_right.x + 1
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        self.top_left.x <= point.x
            && self.top_left.y <= point.y
            && self.bottom_right.x >= point.x
            && self.bottom_right.y >= point.y
    }

    /// Row-major offset of `point` relative to the top-left corner.
    #[must_use]
    pub fn index_of(&self, point: Point) -> Option<usize> {
        if !self.contains_point(point) {
            return None;
        }

        let relative_x = (point.x - self.top_left.x) as usize;
        let relative_y = (point.y - self.top_left.y) as usize;

        Some(relative_y * self.width() as usize + relative_x)
    }
}
