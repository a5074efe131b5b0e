use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum FieldGridError {
    PointOutsideBounds {
        point: Point,
        rect: PixelRect,
    },
    BoundsMismatch {
        rect_size: usize,
        data_size: usize,
    },
}

impl fmt::Display for FieldGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                rect_size,
                data_size,
            } => {
                write!(
                    f,
                    "grid rect size {} does not match data size {}",
                    rect_size, data_size
                )
            }
            Self::PointOutsideBounds { point, rect } => {
                write!(
                    f,
                    "point at x:{}, y:{} outside of grid bounds top:{}, left:{}, bottom:{}, right:{}",
                    point.x,
                    point.y,
                    rect.top_left().y,
                    rect.top_left().x,
                    rect.bottom_right().y,
                    rect.bottom_right().x
                )
            }
        }
    }
}

impl Error for FieldGridError {}

/// Dense row-major grid of per-pixel values addressed by absolute screen coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldGrid<T> {
    rect: PixelRect,
    cells: Vec<T>,
}

/// Escape-time iteration count per logical pixel of the renderable region.
pub type FractalField = FieldGrid<u32>;

impl<T: Copy + Default> FieldGrid<T> {
    #[must_use]
    pub fn new(rect: PixelRect) -> Self {
        Self {
            rect,
            cells: vec![T::default(); rect.size()],
        }
    }

    pub fn from_data(rect: PixelRect, cells: Vec<T>) -> Result<Self, FieldGridError> {
        if rect.size() != cells.len() {
            return Err(FieldGridError::BoundsMismatch {
                rect_size: rect.size(),
                data_size: cells.len(),
            });
        }

        Ok(Self { rect, cells })
    }

    #[must_use]
    pub fn rect(&self) -> PixelRect {
        self.rect
    }

    #[must_use]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    pub fn get(&self, point: Point) -> Result<T, FieldGridError> {
        let index = self.index_of(point)?;

        Ok(self.cells[index])
    }

    pub fn set(&mut self, point: Point, value: T) -> Result<(), FieldGridError> {
        let index = self.index_of(point)?;
        self.cells[index] = value;

        Ok(())
    }

    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }

    /// Rows paired with their absolute y coordinate.
    pub fn rows(&self) -> impl Iterator<Item = (i32, &[T])> {
        self.rect
            .rows()
            .zip(self.cells.chunks_exact(self.rect.width() as usize))
    }

    pub fn rows_mut(&mut self) -> impl Iterator<Item = (i32, &mut [T])> {
        let width = self.rect.width() as usize;

        self.rect.rows().zip(self.cells.chunks_exact_mut(width))
    }

    fn index_of(&self, point: Point) -> Result<usize, FieldGridError> {
        self.rect
            .index_of(point)
            .ok_or(FieldGridError::PointOutsideBounds {
                point,
                rect: self.rect,
            })
    }
}
