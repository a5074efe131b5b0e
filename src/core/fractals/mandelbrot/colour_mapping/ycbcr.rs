//! RGB to Y'CbCr conversion and 4:2:2 packing of iteration counts.

use crate::core::actions::compose_surface::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::packed_pixel::PackedPixel;
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotPaletteKinds;
use crate::core::fractals::mandelbrot::colour_mapping::palette_table::palette_colour;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct YCbCr {
    pub y: u8,
    pub cb: u8,
    pub cr: u8,
}

impl YCbCr {
    /// Colour of points inside the set.
    pub const BACKGROUND: Self = Self { y: 0, cb: 128, cr: 128 };
}

impl From<Colour> for YCbCr {
    /// BT.601 full-range weights in fixed point.
    fn from(colour: Colour) -> Self {
        let r = i32::from(colour.r);
        let g = i32::from(colour.g);
        let b = i32::from(colour.b);

        let y = (299 * r + 587 * g + 114 * b) / 1000;
        let cb = (-16874 * r - 33126 * g + 50000 * b + 12_800_000) / 100_000;
        let cr = (50000 * r - 41869 * g - 8131 * b + 12_800_000) / 100_000;

        Self {
            y: y.clamp(0, 255) as u8,
            cb: cb.clamp(0, 255) as u8,
            cr: cr.clamp(0, 255) as u8,
        }
    }
}

/// Maps iteration counts to packed output pixels for one palette and iteration limit.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ColourMapper {
    palette: MandelbrotPaletteKinds,
    iteration_limit: u32,
}

impl ColourMapper {
    #[must_use]
    pub fn new(palette: MandelbrotPaletteKinds, iteration_limit: u32) -> Self {
        Self { palette, iteration_limit }
    }

    #[must_use]
    pub fn palette(&self) -> MandelbrotPaletteKinds {
        self.palette
    }

    #[must_use]
    pub fn iteration_limit(&self) -> u32 {
        self.iteration_limit
    }

    /// Colours `iterations + offset`; a shifted count equal to the limit is background.
    #[must_use]
    pub fn map_iterations(&self, iterations: u32, offset: u32) -> YCbCr {
        let shifted = iterations.wrapping_add(offset);

        if shifted == self.iteration_limit {
            return YCbCr::BACKGROUND;
        }

        palette_colour(self.palette, shifted).into()
    }

    /// Merges two adjacent logical pixels into one output pixel with averaged chroma.
    #[must_use]
    pub fn pack_pair(&self, left: u32, right: u32, offset: u32) -> PackedPixel {
        let first = self.map_iterations(left, offset);
        let second = self.map_iterations(right, offset);
        let cb = (u16::from(first.cb) + u16::from(second.cb)) >> 1;
        let cr = (u16::from(first.cr) + u16::from(second.cr)) >> 1;

        PackedPixel::from_components(first.y, cb as u8, second.y, cr as u8)
    }
}

impl ColourMap for ColourMapper {
    fn pack_pair(&self, left: u32, right: u32, offset: u32) -> PackedPixel {
        ColourMapper::pack_pair(self, left, right, offset)
    }
}
