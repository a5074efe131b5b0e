use crate::core::data::packed_pixel::PackedPixel;

/// Turns a pair of horizontally adjacent iteration counts into one output pixel.
pub trait ColourMap {
    fn pack_pair(&self, left: u32, right: u32, offset: u32) -> PackedPixel;
}
