use std::fmt;

/// Two horizontally adjacent logical pixels sharing one chroma pair.
///
/// Layout, most significant byte first: `[Y1][Cb][Y2][Cr]`.
#[derive(Copy, Clone, PartialEq, Eq, Default, Hash)]
pub struct PackedPixel(pub u32);

impl PackedPixel {
    /// Black: zero luma, neutral chroma.
    pub const BACKGROUND: Self = Self::from_components(0, 128, 0, 128);
    /// Pointer marker colour.
    pub const MARKER_RED: Self = Self(0x4C54_4CFF);

    #[must_use]
    pub const fn from_components(y1: u8, cb: u8, y2: u8, cr: u8) -> Self {
        Self((y1 as u32) << 24 | (cb as u32) << 16 | (y2 as u32) << 8 | cr as u32)
    }

    #[must_use]
    pub const fn y1(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[must_use]
    pub const fn cb(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[must_use]
    pub const fn y2(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[must_use]
    pub const fn cr(self) -> u8 {
        self.0 as u8
    }
}

impl fmt::Debug for PackedPixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PackedPixel({:#010X})", self.0)
    }
}
