#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear blend between `self` and `other`; `step` of `steps` selects the position.
    #[must_use]
    pub fn lerp(self, other: Self, step: u32, steps: u32) -> Self {
        if steps == 0 {
            return self;
        }

        let channel = |from: u8, to: u8| -> u8 {
            let from = i64::from(from);
            let to = i64::from(to);
            (from + (to - from) * i64::from(step) / i64::from(steps)) as u8
        };

        Self {
            r: channel(self.r, other.r),
            g: channel(self.g, other.g),
            b: channel(self.b, other.b),
        }
    }
}
