use crate::core::data::colour::Colour;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MandelbrotPaletteKinds {
    Grayscale,
    Fire,
    Ocean,
    Forest,
    Classic,
    Rainbow,
    Sunset,
    Ice,
    Neon,
    Copper,
}

impl MandelbrotPaletteKinds {
    /// Ordered palette set; a palette's position here is its index.
    pub const ALL: &'static [Self] = &[
        Self::Grayscale,
        Self::Fire,
        Self::Ocean,
        Self::Forest,
        Self::Classic,
        Self::Rainbow,
        Self::Sunset,
        Self::Ice,
        Self::Neon,
        Self::Copper,
    ];

    pub const COUNT: usize = Self::ALL.len();

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Grayscale => "Grayscale",
            Self::Fire => "Fire",
            Self::Ocean => "Ocean",
            Self::Forest => "Forest",
            Self::Classic => "Classic",
            Self::Rainbow => "Rainbow",
            Self::Sunset => "Sunset",
            Self::Ice => "Ice",
            Self::Neon => "Neon",
            Self::Copper => "Copper",
        }
    }

    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|&kind| kind == self)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::COUNT]
    }

    #[must_use]
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::COUNT - 1) % Self::COUNT]
    }

    /// Gradient stops, blended in order and wrapping from the last back to the first.
    #[must_use]
    pub const fn stops(self) -> &'static [Colour] {
        match self {
            Self::Grayscale => &[Colour { r: 0, g: 0, b: 0 }, Colour { r: 255, g: 255, b: 255 }],
            Self::Fire => &[
                Colour { r: 0, g: 0, b: 0 },
                Colour { r: 128, g: 0, b: 0 },
                Colour { r: 255, g: 64, b: 0 },
                Colour { r: 255, g: 200, b: 0 },
                Colour { r: 255, g: 255, b: 200 },
            ],
            Self::Ocean => &[
                Colour { r: 0, g: 8, b: 32 },
                Colour { r: 0, g: 64, b: 128 },
                Colour { r: 0, g: 160, b: 200 },
                Colour { r: 180, g: 240, b: 255 },
            ],
            Self::Forest => &[
                Colour { r: 10, g: 30, b: 10 },
                Colour { r: 30, g: 100, b: 30 },
                Colour { r: 120, g: 180, b: 60 },
                Colour { r: 230, g: 230, b: 150 },
            ],
            Self::Classic => &[
                Colour { r: 0, g: 7, b: 100 },
                Colour { r: 32, g: 107, b: 203 },
                Colour { r: 237, g: 255, b: 255 },
                Colour { r: 255, g: 170, b: 0 },
                Colour { r: 0, g: 2, b: 0 },
            ],
            Self::Rainbow => &[
                Colour { r: 255, g: 0, b: 0 },
                Colour { r: 255, g: 255, b: 0 },
                Colour { r: 0, g: 255, b: 0 },
                Colour { r: 0, g: 255, b: 255 },
                Colour { r: 0, g: 0, b: 255 },
                Colour { r: 255, g: 0, b: 255 },
            ],
            Self::Sunset => &[
                Colour { r: 40, g: 0, b: 60 },
                Colour { r: 180, g: 30, b: 90 },
                Colour { r: 255, g: 120, b: 50 },
                Colour { r: 255, g: 220, b: 120 },
            ],
            Self::Ice => &[
                Colour { r: 255, g: 255, b: 255 },
                Colour { r: 160, g: 220, b: 255 },
                Colour { r: 40, g: 100, b: 200 },
                Colour { r: 10, g: 20, b: 80 },
            ],
            Self::Neon => &[
                Colour { r: 255, g: 0, b: 128 },
                Colour { r: 0, g: 255, b: 200 },
                Colour { r: 255, g: 255, b: 0 },
                Colour { r: 128, g: 0, b: 255 },
            ],
            Self::Copper => &[
                Colour { r: 30, g: 10, b: 0 },
                Colour { r: 140, g: 70, b: 30 },
                Colour { r: 230, g: 160, b: 100 },
                Colour { r: 255, g: 230, b: 200 },
            ],
        }
    }

    /// Iterations spent blending from one stop to the next.
    #[must_use]
    pub const fn steps_per_stop(self) -> u32 {
        match self {
            Self::Grayscale => 32,
            Self::Fire => 12,
            Self::Ocean => 16,
            Self::Forest => 14,
            Self::Classic => 16,
            Self::Rainbow => 10,
            Self::Sunset => 14,
            Self::Ice => 16,
            Self::Neon => 8,
            Self::Copper => 12,
        }
    }
}

impl Default for MandelbrotPaletteKinds {
    fn default() -> Self {
        Self::Classic
    }
}

impl std::fmt::Display for MandelbrotPaletteKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_set_has_ten_entries() {
        assert_eq!(MandelbrotPaletteKinds::COUNT, 10);
    }

    #[test]
    fn default_palette_is_index_four() {
        assert_eq!(MandelbrotPaletteKinds::default().index(), 4);
    }

    #[test]
    fn index_round_trips_for_all_kinds() {
        for (index, &kind) in MandelbrotPaletteKinds::ALL.iter().enumerate() {
            assert_eq!(kind.index(), index);
            assert_eq!(MandelbrotPaletteKinds::from_index(index), Some(kind));
        }

        assert_eq!(MandelbrotPaletteKinds::from_index(MandelbrotPaletteKinds::COUNT), None);
    }

    #[test]
    fn next_and_previous_wrap() {
        assert_eq!(MandelbrotPaletteKinds::Copper.next(), MandelbrotPaletteKinds::Grayscale);
        assert_eq!(MandelbrotPaletteKinds::Grayscale.previous(), MandelbrotPaletteKinds::Copper);

        for &kind in MandelbrotPaletteKinds::ALL {
            assert_eq!(kind.next().previous(), kind);
        }
    }

    #[test]
    fn every_palette_has_stops_and_steps() {
        for &kind in MandelbrotPaletteKinds::ALL {
            assert!(kind.stops().len() >= 2, "{} has too few stops", kind);
            assert!(kind.steps_per_stop() > 0, "{} has no steps", kind);
        }
    }

    #[test]
    fn stops_are_usable_in_const_context() {
        const CLASSIC: &[Colour] = MandelbrotPaletteKinds::Classic.stops();

        assert_eq!(CLASSIC.len(), 5);
        assert_eq!(CLASSIC[0], Colour::new(0, 7, 100));
        assert_eq!(CLASSIC[4], Colour::new(0, 2, 0));
        assert_eq!(MandelbrotPaletteKinds::Grayscale.stops()[1], Colour::new(255, 255, 255));
    }

    #[test]
    fn display_names_are_unique() {
        let names: Vec<&str> = MandelbrotPaletteKinds::ALL
            .iter()
            .map(|k| k.display_name())
            .collect();
        for (i, name) in names.iter().enumerate() {
            for (j, other) in names.iter().enumerate() {
                if i != j {
                    assert_ne!(name, other, "Duplicate display name: {}", name);
                }
            }
        }
    }
}
