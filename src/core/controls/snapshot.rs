use crate::core::data::point::Point;

/// One reading of every button the viewer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Buttons {
    pub primary: bool,
    pub secondary: bool,
    pub cycle_toggle: bool,
    pub palette_previous: bool,
    pub palette_next: bool,
    pub home: bool,
    pub iterations_halve: bool,
    pub iterations_double: bool,
}

/// Input sampled once per frame. `pressed` holds edges that occurred since the last
/// sample; `held` holds the current level. `pointer` is `None` when the reading is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputSnapshot {
    pub pointer: Option<Point>,
    pub pressed: Buttons,
    pub held: Buttons,
}
