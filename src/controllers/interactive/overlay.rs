use std::fmt;
use crate::core::data::complex::Complex;

/// Status line drawn in the top margin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OverlayText {
    pub center_real: f64,
    pub center_imag: f64,
    pub magnification: f64,
    /// Complex coordinate under the pointer, when the pointer reading is valid.
    pub pointer: Option<Complex>,
}

// adding zero folds -0.0 so the origin never prints as "-0.0000"
fn unsigned_zero(value: f64) -> f64 {
    value + 0.0
}

impl fmt::Display for OverlayText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            " cX = {:.4} cY = {:.4} zoom = {:.2}",
            unsigned_zero(self.center_real),
            unsigned_zero(self.center_imag),
            self.magnification
        )?;

        match self.pointer {
            Some(c) => write!(
                f,
                " re = {:.4}, im = {:.4}",
                unsigned_zero(c.real),
                unsigned_zero(c.imag)
            ),
            None => write!(f, " No Cursor"),
        }
    }
}
