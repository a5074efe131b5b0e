use std::error::Error;
use crate::controllers::interactive::overlay::OverlayText;
use crate::core::data::output_surface::OutputSurface;

/// Platform presentation of a composed frame.
pub trait DisplayPort {
    type Error: Error;

    fn present(&mut self, surface: &OutputSurface, overlay: &OverlayText) -> Result<(), Self::Error>;

    /// Blocks until the next vertical sync.
    fn wait_for_vsync(&mut self);
}
