mod adapters;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use crate::adapters::pixel_format::expand_packed_to_rgba;
pub use crate::controllers::interactive::{
    DisplayPort, FrameOutcome, InputPort, OverlayText, RenderLoop, ViewerError,
};
pub use crate::core::config::{VideoMode, ViewerConfig};
pub use crate::core::controls::{Buttons, InputSnapshot, LifecycleSignals, ShutdownReason};
pub use crate::core::data::output_surface::OutputSurface;
pub use crate::core::data::packed_pixel::PackedPixel;
pub use crate::core::data::point::Point;
pub use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotPaletteKinds;
pub use crate::core::view::{RenderState, ViewLimits, ViewTransform};

#[cfg(feature = "gui")]
pub use crate::input::gui::{GuiError, RunGuiCommand};
