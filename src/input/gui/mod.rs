//! Desktop shim for the viewer: a winit window with a `pixels` framebuffer
//! and an egui text overlay.

pub mod errors;
pub mod input_state;
pub mod platform;
pub mod run_gui;

pub use errors::GuiError;
pub use run_gui::RunGuiCommand;
