//! Port definitions for the render loop.
//!
//! The platform shim implements these to feed input in and take composed frames out.

pub mod display;
pub mod input;

pub use display::DisplayPort;
pub use input::InputPort;
