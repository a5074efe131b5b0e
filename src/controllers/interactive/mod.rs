//! Interactive controller for real-time fractal exploration.
//!
//! The render loop owns all view state and buffers. Platform shims feed it input
//! snapshots through [`InputPort`] and take composed frames out through [`DisplayPort`].

pub mod errors;
pub mod overlay;
pub mod ports;
pub mod render_loop;

pub use errors::ViewerError;
pub use overlay::OverlayText;
pub use ports::{DisplayPort, InputPort};
pub use render_loop::{FrameOutcome, RenderLoop};
