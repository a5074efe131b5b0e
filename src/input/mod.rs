//! Input adapters for the viewer.

#[cfg(feature = "gui")]
pub mod gui;
