pub mod actions;
pub mod config;
pub mod controls;
pub mod data;
pub mod fractals;
pub mod view;
