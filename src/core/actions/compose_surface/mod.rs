pub mod compose_surface;
pub mod ports;
