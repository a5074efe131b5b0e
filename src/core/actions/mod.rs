pub mod compose_surface;
pub mod generate_fractal;
