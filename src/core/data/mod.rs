pub mod colour;
pub mod complex;
pub mod double_buffered;
pub mod field_grid;
pub mod output_surface;
pub mod packed_pixel;
pub mod pixel_rect;
pub mod point;
pub mod screen_size;
