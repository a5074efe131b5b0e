use std::ops::Range;
use crate::core::data::packed_pixel::PackedPixel;
use crate::core::data::point::Point;
use crate::core::data::screen_size::ScreenSize;

const MARKER_HALF_WIDTH: i32 = 2;
const MARKER_HALF_HEIGHT: i32 = 4;

/// Row-major framebuffer of packed pixels at half the logical horizontal resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputSurface {
    width: u32,
    height: u32,
    pixels: Vec<PackedPixel>,
}

impl OutputSurface {
    #[must_use]
    pub fn new(screen: ScreenSize) -> Self {
        let width = screen.output_width();
        let height = screen.height();

        Self {
            width,
            height,
            pixels: vec![PackedPixel::BACKGROUND; width as usize * height as usize],
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixels(&self) -> &[PackedPixel] {
        &self.pixels
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<PackedPixel> {
        if x >= self.width || y >= self.height {
            return None;
        }

        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    pub fn row_mut(&mut self, y: i32) -> Option<&mut [PackedPixel]> {
        if y < 0 || y as u32 >= self.height {
            return None;
        }

        let width = self.width as usize;
        let start = y as usize * width;

        Some(&mut self.pixels[start..start + width])
    }

    pub fn fill_rows(&mut self, rows: Range<u32>, value: PackedPixel) {
        let width = self.width as usize;
        let start = rows.start.min(self.height) as usize * width;
        let end = rows.end.min(self.height) as usize * width;

        if start < end {
            self.pixels[start..end].fill(value);
        }
    }

    /// Draws a small block centred on a logical-space pointer position, clipped to the surface.
    pub fn draw_marker(&mut self, pointer: Point, colour: PackedPixel) {
        let centre_x = pointer.x / 2;
        let centre_y = pointer.y;

        for y in (centre_y - MARKER_HALF_HEIGHT)..=(centre_y + MARKER_HALF_HEIGHT) {
            if y < 0 || y >= self.height as i32 {
                continue;
            }

            for x in (centre_x - MARKER_HALF_WIDTH)..=(centre_x + MARKER_HALF_WIDTH) {
                if x < 0 || x >= self.width as i32 {
                    continue;
                }

                self.pixels[y as usize * self.width as usize + x as usize] = colour;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_surface(width: u32, height: u32) -> OutputSurface {
        OutputSurface::new(ScreenSize::new(width, height, 0).unwrap())
    }

    fn count(surface: &OutputSurface, colour: PackedPixel) -> usize {
        surface.pixels().iter().filter(|&&p| p == colour).count()
    }

    #[test]
    fn new_surface_is_half_width_and_background() {
        let surface = create_surface(640, 480);

        assert_eq!(surface.width(), 320);
        assert_eq!(surface.height(), 480);
        assert_eq!(count(&surface, PackedPixel::BACKGROUND), 320 * 480);
    }

    #[test]
    fn marker_is_five_by_nine_when_unclipped() {
        let mut surface = create_surface(640, 480);

        surface.draw_marker(Point { x: 320, y: 240 }, PackedPixel::MARKER_RED);

        assert_eq!(count(&surface, PackedPixel::MARKER_RED), 45);
        assert_eq!(surface.pixel(160, 240), Some(PackedPixel::MARKER_RED));
        assert_eq!(surface.pixel(158, 236), Some(PackedPixel::MARKER_RED));
        assert_eq!(surface.pixel(162, 244), Some(PackedPixel::MARKER_RED));
        assert_eq!(surface.pixel(163, 240), Some(PackedPixel::BACKGROUND));
        assert_eq!(surface.pixel(160, 245), Some(PackedPixel::BACKGROUND));
    }

    #[test]
    fn marker_is_clipped_at_the_corner() {
        let mut surface = create_surface(640, 480);

        surface.draw_marker(Point { x: 0, y: 0 }, PackedPixel::MARKER_RED);

        // columns 0..=2, rows 0..=4
        assert_eq!(count(&surface, PackedPixel::MARKER_RED), 15);
    }

    #[test]
    fn marker_far_outside_draws_nothing() {
        let mut surface = create_surface(640, 480);

        surface.draw_marker(Point { x: -100, y: 1000 }, PackedPixel::MARKER_RED);

        assert_eq!(count(&surface, PackedPixel::MARKER_RED), 0);
    }

    #[test]
    fn fill_rows_clamps_to_height() {
        let mut surface = create_surface(4, 4);

        surface.fill_rows(2..10, PackedPixel::MARKER_RED);

        assert_eq!(count(&surface, PackedPixel::MARKER_RED), 4);
        assert_eq!(surface.pixel(0, 1), Some(PackedPixel::BACKGROUND));
        assert_eq!(surface.pixel(1, 3), Some(PackedPixel::MARKER_RED));
    }

    #[test]
    fn row_mut_rejects_out_of_range() {
        let mut surface = create_surface(4, 4);

        assert!(surface.row_mut(-1).is_none());
        assert!(surface.row_mut(4).is_none());
        assert_eq!(surface.row_mut(3).map(|row| row.len()), Some(2));
    }
}
