use crate::core::data::screen_size::{ScreenSize, ScreenSizeError};
use crate::core::fractals::mandelbrot::colour_mapping::kinds::MandelbrotPaletteKinds;
use crate::core::view::view_transform::ViewLimits;

/// Display modes and their logical framebuffer sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VideoMode {
    #[default]
    Ntsc,
    Pal,
    Mpal,
}

impl VideoMode {
    #[must_use]
    pub const fn dimensions(self) -> (u32, u32) {
        match self {
            Self::Ntsc | Self::Mpal => (640, 480),
            Self::Pal => (640, 528),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerConfig {
    pub video_mode: VideoMode,
    /// Rows at the top of the screen left to the text overlay.
    pub top_margin: u32,
    pub view: ViewLimits,
    pub initial_iteration_limit: u32,
    pub min_iteration_limit: u32,
    pub initial_palette: MandelbrotPaletteKinds,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            video_mode: VideoMode::default(),
            top_margin: 20,
            view: ViewLimits::default(),
            initial_iteration_limit: 200,
            min_iteration_limit: 1,
            initial_palette: MandelbrotPaletteKinds::default(),
        }
    }
}

impl ViewerConfig {
    pub fn screen_size(&self) -> Result<ScreenSize, ScreenSizeError> {
        let (width, height) = self.video_mode.dimensions();

        ScreenSize::new(width, height, self.top_margin)
    }
}
