use std::sync::Arc;
use log::info;
use winit::dpi::LogicalSize;
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};
use crate::controllers::interactive::render_loop::RenderLoop;
use crate::core::config::ViewerConfig;
use crate::core::controls::lifecycle::{LifecycleSignals, ShutdownReason};
use crate::input::gui::errors::GuiError;
use crate::input::gui::platform::GuiPlatform;
use crate::presenters::pixels::presenter::PixelsPresenter;

pub struct RunGuiCommand {
    config: ViewerConfig,
}

impl RunGuiCommand {
    pub fn new(config: ViewerConfig) -> Self {
        Self { config }
    }

    /// Opens the window and runs the viewer until it is closed or the home key is pressed.
    pub fn execute(&self) -> Result<ShutdownReason, GuiError> {
        let render_loop = RenderLoop::new(self.config)?;
        let screen = render_loop.screen();
        let event_loop = EventLoop::new()?;

        // Leak the window to get a 'static reference for pixels
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Mandelbrot Viewer")
                .with_inner_size(LogicalSize::new(screen.width(), screen.height()))
                .with_min_inner_size(LogicalSize::new(screen.width() / 2, screen.height() / 2))
                .build(&event_loop)?,
        ));

        let presenter = PixelsPresenter::new(window, screen.width(), screen.height())?;
        let signals = Arc::new(LifecycleSignals::new());
        let mut platform = GuiPlatform::new(event_loop, window, presenter, Arc::clone(&signals));

        let reason = render_loop.run(&mut platform, &signals)?;
        info!("viewer exited: {:?}", reason);

        Ok(reason)
    }
}
