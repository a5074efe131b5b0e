use log::{debug, error, info, trace};
use std::time::Instant;
use crate::controllers::interactive::errors::ViewerError;
use crate::controllers::interactive::overlay::OverlayText;
use crate::controllers::interactive::ports::{DisplayPort, InputPort};
use crate::core::actions::compose_surface::compose_surface::{
    ColourCache, compose_from_cache, compose_from_field, generate_colour_cache,
};
use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::config::ViewerConfig;
use crate::core::controls::lifecycle::{LifecycleSignals, ShutdownReason};
use crate::core::controls::snapshot::InputSnapshot;
use crate::core::data::double_buffered::DoubleBuffered;
use crate::core::data::field_grid::{FieldGrid, FractalField};
use crate::core::data::output_surface::OutputSurface;
use crate::core::data::packed_pixel::PackedPixel;
use crate::core::data::point::Point;
use crate::core::data::screen_size::ScreenSize;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::errors::MandelbrotError;
use crate::core::view::render_state::RenderState;
use crate::core::view::view_transform::ViewTransform;
use crate::core::view::view_updates;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Shutdown(ShutdownReason),
}

/// Owns every buffer and piece of view state for one interactive session.
pub struct RenderLoop {
    config: ViewerConfig,
    screen: ScreenSize,
    view: ViewTransform,
    state: RenderState,
    field: FractalField,
    colour_cache: ColourCache,
    surfaces: DoubleBuffered<OutputSurface>,
    overlay: OverlayText,
}

impl RenderLoop {
    pub fn new(config: ViewerConfig) -> Result<Self, ViewerError> {
        let screen = config.screen_size()?;

        if config.initial_iteration_limit == 0 {
            return Err(MandelbrotError::ZeroMaxIterationsError.into());
        }

        let view = ViewTransform::new(&config.view);
        let state = RenderState::new(config.initial_iteration_limit, config.initial_palette);

        debug!(
            "allocating {}x{} field and two {}x{} surfaces",
            screen.width(),
            screen.height() - screen.top_margin(),
            screen.output_width(),
            screen.height()
        );

        Ok(Self {
            config,
            screen,
            view,
            state,
            field: FieldGrid::new(screen.renderable_rect()),
            colour_cache: FieldGrid::new(screen.renderable_output_rect()),
            surfaces: DoubleBuffered::new(OutputSurface::new(screen)),
            overlay: OverlayText::default(),
        })
    }

    #[must_use]
    pub fn screen(&self) -> ScreenSize {
        self.screen
    }

    #[must_use]
    pub fn view(&self) -> &ViewTransform {
        &self.view
    }

    #[must_use]
    pub fn state(&self) -> &RenderState {
        &self.state
    }

    #[must_use]
    pub fn field(&self) -> &FractalField {
        &self.field
    }

    #[must_use]
    pub fn colour_cache(&self) -> &ColourCache {
        &self.colour_cache
    }

    /// Overlay for the most recently composed frame.
    #[must_use]
    pub fn overlay(&self) -> &OverlayText {
        &self.overlay
    }

    /// The surface most recently composed and handed to presentation.
    #[must_use]
    pub fn front_surface(&self) -> &OutputSurface {
        self.surfaces.get(self.state.active_buffer())
    }

    pub fn pan(&mut self, pointer: Point) {
        view_updates::pan(&mut self.view, &mut self.state, pointer, self.screen);
    }

    pub fn zoom(&mut self, pointer: Point) {
        view_updates::zoom(&mut self.view, &mut self.state, pointer, self.screen, &self.config.view);
    }

    pub fn reset(&mut self) {
        view_updates::reset(&mut self.view, &mut self.state, &self.config.view);
    }

    pub fn double_iteration_limit(&mut self) {
        view_updates::double_iteration_limit(&mut self.state);
    }

    pub fn halve_iteration_limit(&mut self) {
        view_updates::halve_iteration_limit(&mut self.state, self.config.min_iteration_limit);
    }

    /// Rebuilds the field and colour cache if anything invalidated them. Runs to completion.
    pub fn recompute_if_dirty(&mut self) -> bool {
        if !self.state.take_dirty() {
            return false;
        }

        let start = Instant::now();
        let algorithm =
            MandelbrotAlgorithm::with_limit(self.screen, self.view, self.state.nonzero_iteration_limit());

        generate_fractal(&mut self.field, &algorithm);
        generate_colour_cache(&self.field, &self.state.colour_mapper(), &mut self.colour_cache);

        debug!(
            "recomputed field at limit {} with {} palette in {} ms",
            self.state.iteration_limit(),
            self.state.palette(),
            start.elapsed().as_millis()
        );

        true
    }

    /// Runs one frame: recompute, animate, compose into the back buffer, apply input, swap.
    pub fn step(&mut self, input: &InputSnapshot) -> FrameOutcome {
        self.recompute_if_dirty();
        self.state.advance_cycle();
        self.compose_back_buffer();
        self.overlay = self.overlay_for(input.pointer);

        let shutdown = self.apply_input(input);

        if let Some(pointer) = input.pointer {
            self.surfaces
                .get_mut(self.state.back_buffer())
                .draw_marker(pointer, PackedPixel::MARKER_RED);
        }

        self.state.swap_buffers();
        trace!("frame composed into {:?}:{}", self.state.active_buffer(), self.overlay);

        match shutdown {
            Some(reason) => FrameOutcome::Shutdown(reason),
            None => FrameOutcome::Continue,
        }
    }

    /// Drives frames until a lifecycle signal or the home button ends the session.
    pub fn run<P>(mut self, platform: &mut P, signals: &LifecycleSignals) -> Result<ShutdownReason, P::Error>
    where
        P: InputPort + DisplayPort,
    {
        info!(
            "starting render loop at {}x{}",
            self.screen.width(),
            self.screen.height()
        );

        loop {
            if let Some(reason) = signals.poll() {
                return Ok(self.shutdown(reason));
            }

            let input = platform.poll();

            if let FrameOutcome::Shutdown(reason) = self.step(&input) {
                return Ok(self.shutdown(reason));
            }

            platform
                .present(self.front_surface(), &self.overlay)
                .inspect_err(|err| error!("presentation failed: {}", err))?;
            platform.wait_for_vsync();
        }
    }

    /// Consumes the loop, releasing the field, colour cache and both surfaces.
    pub fn shutdown(self, reason: ShutdownReason) -> ShutdownReason {
        info!("shutting down ({:?}), releasing frame buffers", reason);
        drop(self);

        reason
    }

    fn compose_back_buffer(&mut self) {
        let surface = self.surfaces.get_mut(self.state.back_buffer());

        surface.fill_rows(0..self.screen.top_margin(), PackedPixel::BACKGROUND);

        if self.state.is_cycling() {
            compose_from_field(
                &self.field,
                &self.state.colour_mapper(),
                self.state.cycle_offset(),
                surface,
            );
        } else {
            compose_from_cache(&self.colour_cache, surface);
        }
    }

    fn overlay_for(&self, pointer: Option<Point>) -> OverlayText {
        OverlayText {
            center_real: self.view.center_real(),
            center_imag: -self.view.center_imag(),
            magnification: self.view.magnification(&self.config.view),
            pointer: pointer.map(|p| self.view.pixel_to_complex(p, self.screen)),
        }
    }

    fn apply_input(&mut self, input: &InputSnapshot) -> Option<ShutdownReason> {
        // zoom pans first, so every held frame recentres and magnifies
        if input.held.primary {
            if let Some(pointer) = input.pointer {
                self.zoom(pointer);
            }
        }

        if input.pressed.secondary {
            self.reset();
        }

        if input.pressed.cycle_toggle {
            self.state.toggle_cycling();
        }

        if input.held.iterations_halve {
            self.halve_iteration_limit();
        }

        if input.held.iterations_double {
            self.double_iteration_limit();
        }

        if input.pressed.palette_previous {
            self.state.previous_palette();
        }

        if input.pressed.palette_next {
            self.state.next_palette();
        }

        input.pressed.home.then_some(ShutdownReason::ReturnToMenu)
    }
}
