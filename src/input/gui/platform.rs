//! Desktop platform shim: a winit window stands in for the console's video and input hardware.

use std::sync::Arc;
use std::time::Duration;
use egui::Context;
use egui_winit::State as EguiWinitState;
use log::{info, warn};
use winit::event::{ElementState, Event, KeyEvent, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::Window;
use crate::controllers::interactive::overlay::OverlayText;
use crate::controllers::interactive::ports::{DisplayPort, InputPort};
use crate::core::controls::lifecycle::LifecycleSignals;
use crate::core::controls::snapshot::InputSnapshot;
use crate::core::data::output_surface::OutputSurface;
use crate::input::gui::input_state::GuiInputState;
use crate::presenters::pixels::presenter::PixelsPresenter;

pub struct GuiPlatform {
    event_loop: EventLoop<()>,
    window: &'static Window,
    presenter: PixelsPresenter,
    input: GuiInputState,
    signals: Arc<LifecycleSignals>,
    egui_ctx: Context,
    egui_state: EguiWinitState,
    ui_captured: bool,
}

impl GuiPlatform {
    pub fn new(
        event_loop: EventLoop<()>,
        window: &'static Window,
        presenter: PixelsPresenter,
        signals: Arc<LifecycleSignals>,
    ) -> Self {
        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            &event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        Self {
            event_loop,
            window,
            presenter,
            input: GuiInputState::default(),
            signals,
            egui_ctx,
            egui_state,
            ui_captured: false,
        }
    }

    fn handle_window_event(&mut self, event: &WindowEvent) {
        // frames are redrawn every loop, so only `consumed` matters here
        let response = self.egui_state.on_window_event(self.window, event);
        self.ui_captured |= response.consumed;

        match event {
            WindowEvent::CloseRequested => {
                info!("window closed");
                self.signals.request_power_off();
            }
            WindowEvent::Resized(size) => {
                if let Err(err) = self.presenter.resize(size.width, size.height) {
                    warn!("failed to resize surface: {}", err);
                }
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                self.egui_ctx.set_pixels_per_point(*scale_factor as f32);
            }
            WindowEvent::Focused(false) => self.input.reset(),
            WindowEvent::CursorMoved { position, .. } => {
                self.input.set_pointer(self.presenter.window_pos_to_pixel(*position));
            }
            WindowEvent::CursorLeft { .. } => self.input.set_pointer(None),
            WindowEvent::MouseInput { state, button, .. } => {
                self.input.handle_mouse_button(*button, *state);
            }
            WindowEvent::KeyboardInput {
                event: KeyEvent { physical_key: PhysicalKey::Code(code), state, .. },
                ..
            } => {
                if *code == KeyCode::F12 && *state == ElementState::Pressed {
                    self.signals.request_reset();
                } else {
                    self.input.handle_key_event(*code, *state);
                }
            }
            _ => {}
        }
    }
}

impl InputPort for GuiPlatform {
    fn poll(&mut self) -> InputSnapshot {
        let mut events = Vec::new();
        self.ui_captured = false;
        let window_id = self.window.id();

        let status = self.event_loop.pump_events(Some(Duration::ZERO), |event, _elwt| {
            if let Event::WindowEvent { event, window_id: id } = event {
                if id == window_id {
                    events.push(event);
                }
            }
        });

        for event in &events {
            self.handle_window_event(event);
        }

        if let PumpStatus::Exit(code) = status {
            info!("event loop exited with code {}", code);
            self.signals.request_power_off();
        }

        self.input.snapshot(self.ui_captured)
    }
}

impl DisplayPort for GuiPlatform {
    type Error = pixels::Error;

    fn present(&mut self, surface: &OutputSurface, overlay: &OverlayText) -> Result<(), pixels::Error> {
        self.presenter.copy_surface(surface);

        let raw_input = self.egui_state.take_egui_input(self.window);
        let status = overlay.to_string();
        let egui_output = self.egui_ctx.run(raw_input, |ctx| {
            egui::Area::new(egui::Id::new("overlay"))
                .fixed_pos([4.0, 2.0])
                .interactable(false)
                .show(ctx, |ui| {
                    ui.label(
                        egui::RichText::new(&status)
                            .monospace()
                            .color(egui::Color32::WHITE),
                    );
                });
        });

        self.egui_state
            .handle_platform_output(self.window, egui_output.platform_output.clone());
        self.presenter.render(egui_output, &self.egui_ctx)
    }

    /// The pixels surface presents with vsync, so `present` already paces the loop.
    fn wait_for_vsync(&mut self) {}
}
