use crate::adapters::pixel_format::expand_packed_to_rgba;
use crate::core::data::output_surface::OutputSurface;
use crate::core::data::point::Point;
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::Pixels;
use pixels::SurfaceTexture;
use pixels::wgpu;
use winit::dpi::PhysicalPosition;
use winit::window::Window;

/// Scales the logical framebuffer to the window and draws egui on top.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    buffer_width: u32,
    buffer_height: u32,
    window_width: u32,
    window_height: u32,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, buffer_width: u32, buffer_height: u32) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(buffer_width, buffer_height, surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            egui_renderer,
            buffer_width,
            buffer_height,
            window_width: size.width,
            window_height: size.height,
        })
    }

    /// Expands a packed surface into the RGBA framebuffer.
    pub fn copy_surface(&mut self, surface: &OutputSurface) {
        debug_assert_eq!(surface.width() * 2, self.buffer_width);
        debug_assert_eq!(surface.height(), self.buffer_height);

        expand_packed_to_rgba(surface.pixels(), self.pixels.frame_mut());
    }

    /// Maps a window position to logical framebuffer coordinates, `None` outside the framebuffer.
    #[must_use]
    pub fn window_pos_to_pixel(&self, position: PhysicalPosition<f64>) -> Option<Point> {
        self.pixels
            .window_pos_to_pixel((position.x as f32, position.y as f32))
            .ok()
            .map(|(x, y)| Point { x: x as i32, y: y as i32 })
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        self.window_width = width;
        self.window_height = height;

        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)
    }

    pub fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), pixels::Error> {
        if self.window_width == 0 || self.window_height == 0 {
            return Ok(());
        }

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [self.window_width, self.window_height],
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("overlay"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load, // keep the scaled framebuffer
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer.render(
                    &mut render_pass,
                    &clipped_primitives,
                    &screen_descriptor,
                );
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }
}
