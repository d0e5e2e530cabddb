use crate::controllers::interactive::{
    FrameData, InteractiveControllerPresenterPort, RenderEvent,
};
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::events::GuiEvent;
use crate::presenters::pixels::adapter::PixelsAdapter;
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::wgpu;
use pixels::{Pixels, SurfaceTexture, TextureError};
use std::sync::Arc;
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

/// Shows frames from the render thread in a `pixels` surface with the
/// egui overlay drawn on top.
///
/// The framebuffer is always `resolution` pixels square; window resizes
/// only rescale the surface.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    adapter: Arc<PixelsAdapter>,
    surface_width: u32,
    surface_height: u32,
    resolution: u32,
    current_frame: Option<FrameData>,
    last_error_message: Option<String>,
}

impl GuiPresenterPort for PixelsPresenter {
    fn share_adapter(&self) -> Arc<dyn InteractiveControllerPresenterPort> {
        Arc::clone(&self.adapter) as Arc<dyn InteractiveControllerPresenterPort>
    }

    fn poll(&mut self) -> bool {
        let Some(event) = self.adapter.take_render_event() else {
            return false;
        };

        match event {
            RenderEvent::Frame(frame) => {
                if frame.pixel_buffer.resolution() != self.resolution
                    || self.last_presented_generation() >= frame.generation
                {
                    return false;
                }

                self.copy_pixel_buffer_into_pixels_frame(&frame);
                self.current_frame = Some(frame);
                self.last_error_message = None;
                true
            }
            RenderEvent::Error(error) => {
                if error.generation > self.last_presented_generation() {
                    self.last_error_message = Some(error.message);
                }
                true
            }
        }
    }

    fn current_frame(&self) -> Option<&FrameData> {
        self.current_frame.as_ref()
    }

    fn last_error(&self) -> Option<&str> {
        self.last_error_message.as_deref()
    }

    fn render(
        &mut self,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error> {
        if self.surface_width == 0 || self.surface_height == 0 {
            return Ok(());
        }

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [self.surface_width, self.surface_height],
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
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            // keep the fractal underneath
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer
                    .render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), TextureError> {
        self.surface_width = width;
        self.surface_height = height;

        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)
    }
}

impl PixelsPresenter {
    pub fn new(
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
        resolution: u32,
    ) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let mut pixels = Pixels::new(resolution, resolution, surface_texture)?;

        fill_opaque_black(pixels.frame_mut());

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None,
            1,
        );

        Ok(Self {
            pixels,
            egui_renderer,
            adapter: Arc::new(PixelsAdapter::new(event_loop_proxy)),
            surface_width: size.width,
            surface_height: size.height,
            resolution,
            current_frame: None,
            last_error_message: None,
        })
    }

    fn last_presented_generation(&self) -> u64 {
        self.current_frame
            .as_ref()
            .map_or(0, |frame| frame.generation)
    }

    fn copy_pixel_buffer_into_pixels_frame(&mut self, frame: &FrameData) {
        copy_rgb_into_rgba(frame.pixel_buffer.buffer(), self.pixels.frame_mut());
    }
}

fn fill_opaque_black(rgba: &mut [u8]) {
    for pixel in rgba.chunks_exact_mut(4) {
        pixel.copy_from_slice(&[0, 0, 0, 255]);
    }
}

fn copy_rgb_into_rgba(rgb: &[u8], rgba: &mut [u8]) {
    for (src, dst) in rgb.chunks_exact(3).zip(rgba.chunks_exact_mut(4)) {
        dst[..3].copy_from_slice(src);
        dst[3] = 255;
    }
}
