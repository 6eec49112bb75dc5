use egui::Context as EguiContext;
use terra_camera::Camera;
use terra_render_wgpu::GpuContext;
use winit::event::WindowEvent;
use winit::window::Window;

/// egui overlay showing live camera state.
pub struct Hud {
    ctx: EguiContext,
    winit: egui_winit::State,
    renderer: egui_wgpu::Renderer,
    pub visible: bool,
}

impl Hud {
    pub fn new(window: &Window, gpu: &GpuContext) -> Self {
        let ctx = EguiContext::default();
        let winit = egui_winit::State::new(
            ctx.clone(),
            egui::ViewportId::ROOT,
            window,
            Some(window.scale_factor() as f32),
            None,
            None,
        );
        let renderer =
            egui_wgpu::Renderer::new(&gpu.device, gpu.surface_format(), None, 1, false);
        Self {
            ctx,
            winit,
            renderer,
            visible: false,
        }
    }

    /// Returns true if egui consumed the event.
    pub fn on_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        self.visible && self.winit.on_window_event(window, event).consumed
    }

    /// Draw the overlay on top of `view`. No-op while hidden.
    pub fn render(
        &mut self,
        window: &Window,
        gpu: &GpuContext,
        view: &wgpu::TextureView,
        camera: &Camera,
    ) {
        if !self.visible {
            return;
        }

        let raw_input = self.winit.take_egui_input(window);
        let full_output = self.ctx.run(raw_input, |ctx| draw_camera_panel(ctx, camera));
        self.winit
            .handle_platform_output(window, full_output.platform_output);

        let paint_jobs = self
            .ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);
        let (width, height) = gpu.size();
        let screen_descriptor = egui_wgpu::ScreenDescriptor {
            size_in_pixels: [width, height],
            pixels_per_point: full_output.pixels_per_point,
        };

        for (id, image_delta) in &full_output.textures_delta.set {
            self.renderer
                .update_texture(&gpu.device, &gpu.queue, *id, image_delta);
        }
        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("hud_encoder"),
            });
        self.renderer.update_buffers(
            &gpu.device,
            &gpu.queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );
        {
            let mut pass = encoder
                .begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("hud_pass"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                })
                .forget_lifetime();
            self.renderer
                .render(&mut pass, &paint_jobs, &screen_descriptor);
        }
        gpu.queue.submit(std::iter::once(encoder.finish()));
        for id in &full_output.textures_delta.free {
            self.renderer.free_texture(id);
        }
    }
}

fn draw_camera_panel(ctx: &EguiContext, camera: &Camera) {
    let p = camera.position();
    let f = camera.front();
    egui::Window::new("Camera")
        .resizable(false)
        .default_pos([12.0, 12.0])
        .show(ctx, |ui| {
            ui.label(format!("Position: ({:.2}, {:.2}, {:.2})", p.x, p.y, p.z));
            ui.label(format!(
                "Yaw: {:.1}  Pitch: {:.1}",
                camera.yaw(),
                camera.pitch()
            ));
            ui.label(format!("Front: ({:.2}, {:.2}, {:.2})", f.x, f.y, f.z));
            ui.separator();
            ui.small("WASD: Move | Mouse: Look | F1: HUD | Esc: Quit");
        });
}
