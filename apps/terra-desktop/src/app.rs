use crate::hud::Hud;
use glam::Vec2;
use std::borrow::Cow;
use std::sync::Arc;
use std::time::Instant;
use terra_camera::Camera;
use terra_common::ViewerConfig;
use terra_input::{Action, InputState, MovementBindings};
use terra_render::{FrameTransforms, Projection};
use terra_render_wgpu::{GpuContext, RenderError, WgpuRenderer, load_shader_source};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::PhysicalKey;
use winit::window::{CursorGrabMode, Window, WindowId};

/// Longest frame step fed to the camera, so a stall does not teleport it.
const MAX_FRAME_DT: f32 = 0.1;

/// Window-independent viewer state: camera, input and projection.
struct AppState {
    camera: Camera,
    input: InputState,
    projection: Projection,
    last_frame: Instant,
}

impl AppState {
    fn new(config: &ViewerConfig) -> Self {
        Self {
            camera: Camera::from_config(&config.camera),
            input: InputState::new(MovementBindings::default(), &config.input),
            projection: Projection::new(
                &config.projection,
                config.window.width,
                config.window.height,
            ),
            last_frame: Instant::now(),
        }
    }

    /// Restart frame timing, e.g. once the window and GPU are ready.
    fn reset_clock(&mut self) {
        self.last_frame = Instant::now();
    }

    /// Frame update: input into the camera.
    fn update(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32().min(MAX_FRAME_DT);
        self.last_frame = now;
        self.input.apply(&mut self.camera, dt);
    }
}

/// GPU resources that exist only while a window is open.
struct Gpu {
    window: Arc<Window>,
    context: GpuContext,
    renderer: WgpuRenderer,
    hud: Hud,
}

pub struct ViewerApp {
    config: ViewerConfig,
    state: AppState,
    gpu: Option<Gpu>,
}

impl ViewerApp {
    pub fn new(config: ViewerConfig) -> Self {
        let state = AppState::new(&config);
        Self {
            config,
            state,
            gpu: None,
        }
    }

    fn init_gpu(&self, window: Arc<Window>) -> Result<Gpu, RenderError> {
        let size = window.inner_size();
        let context = GpuContext::new(window.clone(), size.width, size.height)?;
        let shader: Cow<'static, str> = load_shader_source(self.config.shader_path.as_deref())?;
        let (width, height) = context.size();
        let renderer = WgpuRenderer::new(
            &context.device,
            context.surface_format(),
            width,
            height,
            &terra_render::pyramid(),
            &shader,
        );
        let hud = Hud::new(&window, &context);
        Ok(Gpu {
            window,
            context,
            renderer,
            hud,
        })
    }

    fn redraw(&mut self) {
        self.state.update();

        let Some(gpu) = &mut self.gpu else {
            return;
        };
        let Some(output) = gpu.context.acquire_frame() else {
            return;
        };
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let frame = FrameTransforms::new(&self.state.camera, &self.state.projection);
        gpu.renderer
            .render(&gpu.context.device, &gpu.context.queue, &view, &frame);
        gpu.hud
            .render(&gpu.window, &gpu.context, &view, &self.state.camera);

        output.present();
        gpu.window.request_redraw();
    }
}

/// Hide and lock the cursor while the viewer has focus.
fn grab_cursor(window: &Window, grab: bool) {
    if grab {
        let grabbed = window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));
        if let Err(e) = grabbed {
            tracing::warn!("cursor grab unavailable: {e}");
        }
    } else if let Err(e) = window.set_cursor_grab(CursorGrabMode::None) {
        tracing::debug!("cursor release failed: {e}");
    }
    window.set_cursor_visible(!grab);
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gpu.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title(self.config.window.title.clone())
            .with_inner_size(PhysicalSize::new(
                self.config.window.width,
                self.config.window.height,
            ));
        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        match self.init_gpu(window) {
            Ok(gpu) => {
                let size = gpu.window.inner_size();
                self.state.projection.resize(size.width, size.height);
                grab_cursor(&gpu.window, true);
                gpu.window.request_redraw();
                self.gpu = Some(gpu);
                self.state.reset_clock();
            }
            Err(e) => {
                tracing::error!("failed to initialize GPU: {e}");
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(gpu) = &mut self.gpu {
            if gpu.hud.on_window_event(&gpu.window, &event) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.context.resize(new_size.width, new_size.height);
                    let (width, height) = gpu.context.size();
                    gpu.renderer.resize(&gpu.context.device, width, height);
                    self.state.projection.resize(width, height);
                    tracing::debug!(width, height, "resized");
                }
            }
            WindowEvent::Focused(focused) => {
                self.state.input.set_focused(focused);
                if let Some(gpu) = &self.gpu {
                    grab_cursor(&gpu.window, focused);
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                let pressed = key_state == ElementState::Pressed;
                match self.state.input.handle_key(key, pressed) {
                    Some(Action::Quit) => {
                        tracing::info!("quit requested");
                        event_loop.exit();
                    }
                    Some(Action::ToggleHud) => {
                        if let Some(gpu) = &mut self.gpu {
                            gpu.hud.visible = !gpu.hud.visible;
                        }
                    }
                    Some(Action::Move(_)) | None => {}
                }
            }
            WindowEvent::RedrawRequested => {
                self.redraw();
            }
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            if self.state.input.is_focused() {
                self.state
                    .input
                    .handle_mouse_motion(Vec2::new(delta.0 as f32, delta.1 as f32));
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(gpu) = &self.gpu {
            gpu.window.request_redraw();
        }
    }
}
