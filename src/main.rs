use clap::Parser;
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{CursorGrabMode, Window, WindowId},
};

use progressive_flycam::cli::Cli;
use progressive_flycam::config::Settings;
use progressive_flycam::core::{Clock, WinitController};
use progressive_flycam::renderer::Renderer;
use progressive_flycam::rig::FlyCamera;
use progressive_flycam::ControllerSettings;

const FPS_UPDATE_INTERVAL: f32 = 1.0;

// === Application ===

struct App {
    settings: Settings,
    show_ui: bool,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    rig: FlyCamera,
    input: WinitController,
    clock: Clock,
    frame_count: u32,
    fps: f32,
    fps_update_timer: f32,
}

impl App {
    fn new(settings: Settings, show_ui: bool) -> Self {
        let rig = FlyCamera::new(settings.camera.to_camera(), ControllerSettings::default());
        Self {
            settings,
            show_ui,
            window: None,
            renderer: None,
            rig,
            input: WinitController::new(),
            clock: Clock::new(),
            frame_count: 0,
            fps: 0.0,
            fps_update_timer: 0.0,
        }
    }

    fn update_fps(&mut self, delta: f32) {
        self.frame_count += 1;
        self.fps_update_timer += delta;

        if self.fps_update_timer >= FPS_UPDATE_INTERVAL {
            self.fps = self.frame_count as f32 / self.fps_update_timer;
            log::debug!(
                "FPS: {:.1}, samples: {}",
                self.fps,
                self.rig.counters().frames_since_last_move + 1
            );
            self.frame_count = 0;
            self.fps_update_timer = 0.0;
        }
    }

    fn grab_cursor(&mut self) {
        let Some(window) = &self.window else {
            return;
        };

        let grabbed = window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined));

        match grabbed {
            Ok(()) => {
                window.set_cursor_visible(false);
                self.input.set_grabbed(true);
            }
            Err(e) => {
                log::warn!("Cursor grab unavailable, falling back to cursor position: {}", e);
                self.input.set_grabbed(false);
            }
        }
    }

    /// One tick: sample input, update camera, gate, render
    fn tick(&mut self, event_loop: &ActiveEventLoop) {
        let delta = self.clock.tick();
        self.update_fps(delta);

        let report = self.rig.tick(delta, &self.input);

        let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) else {
            return;
        };

        match renderer.render(window, self.rig.camera(), &report, self.fps) {
            Ok(()) => {}
            Err(e) => {
                // The clear may not have reached the GPU
                self.rig.invalidate();
                match e {
                    wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
                        let size = renderer.size();
                        renderer.resize(size);
                    }
                    wgpu::SurfaceError::OutOfMemory => {
                        log::error!("Render error: {}", e);
                        event_loop.exit();
                    }
                    _ => log::warn!("Render error: {}", e),
                }
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            Window::default_attributes()
                .with_title(self.settings.window.title.clone())
                .with_inner_size(winit::dpi::PhysicalSize::new(
                    self.settings.window.width,
                    self.settings.window.height,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let renderer = match pollster::block_on(Renderer::new(
            window.clone(),
            self.rig.camera(),
            self.show_ui,
        )) {
            Ok(r) => r,
            Err(e) => {
                log::error!("Failed to initialize renderer: {:#}", e);
                event_loop.exit();
                return;
            }
        };

        self.window = Some(window);
        self.renderer = Some(renderer);
        self.grab_cursor();
        self.clock.reset();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            if renderer.handle_event(window, &event) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested
            | WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size);
                    self.rig.invalidate();
                }
            }
            WindowEvent::Focused(true) => self.grab_cursor(),
            WindowEvent::RedrawRequested => self.tick(event_loop),
            other => self.input.process_event(&other),
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.input.process_mouse_motion(delta);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let settings = Settings::from_cli(&cli)?;
    log::info!(
        "Starting {}x{}, fov {}",
        settings.window.width,
        settings.window.height,
        settings.camera.fov
    );

    let event_loop = EventLoop::new()?;
    let mut app = App::new(settings, !cli.no_ui);

    log::info!("Controls: WASD/arrows move, Space up, Ctrl down, mouse look, Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
