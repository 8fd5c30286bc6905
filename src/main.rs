use std::sync::Arc;

use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use cube_light::camera::Camera;
use cube_light::cli::Cli;
use cube_light::frame::FrameClock;
use cube_light::input::HeldActions;
use cube_light::renderer::Renderer;

struct App {
    cli: Cli,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    camera: Camera,
    held: HeldActions,
    clock: FrameClock,
}

impl App {
    fn new(cli: Cli) -> Self {
        let camera = Camera::with_speeds(cli.speed, cli.turn_speed);
        Self {
            cli,
            window: None,
            renderer: None,
            camera,
            held: HeldActions::new(),
            clock: FrameClock::new(),
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let frame = self.clock.tick();

        for action in self.held.iter() {
            self.camera.process_movement(action, frame.delta);
        }

        let Some(renderer) = &mut self.renderer else {
            return;
        };

        match renderer.render(&self.camera, frame.time) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                renderer.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("out of GPU memory, exiting");
                event_loop.exit();
            }
            Err(e) => log::warn!("skipping frame: {}", e),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                Window::default_attributes()
                    .with_title("cube-light")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        self.cli.width,
                        self.cli.height,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    log::error!("failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let renderer =
                match pollster::block_on(Renderer::new(window.clone(), self.cli.no_vsync)) {
                    Ok(r) => r,
                    Err(e) => {
                        log::error!("failed to initialize renderer: {:#}", e);
                        event_loop.exit();
                        return;
                    }
                };

            self.window = Some(window);
            self.renderer = Some(renderer);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
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
            WindowEvent::KeyboardInput { event, .. } => {
                let _ = self.held.handle_key(&event);
            }
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli);

    log::info!("controls: WASD move, arrows pitch/yaw, E/R roll, Escape quits");
    event_loop.run_app(&mut app)?;

    Ok(())
}
