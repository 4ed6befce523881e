use std::sync::Arc;

use clap::Parser;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window as WinitWindow, WindowId},
};

use bedroom_scene::camera::Camera;
use bedroom_scene::cli::Cli;
use bedroom_scene::frame::{FpsCounter, FrameClock};
use bedroom_scene::renderer::SceneRenderer;
use bedroom_scene::scene::SceneGraph;
use bedroom_scene::scenes::create_scene;
use bedroom_scene::window::Window;

const FPS_UPDATE_INTERVAL: f32 = 1.0;
const INITIAL_WINDOW_WIDTH: u32 = 800;
const INITIAL_WINDOW_HEIGHT: u32 = 600;

/// One state ("rendering") and a self-transition per frame. The scene and
/// camera are assembled before the window exists and never change afterwards.
struct App {
    cli: Cli,
    scene: SceneGraph,
    camera: Camera,
    window: Option<Window>,
    renderer: Option<SceneRenderer>,
    clock: FrameClock,
    fps_counter: FpsCounter,
}

impl App {
    fn new(cli: Cli) -> Self {
        let scene = create_scene(cli.scene);
        let camera = Camera::facing_room();

        Self {
            cli,
            scene,
            camera,
            window: None,
            renderer: None,
            clock: FrameClock::new(),
            fps_counter: FpsCounter::new(FPS_UPDATE_INTERVAL),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window = match event_loop.create_window(
                WinitWindow::default_attributes()
                    .with_title("Bedroom Scene")
                    .with_inner_size(winit::dpi::LogicalSize::new(
                        INITIAL_WINDOW_WIDTH,
                        INITIAL_WINDOW_HEIGHT,
                    )),
            ) {
                Ok(w) => Arc::new(w),
                Err(e) => {
                    eprintln!("Failed to create window: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            let renderer = match pollster::block_on(SceneRenderer::new(
                window.clone(),
                &self.scene,
                !self.cli.no_ui,
            )) {
                Ok(renderer) => renderer,
                Err(e) => {
                    eprintln!("Failed to initialize renderer: {}", e);
                    event_loop.exit();
                    return;
                }
            };

            self.window = Some(Window::new(window));
            self.renderer = Some(renderer);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui see the event first
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            if renderer.handle_event(window.inner(), &event) {
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
            WindowEvent::RedrawRequested => {
                let frame = self.clock.tick();
                if let Some(fps) = self.fps_counter.tick(frame.delta) {
                    if !self.cli.no_ui {
                        println!("FPS: {:.1}", fps);
                    }
                }

                if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
                    if let Err(e) = window.draw(renderer, &self.camera, self.fps_counter.fps()) {
                        eprintln!("Render error: {}", e);
                    }
                }
            }
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
    if !cli.no_ui {
        println!("Bedroom Scene - Escape to quit");
    }

    let event_loop = EventLoop::new()?;
    let mut app = App::new(cli);
    event_loop.run_app(&mut app)?;

    Ok(())
}
