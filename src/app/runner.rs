//! Main application handler for the game

use std::sync::Arc;

use tracing::{debug, error, info, trace, warn};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use super::config::AppConfig;
use super::error::InitError;
use super::input::{InputCollector, apply_input};
use super::pacer::FramePacer;
use super::renderer::Renderer;
use super::scene;
use super::window::{centered_position, window_attributes_from_config};
use crate::sim::World;
use crate::sim::collision::Arena;

/// Main game application
pub struct App {
    config: AppConfig,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    world: World,
    pacer: FramePacer,
    input: InputCollector,
    init_error: Option<InitError>,
}

impl App {
    /// Creates a new game application with the provided configuration.
    ///
    /// The frame clock starts here.
    pub fn new(config: AppConfig) -> Self {
        info!(profile = %config.profile, "Starting game");
        info!(?config.window, ?config.frame, "Configuration");

        let arena = Arena::new(config.window.width as f32, config.window.height as f32);
        let pacer = FramePacer::new(config.frame.frame_target_ms(), config.frame.pacing);

        Self {
            config,
            window: None,
            renderer: None,
            world: World::with_arena(arena),
            pacer,
            input: InputCollector::new(),
            init_error: None,
        }
    }

    /// Takes the startup failure, if window or renderer creation failed
    pub fn take_init_error(&mut self) -> Option<InitError> {
        self.init_error.take()
    }

    fn init_graphics(&mut self, event_loop: &ActiveEventLoop) -> Result<(), InitError> {
        let mut attributes = window_attributes_from_config(&self.config.window);
        if let Some(monitor) = event_loop.primary_monitor() {
            let position = centered_position(
                monitor.position(),
                monitor.size(),
                monitor.scale_factor(),
                &self.config.window,
            );
            debug!(x = position.x, y = position.y, "Centering window");
            attributes = attributes.with_position(position);
        }
        let window = event_loop.create_window(attributes)?;
        let size = window.inner_size();
        info!(
            window.width = size.width,
            window.height = size.height,
            "Window created successfully"
        );

        let window = Arc::new(window);
        let arena = self.world.arena();
        let arena_size = [arena.width, arena.height];

        // winit's event loop is synchronous; drive the async setup to completion here
        let renderer = tokio::runtime::Builder::new_current_thread()
            .build()?
            .block_on(Renderer::new(
                window.clone(),
                arena_size,
                self.config.window.vsync,
            ))
            .map_err(InitError::Renderer)?;

        info!("Renderer initialized successfully");
        self.renderer = Some(renderer);
        self.window = Some(window);
        Ok(())
    }

    /// One loop iteration: input, pacing, simulation, render
    fn run_frame(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(event) = self.input.poll() {
            apply_input(&mut self.world, event);
        }

        let delta_time = self.pacer.wait_for_next_frame();

        let bounce = self.world.step(delta_time);
        if bounce.any() {
            trace!(?bounce, tick = self.world.tick_count(), "ball bounced");
        }

        self.render(event_loop);

        if !self.world.is_running() {
            info!(
                ticks = self.world.tick_count(),
                sim_time = self.world.sim_time(),
                "Quit requested, exiting"
            );
            event_loop.exit();
        }
    }

    fn render(&mut self, event_loop: &ActiveEventLoop) {
        let Some(renderer) = &mut self.renderer else {
            return;
        };

        let rects = scene::frame_rects(&self.world);
        match renderer.draw(scene::CLEAR_COLOR, &rects) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                warn!("Surface lost, reconfiguring");
                renderer.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                error!("Out of memory, exiting");
                event_loop.exit();
            }
            Err(e) => {
                warn!(error = %e, "Frame skipped");
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.init_error.is_some() {
            return;
        }

        match self.init_graphics(event_loop) {
            Ok(()) => debug!("Entering game loop"),
            Err(e) => {
                error!(error = %e, details = ?e, "Initialization failed");
                self.init_error = Some(e);
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.renderer.is_some() && self.world.is_running() {
            self.run_frame(event_loop);
        }
    }

    fn window_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        self.input.handle_window_event(&event);

        match event {
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size);
                }
            }
            WindowEvent::RedrawRequested => {
                // Only the OS asks for these; the loop draws every frame itself
                if let Some(renderer) = &mut self.renderer {
                    let rects = scene::frame_rects(&self.world);
                    if let Err(e) = renderer.draw(scene::CLEAR_COLOR, &rects) {
                        debug!(error = %e, "Redraw skipped");
                    }
                }
            }
            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        // Surface must go before the window it was created from
        self.renderer = None;
        self.window = None;
        info!("Window destroyed");
    }
}

/// Opens the window and runs the game loop until quit.
///
/// Returns an error when the event loop, window or renderer cannot be
/// created; the loop is never entered in that case.
pub fn run(config: AppConfig) -> Result<(), InitError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop.run_app(&mut app)?;

    match app.take_init_error() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
