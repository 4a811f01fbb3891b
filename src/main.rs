//! Multiball - multi-window bouncing ball simulation
//!
//! The main thread is the input loop: it owns the winit event loop,
//! drains every pending event and maps quit requests. Physics and
//! rendering each run on their own worker thread against the shared
//! world.

use std::process::ExitCode;
use std::sync::Arc;

use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use multiball::config::AppConfig;
use multiball::scene;
use multiball::systems::{create_windows, PhysicsSystem, RenderSystem, WindowError};
use multiball_core::{RunState, SharedWorld};
use multiball_input::{map_window_event, InputAction};
use multiball_physics::PhysicsConfig;
use multiball_render::{FrameStyle, GpuContext, MultiWindowRenderer, RenderInitError, WindowSurface};

/// Anything that can go wrong before the loops are running
#[derive(Debug)]
enum StartupError {
    NoWindows,
    Window(WindowError),
    Render(RenderInitError),
    Thread(std::io::Error),
}

impl std::fmt::Display for StartupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartupError::NoWindows => write!(f, "window.count is 0, nothing to display"),
            StartupError::Window(e) => write!(f, "{}", e),
            StartupError::Render(e) => write!(f, "{}", e),
            StartupError::Thread(e) => write!(f, "failed to spawn thread: {}", e),
        }
    }
}

impl From<WindowError> for StartupError {
    fn from(e: WindowError) -> Self {
        StartupError::Window(e)
    }
}

impl From<RenderInitError> for StartupError {
    fn from(e: RenderInitError) -> Self {
        StartupError::Render(e)
    }
}

impl From<std::io::Error> for StartupError {
    fn from(e: std::io::Error) -> Self {
        StartupError::Thread(e)
    }
}

/// Main application state: the concurrency coordinator
struct App {
    /// Application configuration
    config: AppConfig,
    /// Shared entity store
    world: SharedWorld,
    /// Cooperative stop flag handed to every loop
    run_state: RunState,
    /// Keeps the windows alive for the process lifetime
    windows: Vec<Arc<Window>>,
    physics: Option<PhysicsSystem>,
    render: Option<RenderSystem>,
    init_failed: bool,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let world = scene::build_world(&config.simulation).into_shared();
        Self {
            config,
            world,
            run_state: RunState::new(),
            windows: Vec::new(),
            physics: None,
            render: None,
            init_failed: false,
        }
    }

    /// Create windows and surfaces, then start both worker loops
    fn start(&mut self, event_loop: &ActiveEventLoop) -> Result<(), StartupError> {
        let windows = create_windows(event_loop, &self.config.window)?;
        let probe = windows.first().ok_or(StartupError::NoWindows)?.clone();

        let ctx = pollster::block_on(GpuContext::new(probe))?;

        // The surface list is complete before any loop starts and never
        // grows afterwards
        let mut surfaces = Vec::with_capacity(windows.len());
        for window in &windows {
            surfaces.push(WindowSurface::new(&ctx, window.clone())?);
        }
        log::info!("created {} windows", surfaces.len());

        let style = FrameStyle {
            background_color: self.config.rendering.background_color,
            foreground_color: self.config.rendering.foreground_color,
            entity_size: self.config.rendering.entity_size,
        };
        let renderer = MultiWindowRenderer::new(ctx, surfaces, style);

        self.physics = Some(PhysicsSystem::spawn(
            self.world.clone(),
            self.run_state.clone(),
            PhysicsConfig::new(self.config.simulation.bounds()),
            self.config.simulation.tick_interval(),
            self.config.simulation.max_dt,
        )?);
        self.render = Some(RenderSystem::spawn(
            renderer,
            self.world.clone(),
            self.run_state.clone(),
            self.config.rendering.max_fps,
        )?);

        self.windows = windows;
        Ok(())
    }

    /// Stop the run and wait for both worker loops
    fn shutdown(&mut self) {
        self.run_state.stop();
        if let Some(mut physics) = self.physics.take() {
            physics.join();
        }
        if let Some(mut render) = self.render.take() {
            render.join();
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if !self.windows.is_empty() || self.init_failed {
            return;
        }
        if let Err(e) = self.start(event_loop) {
            log::error!("startup failed: {}", e);
            self.init_failed = true;
            event_loop.exit();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        // Every pending event is drained here; only mapped actions act
        if let Some(InputAction::Quit) = map_window_event(&event) {
            log::info!("quit requested");
            self.run_state.stop();
            event_loop.exit();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.shutdown();
    }
}

fn main() -> ExitCode {
    let (config, config_err) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    if let Some(e) = config_err {
        log::warn!("failed to load config: {}. Using defaults.", e);
    }

    log::info!("starting multiball");

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("failed to create event loop: {}", e);
            return ExitCode::from(1);
        }
    };
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(config);
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("event loop error: {}", e);
        return ExitCode::from(1);
    }
    if app.init_failed {
        return ExitCode::from(1);
    }

    log::info!("multiball stopped");
    ExitCode::SUCCESS
}
