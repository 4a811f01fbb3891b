//! WGPU device and per-window surface management

use std::sync::Arc;

use multiball_math::Vec2;
use winit::window::{Window, WindowId};

/// Errors raised while bringing up the video subsystem
///
/// All of these are fatal: the coordinator reports them and aborts
/// startup instead of continuing with a half-built surface list.
#[derive(Debug)]
pub enum RenderInitError {
    /// No compatible graphics adapter was found
    NoAdapter,
    /// The adapter refused to hand out a device
    DeviceRequest(String),
    /// A window surface could not be created
    SurfaceCreation(String),
    /// The adapter offers no usable configuration for a surface
    SurfaceUnsupported,
}

impl std::fmt::Display for RenderInitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderInitError::NoAdapter => write!(f, "no compatible graphics adapter found"),
            RenderInitError::DeviceRequest(msg) => write!(f, "device request failed: {}", msg),
            RenderInitError::SurfaceCreation(msg) => {
                write!(f, "surface creation failed: {}", msg)
            }
            RenderInitError::SurfaceUnsupported => {
                write!(f, "surface not supported by the adapter")
            }
        }
    }
}

impl std::error::Error for RenderInitError {}

/// Shared GPU state: one instance, adapter, device and queue for every
/// window surface
pub struct GpuContext {
    pub instance: wgpu::Instance,
    pub adapter: wgpu::Adapter,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
}

impl GpuContext {
    /// Bring up the GPU stack
    ///
    /// A probe surface for `window` is created so the adapter is
    /// guaranteed to support presenting to the application's windows;
    /// the probe is dropped again before returning.
    pub async fn new(window: Arc<Window>) -> Result<Self, RenderInitError> {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());

        let probe = instance
            .create_surface(window)
            .map_err(|e| RenderInitError::SurfaceCreation(e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&probe),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(RenderInitError::NoAdapter)?;

        log::info!("using adapter: {}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Multiball Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::default(),
                },
                None,
            )
            .await
            .map_err(|e| RenderInitError::DeviceRequest(e.to_string()))?;

        Ok(Self {
            instance,
            adapter,
            device,
            queue,
        })
    }
}

/// One display surface: a window plus its configured wgpu surface
///
/// The surface list is built once at startup and never grows afterwards.
pub struct WindowSurface {
    window: Arc<Window>,
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
}

impl WindowSurface {
    /// Create and configure a surface for the given window
    pub fn new(ctx: &GpuContext, window: Arc<Window>) -> Result<Self, RenderInitError> {
        let surface = ctx
            .instance
            .create_surface(window.clone())
            .map_err(|e| RenderInitError::SurfaceCreation(e.to_string()))?;

        let size = window.inner_size();
        let config = surface
            .get_default_config(&ctx.adapter, size.width.max(1), size.height.max(1))
            .ok_or(RenderInitError::SurfaceUnsupported)?;
        surface.configure(&ctx.device, &config);

        Ok(Self {
            window,
            surface,
            config,
        })
    }

    /// The window this surface belongs to
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// The window's id
    pub fn id(&self) -> WindowId {
        self.window.id()
    }

    /// The surface's texture format
    pub fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Current configured size in pixels
    pub fn size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    /// Live outer position of the window in desktop coordinates
    ///
    /// Queried fresh every frame so a window dragged by the user shifts
    /// its view of the world. Platforms that cannot report a position
    /// (e.g. Wayland) fall back to the desktop origin.
    pub fn origin(&self) -> Vec2 {
        match self.window.outer_position() {
            Ok(pos) => Vec2::new(pos.x as f32, pos.y as f32),
            Err(_) => Vec2::ZERO,
        }
    }

    /// Resize the surface if the window's framebuffer size changed
    pub fn sync_size(&mut self, device: &wgpu::Device) {
        let size = self.window.inner_size();
        if size.width > 0
            && size.height > 0
            && (size.width, size.height) != (self.config.width, self.config.height)
        {
            self.config.width = size.width;
            self.config.height = size.height;
            self.surface.configure(device, &self.config);
        }
    }

    /// Reconfigure with the current settings (after a lost surface)
    pub fn reconfigure(&self, device: &wgpu::Device) {
        self.surface.configure(device, &self.config);
    }

    /// Acquire the next frame to draw into
    pub fn acquire(&self) -> Result<wgpu::SurfaceTexture, wgpu::SurfaceError> {
        self.surface.get_current_texture()
    }
}
