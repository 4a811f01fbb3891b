//! Multi-window rendering for Multiball
//!
//! This crate draws the shared world into any number of windows, each
//! seen from its own desktop offset.
//!
//! ## Key Components
//!
//! - [`context::GpuContext`] - wgpu instance, adapter, device and queue
//! - [`context::WindowSurface`] - one window plus its configured surface
//! - [`pipeline::QuadPipeline`] - flat-color quads in pixel coordinates
//! - [`projection`] - world-space to surface-local projection
//! - [`renderer::MultiWindowRenderer`] - the per-frame clear/draw/present pass

pub mod context;
pub mod pipeline;
pub mod projection;
pub mod renderer;

pub use context::{GpuContext, RenderInitError, WindowSurface};
pub use pipeline::{QuadPipeline, QuadUniforms, Vertex2D};
pub use projection::{project_to_surface, quad_vertices};
pub use renderer::{FrameError, FrameStyle, MultiWindowRenderer};

// Re-export core types for convenience
pub use multiball_core::{Ball, Paddle, World};
