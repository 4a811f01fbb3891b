//! Multi-window frame rendering
//!
//! One pass per surface: clear, project every entity into the surface's
//! local space, draw, present. Rendering never mutates entity state; the
//! caller hands in a snapshot of the collections.

use crate::context::{GpuContext, WindowSurface};
use crate::pipeline::{QuadPipeline, QuadUniforms, VERTICES_PER_QUAD};
use crate::projection::{project_to_surface, quad_vertices};
use multiball_core::Paddle;
use multiball_physics::Ball;

/// Visual settings for the frame pass
#[derive(Clone, Debug)]
pub struct FrameStyle {
    /// Clear color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Entity color [r, g, b, a]
    pub foreground_color: [f32; 4],
    /// Side length of the square drawn per entity, in pixels
    pub entity_size: f32,
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self {
            background_color: [0.0, 0.0, 0.0, 1.0],
            foreground_color: [1.0, 1.0, 1.0, 1.0],
            entity_size: 10.0,
        }
    }
}

/// Unrecoverable frame failure
#[derive(Debug)]
pub enum FrameError {
    /// The GPU ran out of memory; the run should stop
    OutOfMemory,
}

impl std::fmt::Display for FrameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FrameError::OutOfMemory => write!(f, "GPU out of memory"),
        }
    }
}

impl std::error::Error for FrameError {}

/// Draws the world into every registered surface
pub struct MultiWindowRenderer {
    ctx: GpuContext,
    pipeline: QuadPipeline,
    surfaces: Vec<WindowSurface>,
    style: FrameStyle,
}

impl MultiWindowRenderer {
    /// Create a renderer over a fixed surface list
    ///
    /// The pipeline targets the first surface's format; surfaces with a
    /// different preferred format would need their own pipeline, which
    /// does not happen with a single shared adapter.
    pub fn new(ctx: GpuContext, surfaces: Vec<WindowSurface>, style: FrameStyle) -> Self {
        let format = surfaces
            .first()
            .map(|s| s.format())
            .unwrap_or(wgpu::TextureFormat::Bgra8UnormSrgb);
        for surface in surfaces.iter().skip(1) {
            if surface.format() != format {
                log::warn!(
                    "surface {:?} prefers {:?}, pipeline targets {:?}",
                    surface.id(),
                    surface.format(),
                    format
                );
            }
        }
        let pipeline = QuadPipeline::new(&ctx.device, format);

        Self {
            ctx,
            pipeline,
            surfaces,
            style,
        }
    }

    /// Number of registered surfaces
    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    /// Render one frame of the given entity snapshot into every surface
    pub fn render_frame(&mut self, balls: &[Ball], paddles: &[Paddle]) -> Result<(), FrameError> {
        for index in 0..self.surfaces.len() {
            self.render_surface(index, balls, paddles)?;
        }
        Ok(())
    }

    fn render_surface(
        &mut self,
        index: usize,
        balls: &[Ball],
        paddles: &[Paddle],
    ) -> Result<(), FrameError> {
        let surface = &mut self.surfaces[index];
        surface.sync_size(&self.ctx.device);

        let origin = surface.origin();
        let style = &self.style;

        let mut vertices =
            Vec::with_capacity((balls.len() + paddles.len()) * VERTICES_PER_QUAD);
        for ball in balls {
            let local = project_to_surface(ball.pos, origin);
            vertices.extend_from_slice(&quad_vertices(
                local,
                style.entity_size,
                style.foreground_color,
            ));
        }
        for paddle in paddles {
            let local = project_to_surface(paddle.pos, origin);
            vertices.extend_from_slice(&quad_vertices(
                local,
                style.entity_size,
                style.foreground_color,
            ));
        }

        let frame = match surface.acquire() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                surface.reconfigure(&self.ctx.device);
                return Ok(());
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                return Err(FrameError::OutOfMemory);
            }
            Err(e) => {
                log::warn!("surface error on window {:?}: {:?}", surface.id(), e);
                return Ok(());
            }
        };

        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let (width, height) = surface.size();
        self.pipeline
            .update_uniforms(&self.ctx.queue, &QuadUniforms::for_size(width, height));
        let vertex_count = self.pipeline.upload_vertices(&self.ctx.queue, &vertices);

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Frame Encoder"),
            });

        let bg = style.background_color;
        self.pipeline.render(
            &mut encoder,
            &view,
            vertex_count,
            wgpu::Color {
                r: bg[0] as f64,
                g: bg[1] as f64,
                b: bg[2] as f64,
                a: bg[3] as f64,
            },
        );

        self.ctx.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
        Ok(())
    }
}
