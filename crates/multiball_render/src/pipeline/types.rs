//! GPU-compatible data types for the quad pipeline
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};

/// A vertex in surface-local pixel coordinates with color
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct Vertex2D {
    /// Position in surface-local pixels (origin top-left)
    pub position: [f32; 2],
    /// RGBA color
    pub color: [f32; 4],
}

impl Vertex2D {
    /// Create a new vertex
    pub fn new(position: [f32; 2], color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

/// Uniforms for the quad shader
/// Layout: 16 bytes total (must match quad.wgsl QuadUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct QuadUniforms {
    /// Surface size in pixels, for the pixel-to-clip transform
    pub surface_size: [f32; 2],
    /// Padding to 16 bytes
    pub _padding: [f32; 2],
}

impl QuadUniforms {
    /// Uniforms for a surface of the given pixel size
    pub fn for_size(width: u32, height: u32) -> Self {
        Self {
            surface_size: [width as f32, height as f32],
            _padding: [0.0; 2],
        }
    }
}

impl Default for QuadUniforms {
    fn default() -> Self {
        Self::for_size(1, 1)
    }
}

/// Maximum number of quads the preallocated vertex buffer can hold per frame
pub const MAX_QUADS: usize = 4096;

/// Vertices per quad (two triangles)
pub const VERTICES_PER_QUAD: usize = 6;
