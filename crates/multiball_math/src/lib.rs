//! 2D Mathematics for Multiball
//!
//! This crate provides the [`Vec2`] value type used for positions and
//! velocities in world space and for surface-local draw coordinates.

mod vec2;

pub use vec2::Vec2;
