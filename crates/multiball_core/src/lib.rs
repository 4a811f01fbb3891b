//! Core types for Multiball
//!
//! This crate provides the shared state the three loops operate on:
//!
//! - [`Paddle`] - a stationary entity owned by a player
//! - [`World`] - the append-only entity store
//! - [`SharedWorld`] - the store behind a readers/writer lock
//! - [`RunState`] - the cooperative stop flag checked by every loop

mod entity;
mod run_state;
mod world;

pub use entity::Paddle;
pub use run_state::RunState;
pub use world::{SharedWorld, World};

// Re-export commonly used types from the leaf crates for convenience
pub use multiball_math::Vec2;
pub use multiball_physics::{Ball, Integrator, PhysicsConfig};
