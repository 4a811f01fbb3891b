//! Ball physics for Multiball
//!
//! This crate provides the simulation step for ball entities:
//! - [`Ball`] - a moving entity with position and velocity
//! - [`Integrator`] - forward Euler integration with upper-bound reflection
//! - [`PhysicsConfig`] - world bounds configuration

pub mod ball;
pub mod world;

pub use ball::Ball;
pub use world::{Integrator, PhysicsConfig, SCREEN_HEIGHT, SCREEN_WIDTH};
