//! Physics configuration and integration

use crate::ball::Ball;
use multiball_math::Vec2;

/// World-space simulation width, independent of window pixel sizes
pub const SCREEN_WIDTH: f32 = 1024.0;
/// World-space simulation height, independent of window pixel sizes
pub const SCREEN_HEIGHT: f32 = 600.0;

/// Configuration for the physics simulation
#[derive(Clone, Debug)]
pub struct PhysicsConfig {
    /// Upper world bounds; positions reflect off these on each axis
    pub bounds: Vec2,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            bounds: Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
        }
    }
}

impl PhysicsConfig {
    /// Create a new physics config with the given bounds
    pub fn new(bounds: Vec2) -> Self {
        Self { bounds }
    }
}

/// Advances balls with forward Euler integration and boundary reflection
///
/// The integrator does not own the balls; ownership stays with the store
/// and the caller passes a mutable slice per step.
pub struct Integrator {
    /// Physics configuration
    pub config: PhysicsConfig,
}

impl Integrator {
    /// Create a new integrator with default configuration
    pub fn new() -> Self {
        Self::with_config(PhysicsConfig::default())
    }

    /// Create a new integrator with custom configuration
    pub fn with_config(config: PhysicsConfig) -> Self {
        Self { config }
    }

    /// Advance a single ball by `dt` seconds
    ///
    /// Position is integrated per axis as `pos + vel * dt`. A coordinate
    /// that ends up past its upper bound is mirrored back across it and
    /// the velocity on that axis negated. Axes are independent, so a
    /// corner hit can flip both. Only the upper bound is checked; a ball
    /// can leave through zero.
    pub fn advance(&self, ball: &mut Ball, dt: f32) {
        let mut pos = ball.pos + ball.vel * dt;

        if pos.x > self.config.bounds.x {
            pos.x = self.config.bounds.x - (pos.x - self.config.bounds.x);
            ball.vel.x = -ball.vel.x;
        }
        if pos.y > self.config.bounds.y {
            pos.y = self.config.bounds.y - (pos.y - self.config.bounds.y);
            ball.vel.y = -ball.vel.y;
        }

        ball.pos = pos;
    }

    /// Advance every ball in the slice by `dt` seconds
    ///
    /// Emits a per-ball diagnostic line with the post-integration position.
    pub fn step(&self, balls: &mut [Ball], dt: f32) {
        for (index, ball) in balls.iter_mut().enumerate() {
            self.advance(ball, dt);
            log::trace!(
                "ball {}: x: {:.3}, y: {:.3}",
                index,
                ball.pos.x,
                ball.pos.y
            );
        }
    }
}

impl Default for Integrator {
    fn default() -> Self {
        Self::new()
    }
}
