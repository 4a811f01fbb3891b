//! World container for entities
//!
//! The World holds the entity collections shared by the physics and
//! render loops. Registration is append-only: nothing is ever removed,
//! and entities are not addressable individually from outside.

use std::sync::{Arc, RwLock};

use crate::Paddle;
use multiball_physics::Ball;

/// The entity store behind a readers/writer lock
///
/// The physics loop takes the write lock once per tick; the render loop
/// takes the read lock only long enough to copy the collections.
pub type SharedWorld = Arc<RwLock<World>>;

/// The world containing all entities
pub struct World {
    /// All balls in the world
    balls: Vec<Ball>,
    /// All paddles in the world
    paddles: Vec<Paddle>,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// Create a new empty world
    pub fn new() -> Self {
        Self {
            balls: Vec::new(),
            paddles: Vec::new(),
        }
    }

    /// Create a world with pre-allocated capacity per collection
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            balls: Vec::with_capacity(capacity),
            paddles: Vec::with_capacity(capacity),
        }
    }

    /// Register a ball
    pub fn add_ball(&mut self, ball: Ball) {
        self.balls.push(ball);
    }

    /// Register a paddle
    pub fn add_paddle(&mut self, paddle: Paddle) {
        self.paddles.push(paddle);
    }

    /// Get all balls as a slice
    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    /// Get all balls as a mutable slice (field updates only; the
    /// collection itself stays append-only)
    pub fn balls_mut(&mut self) -> &mut [Ball] {
        &mut self.balls
    }

    /// Get all paddles as a slice
    pub fn paddles(&self) -> &[Paddle] {
        &self.paddles
    }

    /// Get the number of balls
    #[inline]
    pub fn ball_count(&self) -> usize {
        self.balls.len()
    }

    /// Get the number of paddles
    #[inline]
    pub fn paddle_count(&self) -> usize {
        self.paddles.len()
    }

    /// Check if the world holds no entities
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.balls.is_empty() && self.paddles.is_empty()
    }

    /// Wrap this world in the shared lock handed to the loops
    pub fn into_shared(self) -> SharedWorld {
        Arc::new(RwLock::new(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use multiball_math::Vec2;

    #[test]
    fn test_world_new() {
        let world = World::new();
        assert!(world.is_empty());
        assert_eq!(world.ball_count(), 0);
        assert_eq!(world.paddle_count(), 0);
    }

    #[test]
    fn test_world_add_ball() {
        let mut world = World::new();
        world.add_ball(Ball::new(Vec2::new(200.0, 200.0)));

        assert_eq!(world.ball_count(), 1);
        assert_eq!(world.balls()[0].pos, Vec2::new(200.0, 200.0));
    }

    #[test]
    fn test_world_add_paddle() {
        let mut world = World::new();
        world.add_paddle(Paddle::new(Vec2::new(10.0, 10.0), 0));

        assert_eq!(world.paddle_count(), 1);
        assert!(!world.is_empty());
    }

    #[test]
    fn test_world_balls_mut() {
        let mut world = World::new();
        world.add_ball(Ball::new(Vec2::ZERO));

        world.balls_mut()[0].pos = Vec2::new(5.0, 5.0);

        assert_eq!(world.balls()[0].pos, Vec2::new(5.0, 5.0));
    }

    #[test]
    fn test_world_with_capacity() {
        let world = World::with_capacity(16);
        assert!(world.is_empty());
    }

    #[test]
    fn test_world_default() {
        let world = World::default();
        assert!(world.is_empty());
    }

    #[test]
    fn test_into_shared() {
        let mut world = World::new();
        world.add_ball(Ball::new(Vec2::new(1.0, 2.0)));
        let shared = world.into_shared();

        {
            let mut guard = shared.write().unwrap();
            guard.balls_mut()[0].pos = Vec2::new(3.0, 4.0);
        }

        let guard = shared.read().unwrap();
        assert_eq!(guard.balls()[0].pos, Vec2::new(3.0, 4.0));
    }
}
