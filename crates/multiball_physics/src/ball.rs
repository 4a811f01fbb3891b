//! Ball entity

use multiball_math::Vec2;

/// A moving ball in world space
///
/// Balls carry no identity beyond their slot in the store; they are plain
/// values owned by the collection that holds them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ball {
    /// Position in world coordinates
    pub pos: Vec2,
    /// Velocity in world units per second
    pub vel: Vec2,
}

impl Ball {
    /// Create a stationary ball at the given position
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
        }
    }

    /// Set the velocity of this ball
    pub fn with_velocity(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ball() {
        let ball = Ball::new(Vec2::new(200.0, 200.0));
        assert_eq!(ball.pos, Vec2::new(200.0, 200.0));
        assert_eq!(ball.vel, Vec2::ZERO);
    }

    #[test]
    fn test_with_velocity() {
        let ball = Ball::new(Vec2::ZERO).with_velocity(Vec2::new(100.0, 30.0));
        assert_eq!(ball.vel, Vec2::new(100.0, 30.0));
    }
}
