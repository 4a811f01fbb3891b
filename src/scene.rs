//! Initial world construction
//!
//! Kept free of windowing so the startup contents stay unit-testable.

use crate::config::SimulationConfig;
use multiball_core::World;
use multiball_math::Vec2;
use multiball_physics::Ball;

/// Build the starting world: one ball, no paddles
///
/// The paddle type exists in the store but nothing registers one yet.
pub fn build_world(config: &SimulationConfig) -> World {
    let mut world = World::new();
    world.add_ball(
        Ball::new(Vec2::from(config.ball_start)).with_velocity(Vec2::from(config.ball_velocity)),
    );
    world
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scene_contents() {
        let world = build_world(&SimulationConfig::default());

        assert_eq!(world.ball_count(), 1);
        assert_eq!(world.paddle_count(), 0);

        let ball = world.balls()[0];
        assert_eq!(ball.pos, Vec2::new(200.0, 200.0));
        assert_eq!(ball.vel, Vec2::new(100.0, 30.0));
    }

    #[test]
    fn test_scene_respects_config() {
        let config = SimulationConfig {
            ball_start: [10.0, 20.0],
            ball_velocity: [1.0, 2.0],
            ..SimulationConfig::default()
        };
        let world = build_world(&config);

        let ball = world.balls()[0];
        assert_eq!(ball.pos, Vec2::new(10.0, 20.0));
        assert_eq!(ball.vel, Vec2::new(1.0, 2.0));
    }
}
