//! Integration tests for the store-physics pipeline
//!
//! These tests verify the entity store and the integrator work together
//! the way the loops use them:
//! 1. Balls registered in the store are advanced in place
//! 2. Reflection keeps exceeded coordinates under the upper bounds
//! 3. Stepping through the shared lock matches stepping directly

use multiball_core::{Ball, Integrator, PhysicsConfig, RunState, Vec2, World};

/// Test that stepping the store advances every registered ball in place
#[test]
fn test_store_balls_advance_in_place() {
    let mut world = World::new();
    world.add_ball(Ball::new(Vec2::new(200.0, 200.0)).with_velocity(Vec2::new(100.0, 30.0)));
    world.add_ball(Ball::new(Vec2::new(50.0, 50.0)).with_velocity(Vec2::new(-10.0, 0.0)));

    let integrator = Integrator::new();
    integrator.step(world.balls_mut(), 0.1);

    assert_eq!(world.balls()[0].pos, Vec2::new(210.0, 203.0));
    assert_eq!(world.balls()[1].pos, Vec2::new(49.0, 50.0));
}

/// Test that a ball heading past the bound is reflected inside it
#[test]
fn test_store_ball_reflects_off_upper_bounds() {
    let mut world = World::new();
    world.add_ball(Ball::new(Vec2::new(1020.0, 100.0)).with_velocity(Vec2::new(100.0, 30.0)));

    let integrator = Integrator::new();
    integrator.step(world.balls_mut(), 0.1);

    let ball = world.balls()[0];
    assert!((ball.pos.x - 1018.0).abs() < 0.001);
    assert_eq!(ball.vel.x, -100.0);
    assert!(ball.pos.x < integrator.config.bounds.x);
}

/// Test that repeated ticks through the shared lock are deterministic
#[test]
fn test_shared_world_stepping_is_deterministic() {
    let run = || {
        let mut world = World::new();
        world.add_ball(Ball::new(Vec2::new(200.0, 200.0)).with_velocity(Vec2::new(100.0, 30.0)));
        let shared = world.into_shared();

        let integrator = Integrator::with_config(PhysicsConfig::default());
        for _ in 0..500 {
            let mut guard = shared.write().unwrap();
            integrator.step(guard.balls_mut(), 0.01);
        }

        let guard = shared.read().unwrap();
        (guard.balls()[0].pos, guard.balls()[0].vel)
    };

    assert_eq!(run(), run());
}

/// Test that the run state observed from another handle stops a tick loop
#[test]
fn test_run_state_stops_a_tick_loop() {
    let mut world = World::new();
    world.add_ball(Ball::new(Vec2::ZERO).with_velocity(Vec2::new(1.0, 0.0)));
    let shared = world.into_shared();

    let run_state = RunState::new();
    let stopper = run_state.clone();
    let integrator = Integrator::new();

    let mut ticks = 0;
    while run_state.is_running() {
        let mut guard = shared.write().unwrap();
        integrator.step(guard.balls_mut(), 0.01);
        ticks += 1;
        if ticks == 10 {
            stopper.stop();
        }
    }

    assert_eq!(ticks, 10);
    let guard = shared.read().unwrap();
    assert!((guard.balls()[0].pos.x - 0.1).abs() < 0.001);
}
