//! Physics loop thread
//!
//! Runs the integrator against the shared store on its own thread:
//! measure elapsed time, step every ball under the write lock, sleep the
//! tick interval, until the run state stops.

use std::io;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use multiball_core::{RunState, SharedWorld};
use multiball_physics::{Integrator, PhysicsConfig};

/// Owns the physics worker thread
pub struct PhysicsSystem {
    handle: Option<JoinHandle<()>>,
}

impl PhysicsSystem {
    /// Spawn the physics loop
    ///
    /// `max_dt` caps the measured elapsed time so a stall (or the very
    /// first measurement) never teleports balls across the world.
    pub fn spawn(
        world: SharedWorld,
        run_state: RunState,
        config: PhysicsConfig,
        tick_interval: Duration,
        max_dt: f32,
    ) -> io::Result<Self> {
        let handle = thread::Builder::new().name("physics".into()).spawn(move || {
            run_loop(
                world,
                run_state,
                Integrator::with_config(config),
                tick_interval,
                max_dt,
            );
        })?;

        Ok(Self {
            handle: Some(handle),
        })
    }

    /// Wait for the loop to wind down
    ///
    /// Call after stopping the run state; joining a running loop blocks
    /// until its next check.
    pub fn join(&mut self) {
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("physics thread panicked");
            }
        }
    }
}

fn run_loop(
    world: SharedWorld,
    run_state: RunState,
    integrator: Integrator,
    tick_interval: Duration,
    max_dt: f32,
) {
    log::info!("physics loop started");

    // Prime the timestamp so the first tick measures a real interval
    let mut last_tick = Instant::now();

    while run_state.is_running() {
        let now = Instant::now();
        let dt = (now - last_tick).as_secs_f32().min(max_dt);
        last_tick = now;

        {
            let mut world = match world.write() {
                Ok(world) => world,
                Err(_) => {
                    log::error!("world lock poisoned, stopping physics loop");
                    run_state.stop();
                    break;
                }
            };
            integrator.step(world.balls_mut(), dt);
        }

        thread::sleep(tick_interval);
    }

    log::info!("physics loop stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use multiball_core::World;
    use multiball_math::Vec2;
    use multiball_physics::Ball;

    #[test]
    fn test_loop_advances_and_stops() {
        let mut world = World::new();
        world.add_ball(Ball::new(Vec2::new(200.0, 200.0)).with_velocity(Vec2::new(100.0, 30.0)));
        let shared = world.into_shared();

        let run_state = RunState::new();
        let mut system = PhysicsSystem::spawn(
            shared.clone(),
            run_state.clone(),
            PhysicsConfig::default(),
            Duration::from_millis(1),
            0.25,
        )
        .expect("spawn physics thread");

        // Give the loop a few ticks of wall clock
        thread::sleep(Duration::from_millis(50));
        run_state.stop();
        system.join();

        let guard = shared.read().unwrap();
        let ball = guard.balls()[0];
        assert_ne!(ball.pos, Vec2::new(200.0, 200.0), "ball should have moved");
    }

    #[test]
    fn test_join_without_ticks() {
        let shared = World::new().into_shared();
        let run_state = RunState::new();
        let mut system = PhysicsSystem::spawn(
            shared,
            run_state.clone(),
            PhysicsConfig::default(),
            Duration::from_millis(1),
            0.25,
        )
        .expect("spawn physics thread");

        run_state.stop();
        system.join();
    }
}
