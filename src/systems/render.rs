//! Render loop thread
//!
//! Snapshots the entity collections under the read lock, renders a frame
//! into every window, then sleeps off the rest of the frame budget.

use std::io;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use multiball_core::{RunState, SharedWorld};
use multiball_render::{FrameError, MultiWindowRenderer};

/// Owns the render worker thread
pub struct RenderSystem {
    handle: Option<JoinHandle<()>>,
}

impl RenderSystem {
    /// Spawn the render loop, consuming the renderer
    pub fn spawn(
        renderer: MultiWindowRenderer,
        world: SharedWorld,
        run_state: RunState,
        max_fps: u32,
    ) -> io::Result<Self> {
        let handle = thread::Builder::new().name("render".into()).spawn(move || {
            run_loop(renderer, world, run_state, frame_budget(max_fps));
        })?;

        Ok(Self {
            handle: Some(handle),
        })
    }

    /// Wait for the loop to wind down
    pub fn join(&mut self) {
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("render thread panicked");
            }
        }
    }
}

/// Time per frame for the given cap; zero means uncapped
fn frame_budget(max_fps: u32) -> Duration {
    if max_fps == 0 {
        Duration::ZERO
    } else {
        Duration::from_secs_f64(1.0 / max_fps as f64)
    }
}

fn run_loop(
    mut renderer: MultiWindowRenderer,
    world: SharedWorld,
    run_state: RunState,
    budget: Duration,
) {
    log::info!(
        "render loop started over {} surfaces",
        renderer.surface_count()
    );

    while run_state.is_running() {
        let frame_start = Instant::now();

        // Snapshot under the read lock, then render without it
        let (balls, paddles) = {
            let world = match world.read() {
                Ok(world) => world,
                Err(_) => {
                    log::error!("world lock poisoned, stopping render loop");
                    run_state.stop();
                    break;
                }
            };
            (world.balls().to_vec(), world.paddles().to_vec())
        };

        if let Err(FrameError::OutOfMemory) = renderer.render_frame(&balls, &paddles) {
            log::error!("GPU out of memory, stopping run");
            run_state.stop();
            break;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < budget {
            thread::sleep(budget - elapsed);
        } else {
            // Uncapped or over budget: still give the scheduler a chance
            thread::yield_now();
        }
    }

    log::info!("render loop stopped");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_budget() {
        assert_eq!(frame_budget(0), Duration::ZERO);
        assert_eq!(frame_budget(60), Duration::from_secs_f64(1.0 / 60.0));
        assert_eq!(frame_budget(10), Duration::from_millis(100));
    }
}
