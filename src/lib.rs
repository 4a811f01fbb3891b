//! Multiball - multi-window bouncing ball simulation
//!
//! One world, many windows: balls move in shared world coordinates and
//! every window draws the world offset by its own desktop position.
//! Three loops run concurrently against the shared store:
//!
//! - the physics loop (worker thread) integrates ball motion
//! - the render loop (worker thread) projects and draws into each window
//! - the input loop (main thread, winit) drains events and maps quits

pub mod config;
pub mod scene;
pub mod systems;
