//! Input handling for Multiball
//!
//! This crate maps window events to simulation actions. The event queue
//! is drained by the coordinator's event loop; everything that does not
//! map to an action is discarded here.

mod actions;

pub use actions::{map_key, map_window_event, InputAction};
