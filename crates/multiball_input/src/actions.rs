//! Window-event to action mapping

use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Actions the simulation reacts to
///
/// Everything else arriving on the event queue is drained and dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputAction {
    /// Stop the run and exit
    Quit,
}

/// Map a physical key press to an action
pub fn map_key(key: KeyCode, state: ElementState) -> Option<InputAction> {
    if state != ElementState::Pressed {
        return None;
    }
    match key {
        KeyCode::Escape => Some(InputAction::Quit),
        _ => None,
    }
}

/// Map a window event to an action
///
/// Closing or destroying any window quits the whole run; there is no
/// per-window lifetime.
pub fn map_window_event(event: &WindowEvent) -> Option<InputAction> {
    match event {
        WindowEvent::CloseRequested | WindowEvent::Destroyed => Some(InputAction::Quit),
        WindowEvent::KeyboardInput { event, .. } => match event.physical_key {
            PhysicalKey::Code(key) => map_key(key, event.state),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::dpi::PhysicalPosition;

    #[test]
    fn test_close_requested_quits() {
        assert_eq!(
            map_window_event(&WindowEvent::CloseRequested),
            Some(InputAction::Quit)
        );
    }

    #[test]
    fn test_destroyed_quits() {
        assert_eq!(
            map_window_event(&WindowEvent::Destroyed),
            Some(InputAction::Quit)
        );
    }

    #[test]
    fn test_escape_press_quits() {
        assert_eq!(
            map_key(KeyCode::Escape, ElementState::Pressed),
            Some(InputAction::Quit)
        );
    }

    #[test]
    fn test_escape_release_is_ignored() {
        assert_eq!(map_key(KeyCode::Escape, ElementState::Released), None);
    }

    #[test]
    fn test_other_keys_are_ignored() {
        assert_eq!(map_key(KeyCode::Space, ElementState::Pressed), None);
        assert_eq!(map_key(KeyCode::KeyQ, ElementState::Pressed), None);
    }

    #[test]
    fn test_unmapped_events_are_discarded() {
        let moved = WindowEvent::Moved(PhysicalPosition::new(100, 100));
        assert_eq!(map_window_event(&moved), None);
    }
}
