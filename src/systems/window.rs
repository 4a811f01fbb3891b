//! Window creation
//!
//! Opens the configured number of windows, all stacked at the same
//! initial desktop position. Their positions diverge only when the user
//! moves them.

use std::sync::Arc;

use winit::{
    dpi::{LogicalPosition, LogicalSize},
    event_loop::ActiveEventLoop,
    window::Window,
};

use crate::config::WindowConfig;

/// Create the configured windows, shown immediately
pub fn create_windows(
    event_loop: &ActiveEventLoop,
    config: &WindowConfig,
) -> Result<Vec<Arc<Window>>, WindowError> {
    let mut windows = Vec::with_capacity(config.count as usize);

    for index in 0..config.count {
        let attrs = Window::default_attributes()
            .with_title(format!("{} {}", config.title, index + 1))
            .with_position(LogicalPosition::new(config.x as f64, config.y as f64))
            .with_inner_size(LogicalSize::new(config.width, config.height))
            .with_resizable(config.resizable);

        let window = event_loop
            .create_window(attrs)
            .map_err(|e| WindowError::CreationFailed(e.to_string()))?;
        windows.push(Arc::new(window));
    }

    Ok(windows)
}

#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_error_display() {
        // Can't create actual windows without an event loop
        let err = WindowError::CreationFailed("no display".to_string());
        assert!(err.to_string().contains("no display"));
    }
}
