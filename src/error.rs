//! Startup failures. Once the animation runs nothing can fail.

use std::fmt;

#[derive(Debug)]
pub enum InitError {
    /// The window, and with it the drawing surface, could not be created.
    WindowCreation(String),
    /// A configuration value is out of range.
    InvalidConfig(String),
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::WindowCreation(msg) => write!(f, "Failed to create drawing surface: {}", msg),
            InitError::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for InitError {}
