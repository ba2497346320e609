//! Ambient "network" animation: drifting, pulsing points joined by glowing
//! lines when close, with a glow following the pointer.
//!
//! The simulation and renderers draw into a [`surface::Surface`]; the
//! [`app`] module hosts them in a nannou window.

pub mod app;
pub mod color;
pub mod config;
pub mod error;
pub mod interaction;
pub mod links;
pub mod point;
pub mod pointer;
pub mod replay;
pub mod scheduler;
pub mod spatial;
pub mod surface;
pub mod viewport;

pub use config::Config;
pub use error::InitError;
pub use point::Point;
pub use pointer::Pointer;
pub use scheduler::{FrameScheduler, Scene, SceneParams};
pub use viewport::Viewport;
