//! Load a base frame and an overlay image, resize the base frame to the
//! display width and show it until a key is pressed.
//!
//! The overlay is loaded and handed back to the caller but not composited.

pub mod config;
pub mod error;
pub mod pipeline;

pub use config::OverlayConfig;
pub use error::OverlayError;
pub use pipeline::{Session, run};
