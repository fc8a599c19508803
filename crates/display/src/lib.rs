//! On-screen presentation of pixel buffers.
//!
//! `Surface` is the windowing capability this crate consumes; `wait_key`
//! drives any surface until a key arrives. `WindowSink` is the `minifb`
//! backed `DisplaySink` used by the binaries.

pub mod convert;
pub mod error;
pub mod sink;
pub mod surface;
pub mod window;

pub use convert::rgb_to_u32;
pub use error::DisplayError;
pub use minifb::Key;
pub use sink::DisplaySink;
pub use surface::{Surface, wait_key};
pub use window::{MinifbSurface, WindowSink};
