//! Image loading and resizing for the overlay viewer.
//!
//! This crate wraps the `image` crate to decode files into `PixelBuffer`s,
//! 8-bit RGB tensors in HWC layout: `[height, width, 3]`.

pub mod error;
pub mod load;
pub mod pixelbuffer;
pub mod resize;

pub use error::ImageError;
pub use load::{decode_image, load_image};
pub use pixelbuffer::{CHANNELS, Dimensions, PixelBuffer};
pub use resize::{aspect_height, resize_width};
