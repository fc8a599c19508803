pub mod logging;
pub use logging::*;

mod tensor;
pub use tensor::*;

// Re-export log crate so downstream crates can use base::log::*
pub use log;
