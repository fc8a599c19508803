use std::fmt;

#[derive(Debug)]
pub enum DisplayError {
    /// No window could be opened on this host.
    Unavailable(String),
    InvalidFrame(String),
    Update(String),
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayError::Unavailable(msg) => write!(f, "display unavailable: {msg}"),
            DisplayError::InvalidFrame(msg) => write!(f, "invalid frame: {msg}"),
            DisplayError::Update(msg) => write!(f, "window update failed: {msg}"),
        }
    }
}

impl std::error::Error for DisplayError {}
