use {display::DisplayError, image::ImageError, std::fmt};

#[derive(Debug)]
pub enum OverlayError {
    Config(String),
    Image(ImageError),
    Display(DisplayError),
}

impl fmt::Display for OverlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverlayError::Config(msg) => write!(f, "config error: {msg}"),
            OverlayError::Image(err) => write!(f, "image error: {err}"),
            OverlayError::Display(err) => write!(f, "display error: {err}"),
        }
    }
}

impl std::error::Error for OverlayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OverlayError::Config(_) => None,
            OverlayError::Image(err) => Some(err),
            OverlayError::Display(err) => Some(err),
        }
    }
}

impl From<ImageError> for OverlayError {
    fn from(err: ImageError) -> Self {
        OverlayError::Image(err)
    }
}

impl From<DisplayError> for OverlayError {
    fn from(err: DisplayError) -> Self {
        OverlayError::Display(err)
    }
}
