use std::fmt;

#[derive(Debug)]
pub enum ImageError {
    /// The source could not be read or decoded.
    ResourceLoad { path: String, reason: String },
    /// A resize target or buffer shape is unusable.
    InvalidDimension(String),
    Tensor(base::TensorError),
}

impl ImageError {
    pub(crate) fn load(path: impl Into<String>, reason: impl ToString) -> Self {
        ImageError::ResourceLoad {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::ResourceLoad { path, reason } => {
                write!(f, "failed to load {path}: {reason}")
            }
            ImageError::InvalidDimension(msg) => write!(f, "invalid dimension: {msg}"),
            ImageError::Tensor(err) => write!(f, "tensor error: {err}"),
        }
    }
}

impl std::error::Error for ImageError {}

impl From<base::TensorError> for ImageError {
    fn from(err: base::TensorError) -> Self {
        ImageError::Tensor(err)
    }
}
