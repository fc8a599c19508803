use {crate::ImageError, base::Tensor};

/// Every pixel buffer is 8-bit RGB.
pub const CHANNELS: usize = 3;

/// Height and width of a pixel buffer, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub height: usize,
    pub width: usize,
}

/// A decoded RGB image stored as a `[height, width, 3]` tensor.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    tensor: Tensor<u8>,
}

impl PixelBuffer {
    pub fn new(height: usize, width: usize, data: Vec<u8>) -> Result<Self, ImageError> {
        Ok(Self {
            tensor: Tensor::new(vec![height, width, CHANNELS], data)?,
        })
    }

    /// Wrap an existing tensor, checking it is HWC with three channels.
    pub fn from_tensor(tensor: Tensor<u8>) -> Result<Self, ImageError> {
        if tensor.ndim() != 3 || tensor.shape[2] != CHANNELS {
            return Err(ImageError::InvalidDimension(format!(
                "expected [H, W, {CHANNELS}] tensor, got {:?}",
                tensor.shape
            )));
        }
        Ok(Self { tensor })
    }

    pub fn shape(&self) -> &[usize] {
        &self.tensor.shape
    }

    pub fn height(&self) -> usize {
        self.tensor.shape[0]
    }

    pub fn width(&self) -> usize {
        self.tensor.shape[1]
    }

    pub fn channels(&self) -> usize {
        self.tensor.shape[2]
    }

    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            height: self.height(),
            width: self.width(),
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.tensor.data
    }

    pub fn is_empty(&self) -> bool {
        self.tensor.is_empty()
    }

    pub fn into_tensor(self) -> Tensor<u8> {
        self.tensor
    }
}
