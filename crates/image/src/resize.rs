use {
    crate::{Dimensions, ImageError, PixelBuffer},
    crates_image::{
        RgbImage,
        imageops::{self, FilterType},
    },
};

/// Height that would keep the aspect ratio at `target_width`.
///
/// Truncated toward zero. Returns 0 for a zero-width source.
pub fn aspect_height(dims: Dimensions, target_width: usize) -> usize {
    if dims.width == 0 {
        return 0;
    }
    (dims.height as f64 * (target_width as f64 / dims.width as f64)) as usize
}

/// Scales `buffer` horizontally to `target_width`, keeping its height.
///
/// Uses bilinear filtering. The height is not adjusted to preserve the
/// aspect ratio; use [`aspect_height`] to get that value.
///
/// # Errors
///
/// Returns `ImageError::InvalidDimension` if `target_width` is zero,
/// negative or larger than `u32::MAX`, or if `buffer` has no pixels.
pub fn resize_width(buffer: &PixelBuffer, target_width: i64) -> Result<PixelBuffer, ImageError> {
    if target_width <= 0 {
        return Err(ImageError::InvalidDimension(format!(
            "target width must be positive, got {target_width}"
        )));
    }
    if buffer.is_empty() {
        return Err(ImageError::InvalidDimension(format!(
            "cannot resize empty buffer {:?}",
            buffer.shape()
        )));
    }

    let target = u32::try_from(target_width).map_err(|_| {
        ImageError::InvalidDimension(format!("target width {target_width} is too large"))
    })?;
    let (width, height) = match (u32::try_from(buffer.width()), u32::try_from(buffer.height())) {
        (Ok(w), Ok(h)) => (w, h),
        _ => {
            return Err(ImageError::InvalidDimension(format!(
                "buffer {:?} exceeds codec limits",
                buffer.shape()
            )));
        }
    };

    let source = RgbImage::from_raw(width, height, buffer.data().to_vec()).ok_or_else(|| {
        ImageError::InvalidDimension(format!("buffer {:?} is not packed RGB", buffer.shape()))
    })?;
    let resized = imageops::resize(&source, target, height, FilterType::Triangle);

    log::debug!(
        "resized {}x{} -> {}x{}",
        width,
        height,
        resized.width(),
        resized.height()
    );
    PixelBuffer::new(height as usize, target as usize, resized.into_raw())
}
