use {
    crate::{ImageError, PixelBuffer},
    crates_image::DynamicImage,
    std::path::Path,
};

const MEMORY_SOURCE: &str = "<memory>";

/// Reads and decodes the image file at `path`.
///
/// The format is detected from the file contents. Whatever the source color
/// layout, the result is 8-bit RGB with shape `[height, width, 3]`.
///
/// # Errors
///
/// Returns `ImageError::ResourceLoad` if the file is missing or unreadable,
/// if its contents are not a supported image, or if the image has no pixels.
pub fn load_image(path: impl AsRef<Path>) -> Result<PixelBuffer, ImageError> {
    let path = path.as_ref();
    let source = path.display().to_string();
    let bytes = std::fs::read(path).map_err(|e| ImageError::load(&source, e))?;
    let buffer = decode_from(&source, &bytes)?;
    log::debug!(
        "loaded {}: {}x{}x{}",
        source,
        buffer.height(),
        buffer.width(),
        buffer.channels()
    );
    Ok(buffer)
}

/// Decodes an in-memory encoded image. See [`load_image`].
pub fn decode_image(data: &[u8]) -> Result<PixelBuffer, ImageError> {
    decode_from(MEMORY_SOURCE, data)
}

fn decode_from(source: &str, data: &[u8]) -> Result<PixelBuffer, ImageError> {
    let img = crates_image::load_from_memory(data).map_err(|e| ImageError::load(source, e))?;

    let rgb = match img {
        DynamicImage::ImageRgb8(buf) => buf,
        other => other.to_rgb8(),
    };

    let (width, height) = rgb.dimensions();
    if width == 0 || height == 0 {
        return Err(ImageError::load(source, "image has no pixels"));
    }

    PixelBuffer::new(height as usize, width as usize, rgb.into_raw())
}
