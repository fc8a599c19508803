use {
    crate::{OverlayConfig, OverlayError},
    display::DisplaySink,
    image::{PixelBuffer, aspect_height, load_image, resize_width},
};

/// Everything a run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// The base frame after resizing, as shown.
    pub base: PixelBuffer,
    /// The overlay exactly as decoded.
    pub overlay: PixelBuffer,
    /// Aspect-preserving height for the display width. Not applied.
    pub aspect_height: usize,
}

/// Load, resize and show the base frame, and load the overlay.
///
/// Steps run in a fixed order and the first error ends the run: load base,
/// resize base, load overlay, show base. The overlay is never shown.
pub fn run<S>(config: &OverlayConfig, sink: &mut S) -> Result<Session, OverlayError>
where
    S: DisplaySink + ?Sized,
{
    let original = load_image(config.base_path())?;
    let base = resize_width(&original, config.display_width())?;

    let aspect_height = aspect_height(original.dimensions(), base.width());
    log::debug!(
        "aspect height for width {} would be {}, keeping {}",
        base.width(),
        aspect_height,
        base.height()
    );
    log::info!(
        "base {}x{} resized to {}x{}",
        original.width(),
        original.height(),
        base.width(),
        base.height()
    );

    let overlay = load_image(config.overlay_path())?;
    log::info!("overlay {}x{} loaded", overlay.width(), overlay.height());

    sink.show(config.window_title(), &base)?;

    Ok(Session {
        base,
        overlay,
        aspect_height,
    })
}
