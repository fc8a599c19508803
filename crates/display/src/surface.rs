use crate::DisplayError;
use minifb::Key;

/// The windowing capabilities needed to present a frame and read keys.
pub trait Surface {
    /// False once the user has closed the window.
    fn is_open(&self) -> bool;

    /// Draw `frame` (`width * height` packed pixels) and pump window events.
    fn present(&mut self, frame: &[u32], width: usize, height: usize) -> Result<(), DisplayError>;

    /// A key pressed since the last `present`, if any.
    fn pressed_key(&mut self) -> Option<Key>;
}

/// Present `frame` on `surface` until a key is pressed.
///
/// Returns `Some(key)` for the first key pressed, or `None` if the surface
/// was closed without a key press. The frame is presented at least once
/// while the surface is open.
pub fn wait_key<S: Surface + ?Sized>(
    surface: &mut S,
    frame: &[u32],
    width: usize,
    height: usize,
) -> Result<Option<Key>, DisplayError> {
    if frame.len() != width * height {
        return Err(DisplayError::InvalidFrame(format!(
            "{} pixels for a {}x{} frame",
            frame.len(),
            width,
            height
        )));
    }

    while surface.is_open() {
        surface.present(frame, width, height)?;
        if let Some(key) = surface.pressed_key() {
            return Ok(Some(key));
        }
    }
    Ok(None)
}
