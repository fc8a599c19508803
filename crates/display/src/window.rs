use {
    crate::{DisplayError, DisplaySink, Surface, rgb_to_u32, wait_key},
    image::PixelBuffer,
    minifb::{Key, KeyRepeat, Window, WindowOptions},
};

const DEFAULT_FPS: usize = 30;

/// A `minifb` window. Closed when dropped.
pub struct MinifbSurface {
    window: Window,
}

impl MinifbSurface {
    pub fn open(title: &str, width: usize, height: usize, fps: usize) -> Result<Self, DisplayError> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| DisplayError::Unavailable(e.to_string()))?;
        window.set_target_fps(fps);
        Ok(Self { window })
    }
}

impl Surface for MinifbSurface {
    fn is_open(&self) -> bool {
        self.window.is_open()
    }

    fn present(&mut self, frame: &[u32], width: usize, height: usize) -> Result<(), DisplayError> {
        self.window
            .update_with_buffer(frame, width, height)
            .map_err(|e| DisplayError::Update(e.to_string()))
    }

    fn pressed_key(&mut self) -> Option<Key> {
        self.window.get_keys_pressed(KeyRepeat::No).into_iter().next()
    }
}

/// Shows each buffer in its own window and blocks until a key press.
pub struct WindowSink {
    fps: usize,
}

impl Default for WindowSink {
    fn default() -> Self {
        Self { fps: DEFAULT_FPS }
    }
}

impl WindowSink {
    /// Set the redraw rate while waiting for input.
    pub fn with_fps(mut self, fps: usize) -> Self {
        self.fps = fps;
        self
    }

    pub fn fps(&self) -> usize {
        self.fps
    }
}

impl DisplaySink for WindowSink {
    fn show(&mut self, title: &str, buffer: &PixelBuffer) -> Result<(), DisplayError> {
        if buffer.is_empty() {
            return Err(DisplayError::InvalidFrame(format!(
                "cannot show empty buffer {:?}",
                buffer.shape()
            )));
        }

        let (width, height) = (buffer.width(), buffer.height());
        let frame = rgb_to_u32(buffer.data());

        // the window lives only for this call
        let mut surface = MinifbSurface::open(title, width, height, self.fps)?;
        log::debug!("opened window \"{}\" {}x{}", title, width, height);

        match wait_key(&mut surface, &frame, width, height)? {
            Some(key) => log::debug!("key {:?} pressed, closing \"{}\"", key, title),
            None => log::debug!("window \"{}\" closed", title),
        }
        Ok(())
    }
}
