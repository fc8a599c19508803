use {
    crate::OverlayError,
    std::path::{Path, PathBuf},
};

/// Inputs for one run of the viewer.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayConfig {
    base_path: PathBuf,
    overlay_path: PathBuf,
    display_width: i64,
    window_title: String,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("example.jpg"),
            overlay_path: PathBuf::from("squirrel.jpg"),
            display_width: 600,
            window_title: "Resized".to_string(),
        }
    }
}

impl OverlayConfig {
    /// Build a config from positional arguments
    /// `[base_path] [overlay_path] [display_width]`, defaulting missing ones.
    pub fn from_args<I>(args: I) -> Result<Self, OverlayError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let mut config = Self::default();

        if let Some(path) = args.next() {
            config = config.with_base_path(path);
        }
        if let Some(path) = args.next() {
            config = config.with_overlay_path(path);
        }
        if let Some(width) = args.next() {
            let width = width
                .parse::<i64>()
                .map_err(|e| OverlayError::Config(format!("display width {width:?}: {e}")))?;
            config = config.with_display_width(width);
        }
        if let Some(extra) = args.next() {
            return Err(OverlayError::Config(format!(
                "unexpected argument {extra:?}"
            )));
        }

        Ok(config)
    }

    /// Set the image that is resized and shown.
    pub fn with_base_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.base_path = path.into();
        self
    }

    /// Set the image loaded as the overlay.
    pub fn with_overlay_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.overlay_path = path.into();
        self
    }

    /// Set the width the base image is resized to. Must be positive when run.
    pub fn with_display_width(mut self, width: i64) -> Self {
        self.display_width = width;
        self
    }

    pub fn with_window_title(mut self, title: impl Into<String>) -> Self {
        self.window_title = title.into();
        self
    }

    // Getters
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    pub fn overlay_path(&self) -> &Path {
        &self.overlay_path
    }

    pub fn display_width(&self) -> i64 {
        self.display_width
    }

    pub fn window_title(&self) -> &str {
        &self.window_title
    }
}
