use {crate::DisplayError, image::PixelBuffer};

/// Somewhere a pixel buffer can be shown to the user.
pub trait DisplaySink {
    /// Show `buffer` under `title` and return once the user has pressed a key
    /// or dismissed the view.
    fn show(&mut self, title: &str, buffer: &PixelBuffer) -> Result<(), DisplayError>;
}
