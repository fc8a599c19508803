use {
    ar_overlay::{OverlayConfig, run},
    base::log_fatal,
    display::WindowSink,
};

fn main() {
    base::init_stdout_logger();

    let config = match OverlayConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(error) => log_fatal!("{}", error),
    };
    log::info!(
        "base: {}, overlay: {}, width: {}",
        config.base_path().display(),
        config.overlay_path().display(),
        config.display_width()
    );

    let mut sink = WindowSink::default();
    if let Err(error) = run(&config, &mut sink) {
        log_fatal!("{}", error);
    }

    log::info!("Exiting...");
}
