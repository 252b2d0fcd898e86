#![warn(clippy::all, rust_2018_idioms)]

use shape_store::{ShapeViewerApp, StoreConfig};

// Usage: shape_viewer [DIRECTORY]
// Without a directory, SHAPE_STORE_DIR or the last-used directory is read.
fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = std::env::args_os().nth(1).map(StoreConfig::with_directory);
    if let Some(config) = &config {
        log::info!("Reading shapes from {}", config.directory().display());
    }

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Shape Viewer",
        native_options,
        Box::new(|cc| Ok(Box::new(ShapeViewerApp::new(cc, config)))),
    )
}
