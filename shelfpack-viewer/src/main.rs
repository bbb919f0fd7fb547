//! Shelfpack Viewer - GUI for shelf-packing inventory layouts.

mod app;
mod canvas;
mod theme;
mod transform;

use app::ViewerApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // Optional seed argument for a reproducible starting layout
    let seed: Option<u64> = std::env::args().nth(1).and_then(|s| s.parse().ok());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Shelfpack Viewer"),
        // Don't block when window is not visible (prevents "not responding" on focus loss)
        vsync: false,
        ..Default::default()
    };

    eframe::run_native(
        "Shelfpack Viewer",
        options,
        Box::new(move |cc| Ok(Box::new(ViewerApp::new(cc, seed)))),
    )
}
