mod app;
mod ui;
mod viewport;

// Re-export library modules so that `crate::state`, `crate::style`, etc.
// resolve to the lib crate types everywhere in the binary.
pub use vitrine_gui_lib::catalog;
pub use vitrine_gui_lib::loader;
pub use vitrine_gui_lib::state;
pub use vitrine_gui_lib::style;

use app::StudioApp;
use loader::ModelSource;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vitrine_gui=info,vitrine_gui_lib=info".into()),
        )
        .init();

    // Parse --model <url-or-path> argument
    let source = parse_model_arg();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Vitrine - Product Configurator Studio")
            .with_inner_size([1480.0, 920.0])
            .with_min_inner_size([900.0, 560.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "vitrine-gui",
        native_options,
        Box::new(move |cc| Ok(Box::new(StudioApp::new(cc, source)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}

fn parse_model_arg() -> ModelSource {
    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        if args[i] == "--model" && i + 1 < args.len() {
            let source = ModelSource::from_arg(&args[i + 1]);
            tracing::info!("Model source: {}", source.describe());
            return source;
        }
        i += 1;
    }
    ModelSource::default()
}
