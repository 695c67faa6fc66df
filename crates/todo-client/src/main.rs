//! Desktop client entry point.

use todo_client::{app::TodoApp, config::ClientConfig};

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = ClientConfig::from_env();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 620.0])
            .with_min_inner_size([480.0, 400.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Todo App",
        options,
        Box::new(move |_cc| Ok(Box::new(TodoApp::new(&config)))),
    )
}
