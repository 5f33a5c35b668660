//! A window that shows the rendered chart.

mod state;
mod ui;

pub use state::ViewerApp;

use crate::plotting::{ChartConfiguration, RenderOptions};

/// Open the viewer and block until the window is closed.
pub fn run_viewer(config: ChartConfiguration, options: RenderOptions) -> eframe::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([options.width as f32 + 40.0, options.height as f32 + 120.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title(config.title.text.clone()),
        ..Default::default()
    };

    eframe::run_native(
        "Engagement Chart",
        native_options,
        Box::new(move |_cc| Ok(Box::new(ViewerApp::new(config, options)) as Box<dyn eframe::App>)),
    )
}
