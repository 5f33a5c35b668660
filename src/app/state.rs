use eframe::App as EApp;
use egui::TextureHandle;

use crate::plotting::{ChartConfiguration, RenderOptions};

/// State of the chart viewer window
pub struct ViewerApp {
    pub config: ChartConfiguration,
    pub options: RenderOptions,
    pub chart_texture: Option<TextureHandle>,
    pub update_needed: bool,
    pub error_message: Option<String>,
}

impl ViewerApp {
    pub fn new(config: ChartConfiguration, options: RenderOptions) -> Self {
        Self {
            config,
            options,
            chart_texture: None,
            update_needed: true,
            error_message: None,
        }
    }

    /// One line per series: its name and how many points it plots.
    pub fn series_summary(&self) -> Vec<String> {
        self.config
            .series
            .iter()
            .map(|series| {
                let skipped = series.data.len() - series.valid_point_count();
                if skipped > 0 {
                    format!(
                        "{}: {} points ({} without a value)",
                        series.name,
                        series.data.len(),
                        skipped
                    )
                } else {
                    format!("{}: {} points", series.name, series.data.len())
                }
            })
            .collect()
    }
}

impl EApp for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        super::ui::draw_ui(self, ctx);
    }
}
