use egui::Context;
use image::ImageFormat;
use tracing::error;

use super::ViewerApp;
use crate::error::ChartResult;
use crate::plotting::render_png;

/// Draw the viewer window
pub fn draw_ui(app: &mut ViewerApp, ctx: &Context) {
    // Render on the first frame
    if app.update_needed {
        match load_chart_texture(app, ctx) {
            Ok(()) => app.error_message = None,
            Err(e) => {
                error!("Failed to render chart: {}", e);
                app.error_message = Some(e.to_string());
            }
        }
        app.update_needed = false;
    }

    egui::TopBottomPanel::bottom("series_summary").show(ctx, |ui| {
        ui.horizontal_wrapped(|ui| {
            for line in app.series_summary() {
                ui.label(line);
            }
        });
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading(&app.config.title.text);
        ui.separator();

        if let Some(message) = &app.error_message {
            ui.colored_label(egui::Color32::RED, message);
        }

        if app.config.series.is_empty() {
            ui.label("No channel has more than one data point.");
        }

        egui::ScrollArea::both().show(ui, |ui| {
            if let Some(texture) = &app.chart_texture {
                ui.image(texture);
            }
        });
    });
}

fn load_chart_texture(app: &mut ViewerApp, ctx: &Context) -> ChartResult<()> {
    let png = render_png(&app.config, &app.options)?;
    let image = image::load_from_memory_with_format(&png, ImageFormat::Png)?;

    let size = [image.width() as usize, image.height() as usize];
    let pixels = image.to_rgba8();
    let pixels = pixels.as_flat_samples();
    let texture = ctx.load_texture(
        "chart_texture",
        egui::ColorImage::from_rgba_unmultiplied(size, pixels.as_slice()),
        egui::TextureOptions::LINEAR,
    );
    app.chart_texture = Some(texture);
    Ok(())
}
