use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbImage};
use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::{info, warn};

use super::config::ChartConfiguration;
use super::styles::{ChartStyle, ChartTheme};
use crate::error::{ChartError, ChartResult};
use crate::utils::{catmull_rom, day_ticks, format_day_month, split_segments, DAY_MS};

/// Size and look of a rendered chart.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub theme: ChartTheme,
    pub style: ChartStyle,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 700,
            theme: ChartTheme::default(),
            style: ChartStyle::default(),
        }
    }
}

// Helper function to wrap plotters errors
fn render_err<E: std::fmt::Display>(e: E) -> ChartError {
    ChartError::Render(e.to_string())
}

/// Horizontal extent of all drawable points, in epoch milliseconds.
///
/// A single distinct timestamp is widened by half a day on each side.
pub fn x_bounds(config: &ChartConfiguration) -> (f64, f64) {
    let mut xs = config
        .series
        .iter()
        .flat_map(|s| s.data.iter())
        .filter(|p| p.is_valid())
        .filter_map(|p| p.x);

    let Some(first) = xs.next() else {
        return (0.0, DAY_MS as f64);
    };
    let (min, max) = xs.fold((first, first), |(lo, hi), x| (lo.min(x), hi.max(x)));

    if min == max {
        let half_day = (DAY_MS / 2) as f64;
        (min as f64 - half_day, max as f64 + half_day)
    } else {
        (min as f64, max as f64)
    }
}

/// Vertical extent of all drawable points.
///
/// Always includes zero and leaves 10% headroom above the largest count.
pub fn y_bounds(config: &ChartConfiguration) -> (f64, f64) {
    let ys: Vec<f64> = config
        .series
        .iter()
        .flat_map(|s| s.data.iter())
        .filter(|p| p.is_valid())
        .filter_map(|p| p.y)
        .map(|y| y as f64)
        .collect();

    if ys.is_empty() {
        return (0.0, 1.0);
    }

    let min = ys.iter().copied().fold(0.0, f64::min);
    let max = ys.iter().copied().fold(f64::MIN, f64::max);
    let headroom = ((max - min) * 0.1).max(1.0);

    (min, max + headroom)
}

/// Draw `config` onto `root`.
pub fn draw_chart<DB: DrawingBackend>(
    config: &ChartConfiguration,
    root: &DrawingArea<DB, Shift>,
    options: &RenderOptions,
) -> ChartResult<()> {
    let theme = &options.theme;
    let style = &options.style;

    root.fill(&theme.background_color).map_err(render_err)?;

    let (x_min, x_max) = x_bounds(config);
    let (y_min, y_max) = y_bounds(config);

    let mut chart = ChartBuilder::on(root)
        .caption(
            &config.title.text,
            ("sans-serif", style.title_font_size)
                .into_font()
                .color(&theme.text_color),
        )
        .margin(style.margin)
        .set_all_label_area_size(style.label_area_size)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(render_err)?;

    let tick_interval = config.x_axis.tick_interval.unwrap_or(DAY_MS);
    let x_label_count = if tick_interval == DAY_MS {
        day_ticks(x_min.ceil() as i64, x_max.floor() as i64, style.max_x_labels).len()
    } else {
        style.max_x_labels
    }
    .max(1);

    let x_label_formatter = |x: &f64| format_day_month(*x as i64).unwrap_or_default();
    let y_label_formatter = |y: &f64| format!("{:.0}", y);

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(config.x_axis.title.text.as_str())
        .y_desc(config.y_axis.title.text.as_str())
        .x_labels(x_label_count)
        .x_label_formatter(&x_label_formatter)
        .y_label_formatter(&y_label_formatter)
        .axis_desc_style(
            ("sans-serif", style.font_size)
                .into_font()
                .color(&theme.text_color),
        )
        .label_style(
            ("sans-serif", style.font_size)
                .into_font()
                .color(&theme.text_color),
        )
        .axis_style(theme.axis_color)
        .light_line_style(TRANSPARENT)
        .bold_line_style(theme.grid_color);
    mesh.draw().map_err(render_err)?;

    for (index, series) in config.series.iter().enumerate() {
        let color = theme.series_color(index);
        let line_style = color.stroke_width(style.line_width);

        let skipped = series.data.len() - series.valid_point_count();
        if skipped > 0 {
            warn!(
                "Series '{}': {} point(s) without a numeric value are not drawn",
                series.name, skipped
            );
        }

        let segments = split_segments(&series.data);
        let mut lines = segments
            .iter()
            .map(|segment| catmull_rom(segment, style.curve_steps));

        // The first line carries the legend entry, even when it is empty.
        let first = lines.next().unwrap_or_default();
        chart
            .draw_series(LineSeries::new(first, line_style))
            .map_err(render_err)?
            .label(series.name.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));

        for line in lines {
            chart
                .draw_series(LineSeries::new(line, line_style))
                .map_err(render_err)?;
        }

        chart
            .draw_series(
                segments
                    .iter()
                    .flatten()
                    .map(|&(x, y)| Circle::new((x, y), 3, color.filled())),
            )
            .map_err(render_err)?;
    }

    if !config.series.is_empty() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::LowerMiddle)
            .background_style(theme.legend_background)
            .border_style(theme.axis_color)
            .label_font(
                ("sans-serif", style.font_size)
                    .into_font()
                    .color(&theme.text_color),
            )
            .draw()
            .map_err(render_err)?;
    }

    Ok(())
}

/// Render the chart to an image file; the format follows the extension.
pub fn render_to_file(
    config: &ChartConfiguration,
    path: &Path,
    options: &RenderOptions,
) -> ChartResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let root = BitMapBackend::new(path, (options.width, options.height)).into_drawing_area();
    draw_chart(config, &root, options)?;
    root.present().map_err(render_err)?;

    info!("Chart rendered to {:?}", path);
    Ok(())
}

/// Render the chart to PNG bytes in memory.
pub fn render_png(config: &ChartConfiguration, options: &RenderOptions) -> ChartResult<Vec<u8>> {
    let (width, height) = (options.width, options.height);
    let mut pixels = vec![0u8; width as usize * height as usize * 3];
    {
        let root = BitMapBackend::with_buffer(&mut pixels, (width, height)).into_drawing_area();
        draw_chart(config, &root, options)?;
        root.present().map_err(render_err)?;
    }

    let bitmap = RgbImage::from_raw(width, height, pixels)
        .ok_or_else(|| ChartError::Render("bitmap buffer has the wrong size".to_string()))?;

    let mut png = Vec::new();
    bitmap.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;

    info!(
        "Chart rendered to PNG ({}x{}, {} bytes)",
        width,
        height,
        png.len()
    );
    Ok(png)
}

/// Render the chart to PNG bytes on a blocking task.
pub async fn render_png_async(
    config: ChartConfiguration,
    options: RenderOptions,
) -> ChartResult<Vec<u8>> {
    tokio::task::spawn_blocking(move || render_png(&config, &options))
        .await
        .map_err(|e| ChartError::Task(e.to_string()))?
}
