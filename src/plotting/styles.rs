use plotters::style::{RGBAColor, RGBColor};

/// Colors cycled through for consecutive series
const SERIES_PALETTE: [RGBColor; 8] = [
    RGBColor(124, 181, 236),
    RGBColor(144, 237, 125),
    RGBColor(247, 163, 92),
    RGBColor(128, 133, 233),
    RGBColor(241, 92, 128),
    RGBColor(228, 211, 84),
    RGBColor(43, 144, 143),
    RGBColor(244, 91, 91),
];

/// Chart theme configuration
#[derive(Debug, Clone)]
pub struct ChartTheme {
    pub background_color: RGBAColor,
    pub text_color: RGBAColor,
    pub grid_color: RGBAColor,
    pub axis_color: RGBAColor,
    pub legend_background: RGBAColor,
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            background_color: RGBAColor(0, 0, 0, 0.94),
            text_color: RGBAColor(255, 255, 255, 0.8),
            grid_color: RGBAColor(255, 255, 255, 0.15),
            axis_color: RGBAColor(255, 255, 255, 0.8),
            legend_background: RGBAColor(30, 30, 30, 0.8),
        }
    }
}

impl ChartTheme {
    /// Line color of the series at `index`.
    pub fn series_color(&self, index: usize) -> RGBColor {
        SERIES_PALETTE[index % SERIES_PALETTE.len()]
    }
}

/// Chart style configuration
#[derive(Debug, Clone)]
pub struct ChartStyle {
    pub line_width: u32,
    pub font_size: f64,
    pub title_font_size: f64,
    pub margin: u32,
    pub label_area_size: u32,
    /// Interpolated positions between two points of a curved series
    pub curve_steps: usize,
    /// Upper bound on x axis labels; daily ticks are thinned beyond it
    pub max_x_labels: usize,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            line_width: 2,
            font_size: 15.0,
            title_font_size: 30.0,
            margin: 10,
            label_area_size: 50,
            curve_steps: 8,
            max_x_labels: 14,
        }
    }
}
