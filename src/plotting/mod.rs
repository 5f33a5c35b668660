pub mod chart;
pub mod config;
pub mod styles;
pub mod tooltip;


pub use chart::{
    draw_chart, render_png, render_png_async, render_to_file, x_bounds, y_bounds, RenderOptions,
};
pub use config::{
    build_chart_configuration, try_build_chart_configuration, Axis, AxisType, ChartConfiguration,
    HorizontalAlign, Legend, PlotOptions, Title, VerticalAlign, CHART_TITLE, X_AXIS_TITLE,
    Y_AXIS_TITLE,
};
pub use styles::{ChartStyle, ChartTheme};
pub use tooltip::{format_point_tooltip, Tooltip, POINT_FORMAT};
