use serde::Serialize;

use crate::types::DataPoint;
use crate::utils::format_day_month;

/// Declarative equivalent of [`format_point_tooltip`] for the JSON output.
pub const POINT_FORMAT: &str = "{series.name} — {point.y} messages on {point.x:%d %b}";

/// Tooltip options of the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    /// Empty, so no per-series header is shown above the point text
    pub header_format: String,
    pub point_format: String,
}

impl Default for Tooltip {
    fn default() -> Self {
        Self {
            header_format: String::new(),
            point_format: POINT_FORMAT.to_string(),
        }
    }
}

impl Tooltip {
    /// Text shown when hovering `point` of the series `series_name`.
    pub fn format(&self, series_name: &str, point: &DataPoint) -> String {
        format_point_tooltip(series_name, point)
    }
}

/// Render the hover text for a point, e.g. `Alpha — 12 messages on 05 Mar`.
///
/// The date falls back to `N/A` when the x value is not a number; a count
/// that is not a number is shown as `NaN`.
pub fn format_point_tooltip(series_name: &str, point: &DataPoint) -> String {
    let count = point
        .y
        .map(|y| y.to_string())
        .unwrap_or_else(|| "NaN".to_string());
    let date = point
        .x
        .and_then(format_day_month)
        .unwrap_or_else(|| "N/A".to_string());

    format!("{} — {} messages on {}", series_name, count, date)
}
