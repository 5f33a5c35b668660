//! Declarative description of the engagement chart.
//!
//! [`ChartConfiguration`] serializes to a Highcharts options object, so the
//! JSON output can be handed to a web chart as is. The PNG presenter in
//! [`super::chart`] draws from the same structure.

use serde::Serialize;
use serde_json::Value;

use super::tooltip::Tooltip;
use crate::analysis::{engagement_series, try_engagement_series};
use crate::error::ChartResult;
use crate::types::{Channel, ChannelSeries, Message};
use crate::utils::DAY_MS;

pub const CHART_TITLE: &str = "Engagement: Messages Over Time";
pub const X_AXIS_TITLE: &str = "Date";
pub const Y_AXIS_TITLE: &str = "Message Count";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisType {
    Linear,
    Datetime,
}

/// An axis definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Axis {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub axis_type: Option<AxisType>,
    pub title: Title,
    /// Distance between ticks in axis units (milliseconds on a time axis)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tick_interval: Option<i64>,
}

impl Axis {
    /// Time axis with one tick per day.
    pub fn daily_time(title: &str) -> Self {
        Self {
            axis_type: Some(AxisType::Datetime),
            title: Title::new(title),
            tick_interval: Some(DAY_MS),
        }
    }

    /// Value axis with automatic ticks.
    pub fn value(title: &str) -> Self {
        Self {
            axis_type: None,
            title: Title::new(title),
            tick_interval: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Top,
    Middle,
    Bottom,
}

/// Legend placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Legend {
    pub align: HorizontalAlign,
    pub vertical_align: VerticalAlign,
    pub x: i32,
    pub y: i32,
}

impl Default for Legend {
    fn default() -> Self {
        Self {
            align: HorizontalAlign::Center,
            vertical_align: VerticalAlign::Bottom,
            x: 0,
            y: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesLabelOptions {
    /// Whether point labels may draw a connector line to their point
    pub connector_allowed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeriesPlotOptions {
    pub label: SeriesLabelOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlotOptions {
    pub series: SeriesPlotOptions,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            series: SeriesPlotOptions {
                label: SeriesLabelOptions {
                    connector_allowed: false,
                },
            },
        }
    }
}

/// Everything the chart library needs to draw the engagement chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfiguration {
    pub title: Title,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub tooltip: Tooltip,
    pub legend: Legend,
    pub plot_options: PlotOptions,
    pub series: Vec<ChannelSeries>,
}

impl ChartConfiguration {
    /// The fixed engagement chart around the given series.
    pub fn with_series(series: Vec<ChannelSeries>) -> Self {
        Self {
            title: Title::new(CHART_TITLE),
            x_axis: Axis::daily_time(X_AXIS_TITLE),
            y_axis: Axis::value(Y_AXIS_TITLE),
            tooltip: Tooltip::default(),
            legend: Legend::default(),
            plot_options: PlotOptions::default(),
            series,
        }
    }

    /// Tooltip text for a hovered point, or `None` if there is no such point.
    pub fn tooltip_for(&self, series_index: usize, point_index: usize) -> Option<String> {
        let series = self.series.get(series_index)?;
        let point = series.data.get(point_index)?;
        Some(self.tooltip.format(&series.name, point))
    }

    pub fn to_json_value(&self) -> ChartResult<Value> {
        Ok(serde_json::to_value(self)?)
    }

    pub fn to_json_string(&self, pretty: bool) -> ChartResult<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

/// Build the engagement chart from raw message counts.
///
/// Channels with fewer than two messages are left out. Values that do not
/// parse are carried into the series as missing coordinates; use
/// [`try_build_chart_configuration`] to reject them instead. Empty inputs
/// produce a chart without series.
pub fn build_chart_configuration(messages: &[Message], channels: &[Channel]) -> ChartConfiguration {
    ChartConfiguration::with_series(engagement_series(messages, channels))
}

/// Strict variant of [`build_chart_configuration`].
pub fn try_build_chart_configuration(
    messages: &[Message],
    channels: &[Channel],
) -> ChartResult<ChartConfiguration> {
    Ok(ChartConfiguration::with_series(try_engagement_series(
        messages, channels,
    )?))
}
