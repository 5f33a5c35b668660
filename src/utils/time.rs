use chrono::{DateTime, Utc};

/// One day in milliseconds, the x axis tick spacing.
pub const DAY_MS: i64 = 24 * 3600 * 1000;

/// Format epoch milliseconds as a day-first short date, e.g. `05 Mar`.
///
/// Returns `None` when the timestamp is outside chrono's representable range.
pub fn format_day_month(millis: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp_millis(millis).map(|dt| dt.format("%d %b").to_string())
}

/// Timestamps of every UTC midnight within `[start, end]`.
///
/// Used to place one tick per day on a time axis; capped at `max_ticks`,
/// after which every n-th day is kept so the labels stay readable.
pub fn day_ticks(start: i64, end: i64, max_ticks: usize) -> Vec<i64> {
    if end < start || max_ticks == 0 {
        return Vec::new();
    }

    let first = start.div_euclid(DAY_MS) * DAY_MS;
    let first = if first < start { first + DAY_MS } else { first };
    if first > end {
        return Vec::new();
    }

    let total = ((end - first) / DAY_MS) as usize + 1;
    let stride = total.div_ceil(max_ticks).max(1);

    (0..total)
        .step_by(stride)
        .map(|i| first + i as i64 * DAY_MS)
        .collect()
}
