pub mod parse;
pub mod smoothing;
pub mod time;

pub use parse::{parse_count, parse_count_strict, parse_time_bucket, parse_time_bucket_strict};
pub use smoothing::{catmull_rom, split_segments};
pub use time::{day_ticks, format_day_month, DAY_MS};
