pub mod engagement;

#[cfg(test)]
mod tests;

pub use engagement::{
    build_channel_series, count_messages_per_channel, engagement_series,
    filter_channels_with_multiple_points, try_build_channel_series, try_engagement_series,
};
