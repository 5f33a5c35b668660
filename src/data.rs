//! Loading message counts and channels from JSON fixture files.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ChartResult;
use crate::plotting::{build_chart_configuration, try_build_chart_configuration, ChartConfiguration};
use crate::types::{Channel, Message};

fn load_json<T: DeserializeOwned>(path: &Path) -> ChartResult<T> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

/// Read a JSON array of `{ count, timeBucket, channelId }` records.
pub fn load_messages(path: &Path) -> ChartResult<Vec<Message>> {
    let messages: Vec<Message> = load_json(path)?;
    debug!("Loaded {} messages from {:?}", messages.len(), path);
    Ok(messages)
}

/// Read a JSON array of `{ id, name }` records.
pub fn load_channels(path: &Path) -> ChartResult<Vec<Channel>> {
    let channels: Vec<Channel> = load_json(path)?;
    debug!("Loaded {} channels from {:?}", channels.len(), path);
    Ok(channels)
}

/// The two inputs of the engagement chart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChartInput {
    pub messages: Vec<Message>,
    pub channels: Vec<Channel>,
}

impl ChartInput {
    pub fn new(messages: Vec<Message>, channels: Vec<Channel>) -> Self {
        Self { messages, channels }
    }

    pub fn from_files(messages_path: &Path, channels_path: &Path) -> ChartResult<Self> {
        Ok(Self {
            messages: load_messages(messages_path)?,
            channels: load_channels(channels_path)?,
        })
    }

    pub fn build_configuration(&self) -> ChartConfiguration {
        build_chart_configuration(&self.messages, &self.channels)
    }

    pub fn try_build_configuration(&self) -> ChartResult<ChartConfiguration> {
        try_build_chart_configuration(&self.messages, &self.channels)
    }
}
