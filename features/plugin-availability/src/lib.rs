//! # Plugin Availability
//!
//! Summary of the channels a plugin is configured for: how many of them have
//! it active, and one status label per channel.
//!
//! ```
//! use dashboard_core::messages::DefaultCatalog;
//! use plugin_availability::{Channel, ChannelConfiguration, availability_popup};
//!
//! let configs = vec![
//!     ChannelConfiguration::new(Channel::new("ch-1", "Default"), true),
//!     ChannelConfiguration::new(Channel::new("ch-2", "Outlet"), false),
//! ];
//! let popup = availability_popup(&configs, &DefaultCatalog);
//! assert_eq!(popup.title, "This plugin is active in 1/2 channels");
//! ```

use dashboard_core::messages::{MessageCatalog, MessageDescriptor};
use serde::{Deserialize, Serialize};

/// Popup header
pub const POPUP_TITLE: MessageDescriptor = MessageDescriptor::new(
    "plugins.channelConfig.title",
    "This plugin is active in {activeChannelsCount}/{allChannelsCount} channels",
    "plugin availability popup title",
);

/// Subtitle of an active channel
pub const ACTIVE: MessageDescriptor =
    MessageDescriptor::new("statusLabel.active", "Active", "status label");

/// Subtitle of an inactive channel
pub const INACTIVE: MessageDescriptor =
    MessageDescriptor::new("statusLabel.inactive", "Inactive", "status label");

/// A sales channel
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Channel {
    /// Channel id
    pub id: String,
    /// Display name
    pub name: String,
}

impl Channel {
    /// Creates a channel
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A plugin's configuration in one channel
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelConfiguration {
    /// The channel
    pub channel: Channel,
    /// Whether the plugin runs in it
    pub active: bool,
}

impl ChannelConfiguration {
    /// Creates a configuration
    #[must_use]
    pub const fn new(channel: Channel, active: bool) -> Self {
        Self { channel, active }
    }
}

/// Number of channels the plugin is active in.
#[must_use]
pub fn active_channel_configs_count(configs: &[ChannelConfiguration]) -> usize {
    configs.iter().filter(|config| config.active).count()
}

/// Number of channels the plugin is configured for.
#[must_use]
pub const fn all_channel_configs_count(configs: &[ChannelConfiguration]) -> usize {
    configs.len()
}

/// Coloring of a status label
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Active
    Success,
    /// Inactive
    Error,
}

/// One channel row of the popup
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatusLabel {
    /// Channel id
    pub key: String,
    /// Channel name
    pub label: String,
    /// Coloring
    pub status: Status,
    /// "Active" or "Inactive"
    pub subtitle: String,
}

/// The availability popup
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AvailabilityPopup {
    /// Header with both counts
    pub title: String,
    /// One label per channel, in configuration order
    pub channels: Vec<StatusLabel>,
}

/// Builds the popup for a plugin's channel configurations.
#[must_use]
pub fn availability_popup(configs: &[ChannelConfiguration], catalog: &dyn MessageCatalog) -> AvailabilityPopup {
    let title = catalog.format(
        &POPUP_TITLE,
        &[
            ("activeChannelsCount", active_channel_configs_count(configs).to_string()),
            ("allChannelsCount", all_channel_configs_count(configs).to_string()),
        ],
    );
    let channels = configs
        .iter()
        .map(|config| StatusLabel {
            key: config.channel.id.clone(),
            label: config.channel.name.clone(),
            status: if config.active { Status::Success } else { Status::Error },
            subtitle: catalog.message(if config.active { &ACTIVE } else { &INACTIVE }),
        })
        .collect();

    AvailabilityPopup { title, channels }
}
