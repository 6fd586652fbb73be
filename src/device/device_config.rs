use super::*;

/// How the transport is advanced each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollingMode {
    /// A blocking poll runs on a worker thread between ticks, and is joined at the start of the
    /// next tick
    Background,
    /// A non-blocking poll runs at the start of every tick
    Immediate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeviceConfig {
    /// Session name on the network
    pub name: String,
    /// How long a background poll waits for network activity
    pub poll_time: Duration,
    pub polling: PollingMode,
    /// If true registration stays open after start() until freeze() is called, otherwise the
    /// device freezes itself at the end of start()
    pub use_api: bool,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            name: "scene_mapper".to_string(),
            poll_time: Duration::from_millis(1),
            polling: PollingMode::Background,
            use_api: false,
        }
    }
}
