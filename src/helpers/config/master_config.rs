use super::*;

/// Configuration for the whole scene-mapper program
#[derive(Debug)]
pub struct MasterConfig {
    /// If to exit with success without running (for example, after showing --help)
    pub happy_exit: bool,
    pub max_session_time: Option<Duration>,
    /// Ticks per second
    pub tick_rate: f64,
    /// Seconds
    pub min_sleep: f64,
    pub device: DeviceConfig,
}

impl Default for MasterConfig {
    /// NOTE: the true default configuration is determined by config_entries(), this is just a
    /// valid starting point for them to be applied to
    fn default() -> Self {
        Self {
            happy_exit: false,
            max_session_time: None,
            tick_rate: 50.0,
            min_sleep: 0.0,
            device: DeviceConfig::default(),
        }
    }
}
