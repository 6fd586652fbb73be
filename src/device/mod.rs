//! Owns the session, the registration tables and the signal registry, and drives discovery and
//! synchronization once per tick

use super::*;

#[allow(clippy::module_inception)]
mod device;
mod device_config;

pub use device::Device;
pub use device_config::{DeviceConfig, PollingMode};
