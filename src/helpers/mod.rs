//! General useful bits and bobs

use super::*;

mod assign_once;
mod color_rgba;
mod config;
mod filesystem;
mod metronome;
mod or_log;
mod short_type_name;
#[cfg(test)]
mod test_helpers;

pub use assign_once::AssignOnce;
pub use color_rgba::ColorRGBA;
pub use config::{build_config, MasterConfig};
pub use filesystem::{real_filesystem, Filesystem, FilesystemTrait};
pub use metronome::Metronome;
pub use or_log::OrLog;
pub use short_type_name::short_type_name;
pub(crate) use short_type_name::trim_type_name;
#[cfg(test)]
pub use test_helpers::*;
