//! Groups discovered properties into instanced signals and keeps every instance in sync with the
//! network

use super::*;

mod signal_collection;
mod signal_direction;
mod signal_registry;
mod signal_spec;

pub use signal_collection::SignalCollection;
pub use signal_direction::SignalDirection;
pub use signal_registry::SignalRegistry;
pub use signal_spec::{strip_duplicate_suffix, GroupingKey, OwnerInfo, SignalSpec};
