//! Dynamically typed values, the primitive types the transport can carry, and logical time

use super::*;

mod time;
#[allow(clippy::module_inception)]
mod value;
mod value_type;
mod wire;

pub use time::Time;
pub use value::Value;
pub use value_type::ValueType;
pub use wire::{WireType, WireValue};
