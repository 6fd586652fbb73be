//! Uniform read/write access to one exposed property of one live component

use super::*;

mod bounds;
mod field_property;
mod member;
mod property_accessor;
mod typed_property;
mod wrapped_property;

pub use bounds::Bounds;
pub use field_property::FieldProperty;
pub use member::Member;
pub use property_accessor::PropertyAccessor;
pub use typed_property::{bind, BoundProperty, TypedProperty};
pub use wrapped_property::WrappedProperty;

use property_accessor::accept_incoming;
