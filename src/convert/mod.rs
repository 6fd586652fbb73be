//! Conversions between composite value types and the primitives the transport can carry

use super::*;

mod builtin_converters;
mod type_converter;

pub use builtin_converters::{
    builtin_converters, BoolConverter, ColorConverter, QuaternionConverter, Vector2Converter,
    Vector3Converter,
};
pub use type_converter::{DynConverter, TypeConverter};
