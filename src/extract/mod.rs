//! Turns live components into lists of property accessors, either through an extractor registered
//! for the component's type or through the component's member table

use super::*;

mod generic_extractor;
mod property_extractor;
mod type_registry;

pub use generic_extractor::GenericExtractor;
pub use property_extractor::{erase_extractor, DynExtractor, PropertyExtractor};
pub use type_registry::TypeRegistry;
