//! Common scene components and the extractors every device registers for them

use super::*;

mod audio_source;
mod camera;
mod light;
mod transform;

pub use audio_source::{AudioSource, AudioSourceExtractor};
pub use camera::{Camera, CameraExtractor};
pub use light::{Light, LightExtractor};
pub use transform::{Transform, TransformExtractor};

/// Registers the built-in extractors and converters. Fails if the registry is frozen.
pub fn register_builtins(types: &mut TypeRegistry) -> MapperResult<()> {
    types.register_extractor::<Transform, _>(TransformExtractor)?;
    types.register_extractor::<AudioSource, _>(AudioSourceExtractor)?;
    types.register_extractor::<Camera, _>(CameraExtractor)?;
    types.register_extractor::<Light, _>(LightExtractor)?;
    for converter in builtin_converters() {
        types.register_converter(converter)?;
    }
    Ok(())
}
