use super::*;

#[derive(Debug, Clone, PartialEq)]
pub struct AudioSource {
    pub enabled: bool,
    pub volume: f32,
    pub pitch: f32,
}

impl Default for AudioSource {
    fn default() -> Self {
        Self {
            enabled: true,
            volume: 1.0,
            pitch: 1.0,
        }
    }
}

impl Component for AudioSource {}

struct Volume;

impl TypedProperty<AudioSource> for Volume {
    type Value = f32;

    fn name(&self) -> &str {
        "AudioSource/Volume"
    }

    fn units(&self) -> Option<&str> {
        Some("%")
    }

    fn bounds(&self) -> Option<Bounds> {
        Some(Bounds::new(0.0, 1.0))
    }

    fn enabled(&self, source: &AudioSource) -> Option<bool> {
        Some(source.enabled)
    }

    fn get(&self, source: &AudioSource) -> f32 {
        source.volume
    }

    fn set(&self, source: &mut AudioSource, value: f32) {
        source.volume = value;
    }

    fn reset(&self, source: &mut AudioSource) {
        source.enabled = false;
    }
}

struct Pitch;

impl TypedProperty<AudioSource> for Pitch {
    type Value = f32;

    fn name(&self) -> &str {
        "AudioSource/Pitch"
    }

    fn bounds(&self) -> Option<Bounds> {
        Some(Bounds::new(-3.0, 3.0))
    }

    fn enabled(&self, source: &AudioSource) -> Option<bool> {
        Some(source.enabled)
    }

    fn get(&self, source: &AudioSource) -> f32 {
        source.pitch
    }

    fn set(&self, source: &mut AudioSource, value: f32) {
        source.pitch = value;
    }

    fn reset(&self, source: &mut AudioSource) {
        source.enabled = false;
    }
}

pub struct AudioSourceExtractor;

impl PropertyExtractor<AudioSource> for AudioSourceExtractor {
    fn extract_properties(
        &self,
        _source: &AudioSource,
        handle: &ComponentRef,
    ) -> Vec<Box<dyn PropertyAccessor>> {
        vec![
            bind::<AudioSource, _>(handle, Volume),
            bind::<AudioSource, _>(handle, Pitch),
        ]
    }
}
