use super::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    pub enabled: bool,
    /// Candela
    pub intensity: f32,
    pub color: ColorRGBA,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            enabled: true,
            intensity: 1.0,
            color: ColorRGBA::new(1.0, 1.0, 1.0, 1.0),
        }
    }
}

impl Component for Light {}

struct Intensity;

impl TypedProperty<Light> for Intensity {
    type Value = f32;

    fn name(&self) -> &str {
        "Light/Intensity"
    }

    fn units(&self) -> Option<&str> {
        Some("cd")
    }

    fn bounds(&self) -> Option<Bounds> {
        Some(Bounds::new(0.0, 8.0))
    }

    fn enabled(&self, light: &Light) -> Option<bool> {
        Some(light.enabled)
    }

    fn get(&self, light: &Light) -> f32 {
        light.intensity
    }

    fn set(&self, light: &mut Light, value: f32) {
        light.intensity = value;
    }

    fn reset(&self, light: &mut Light) {
        light.enabled = false;
    }
}

/// Backed by the complex color type, so it needs the color converter to reach the network
struct Color;

impl TypedProperty<Light> for Color {
    type Value = ColorRGBA;

    fn name(&self) -> &str {
        "Light/Color"
    }

    fn vector_length(&self) -> usize {
        4
    }

    fn bounds(&self) -> Option<Bounds> {
        Some(Bounds::new(0.0, 1.0))
    }

    fn enabled(&self, light: &Light) -> Option<bool> {
        Some(light.enabled)
    }

    fn get(&self, light: &Light) -> ColorRGBA {
        light.color
    }

    fn set(&self, light: &mut Light, value: ColorRGBA) {
        light.color = value;
    }

    fn reset(&self, light: &mut Light) {
        light.enabled = false;
    }
}

pub struct LightExtractor;

impl PropertyExtractor<Light> for LightExtractor {
    fn extract_properties(
        &self,
        _light: &Light,
        handle: &ComponentRef,
    ) -> Vec<Box<dyn PropertyAccessor>> {
        vec![
            bind::<Light, _>(handle, Intensity),
            bind::<Light, _>(handle, Color),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract_primitive(light: &ComponentRef) -> Vec<Box<dyn PropertyAccessor>> {
        let mut types = TypeRegistry::new();
        register_builtins(&mut types).unwrap();
        types
            .extract_properties(light)
            .unwrap()
            .into_iter()
            .map(|p| types.primitivize(p).unwrap())
            .collect()
    }

    #[test]
    fn color_is_wrapped_as_float_array() {
        let light = into_component_ref(Light::default());
        let properties = extract_primitive(&light);
        assert_eq!(properties[0].name(), "Light/Intensity");
        assert_eq!(properties[1].name(), "Light/Color");
        assert!(properties[1].backing_type().is::<Vec<f32>>());
        assert_eq!(properties[1].vector_length(), 4);
    }

    #[test]
    fn writing_color_updates_light() {
        let light = into_component_ref(Light::default());
        let properties = extract_primitive(&light);
        properties[1]
            .set_object(Value::new(vec![0.5f32, 0.25, 0.0, 1.0]))
            .unwrap();
        assert_eq!(
            read_component(&light, |l: &Light| l.color),
            ColorRGBA::new(0.5, 0.25, 0.0, 1.0)
        );
    }

    #[test]
    fn reset_turns_light_off() {
        let light = into_component_ref(Light::default());
        let properties = extract_primitive(&light);
        assert_eq!(properties[0].enabled(), Some(true));
        properties[0].reset().unwrap();
        assert!(!read_component(&light, |l: &Light| l.enabled));
        assert_eq!(properties[1].enabled(), Some(false));
    }
}
