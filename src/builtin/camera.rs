use super::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Vertical, in degrees
    pub field_of_view: f32,
    /// When set the lens is described by its focal length instead of the field of view
    pub use_physical_properties: bool,
    /// Millimeters
    pub focal_length: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            field_of_view: 60.0,
            use_physical_properties: false,
            focal_length: 50.0,
        }
    }
}

impl Component for Camera {}

struct FieldOfView;

impl TypedProperty<Camera> for FieldOfView {
    type Value = f32;

    fn name(&self) -> &str {
        "Camera/Field of View"
    }

    fn units(&self) -> Option<&str> {
        Some("°")
    }

    fn bounds(&self) -> Option<Bounds> {
        Some(Bounds::new(0.0, 180.0))
    }

    fn get(&self, camera: &Camera) -> f32 {
        camera.field_of_view
    }

    fn set(&self, camera: &mut Camera, value: f32) {
        camera.field_of_view = value;
    }
}

struct FocalLength;

impl TypedProperty<Camera> for FocalLength {
    type Value = f32;

    fn name(&self) -> &str {
        "Camera/Focal Length"
    }

    fn units(&self) -> Option<&str> {
        Some("mm")
    }

    fn bounds(&self) -> Option<Bounds> {
        Some(Bounds::new(1.0, 300.0))
    }

    fn get(&self, camera: &Camera) -> f32 {
        camera.focal_length
    }

    fn set(&self, camera: &mut Camera, value: f32) {
        camera.focal_length = value;
    }
}

pub struct CameraExtractor;

impl PropertyExtractor<Camera> for CameraExtractor {
    fn extract_properties(
        &self,
        camera: &Camera,
        handle: &ComponentRef,
    ) -> Vec<Box<dyn PropertyAccessor>> {
        if camera.use_physical_properties {
            vec![bind::<Camera, _>(handle, FocalLength)]
        } else {
            vec![bind::<Camera, _>(handle, FieldOfView)]
        }
    }
}
