use super::*;

/// Position, orientation and scale of a scene object
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    pub position: Vector3<f32>,
    pub rotation: Quaternion<f32>,
    pub scale: Vector3<f32>,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vector3::new(0.0, 0.0, 0.0),
            rotation: Quaternion::new(1.0, 0.0, 0.0, 0.0),
            scale: Vector3::new(1.0, 1.0, 1.0),
        }
    }
}

impl Component for Transform {}

fn to_array(v: Vector3<f32>) -> Vec<f32> {
    vec![v.x, v.y, v.z]
}

fn from_array(v: &[f32]) -> Vector3<f32> {
    Vector3::new(v[0], v[1], v[2])
}

struct Position;

impl TypedProperty<Transform> for Position {
    type Value = Vec<f32>;

    fn name(&self) -> &str {
        "Transform/Position"
    }

    fn vector_length(&self) -> usize {
        3
    }

    fn units(&self) -> Option<&str> {
        Some("m")
    }

    fn get(&self, target: &Transform) -> Vec<f32> {
        to_array(target.position)
    }

    fn set(&self, target: &mut Transform, value: Vec<f32>) {
        target.position = from_array(&value);
    }
}

struct Scale;

impl TypedProperty<Transform> for Scale {
    type Value = Vec<f32>;

    fn name(&self) -> &str {
        "Transform/Scale"
    }

    fn vector_length(&self) -> usize {
        3
    }

    fn bounds(&self) -> Option<Bounds> {
        Some(Bounds::new(0.0, f32::MAX))
    }

    fn get(&self, target: &Transform) -> Vec<f32> {
        to_array(target.scale)
    }

    fn set(&self, target: &mut Transform, value: Vec<f32>) {
        target.scale = from_array(&value);
    }
}

/// Rotation as Euler angles in degrees
struct Rotation;

impl TypedProperty<Transform> for Rotation {
    type Value = Vec<f32>;

    fn name(&self) -> &str {
        "Transform/Rotation"
    }

    fn vector_length(&self) -> usize {
        3
    }

    fn units(&self) -> Option<&str> {
        Some("°")
    }

    fn bounds(&self) -> Option<Bounds> {
        Some(Bounds::new(-360.0, 360.0))
    }

    fn get(&self, target: &Transform) -> Vec<f32> {
        let euler: Euler<Rad<f32>> = Euler::from(target.rotation);
        vec![
            Deg::from(euler.x).0,
            Deg::from(euler.y).0,
            Deg::from(euler.z).0,
        ]
    }

    fn set(&self, target: &mut Transform, value: Vec<f32>) {
        let euler = Euler::new(Deg(value[0]), Deg(value[1]), Deg(value[2]));
        target.rotation = Quaternion::from(euler);
    }
}

pub struct TransformExtractor;

impl PropertyExtractor<Transform> for TransformExtractor {
    fn extract_properties(
        &self,
        _transform: &Transform,
        handle: &ComponentRef,
    ) -> Vec<Box<dyn PropertyAccessor>> {
        vec![
            bind::<Transform, _>(handle, Position),
            bind::<Transform, _>(handle, Scale),
            bind::<Transform, _>(handle, Rotation),
        ]
    }
}
