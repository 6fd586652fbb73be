use super::*;

pub struct Vector3Converter;

impl TypeConverter for Vector3Converter {
    type Complex = Vector3<f32>;
    type Simple = Vec<f32>;

    fn vector_length(&self) -> usize {
        3
    }

    fn create_simple(&self, v: Vector3<f32>) -> Vec<f32> {
        vec![v.x, v.y, v.z]
    }

    fn create_complex(&self, v: Vec<f32>) -> Vector3<f32> {
        Vector3::new(v[0], v[1], v[2])
    }
}

pub struct Vector2Converter;

impl TypeConverter for Vector2Converter {
    type Complex = Vector2<f32>;
    type Simple = Vec<f32>;

    fn vector_length(&self) -> usize {
        2
    }

    fn create_simple(&self, v: Vector2<f32>) -> Vec<f32> {
        vec![v.x, v.y]
    }

    fn create_complex(&self, v: Vec<f32>) -> Vector2<f32> {
        Vector2::new(v[0], v[1])
    }
}

/// Quaternions go on the wire as x, y, z, w
pub struct QuaternionConverter;

impl TypeConverter for QuaternionConverter {
    type Complex = Quaternion<f32>;
    type Simple = Vec<f32>;

    fn vector_length(&self) -> usize {
        4
    }

    fn create_simple(&self, q: Quaternion<f32>) -> Vec<f32> {
        vec![q.v.x, q.v.y, q.v.z, q.s]
    }

    fn create_complex(&self, v: Vec<f32>) -> Quaternion<f32> {
        Quaternion::new(v[3], v[0], v[1], v[2])
    }
}

pub struct ColorConverter;

impl TypeConverter for ColorConverter {
    type Complex = ColorRGBA;
    type Simple = Vec<f32>;

    fn vector_length(&self) -> usize {
        4
    }

    fn create_simple(&self, c: ColorRGBA) -> Vec<f32> {
        vec![c.r, c.g, c.b, c.a]
    }

    fn create_complex(&self, v: Vec<f32>) -> ColorRGBA {
        ColorRGBA::new(v[0], v[1], v[2], v[3])
    }
}

/// Booleans travel as 0 or 1. Anything at or above 1 reads back as true.
pub struct BoolConverter;

impl TypeConverter for BoolConverter {
    type Complex = bool;
    type Simple = i32;

    fn vector_length(&self) -> usize {
        1
    }

    fn create_simple(&self, b: bool) -> i32 {
        if b {
            1
        } else {
            0
        }
    }

    fn create_complex(&self, i: i32) -> bool {
        i >= 1
    }
}

/// Converters every device registers on start
pub fn builtin_converters() -> Vec<Arc<dyn DynConverter>> {
    vec![
        Arc::new(Vector3Converter),
        Arc::new(Vector2Converter),
        Arc::new(QuaternionConverter),
        Arc::new(ColorConverter),
        Arc::new(BoolConverter),
    ]
}
