use super::*;

/// Numeric range a property advertises, and optionally enforces on incoming values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: f32,
    pub max: f32,
}

impl Bounds {
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    fn clamp_f32(&self, v: f32) -> f32 {
        v.max(self.min).min(self.max)
    }

    fn clamp_f64(&self, v: f64) -> f64 {
        v.max(f64::from(self.min)).min(f64::from(self.max))
    }

    fn clamp_i32(&self, v: i32) -> i32 {
        // float to int casts saturate
        v.max(self.min.ceil() as i32).min(self.max.floor() as i32)
    }

    /// Clamps f32, f64 and i32 values (and arrays of them, element-wise) into the range. Anything
    /// else is returned as is.
    pub fn clamp_value(&self, mut value: Value) -> Value {
        if let Ok(v) = value.downcast_mut::<f32>() {
            *v = self.clamp_f32(*v);
        } else if let Ok(v) = value.downcast_mut::<f64>() {
            *v = self.clamp_f64(*v);
        } else if let Ok(v) = value.downcast_mut::<i32>() {
            *v = self.clamp_i32(*v);
        } else if let Ok(v) = value.downcast_mut::<Vec<f32>>() {
            v.iter_mut().for_each(|x| *x = self.clamp_f32(*x));
        } else if let Ok(v) = value.downcast_mut::<Vec<f64>>() {
            v.iter_mut().for_each(|x| *x = self.clamp_f64(*x));
        } else if let Ok(v) = value.downcast_mut::<Vec<i32>>() {
            v.iter_mut().for_each(|x| *x = self.clamp_i32(*x));
        }
        value
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.min, self.max)
    }
}
